//! 命令行入口
//!
//! 只有一个 `--config` 参数，解析后交给编排层。

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::{Config, DEFAULT_CONFIG_PATH};
use crate::orchestrator::App;

/// 生成考场座位表和签到表
#[derive(Parser, Debug)]
#[command(
    name = "exam-seat-plan",
    version,
    about = "Distribute exam candidates across rooms and print seat plans and signature sheets."
)]
pub struct Cli {
    /// 配置文件路径（.yaml / .yml / .toml）
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}

impl Cli {
    /// 加载配置并运行
    pub async fn run(self) -> Result<()> {
        let config = Config::load(&self.config)
            .with_context(|| format!("无法加载配置: {}", self.config.display()))?;

        App::initialize(config).run().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_path() {
        let cli = Cli::parse_from(["exam-seat-plan"]);
        assert_eq!(cli.config, PathBuf::from("config.yaml"));
    }

    #[test]
    fn test_custom_config_path() {
        let cli = Cli::parse_from(["exam-seat-plan", "--config", "exams/final.toml"]);
        assert_eq!(cli.config, PathBuf::from("exams/final.toml"));
    }

    #[test]
    fn test_rejects_unknown_flag() {
        assert!(Cli::try_parse_from(["exam-seat-plan", "--rooms", "x.csv"]).is_err());
    }
}
