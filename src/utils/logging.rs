//! 日志工具模块
//!
//! 提供日志初始化和运行过程中的格式化输出

use std::path::{Path, PathBuf};

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// 默认日志级别，可用 `RUST_LOG` 覆盖
const DEFAULT_DIRECTIVE: &str = "exam_seat_plan=info";

/// 初始化日志
///
/// 重复调用不会报错（测试中可能多次初始化）
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 考场座位表生成 - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!(
        "📚 {} {} {} {}",
        config.course_code, config.exam_type, config.semester, config.year
    );
    info!("📁 输出目录: {}", config.output_dir.display());
    info!("🖨️ PDF 转换: {}", config.converter);
    info!("{}", "=".repeat(60));
}

/// 记录输入加载信息
pub fn log_inputs_loaded(students: usize, rooms: usize) {
    info!("✓ 共 {} 名学生，{} 个考场", students, rooms);
}

/// 打印最终统计信息
///
/// # 参数
/// - `files`: 本次写出的所有文件
/// - `output_dir`: 输出目录
pub fn print_final_stats(files: &[PathBuf], output_dir: &Path) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部完成");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    for file in files {
        info!("✅ {}", file.display());
    }
    info!("{}", "=".repeat(60));
    info!("\n结果已保存至: {}", output_dir.display());
}
