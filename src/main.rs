use anyhow::Result;
use clap::Parser;
use exam_seat_plan::{logger, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 初始化日志
    logger::init();

    // 解析参数并运行
    Cli::parse().run().await
}
