//! # Exam Seat Plan
//!
//! 把考生随机分配到各个考场，并生成座位表和签到表（docx + PDF）
//!
//! ## 架构设计
//!
//! 本系统采用四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 把排好版的文档写成 docx / HTML
//! - `converter/` - docx → PDF（LibreOffice 或无头 Chromium）
//! - `browser/` - 启动无头浏览器
//!
//! ### ② 业务能力层（Services）
//! - `Randomizer` - 打乱名单
//! - `allocate` - 按连续区间分配考场，余数给前面的考场
//! - `compose` - 座位表 / 签到表共用的排版逻辑
//!
//! ### ③ 模型层（Models）
//! - `Student` / `Room` - 表格记录，加载时校验必需列
//! - `SeatingDocument` - 与文件格式无关的文档结构
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/seat_plan_job` - 串起整个流程
//!
//! ## 模块结构

pub mod browser;
pub mod cli;
pub mod config;
pub mod converter;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use cli::Cli;
pub use config::{Config, ConverterKind};
pub use converter::FixedLayoutConverter;
pub use error::{AppError, AppResult};
pub use models::{DocumentKind, ExamMeta, Room, SeatingDocument, Student};
pub use orchestrator::{App, RunOutput};
pub use utils::logging as logger;
