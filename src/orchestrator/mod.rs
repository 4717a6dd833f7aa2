//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责把各层能力按固定顺序串起来，是整个程序的"指挥中心"。
//!
//! ## 层次关系
//!
//! ```text
//! seat_plan_job (一次完整运行)
//!     ↓
//! services (能力层：randomizer / allocator / composer)
//!     ↓
//! infrastructure + converter (写 docx / HTML，转换 PDF)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单线程顺序执行**：每一步完成后才开始下一步
//! 2. **快速失败**：不重试，不回滚已写出的文件
//! 3. **向下依赖**：编排层 → services → infrastructure

pub mod seat_plan_job;

// 重新导出主要类型
pub use seat_plan_job::{ensure_output_dir, prepare_documents, App, RunOutput};
