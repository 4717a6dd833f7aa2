//! 座位表任务 - 编排层
//!
//! ## 职责
//!
//! 按顺序串起整个流程，只做调度，不做具体业务判断：
//!
//! 1. **加载输入**：学生表格、考场表格
//! 2. **打乱名单**：`Randomizer`
//! 3. **分配考场**：`allocate`
//! 4. **排版文档**：座位表、签到表各一份
//! 5. **写出 docx**：输出目录不存在时自动创建
//! 6. **转换 PDF**：任何一步失败都直接返回，已写出的文件不回滚

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::Config;
use crate::converter::{self, FixedLayoutConverter};
use crate::error::{AppResult, OutputError};
use crate::infrastructure::write_docx;
use crate::models::{
    load_rooms, load_students, max_name_length, DocumentKind, ExamMeta, Room, SeatingDocument,
    Student,
};
use crate::services::{allocate, compose, Randomizer};
use crate::utils::logging::{log_inputs_loaded, log_startup, print_final_stats};

/// 一次运行的输出
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutput {
    pub kind: DocumentKind,
    pub editable: PathBuf,
    pub fixed_layout: PathBuf,
}

/// 应用主结构
pub struct App {
    config: Config,
    converter: Box<dyn FixedLayoutConverter>,
}

impl App {
    /// 按配置初始化应用
    pub fn initialize(config: Config) -> Self {
        let converter = converter::from_config(&config);
        Self::with_converter(config, converter)
    }

    /// 使用指定的转换器初始化
    pub fn with_converter(config: Config, converter: Box<dyn FixedLayoutConverter>) -> Self {
        Self { config, converter }
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> AppResult<Vec<RunOutput>> {
        log_startup(&self.config);

        let students = load_students(&self.config.students_file_path)?;
        let rooms = load_rooms(&self.config.rooms_file_path)?;
        log_inputs_loaded(students.len(), rooms.len());

        let mut randomizer = Randomizer::from_seed(self.config.seed);
        let documents = prepare_documents(&students, &rooms, &self.config.exam_meta(), &mut randomizer)?;

        ensure_output_dir(&self.config.output_dir)?;

        // 先写出全部 docx，再逐个转换
        let mut written = Vec::with_capacity(documents.len());
        for document in &documents {
            written.push(write_docx(document, &self.config.output_dir)?);
        }

        let mut outputs = Vec::with_capacity(documents.len());
        for (document, editable) in documents.iter().zip(written) {
            let fixed_layout = self.converter.convert(document, &editable).await?;
            outputs.push(RunOutput {
                kind: document.kind,
                editable,
                fixed_layout,
            });
        }

        let files: Vec<PathBuf> = outputs
            .iter()
            .flat_map(|o| [o.editable.clone(), o.fixed_layout.clone()])
            .collect();
        print_final_stats(&files, &self.config.output_dir);

        Ok(outputs)
    }
}

/// 打乱、分配并排版两份文档
///
/// 不做任何 I/O，便于测试
pub fn prepare_documents(
    students: &[Student],
    rooms: &[Room],
    meta: &ExamMeta,
    randomizer: &mut Randomizer,
) -> AppResult<Vec<SeatingDocument>> {
    let shuffled = randomizer.shuffle(students);
    let allocations = allocate(&shuffled, rooms)?;

    // 列宽按整个名单中最长的姓名计算
    let max_name_len = max_name_length(students);

    Ok(DocumentKind::ALL
        .iter()
        .map(|&kind| compose(kind, &allocations, meta, max_name_len))
        .collect())
}

/// 输出目录不存在时创建
pub fn ensure_output_dir(dir: &Path) -> AppResult<()> {
    if !dir.exists() {
        info!("📁 创建输出目录: {}", dir.display());
        std::fs::create_dir_all(dir).map_err(|source| OutputError::CreateDirFailed {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}
