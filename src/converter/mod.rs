//! PDF 转换 - 基础设施层
//!
//! 把已经写出的可编辑文档转换成版式固定的 PDF。
//! 转换失败直接向上返回，不重试；已写出的 docx 保留在磁盘上。

pub mod chromium;
pub mod office;

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;

use crate::config::{Config, ConverterKind};
use crate::error::AppResult;
use crate::models::SeatingDocument;

pub use chromium::ChromiumConverter;
pub use office::OfficeConverter;

/// PDF 转换能力
///
/// `document` 和 `editable_path` 描述的是同一份文档：
/// 按文件转换的后端读 `editable_path`，按内容渲染的后端读 `document`。
#[async_trait]
pub trait FixedLayoutConverter: Send + Sync {
    /// 转换并返回 PDF 路径（与 `editable_path` 同目录同名，扩展名为 .pdf）
    async fn convert(&self, document: &SeatingDocument, editable_path: &Path) -> AppResult<PathBuf>;
}

/// 按配置创建转换器
pub fn from_config(config: &Config) -> Box<dyn FixedLayoutConverter> {
    let timeout = config.conversion_timeout_secs.map(Duration::from_secs);
    match config.converter {
        ConverterKind::Office => Box::new(OfficeConverter::new(&config.soffice_path, timeout)),
        ConverterKind::Chromium => {
            Box::new(ChromiumConverter::new(config.chrome_executable.clone(), timeout))
        }
    }
}

/// 可编辑文档对应的 PDF 路径
pub fn pdf_path_for(editable_path: &Path) -> PathBuf {
    editable_path.with_extension("pdf")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_path_for() {
        assert_eq!(
            pdf_path_for(Path::new("results/CSE101_Midterm_Signature_Sheet_Spring_2024.docx")),
            PathBuf::from("results/CSE101_Midterm_Signature_Sheet_Spring_2024.pdf")
        );
    }
}
