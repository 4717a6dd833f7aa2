use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, error, info};

use super::{pdf_path_for, FixedLayoutConverter};
use crate::error::{AppResult, ConvertError};
use crate::models::SeatingDocument;

/// LibreOffice 转换器
///
/// 调用 `soffice --headless --convert-to pdf`，直接转换写好的 docx。
pub struct OfficeConverter {
    program: String,
    timeout: Option<Duration>,
}

impl OfficeConverter {
    pub fn new(program: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    fn command(&self, editable_path: &Path, out_dir: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("--headless")
            .arg("--convert-to")
            .arg("pdf")
            .arg("--outdir")
            .arg(out_dir)
            .arg(editable_path)
            .kill_on_drop(true);
        cmd
    }
}

#[async_trait]
impl FixedLayoutConverter for OfficeConverter {
    async fn convert(&self, _document: &SeatingDocument, editable_path: &Path) -> AppResult<PathBuf> {
        let out_dir = match editable_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        debug!("{} 转换 {}", self.program, editable_path.display());

        let mut cmd = self.command(editable_path, &out_dir);
        let run = cmd.output();
        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, run).await.map_err(|_| {
                error!("转换超时: {}", editable_path.display());
                ConvertError::TimedOut {
                    path: editable_path.to_path_buf(),
                    secs: limit.as_secs(),
                }
            })?,
            None => run.await,
        }
        .map_err(|source| ConvertError::LaunchFailed {
            program: self.program.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(ConvertError::ProcessFailed {
                program: self.program.clone(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        let pdf = pdf_path_for(editable_path);
        if !pdf.exists() {
            return Err(ConvertError::MissingOutput { path: pdf }.into());
        }

        info!("🖨️ 已转换为 PDF: {}", pdf.display());
        Ok(pdf)
    }
}
