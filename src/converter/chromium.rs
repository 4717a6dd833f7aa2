use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::cdp::browser_protocol::page::PrintToPdfParams;
use tracing::{debug, info, warn};

use super::{pdf_path_for, FixedLayoutConverter};
use crate::browser::launch_headless_browser;
use crate::error::{AppError, AppResult, ConvertError};
use crate::infrastructure::{header_template, render_html};
use crate::models::SeatingDocument;

/// Chromium 转换器
///
/// 不读 docx，而是把同一份 `SeatingDocument` 渲染成 HTML 后用无头浏览器打印。
pub struct ChromiumConverter {
    executable: Option<PathBuf>,
    timeout: Option<Duration>,
}

impl ChromiumConverter {
    pub fn new(executable: Option<PathBuf>, timeout: Option<Duration>) -> Self {
        Self {
            executable,
            timeout,
        }
    }
}

/// 打印参数：纸张和边距与文档一致，页眉由浏览器每页重复
pub fn print_params(document: &SeatingDocument) -> PrintToPdfParams {
    let g = document.geometry;
    PrintToPdfParams {
        paper_width: Some(g.width_in),
        paper_height: Some(g.height_in),
        margin_top: Some(g.margin_in),
        margin_bottom: Some(g.margin_in),
        margin_left: Some(g.margin_in),
        margin_right: Some(g.margin_in),
        display_header_footer: Some(true),
        header_template: Some(header_template(document)),
        footer_template: Some("<span></span>".to_string()),
        print_background: Some(true),
        ..Default::default()
    }
}

async fn print_pdf(executable: Option<&Path>, document: &SeatingDocument) -> AppResult<Vec<u8>> {
    let (mut browser, handle) = launch_headless_browser(executable).await?;

    let printed = async {
        let page = browser.new_page("about:blank").await?;
        page.set_content(render_html(document)).await?;
        let bytes = page.pdf(print_params(document)).await?;
        Ok::<_, AppError>(bytes)
    }
    .await;

    if let Err(e) = browser.close().await {
        warn!("关闭浏览器失败: {}", e);
    }
    let _ = handle.await;

    printed
}

#[async_trait]
impl FixedLayoutConverter for ChromiumConverter {
    async fn convert(&self, document: &SeatingDocument, editable_path: &Path) -> AppResult<PathBuf> {
        let pdf = pdf_path_for(editable_path);
        debug!("Chromium 打印 {} -> {}", document.kind, pdf.display());

        let job = print_pdf(self.executable.as_deref(), document);
        let bytes = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, job).await.map_err(|_| {
                ConvertError::TimedOut {
                    path: editable_path.to_path_buf(),
                    secs: limit.as_secs(),
                }
            })??,
            None => job.await?,
        };

        tokio::fs::write(&pdf, &bytes)
            .await
            .map_err(|e| AppError::write_failed(&pdf, e))?;

        info!("🖨️ 已打印为 PDF: {} ({} 字节)", pdf.display(), bytes.len());
        Ok(pdf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DocumentKind, PageGeometry};

    fn document() -> SeatingDocument {
        SeatingDocument {
            kind: DocumentKind::SeatPlan,
            header: "CSE101 Midterm Combined Seat Plan Spring 2024".to_string(),
            file_stem: "CSE101_Midterm_Combined_Seat_Plan_Spring_2024".to_string(),
            geometry: PageGeometry::A4,
            sections: Vec::new(),
        }
    }

    #[test]
    fn test_print_params_match_geometry() {
        let params = print_params(&document());
        assert_eq!(params.paper_width, Some(8.27));
        assert_eq!(params.paper_height, Some(11.69));
        assert_eq!(params.margin_left, Some(1.0));
        assert_eq!(params.display_header_footer, Some(true));
        assert!(params
            .header_template
            .unwrap()
            .contains("CSE101 Midterm Combined Seat Plan Spring 2024"));
    }

    /// 需要本机安装 Chromium / Chrome：cargo test -- --ignored
    #[test]
    #[ignore]
    fn test_print_real_pdf() {
        let _ = tracing_subscriber::fmt::try_init();

        let dir = tempfile::tempdir().unwrap();
        let doc = document();
        let editable = dir.path().join(format!("{}.docx", doc.file_stem));
        let pdf = tokio_test::block_on(
            ChromiumConverter::new(None, Some(Duration::from_secs(60))).convert(&doc, &editable),
        )
        .expect("打印失败");
        let bytes = std::fs::read(pdf).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
