//! docx 写出器 - 基础设施层
//!
//! 把 `SeatingDocument` 写成可编辑的 .docx 文件，不关心分配逻辑

use std::fs::File;
use std::path::{Path, PathBuf};

use docx_rs::{
    AlignmentType, BreakType, Docx, Header, PageMargin, Paragraph, Run, RunFonts, TableAlignmentType,
    TableCell, TableRow, WidthType,
};
use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::models::{Alignment, Column, PageGeometry, SeatingDocument, Table, TextStyle};

const TWIPS_PER_INCH: f64 = 1440.0;
const TWIPS_PER_CM: f64 = 566.93;
/// 自动列的最小宽度（厘米）
const MIN_AUTO_COLUMN_CM: f64 = 1.2;

fn inches_to_twips(inches: f64) -> f64 {
    inches * TWIPS_PER_INCH
}

fn cm_to_twips(cm: f64) -> usize {
    (cm * TWIPS_PER_CM).round() as usize
}

/// 写出 docx 文件
///
/// # 参数
/// - `document`: 排好版的文档
/// - `output_dir`: 输出目录（需已存在）
///
/// # 返回
/// 返回写出的文件路径
pub fn write_docx(document: &SeatingDocument, output_dir: &Path) -> AppResult<PathBuf> {
    let path = output_dir.join(format!("{}.docx", document.file_stem));

    let file = File::create(&path).map_err(|e| AppError::write_failed(&path, e))?;
    build_docx(document)
        .build()
        .pack(file)
        .map_err(|e| AppError::write_failed(&path, e))?;

    info!("📄 已写出 {}: {}", document.kind, path.display());
    Ok(path)
}

/// 构建 docx 对象
pub fn build_docx(document: &SeatingDocument) -> Docx {
    let geometry = document.geometry;
    let header = Header::new().add_paragraph(header_paragraph(&document.header));
    let (width, height) = page_size_twips(&geometry);

    let mut docx = Docx::new()
        .page_size(width, height)
        .page_margin(page_margin(&geometry))
        .header(header);

    let last = document.sections.len().saturating_sub(1);
    for (i, section) in document.sections.iter().enumerate() {
        debug!("写入 {} ({} 行)", section.label, section.table.row_count());

        docx = docx
            .add_paragraph(
                Paragraph::new().add_run(styled_run(&section.label, &TextStyle::ROOM_LABEL)),
            )
            .add_table(build_table(&section.table, &geometry));

        if i != last {
            docx = docx.add_paragraph(
                Paragraph::new().add_run(Run::new().add_break(BreakType::Page)),
            );
        }
    }

    docx
}

fn header_paragraph(text: &str) -> Paragraph {
    Paragraph::new()
        .add_run(styled_run(text, &TextStyle::HEADER))
        .align(AlignmentType::Center)
}

fn page_size_twips(geometry: &PageGeometry) -> (u32, u32) {
    (
        inches_to_twips(geometry.width_in).round() as u32,
        inches_to_twips(geometry.height_in).round() as u32,
    )
}

fn margin_twips(geometry: &PageGeometry) -> i32 {
    inches_to_twips(geometry.margin_in).round() as i32
}

fn page_margin(geometry: &PageGeometry) -> PageMargin {
    let margin = margin_twips(geometry);
    PageMargin::new()
        .top(margin)
        .bottom(margin)
        .left(margin)
        .right(margin)
}

fn styled_run(text: &str, style: &TextStyle) -> Run {
    let run = Run::new()
        .add_text(text)
        .size((style.size_pt * 2.0).round() as usize)
        .fonts(
            RunFonts::new()
                .ascii(style.font)
                .hi_ansi(style.font)
                .cs(style.font),
        );
    if style.bold {
        run.bold()
    } else {
        run
    }
}

/// 计算每列宽度（twips）
///
/// 固定宽度的列按给定值，其余列平分剩下的版心宽度，但不小于
/// `MIN_AUTO_COLUMN_CM`；姓名列过宽时表格会超出版心。
pub fn column_widths_twips(columns: &[Column], geometry: &PageGeometry) -> Vec<usize> {
    let usable = inches_to_twips(geometry.width_in - 2.0 * geometry.margin_in)
        .max(0.0)
        .round() as usize;
    let fixed: usize = columns
        .iter()
        .filter_map(|c| c.width_cm.map(cm_to_twips))
        .sum();
    let auto_count = columns.iter().filter(|c| c.width_cm.is_none()).count();
    let auto_width = if auto_count == 0 {
        0
    } else {
        (usable.saturating_sub(fixed) / auto_count).max(cm_to_twips(MIN_AUTO_COLUMN_CM))
    };

    columns
        .iter()
        .map(|c| c.width_cm.map(cm_to_twips).unwrap_or(auto_width))
        .collect()
}

fn build_table(table: &Table, geometry: &PageGeometry) -> docx_rs::Table {
    let widths = column_widths_twips(&table.columns, geometry);

    let header_row = TableRow::new(
        table
            .columns
            .iter()
            .zip(&widths)
            .map(|(column, &width)| build_cell(column.label, column, width, &TextStyle::TABLE_HEADER))
            .collect(),
    );

    let mut rows = vec![header_row];
    rows.extend(table.rows.iter().map(|row| {
        TableRow::new(
            row.iter()
                .zip(table.columns.iter().zip(&widths))
                .map(|(text, (column, &width))| build_cell(text, column, width, &TextStyle::TABLE_BODY))
                .collect(),
        )
    }));

    docx_rs::Table::new(rows)
        .set_grid(widths)
        .align(TableAlignmentType::Center)
}

fn build_cell(text: &str, column: &Column, width: usize, style: &TextStyle) -> TableCell {
    let mut paragraph = Paragraph::new();
    if !text.is_empty() {
        paragraph = paragraph.add_run(styled_run(text, style));
    }
    if let Some(alignment) = cell_alignment(column) {
        paragraph = paragraph.align(alignment);
    }
    TableCell::new()
        .add_paragraph(paragraph)
        .width(width, WidthType::Dxa)
}

// 姓名列保持默认左对齐
fn cell_alignment(column: &Column) -> Option<AlignmentType> {
    match column.alignment {
        Alignment::Center => Some(AlignmentType::Center),
        Alignment::Default => None,
    }
}
