//! 文档排版服务 - 业务能力层
//!
//! 座位表和签到表共用一套排版逻辑，差别只在 `DocumentKind` 决定的列和列宽。

use crate::models::{
    Alignment, Column, DocumentKind, ExamMeta, PageGeometry, RoomSection, SeatingDocument, Table,
};
use crate::services::allocator::RoomAllocation;

/// 姓名列每个字符对应的宽度（厘米）
const NAME_CM_PER_CHAR: f64 = 0.3;
/// 签名列每个字符对应的宽度（厘米）
const SIGNATURE_CM_PER_CHAR: f64 = 0.25;
/// 签到表中 ID / Section 列的固定宽度（厘米）
const NARROW_COLUMN_CM: f64 = 1.2;
/// 姓名宽度至少按表头 "Name" 的长度计算
const MIN_NAME_CHARS: usize = "Name".len();

/// 生成某种文档的列定义
///
/// `max_name_len` 取自整个名单，而不是单个考场；空名单时按表头长度计。
pub fn columns_for(kind: DocumentKind, max_name_len: usize) -> Vec<Column> {
    let name_chars = max_name_len.max(MIN_NAME_CHARS);
    let name_width = name_chars as f64 * NAME_CM_PER_CHAR;

    kind.columns()
        .iter()
        .map(|&label| {
            let width_cm = match (kind, label) {
                (_, "Name") => Some(name_width),
                (DocumentKind::SignatureSheet, "ID" | "Section") => Some(NARROW_COLUMN_CM),
                (DocumentKind::SignatureSheet, "Signature") => {
                    Some(name_chars as f64 * SIGNATURE_CM_PER_CHAR)
                }
                _ => None,
            };
            let alignment = if label == "Name" {
                Alignment::Default
            } else {
                Alignment::Center
            };
            Column {
                label,
                width_cm,
                alignment,
            }
        })
        .collect()
}

/// 生成一个考场的表格
fn build_table(kind: DocumentKind, allocation: &RoomAllocation, columns: Vec<Column>) -> Table {
    let rows = allocation
        .students
        .iter()
        .map(|student| {
            let mut row = vec![
                student.id.clone(),
                student.name.clone(),
                student.section.clone(),
            ];
            if kind == DocumentKind::SignatureSheet {
                row.push(String::new());
            }
            row
        })
        .collect();

    Table { columns, rows }
}

/// 排版一份文档
///
/// # 参数
/// - `kind`: 座位表或签到表
/// - `allocations`: 考场分配结果，按考场顺序
/// - `meta`: 考试元信息
/// - `max_name_len`: 整个名单中最长姓名的字符数
pub fn compose(
    kind: DocumentKind,
    allocations: &[RoomAllocation],
    meta: &ExamMeta,
    max_name_len: usize,
) -> SeatingDocument {
    let columns = columns_for(kind, max_name_len);

    let sections = allocations
        .iter()
        .map(|allocation| RoomSection {
            label: format!("Room: {}", allocation.room.name),
            table: build_table(kind, allocation, columns.clone()),
        })
        .collect();

    SeatingDocument {
        kind,
        header: kind.header_text(meta),
        file_stem: kind.file_stem(meta),
        geometry: PageGeometry::A4,
        sections,
    }
}
