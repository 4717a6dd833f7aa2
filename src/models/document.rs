//! 文档模型
//!
//! 与具体文件格式无关的排版结构：页眉、页面尺寸，以及每个考场一节（标签 + 表格）。
//! docx 和 HTML 两个写出器都只认识这里的类型。

use std::fmt;

/// 考试元信息，只用于页眉和文件名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamMeta {
    pub course_code: String,
    pub exam_type: String,
    pub semester: String,
    pub year: String,
}

/// 文档种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// 座位表
    SeatPlan,
    /// 签到表
    SignatureSheet,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 2] = [DocumentKind::SeatPlan, DocumentKind::SignatureSheet];

    /// 页眉中使用的名称
    pub fn title(&self) -> &'static str {
        match self {
            DocumentKind::SeatPlan => "Combined Seat Plan",
            DocumentKind::SignatureSheet => "Signature Sheet",
        }
    }

    /// 表头列名
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            DocumentKind::SeatPlan => &["ID", "Name", "Section"],
            DocumentKind::SignatureSheet => &["ID", "Name", "Section", "Signature"],
        }
    }

    /// 页眉文字，如 `CSE101 Midterm Combined Seat Plan Spring 2024`
    pub fn header_text(&self, meta: &ExamMeta) -> String {
        format!(
            "{} {} {} {} {}",
            meta.course_code,
            meta.exam_type,
            self.title(),
            meta.semester,
            meta.year
        )
    }

    /// 不带扩展名的文件名，如 `CSE101_Midterm_Combined_Seat_Plan_Spring_2024`
    pub fn file_stem(&self, meta: &ExamMeta) -> String {
        format!(
            "{}_{}_{}_{}_{}",
            meta.course_code,
            meta.exam_type,
            self.title().replace(' ', "_"),
            meta.semester,
            meta.year
        )
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// 页面尺寸与边距（英寸）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width_in: f64,
    pub height_in: f64,
    pub margin_in: f64,
}

impl PageGeometry {
    /// A4，四边 1 英寸
    pub const A4: PageGeometry = PageGeometry {
        width_in: 8.27,
        height_in: 11.69,
        margin_in: 1.0,
    };
}

/// 文字样式
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font: &'static str,
    pub size_pt: f64,
    pub bold: bool,
}

pub const FONT_FAMILY: &str = "Times New Roman";

impl TextStyle {
    pub const HEADER: TextStyle = TextStyle {
        font: FONT_FAMILY,
        size_pt: 16.0,
        bold: true,
    };
    pub const ROOM_LABEL: TextStyle = TextStyle {
        font: FONT_FAMILY,
        size_pt: 14.0,
        bold: true,
    };
    pub const TABLE_HEADER: TextStyle = TextStyle {
        font: FONT_FAMILY,
        size_pt: 12.0,
        bold: true,
    };
    pub const TABLE_BODY: TextStyle = TextStyle {
        font: FONT_FAMILY,
        size_pt: 12.0,
        bold: false,
    };
}

/// 单元格对齐方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// 默认（左对齐）
    Default,
    Center,
}

/// 表格列定义
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub label: &'static str,
    /// 列宽（厘米），`None` 表示自动
    pub width_cm: Option<f64>,
    pub alignment: Alignment,
}

/// 一个考场的表格
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: Vec<Column>,
    /// 数据行，不含表头
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// 表格总行数（含表头）
    pub fn row_count(&self) -> usize {
        self.rows.len() + 1
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

/// 一个考场对应的一节
#[derive(Debug, Clone, PartialEq)]
pub struct RoomSection {
    /// 如 `Room: 301`
    pub label: String,
    pub table: Table,
}

/// 排好版的完整文档
#[derive(Debug, Clone, PartialEq)]
pub struct SeatingDocument {
    pub kind: DocumentKind,
    pub header: String,
    pub file_stem: String,
    pub geometry: PageGeometry,
    pub sections: Vec<RoomSection>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta() -> ExamMeta {
        ExamMeta {
            course_code: "CSE101".to_string(),
            exam_type: "Midterm".to_string(),
            semester: "Spring".to_string(),
            year: "2024".to_string(),
        }
    }

    #[test]
    fn test_header_text() {
        assert_eq!(
            DocumentKind::SeatPlan.header_text(&meta()),
            "CSE101 Midterm Combined Seat Plan Spring 2024"
        );
        assert_eq!(
            DocumentKind::SignatureSheet.header_text(&meta()),
            "CSE101 Midterm Signature Sheet Spring 2024"
        );
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(
            DocumentKind::SeatPlan.file_stem(&meta()),
            "CSE101_Midterm_Combined_Seat_Plan_Spring_2024"
        );
        assert_eq!(
            DocumentKind::SignatureSheet.file_stem(&meta()),
            "CSE101_Midterm_Signature_Sheet_Spring_2024"
        );
    }

    #[test]
    fn test_columns() {
        assert_eq!(DocumentKind::SeatPlan.columns().len(), 3);
        assert_eq!(DocumentKind::SignatureSheet.columns()[3], "Signature");
    }
}
