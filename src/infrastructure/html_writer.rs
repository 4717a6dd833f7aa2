//! HTML 写出器 - 基础设施层
//!
//! 生成供无头浏览器打印成 PDF 的 HTML。页眉不在正文里，
//! 由 `header_template` 交给浏览器在每页重复打印。

use std::fmt::Write;

use crate::models::{Alignment, SeatingDocument, TextStyle};

/// 转义 HTML 特殊字符
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn css_font(style: &TextStyle) -> String {
    format!(
        "font-family: '{}'; font-size: {}pt; font-weight: {};",
        style.font,
        style.size_pt,
        if style.bold { "bold" } else { "normal" }
    )
}

/// 每页重复的页眉模板
pub fn header_template(document: &SeatingDocument) -> String {
    format!(
        r#"<div style="width: 100%; text-align: center; {}">{}</div>"#,
        css_font(&TextStyle::HEADER),
        escape_html(&document.header)
    )
}

/// 渲染整份文档的正文
pub fn render_html(document: &SeatingDocument) -> String {
    let g = document.geometry;
    let mut html = String::new();

    // write! 到 String 不会失败
    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
@page {{ size: {w}in {h}in; margin: {m}in; }}
body {{ margin: 0; }}
.room {{ {label_font} margin: 0 0 8pt 0; }}
.page-break {{ page-break-after: always; }}
table {{ border-collapse: collapse; margin: 0 auto; }}
th, td {{ border: 1px solid #000; padding: 2pt 4pt; }}
th {{ {th_font} }}
td {{ {td_font} }}
.center {{ text-align: center; }}
</style>
</head>
<body>
"#,
        title = escape_html(&document.header),
        w = g.width_in,
        h = g.height_in,
        m = g.margin_in,
        label_font = css_font(&TextStyle::ROOM_LABEL),
        th_font = css_font(&TextStyle::TABLE_HEADER),
        td_font = css_font(&TextStyle::TABLE_BODY),
    );

    let last = document.sections.len().saturating_sub(1);
    for (i, section) in document.sections.iter().enumerate() {
        let class = if i != last { "section page-break" } else { "section" };
        let _ = writeln!(html, r#"<div class="{}">"#, class);
        let _ = writeln!(html, r#"<p class="room">{}</p>"#, escape_html(&section.label));
        html.push_str("<table>\n<colgroup>");
        for column in &section.table.columns {
            match column.width_cm {
                Some(cm) => {
                    let _ = write!(html, r#"<col style="width: {:.2}cm">"#, cm);
                }
                None => html.push_str("<col>"),
            }
        }
        html.push_str("</colgroup>\n<tr>");
        for column in &section.table.columns {
            let _ = write!(html, "<th{}>{}</th>", align_attr(column.alignment), column.label);
        }
        html.push_str("</tr>\n");
        for row in &section.table.rows {
            html.push_str("<tr>");
            for (cell, column) in row.iter().zip(&section.table.columns) {
                let _ = write!(html, "<td{}>{}</td>", align_attr(column.alignment), escape_html(cell));
            }
            html.push_str("</tr>\n");
        }
        html.push_str("</table>\n</div>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn align_attr(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Center => r#" class="center""#,
        Alignment::Default => "",
    }
}
