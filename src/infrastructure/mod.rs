//! 基础设施层
//!
//! 只负责把排好版的文档写成文件，不认识学生和考场

pub mod docx_writer;
pub mod html_writer;

pub use docx_writer::write_docx;
pub use html_writer::{header_template, render_html};
