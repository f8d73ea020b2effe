//! Report rendering and output

pub mod report_writer;

pub use report_writer::{render_json, render_markdown, summarize, write_report};
