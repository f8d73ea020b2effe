//! Sensitive File Finder Library
//!
//! Walks a directory tree, flags files whose names or extensions suggest
//! sensitive content, and renders the findings as a Markdown report.

pub mod core;
pub mod scanner;
pub mod reporting;

pub use crate::core::classifier;
pub use crate::scanner::file_scanner;
pub use crate::reporting::report_writer;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::core::classifier::{
        classify, DEFAULT_CATEGORY, EXTENSION_RULES, KEYWORD_RULES,
    };
    pub use crate::scanner::file_scanner::{
        extension_of, scan_directory, scan_directory_with, FileRecord, NO_EXTENSION,
    };
    pub use crate::reporting::report_writer::{
        render_json, render_markdown, summarize, write_report, EMPTY_REPORT, HEADERS,
    };
}
