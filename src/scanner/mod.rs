//! Directory walking and per-file record collection

pub mod file_scanner;

pub use file_scanner::{scan_directory, scan_directory_with, FileRecord};
