//! Line-oriented JSON parsing for Claude Code transcripts.
//!
//! # Error Handling Strategy
//!
//! Transcript and history files are written by another program and are read while it
//! may still be appending to them, so parsing is deliberately lenient:
//!
//! - **Individual line failures**: A line that is not valid JSON is dropped without an
//!   error. The number of dropped lines is reported in [`ParsedLines::skipped`] and logged
//!   at debug level; it never changes which records are returned.
//!
//! - **Blank lines**: Empty and whitespace-only lines are ignored and are not counted.
//!
//! - **I/O failures**: Failing to open or read a file is an error carrying the path as
//!   context. Callers decide whether that aborts the operation or skips one file.

pub mod content;
pub mod deserializers;
pub mod history;
pub mod lines;

pub use content::{MessageContent, extract_text, truncate_chars};
pub use history::parse_history_file;
pub use lines::{ParsedLines, parse_lines, read_jsonl_file};
