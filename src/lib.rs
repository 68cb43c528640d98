//! AI Session Browser - Browse Claude Code session transcripts
//!
//! This library reads the session data Claude Code keeps in its configuration
//! directory (`~/.claude/`) and prepares it for a list/detail viewer. It supports:
//!
//! - Listing every session transcript with a preview of its first prompt
//! - Loading a session's full message history with its file-history snapshots
//! - Serving file-history backup bodies with path-traversal protection
//!
//! All operations are read-only and return a [`Response`], which serializes either as
//! the success payload or as `{ "error": "..." }`.
//!
//! # Example
//!
//! ```no_run
//! use ai_session_browser::{Response, list_sessions};
//! use std::path::PathBuf;
//!
//! let claude_dir = PathBuf::from("/Users/alice/.claude");
//! if let Response::Success(list) = list_sessions(&claude_dir) {
//!     println!("Found {} sessions", list.sessions.len());
//! }
//! ```

pub mod cli;
pub mod detail;
pub mod file_history;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use detail::get_session_details;
pub use file_history::get_file_history_file;
pub use indexer::list_sessions;
pub use models::{Message, Response, SessionRecord};
pub use parsers::{extract_text, parse_lines};
pub use utils::paths::{decode_project_dir, format_path_with_tilde};
