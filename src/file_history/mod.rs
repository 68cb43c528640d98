//! Serves backup file bodies from `file-history/<session>/<backup>`.
//!
//! Both identifiers come from the display layer and are treated as untrusted: they are
//! checked as plain path components before any filesystem access, and the resolved
//! path must still land strictly inside the `file-history` directory.

pub mod reader;

pub use reader::{FileHistoryError, MAX_BACKUP_BYTES, get_file_history_file, read_backup_file};
