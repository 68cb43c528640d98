use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::models::{FileHistoryContent, Response};
use crate::utils::{ClaudePaths, ensure_strictly_within, is_safe_path_segment};

/// Backups larger than this are truncated to their first 2 MiB
pub const MAX_BACKUP_BYTES: u64 = 2 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum FileHistoryError {
    /// Identifier rejected; the message never includes the offending value
    #[error("Invalid request")]
    InvalidRequest,
    #[error("Backup file not found")]
    NotFound,
    #[error("Backup is not a regular file")]
    NotAFile,
    #[error("Failed to read backup file: {0}")]
    Io(#[from] io::Error),
}

/// Read a backup file as a display-layer response
pub fn get_file_history_file(
    claude_dir: &Path,
    session_id: &str,
    backup_file_name: &str,
) -> Response<FileHistoryContent> {
    match read_backup_file(claude_dir, session_id, backup_file_name) {
        Ok(content) => Response::Success(content),
        Err(e) => Response::error(e.to_string()),
    }
}

/// Read `file-history/<session_id>/<backup_file_name>` under `claude_dir`
///
/// Files above [`MAX_BACKUP_BYTES`] are truncated; only the kept prefix is read from
/// disk. Bytes that are not valid UTF-8 are replaced.
///
/// # Errors
///
/// - [`FileHistoryError::InvalidRequest`] if an identifier is empty, contains a path
///   separator or `..`, or resolves outside the file-history directory
/// - [`FileHistoryError::NotFound`] / [`FileHistoryError::NotAFile`] if there is no
///   regular file at the target
/// - [`FileHistoryError::Io`] for any other read failure
pub fn read_backup_file(
    claude_dir: &Path,
    session_id: &str,
    backup_file_name: &str,
) -> Result<FileHistoryContent, FileHistoryError> {
    if !is_safe_path_segment(session_id) || !is_safe_path_segment(backup_file_name) {
        return Err(FileHistoryError::InvalidRequest);
    }

    let base = ClaudePaths::new(claude_dir).file_history_dir();
    let target = base.join(session_id).join(backup_file_name);
    if !target.exists() {
        return Err(FileHistoryError::NotFound);
    }

    let resolved =
        ensure_strictly_within(&base, &target).map_err(|_| FileHistoryError::InvalidRequest)?;

    let metadata = fs::metadata(&resolved)?;
    if !metadata.is_file() {
        return Err(FileHistoryError::NotAFile);
    }
    let file = File::open(&resolved)?;

    let size = metadata.len();
    let truncated = size > MAX_BACKUP_BYTES;

    let mut buf = Vec::with_capacity(size.min(MAX_BACKUP_BYTES) as usize);
    file.take(MAX_BACKUP_BYTES).read_to_end(&mut buf)?;
    let content = String::from_utf8_lossy(&buf).into_owned();

    debug!(session_id, bytes = buf.len(), truncated, "read backup file");

    if truncated {
        Ok(FileHistoryContent { content, truncated: Some(true), original_bytes: Some(size) })
    } else {
        Ok(FileHistoryContent { content, truncated: None, original_bytes: None })
    }
}
