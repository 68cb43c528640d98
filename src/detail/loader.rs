use std::collections::HashMap;
use std::path::Path;

use anyhow::{Result, bail};
use serde_json::{Map, Value};
use tracing::debug;

use crate::models::{FileHistorySnapshot, Message, Response, Role, SessionDetails};
use crate::parsers::{MessageContent, read_jsonl_file};
use crate::utils::{ClaudePaths, is_safe_path_segment};

const RECORD_TYPE_SNAPSHOT: &str = "file-history-snapshot";

/// Load a session's messages as a display-layer response
pub fn get_session_details(
    claude_dir: &Path,
    session_id: &str,
    project_dir: &str,
) -> Response<SessionDetails> {
    load_session_messages(claude_dir, session_id, project_dir)
        .map(|messages| SessionDetails { messages })
        .into()
}

/// Load the displayable messages of `projects/<project_dir>/<session_id>.jsonl`
///
/// # Errors
///
/// Returns an error if either identifier is not a plain file name component, or if the
/// session file does not exist or cannot be read.
pub fn load_session_messages(
    claude_dir: &Path,
    session_id: &str,
    project_dir: &str,
) -> Result<Vec<Message>> {
    if !is_safe_path_segment(session_id) || !is_safe_path_segment(project_dir) {
        bail!("Invalid request");
    }

    let session_path = ClaudePaths::new(claude_dir).session_file(project_dir, session_id);
    if !session_path.is_file() {
        bail!("Session file not found");
    }

    let parsed = read_jsonl_file(&session_path)?;
    let messages = format_messages(&parsed.records);
    debug!(
        session_id,
        records = parsed.records.len(),
        messages = messages.len(),
        "loaded session details"
    );

    Ok(messages)
}

/// Group file-history snapshot records by the message id they belong to
///
/// Only records carrying both a string `messageId` and a `snapshot` payload count.
/// Snapshots sharing a message id keep their file order.
pub fn collect_snapshots(records: &[Value]) -> HashMap<String, Vec<FileHistorySnapshot>> {
    let mut by_message: HashMap<String, Vec<FileHistorySnapshot>> = HashMap::new();

    for record in records {
        if record.get("type").and_then(Value::as_str) != Some(RECORD_TYPE_SNAPSHOT) {
            continue;
        }
        let Some(message_id) = record.get("messageId").and_then(Value::as_str) else {
            continue;
        };
        let Some(snapshot) = record.get("snapshot").filter(|s| !s.is_null()) else {
            continue;
        };

        by_message.entry(message_id.to_string()).or_default().push(FileHistorySnapshot {
            message_id: message_id.to_string(),
            timestamp: snapshot.get("timestamp").cloned().unwrap_or(Value::Null),
            is_snapshot_update: record
                .get("isSnapshotUpdate")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            tracked_file_backups: snapshot
                .get("trackedFileBackups")
                .and_then(Value::as_object)
                .cloned()
                .unwrap_or_else(Map::new),
        });
    }

    by_message
}

/// Turn transcript records into displayable messages, in file order
///
/// Messages with no text, no tool uses and no snapshots are dropped.
pub fn format_messages(records: &[Value]) -> Vec<Message> {
    let snapshots = collect_snapshots(records);

    records
        .iter()
        .filter_map(|record| {
            let role = Role::of_record(record)?;
            let message = record.get("message").filter(|m| !m.is_null())?;
            let content = MessageContent::of_message(message);
            let uuid = record.get("uuid").and_then(Value::as_str).map(str::to_string);

            let file_history_snapshots = uuid
                .as_deref()
                .and_then(|id| snapshots.get(id).cloned())
                .unwrap_or_default();

            Some(Message {
                role,
                content: content.text(),
                timestamp: record.get("timestamp").cloned().unwrap_or(Value::Null),
                uuid,
                tool_uses: (role == Role::Assistant).then(|| content.tool_uses()),
                file_history_snapshots,
            })
        })
        .filter(|message| !message.is_empty())
        .collect()
}
