use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// Session file name without the `.jsonl` extension
    pub id: String,
    /// Epoch milliseconds of the first user message
    pub timestamp: i64,
    /// First 100 characters of the first user message
    pub display: String,
    /// Project path decoded from the directory name
    pub project: String,
    /// Directory name as stored under `projects/`
    pub project_dir: String,
    pub message_count: usize,
}

/// Totals reported by the `stats` command
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub history_entries: usize,
    pub projects: usize,
    pub sessions: usize,
    pub messages: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub newest_session: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oldest_session: Option<i64>,
}
