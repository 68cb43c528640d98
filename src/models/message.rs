use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Maps a transcript record `type` to a role, if it is a conversation record
    pub fn from_record_type(record_type: &str) -> Option<Self> {
        match record_type {
            "user" => Some(Role::User),
            "assistant" => Some(Role::Assistant),
            _ => None,
        }
    }

    /// Role of a parsed transcript record, from its `type` field
    pub fn of_record(record: &Value) -> Option<Self> {
        record.get("type").and_then(Value::as_str).and_then(Self::from_record_type)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A user or assistant message prepared for the detail view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub role: Role,
    pub content: String,
    /// Timestamp exactly as stored in the transcript (number or string)
    #[serde(default)]
    pub timestamp: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// Raw `tool_use` content blocks; only present on assistant messages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_uses: Option<Vec<Value>>,
    #[serde(default)]
    pub file_history_snapshots: Vec<FileHistorySnapshot>,
}

impl Message {
    /// True when there is nothing worth showing for this message
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
            && self.tool_uses.as_ref().is_none_or(|uses| uses.is_empty())
            && self.file_history_snapshots.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileHistorySnapshot {
    pub message_id: String,
    #[serde(default)]
    pub timestamp: Value,
    #[serde(default)]
    pub is_snapshot_update: bool,
    /// Tracked file path -> backup descriptor, passed through untouched
    #[serde(default)]
    pub tracked_file_backups: Map<String, Value>,
}
