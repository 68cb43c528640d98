//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use serde_json::{Value, json};
use tempfile::TempDir;

/// Builder for creating test .claude directory structures
pub struct ClaudeDirBuilder {
    temp_dir: TempDir,
}

impl ClaudeDirBuilder {
    /// Create a new builder with an empty .claude directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the .claude directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a history.jsonl file with the given content
    pub fn with_history(self, content: &str) -> Self {
        fs::write(self.temp_dir.path().join("history.jsonl"), content)
            .expect("Failed to write history.jsonl");
        self
    }

    /// Add a project directory with the given name and session files
    pub fn with_project(self, dir_name: &str, session_files: &[SessionFileBuilder]) -> Self {
        let project_dir = self.temp_dir.path().join("projects").join(dir_name);
        fs::create_dir_all(&project_dir).expect("Failed to create project dir");

        for session_file in session_files {
            session_file.create_in(&project_dir);
        }

        self
    }

    /// Add a file-history backup body
    pub fn with_backup(self, session_id: &str, backup_file: &str, body: &[u8]) -> Self {
        let session_dir = self.temp_dir.path().join("file-history").join(session_id);
        fs::create_dir_all(&session_dir).expect("Failed to create file-history dir");
        fs::write(session_dir.join(backup_file), body).expect("Failed to write backup file");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ClaudeDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for session transcript files
pub struct SessionFileBuilder {
    filename: String,
    lines: Vec<String>,
}

impl SessionFileBuilder {
    /// Create a session file named `<session_id>.jsonl`
    pub fn new(session_id: &str) -> Self {
        Self::named(&format!("{}.jsonl", session_id))
    }

    /// Create a file with an exact file name
    pub fn named(filename: &str) -> Self {
        Self { filename: filename.to_string(), lines: Vec::new() }
    }

    /// Add a transcript record
    pub fn with_entry(mut self, entry: RecordBuilder) -> Self {
        self.lines.push(entry.to_json());
        self
    }

    /// Add a raw line, e.g. malformed JSON
    pub fn with_raw_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Add a file-history snapshot record for `message_id` tracking `files`
    pub fn with_snapshot(mut self, message_id: &str, files: &[&str], is_update: bool) -> Self {
        let backups: serde_json::Map<String, Value> = files
            .iter()
            .map(|file| {
                (file.to_string(), json!({"backupFileName": format!("{}@v1", file), "version": 1}))
            })
            .collect();
        let record = json!({
            "type": "file-history-snapshot",
            "messageId": message_id,
            "snapshot": {
                "messageId": message_id,
                "trackedFileBackups": backups,
                "timestamp": "2025-11-21T07:11:39.534Z"
            },
            "isSnapshotUpdate": is_update
        });
        self.lines.push(record.to_string());
        self
    }

    /// Create the file in the given directory
    pub fn create_in(&self, dir: &Path) {
        fs::write(dir.join(&self.filename), self.lines.join("\n"))
            .expect("Failed to write session file");
    }
}

/// Builder for user/assistant transcript records
pub struct RecordBuilder {
    record_type: String,
    content: Value,
    timestamp: Value,
    uuid: String,
}

impl RecordBuilder {
    /// Create a new user message
    pub fn user() -> Self {
        Self {
            record_type: "user".to_string(),
            content: json!("Test message"),
            timestamp: json!("2025-01-01T00:00:00Z"),
            uuid: "550e8400-e29b-41d4-a716-446655440001".to_string(),
        }
    }

    /// Create a new assistant message
    pub fn assistant() -> Self {
        Self {
            record_type: "assistant".to_string(),
            content: json!([{"type": "text", "text": "Test response"}]),
            timestamp: json!("2025-01-01T00:00:01Z"),
            uuid: "550e8400-e29b-41d4-a716-446655440002".to_string(),
        }
    }

    /// Set plain string content
    pub fn text(mut self, text: &str) -> Self {
        self.content = json!(text);
        self
    }

    /// Set content blocks (text, thinking, tool_use, ...)
    pub fn content_blocks(mut self, blocks: Vec<Value>) -> Self {
        self.content = Value::Array(blocks);
        self
    }

    pub fn text_block(text: &str) -> Value {
        json!({"type": "text", "text": text})
    }

    pub fn thinking_block(text: &str) -> Value {
        json!({"type": "thinking", "thinking": text})
    }

    pub fn tool_use_block(id: &str, name: &str, input: Value) -> Value {
        json!({"type": "tool_use", "id": id, "name": name, "input": input})
    }

    pub fn tool_result_block(tool_use_id: &str, content: &str) -> Value {
        json!({"type": "tool_result", "tool_use_id": tool_use_id, "content": content})
    }

    /// Set the timestamp as epoch milliseconds
    pub fn timestamp(mut self, millis: i64) -> Self {
        self.timestamp = json!(millis);
        self
    }

    /// Set the timestamp as an RFC3339 string
    pub fn timestamp_str(mut self, timestamp: &str) -> Self {
        self.timestamp = json!(timestamp);
        self
    }

    pub fn uuid(mut self, uuid: &str) -> Self {
        self.uuid = uuid.to_string();
        self
    }

    /// Convert to a JSON line
    pub fn to_json(&self) -> String {
        json!({
            "type": self.record_type,
            "uuid": self.uuid,
            "timestamp": self.timestamp,
            "sessionId": "550e8400-e29b-41d4-a716-446655440000",
            "message": {"role": self.record_type, "content": self.content}
        })
        .to_string()
    }
}

/// Helper to create a minimal valid .claude directory
pub fn minimal_claude_dir() -> TempDir {
    ClaudeDirBuilder::new().with_history("").build()
}

/// Helper to create a realistic .claude directory with sample data
pub fn realistic_claude_dir() -> TempDir {
    ClaudeDirBuilder::new()
        .with_history(
            r#"{"display":"First prompt","timestamp":1000,"sessionId":"s-old"}
{"display":"Second prompt","timestamp":2000,"sessionId":"s-new"}"#,
        )
        .with_project(
            "-Users-test-project1",
            &[SessionFileBuilder::new("s-old")
                .with_entry(RecordBuilder::user().text("Hello from project one").timestamp(1000).uuid("u1"))
                .with_entry(RecordBuilder::assistant().timestamp(1001).uuid("a1"))
                .with_snapshot("u1", &["src/main.rs"], false)],
        )
        .with_project(
            "-Users-test-project2",
            &[
                SessionFileBuilder::new("s-new")
                    .with_entry(RecordBuilder::user().text("Another project").timestamp(2000).uuid("u2")),
                SessionFileBuilder::named("agent-s-sub.jsonl")
                    .with_entry(RecordBuilder::user().text("sub-agent prompt").timestamp(3000)),
            ],
        )
        .with_backup("s-old", "main.rs@v1", b"fn main() {}\n")
        .build()
}
