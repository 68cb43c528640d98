//! Data models for Claude Code session transcripts.
//!
//! - [`HistoryEntry`] - One line of the global prompt history (opaque JSON)
//! - [`SessionRecord`] - Summary row for one session transcript
//! - [`Message`] / [`FileHistorySnapshot`] - Detail view of a session
//! - [`Response`] - Success payload or `{ "error": ... }` returned by every operation
//!
//! Output types serialize with camelCase field names so the JSON matches what the
//! display layer consumes.

pub mod history;
pub mod message;
pub mod response;
pub mod session;

pub use history::HistoryEntry;
pub use message::{FileHistorySnapshot, Message, Role};
pub use response::{FileHistoryContent, Response, SessionDetails, SessionList};
pub use session::{SessionRecord, Stats};
