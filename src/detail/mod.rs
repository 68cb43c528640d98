//! Full message history of a single session.
//!
//! Loads one transcript, keeps its user and assistant messages in file order, and
//! attaches the file-history snapshots recorded for each message. Snapshots are joined
//! on the snapshot's `messageId` matching the message's `uuid`, nothing else.

pub mod loader;

pub use loader::{collect_snapshots, format_messages, get_session_details, load_session_messages};
