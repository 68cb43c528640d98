//! Session index for the projects directory
//!
//! # Error Handling Strategy
//!
//! - **Missing history file**: Reported as an error naming the expected path. The
//!   history file gates the whole index because its absence means the directory is not
//!   a Claude configuration directory.
//!
//! - **Directory failures**: Failing to enumerate `projects/` or one of its project
//!   directories aborts the operation; the caller receives `{ "error": ... }`.
//!
//! - **Per-session failures**: A session file that cannot be read is logged at warn
//!   level and skipped. One corrupt session never hides the rest.
//!
//! - **Line failures**: Delegated to the line parser, which drops malformed lines.

pub mod builder;
pub mod project_discovery;
pub mod stats;

pub use builder::{
    SessionIndex, build_session_index, list_sessions, load_sessions, summarize_session,
};
pub use project_discovery::{ProjectDir, discover_projects};
pub use stats::collect_stats;
