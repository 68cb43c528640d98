use std::path::Path;

use anyhow::Result;

use crate::indexer::builder::build_session_index;
use crate::models::Stats;

/// Summarize the contents of a configuration directory
pub fn collect_stats(claude_dir: &Path) -> Result<Stats> {
    let index = build_session_index(claude_dir)?;

    Ok(Stats {
        history_entries: index.history_entries,
        projects: index.projects,
        sessions: index.sessions.len(),
        messages: index.sessions.iter().map(|s| s.message_count).sum(),
        newest_session: index.sessions.first().map(|s| s.timestamp),
        oldest_session: index.sessions.last().map(|s| s.timestamp),
    })
}
