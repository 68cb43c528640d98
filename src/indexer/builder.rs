//! Builds the session list shown in the browser.
//!
//! Every session transcript under `projects/<project>/` contributes one
//! [`SessionRecord`], built from its first user message. Session files within a
//! project are summarized in parallel; results are merged in file-name order so a
//! session id seen twice keeps the record from the later file.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use rayon::prelude::*;
use serde_json::Value;
use tracing::{debug, warn};

use crate::indexer::project_discovery::discover_projects;
use crate::models::{Response, Role, SessionList, SessionRecord};
use crate::parsers::deserializers::timestamp_millis;
use crate::parsers::{extract_text, parse_history_file, read_jsonl_file, truncate_chars};
use crate::utils::paths::{ClaudePaths, SESSION_EXTENSION, decode_project_dir};

/// Maximum number of characters kept in [`SessionRecord::display`]
pub const DISPLAY_MAX_CHARS: usize = 100;

/// Everything gathered while indexing a configuration directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionIndex {
    /// Parsed lines in history.jsonl
    pub history_entries: usize,
    /// Project directories found under `projects/`
    pub projects: usize,
    /// One record per session id, newest first
    pub sessions: Vec<SessionRecord>,
}

/// List all sessions, newest first, as a display-layer response
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use ai_session_browser::list_sessions;
///
/// let response = list_sessions(Path::new("/Users/alice/.claude"));
/// println!("{}", serde_json::to_string(&response)?);
/// # Ok::<(), serde_json::Error>(())
/// ```
pub fn list_sessions(claude_dir: &Path) -> Response<SessionList> {
    load_sessions(claude_dir).map(|sessions| SessionList { sessions }).into()
}

/// List all sessions, newest first
pub fn load_sessions(claude_dir: &Path) -> Result<Vec<SessionRecord>> {
    Ok(build_session_index(claude_dir)?.sessions)
}

/// Scan the configuration directory and summarize every session transcript
///
/// # Errors
///
/// Returns an error if:
/// - history.jsonl does not exist (the message names the expected path)
/// - history.jsonl or a projects directory cannot be read
///
/// Session files that fail to read are logged and skipped.
pub fn build_session_index(claude_dir: &Path) -> Result<SessionIndex> {
    let paths = ClaudePaths::new(claude_dir);

    let history_path = paths.history_file();
    if !history_path.exists() {
        bail!("History file not found at: {}", history_path.display());
    }
    let history_entries = parse_history_file(&history_path)?.len();

    let projects = discover_projects(&paths.projects_dir())?;
    let mut sessions: HashMap<String, SessionRecord> = HashMap::new();
    let mut files_failed = 0;

    for project in &projects {
        let summaries: Vec<(&PathBuf, Result<Option<SessionRecord>>)> = project
            .session_files
            .par_iter()
            .map(|file| (file, summarize_session_file(file, &project.name)))
            .collect();

        for (file, summary) in summaries {
            match summary {
                Ok(Some(record)) => {
                    sessions.insert(record.id.clone(), record);
                }
                Ok(None) => {
                    debug!(path = %file.display(), "session has no user message, not listed");
                }
                Err(e) => {
                    files_failed += 1;
                    warn!(path = %file.display(), error = %e, "failed to read session file");
                }
            }
        }
    }

    let mut sessions: Vec<SessionRecord> = sessions.into_values().collect();
    sessions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    debug!(
        sessions = sessions.len(),
        projects = projects.len(),
        history_entries,
        files_failed,
        "indexed sessions"
    );

    Ok(SessionIndex { history_entries, projects: projects.len(), sessions })
}

fn summarize_session_file(path: &Path, project_dir: &str) -> Result<Option<SessionRecord>> {
    let file_name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
    let session_id = file_name.strip_suffix(SESSION_EXTENSION).unwrap_or(&*file_name);

    let parsed = read_jsonl_file(path)?;
    Ok(summarize_session(session_id, project_dir, &parsed.records))
}

/// Build the summary record for one session from its parsed transcript lines
///
/// Returns `None` when the transcript has no user message.
pub fn summarize_session(
    session_id: &str,
    project_dir: &str,
    records: &[Value],
) -> Option<SessionRecord> {
    let (first_user, message) = records.iter().find_map(|record| {
        if Role::of_record(record) != Some(Role::User) {
            return None;
        }
        let message = record.get("message").filter(|m| !m.is_null())?;
        Some((record, message))
    })?;

    let display = truncate_chars(&extract_text(message), DISPLAY_MAX_CHARS);
    let timestamp = first_user.get("timestamp").and_then(timestamp_millis).unwrap_or(0);
    let message_count = records.iter().filter(|record| Role::of_record(record).is_some()).count();

    Some(SessionRecord {
        id: session_id.to_string(),
        timestamp,
        display,
        project: decode_project_dir(project_dir),
        project_dir: project_dir.to_string(),
        message_count,
    })
}
