use std::path::Path;

use anyhow::Result;
use tracing::debug;

use crate::models::HistoryEntry;
use crate::parsers::read_jsonl_file;

/// Parse history.jsonl into its raw entries, dropping malformed lines
pub fn parse_history_file(path: &Path) -> Result<Vec<HistoryEntry>> {
    let parsed = read_jsonl_file(path)?;
    debug!(
        path = %path.display(),
        entries = parsed.records.len(),
        skipped = parsed.skipped,
        "parsed history file"
    );
    Ok(parsed.records)
}
