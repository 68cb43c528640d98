use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::debug;

/// Records parsed from a JSONL document, in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedLines {
    pub records: Vec<Value>,
    /// Non-blank lines that were not valid JSON
    pub skipped: usize,
}

impl ParsedLines {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Parse newline-delimited JSON, silently dropping lines that fail to parse
pub fn parse_lines(text: &str) -> ParsedLines {
    let mut parsed = ParsedLines::default();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<Value>(line) {
            Ok(record) => parsed.records.push(record),
            Err(_) => parsed.skipped += 1,
        }
    }

    parsed
}

/// Read a JSONL file and parse it with [`parse_lines`]
///
/// Invalid UTF-8 is replaced rather than rejected so that one damaged line only
/// costs that line.
pub fn read_jsonl_file(path: &Path) -> Result<ParsedLines> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let text = String::from_utf8_lossy(&bytes);
    let parsed = parse_lines(&text);

    if parsed.skipped > 0 {
        debug!(
            path = %path.display(),
            records = parsed.records.len(),
            skipped = parsed.skipped,
            "dropped malformed JSONL lines"
        );
    }

    Ok(parsed)
}
