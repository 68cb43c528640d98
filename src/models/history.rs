use serde_json::Value;

/// A parsed line of `history.jsonl`.
///
/// The history log is only validated and counted, so its fields stay untyped.
pub type HistoryEntry = Value;
