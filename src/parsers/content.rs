use serde_json::Value;

const CONTENT_TYPE_TEXT: &str = "text";
const CONTENT_TYPE_TOOL_USE: &str = "tool_use";
const TEXT_BLOCK_SEPARATOR: &str = "\n\n";

/// The `content` field of a transcript message
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MessageContent<'a> {
    PlainText(&'a str),
    Blocks(&'a [Value]),
    Absent,
}

impl<'a> MessageContent<'a> {
    /// Classify the `content` field of a `message` payload
    pub fn of_message(message: &'a Value) -> Self {
        match message.get("content") {
            Some(content) => Self::from_value(content),
            None => MessageContent::Absent,
        }
    }

    pub fn from_value(content: &'a Value) -> Self {
        match content {
            Value::String(text) => MessageContent::PlainText(text),
            Value::Array(blocks) => MessageContent::Blocks(blocks),
            _ => MessageContent::Absent,
        }
    }

    /// Human-readable text: plain strings as-is, `text` blocks joined by a blank line
    pub fn text(&self) -> String {
        match self {
            MessageContent::PlainText(text) => (*text).to_string(),
            MessageContent::Blocks(blocks) => blocks
                .iter()
                .filter(|block| block_type(block) == Some(CONTENT_TYPE_TEXT))
                .filter_map(|block| block.get("text").and_then(Value::as_str))
                .collect::<Vec<_>>()
                .join(TEXT_BLOCK_SEPARATOR),
            MessageContent::Absent => String::new(),
        }
    }

    /// The `tool_use` blocks, cloned in order
    pub fn tool_uses(&self) -> Vec<Value> {
        match self {
            MessageContent::Blocks(blocks) => blocks
                .iter()
                .filter(|block| block_type(block) == Some(CONTENT_TYPE_TOOL_USE))
                .cloned()
                .collect(),
            MessageContent::PlainText(_) | MessageContent::Absent => Vec::new(),
        }
    }
}

fn block_type(block: &Value) -> Option<&str> {
    block.get("type").and_then(Value::as_str)
}

/// Extract the readable text of a `message` payload. Never fails.
pub fn extract_text(message: &Value) -> String {
    MessageContent::of_message(message).text()
}

/// First `max_chars` characters of `text`, never splitting a character
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}
