use serde::{Deserialize, Serialize};

use crate::models::{Message, SessionRecord};

/// Result of a browser operation as handed to the display layer.
///
/// Serializes either as the bare success payload or as `{ "error": "..." }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response<T> {
    Failure { error: String },
    Success(T),
}

impl<T> Response<T> {
    pub fn error(message: impl Into<String>) -> Self {
        Response::Failure { error: message.into() }
    }

    pub fn into_result(self) -> Result<T, String> {
        match self {
            Response::Success(value) => Ok(value),
            Response::Failure { error } => Err(error),
        }
    }
}

impl<T> From<anyhow::Result<T>> for Response<T> {
    fn from(result: anyhow::Result<T>) -> Self {
        match result {
            Ok(value) => Response::Success(value),
            Err(e) => Response::error(format!("{:#}", e)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionList {
    pub sessions: Vec<SessionRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDetails {
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileHistoryContent {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truncated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_bytes: Option<u64>,
}
