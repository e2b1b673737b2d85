use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::payload::{self, Payload};

// ---------------------------------------------------------------------------
// ChatMessage
// ---------------------------------------------------------------------------

/// A single message in a support/chat thread.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub message: String,
    pub user_id: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub message_data: Option<Payload>,
}

impl ChatMessage {
    /// Decode a chat message from an untyped payload.
    ///
    /// # Errors
    ///
    /// [`ModelError::MalformedTimestamp`](crate::ModelError::MalformedTimestamp)
    /// when `timestamp` is absent or not valid ISO-8601 — message ordering
    /// depends on it, so there is no tolerant fallback.
    pub fn from_payload(p: &Payload) -> Result<Self> {
        Ok(Self {
            id: payload::string_or_empty(p, "id"),
            message: payload::string_or_empty(p, "message"),
            user_id: payload::optional_string(p, "userId"),
            timestamp: payload::require_timestamp(p, "timestamp")?,
            message_data: payload::data_bag(p, "messageData"),
        })
    }

    /// Canonical camelCase encoding with the timestamp as RFC 3339 text.
    pub fn to_payload(&self) -> Payload {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Payload::new(),
        }
    }
}
