//! Persisted memory document.

use crate::error::MemoryError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level keys every document must carry, even when null.
const REQUIRED_KEYS: &[&str] = &["max_messages", "current_turn_id", "history"];

/// Self-contained snapshot of an `AgentMemory`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryDocument {
    /// Capacity; `None` means unbounded.
    pub max_messages: Option<usize>,
    /// Turn active when the snapshot was taken.
    pub current_turn_id: Option<String>,
    /// Stored messages, oldest first.
    pub history: Vec<MessageRecord>,
}

/// One persisted message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Role that produced the message.
    pub role: String,
    /// Turn the message belongs to.
    #[serde(default)]
    pub turn_id: Option<String>,
    /// Canonical JSON for schema content, raw text for opaque content.
    pub content: String,
    /// Qualified type name; `None` for opaque content.
    #[serde(default)]
    pub content_type: Option<String>,
}

impl MemoryDocument {
    /// Parse JSON text, checking the document shape.
    pub fn parse(text: &str) -> Result<Self, MemoryError> {
        let value: Value = serde_json::from_str(text)
            .map_err(|err| MemoryError::LoadFormat(format!("not valid json: {err}")))?;
        let Some(map) = value.as_object() else {
            return Err(MemoryError::LoadFormat(
                "expected a json object at the top level".to_string(),
            ));
        };
        if let Some(missing) = REQUIRED_KEYS.iter().find(|key| !map.contains_key(**key)) {
            return Err(MemoryError::LoadFormat(format!("missing key `{missing}`")));
        }
        serde_json::from_value(value).map_err(|err| MemoryError::LoadFormat(err.to_string()))
    }

    /// Encode as JSON text.
    pub fn to_json(&self) -> Result<String, MemoryError> {
        Ok(serde_json::to_string(self)?)
    }
}
