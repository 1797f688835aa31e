//! Message model stored by the history buffer.

use serde::{Deserialize, Serialize};
use transcript_rs_schema::Content;

/// A single stored message. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    role: String,
    content: Content,
    turn_id: Option<String>,
}

impl Message {
    /// Create a message stamped with an optional turn id.
    pub fn new(role: impl Into<String>, content: impl Into<Content>, turn_id: Option<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
            turn_id,
        }
    }

    /// Role that produced the message.
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Live content value.
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Turn active when the message was added.
    pub fn turn_id(&self) -> Option<&str> {
        self.turn_id.as_deref()
    }
}

/// Serialized view of a message returned by `AgentMemory::get_history`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Role that produced the message.
    pub role: String,
    /// Canonical JSON for schema content, raw text otherwise.
    pub content: String,
    /// Turn active when the message was added.
    pub turn_id: Option<String>,
}
