//! Agent memory façade: turn tracking, bounded history and persistence.

use crate::buffer::HistoryBuffer;
use crate::document::{MemoryDocument, MessageRecord};
use crate::error::MemoryError;
use crate::model::{HistoryEntry, Message};
use crate::turn::TurnTracker;
use log::{debug, info, warn};
use transcript_rs_config::{LoadOverflow, MemoryConfig};
use transcript_rs_schema::{Content, ContentCodec, TypeRegistry};

/// Bounded, turn-correlated conversation memory.
///
/// Content is stored live and only serialized when the history is read out
/// through [`AgentMemory::get_history`] or persisted with [`AgentMemory::dump`].
#[derive(Debug, Clone)]
pub struct AgentMemory {
    history: HistoryBuffer,
    turns: TurnTracker,
    codec: ContentCodec,
    load_overflow: LoadOverflow,
}

impl AgentMemory {
    /// Memory with the given capacity, resolving types through the global registry.
    pub fn new(max_messages: Option<usize>) -> Self {
        Self::with_codec(max_messages, ContentCodec::global())
    }

    /// Memory that resolves persisted types through `registry`.
    pub fn with_registry(max_messages: Option<usize>, registry: TypeRegistry) -> Self {
        Self::with_codec(max_messages, ContentCodec::new(registry))
    }

    /// Memory configured from a [`MemoryConfig`].
    pub fn from_config(config: &MemoryConfig) -> Self {
        Self::new(config.max_messages).with_load_overflow(config.load_overflow)
    }

    fn with_codec(max_messages: Option<usize>, codec: ContentCodec) -> Self {
        Self {
            history: HistoryBuffer::new(max_messages),
            turns: TurnTracker::new(),
            codec,
            load_overflow: LoadOverflow::default(),
        }
    }

    /// Choose how `load` treats documents holding more messages than their capacity.
    pub fn with_load_overflow(mut self, load_overflow: LoadOverflow) -> Self {
        self.load_overflow = load_overflow;
        self
    }

    /// Capacity; `None` means unbounded.
    pub fn max_messages(&self) -> Option<usize> {
        self.history.capacity()
    }

    /// Overflow policy applied by `load`.
    pub fn load_overflow(&self) -> LoadOverflow {
        self.load_overflow
    }

    /// Registry used to rebuild persisted content.
    pub fn registry(&self) -> &TypeRegistry {
        self.codec.registry()
    }

    /// Start a new turn and return its id.
    pub fn initialize_turn(&mut self) -> &str {
        self.turns.initialize_turn()
    }

    /// Current turn id, if a turn was ever initialized.
    pub fn get_current_turn_id(&self) -> Option<&str> {
        self.turns.get_current_turn_id()
    }

    /// Add a message stamped with the current turn id.
    pub fn add_message(&mut self, role: impl Into<String>, content: impl Into<Content>) {
        let turn_id = self.turns.get_current_turn_id().map(str::to_string);
        let message = Message::new(role, content, turn_id);
        debug!(
            "adding message (role={}, turn_id={:?}, schema={})",
            message.role(),
            message.turn_id(),
            message.content().is_schema()
        );
        self.history.append(message);
    }

    /// Stored messages, oldest first.
    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    /// Iterate stored messages, oldest first.
    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.history.iter()
    }

    /// Serialized projection of every stored message.
    pub fn get_history(&self) -> Result<Vec<HistoryEntry>, MemoryError> {
        self.history
            .iter()
            .map(|message| -> Result<HistoryEntry, MemoryError> {
                let serialized = self.codec.serialize(message.content())?;
                Ok(HistoryEntry {
                    role: message.role().to_string(),
                    content: serialized.text,
                    turn_id: message.turn_id().map(str::to_string),
                })
            })
            .collect()
    }

    /// Number of stored messages.
    pub fn get_message_count(&self) -> usize {
        self.history.len()
    }

    /// Typed snapshot of the current state.
    pub fn snapshot(&self) -> Result<MemoryDocument, MemoryError> {
        let history = self
            .history
            .iter()
            .map(|message| -> Result<MessageRecord, MemoryError> {
                let serialized = self.codec.serialize(message.content())?;
                Ok(MessageRecord {
                    role: message.role().to_string(),
                    turn_id: message.turn_id().map(str::to_string),
                    content: serialized.text,
                    content_type: serialized.type_name,
                })
            })
            .collect::<Result<Vec<_>, MemoryError>>()?;
        Ok(MemoryDocument {
            max_messages: self.max_messages(),
            current_turn_id: self.get_current_turn_id().map(str::to_string),
            history,
        })
    }

    /// Encode the full state as a JSON document.
    pub fn dump(&self) -> Result<String, MemoryError> {
        let document = self.snapshot()?;
        let text = document.to_json()?;
        info!(
            "dumped memory (messages={}, bytes={})",
            document.history.len(),
            text.len()
        );
        Ok(text)
    }

    /// Replace the full state with the contents of a JSON document.
    ///
    /// Nothing changes unless every message decodes.
    pub fn load(&mut self, document: &str) -> Result<(), MemoryError> {
        let document = MemoryDocument::parse(document)?;
        self.restore(document)
    }

    /// Replace the full state with an already parsed document.
    pub fn restore(&mut self, document: MemoryDocument) -> Result<(), MemoryError> {
        let MemoryDocument {
            max_messages,
            current_turn_id,
            history,
        } = document;

        let overflow = match max_messages {
            Some(capacity) => history.len().saturating_sub(capacity),
            None => 0,
        };
        if overflow > 0 && self.load_overflow == LoadOverflow::Reject {
            return Err(MemoryError::LoadFormat(format!(
                "history holds {} messages but max_messages is {}",
                history.len(),
                history.len() - overflow
            )));
        }

        let messages = history
            .into_iter()
            .map(|record| -> Result<Message, MemoryError> {
                let content = self
                    .codec
                    .deserialize(&record.content, record.content_type.as_deref())?;
                Ok(Message::new(record.role, content, record.turn_id))
            })
            .collect::<Result<Vec<_>, MemoryError>>()?;
        if overflow > 0 {
            warn!("truncating loaded history (dropped={overflow}, max_messages={max_messages:?})");
        }

        self.history = HistoryBuffer::from_messages(max_messages, messages);
        self.turns = TurnTracker::with_turn_id(current_turn_id);
        info!(
            "loaded memory (messages={}, max_messages={:?})",
            self.history.len(),
            max_messages
        );
        Ok(())
    }

    /// Independent copy sharing content values with this memory.
    pub fn copy(&self) -> Self {
        self.clone()
    }
}

impl Default for AgentMemory {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::AgentMemory;
    use crate::error::MemoryError;
    use pretty_assertions::assert_eq;
    use transcript_rs_config::{LoadOverflow, MemoryConfig};
    use transcript_rs_schema::TypeRegistry;

    fn opaque_contents(memory: &AgentMemory) -> Vec<String> {
        memory
            .messages()
            .filter_map(|message| message.content().as_opaque().map(str::to_string))
            .collect()
    }

    #[test]
    fn initialization_defaults() {
        let memory = AgentMemory::new(Some(5));
        assert_eq!(memory.get_message_count(), 0);
        assert_eq!(memory.max_messages(), Some(5));
        assert_eq!(memory.get_current_turn_id(), None);
        assert_eq!(AgentMemory::default().max_messages(), None);
    }

    #[test]
    fn manage_overflow_keeps_last_five() {
        let mut memory = AgentMemory::new(Some(5));
        for i in 0..7 {
            memory.add_message("user", format!("Message {i}"));
        }
        assert_eq!(memory.get_message_count(), 5);
        assert_eq!(
            opaque_contents(&memory),
            vec!["Message 2", "Message 3", "Message 4", "Message 5", "Message 6"]
        );
    }

    #[test]
    fn opaque_history_passes_through() {
        let mut memory = AgentMemory::default();
        memory.add_message("user", "Not a schema");
        let history = memory.get_history().expect("history");
        assert_eq!(history[0].content, "Not a schema");
        assert_eq!(history[0].turn_id, None);
    }

    #[test]
    fn messages_before_first_turn_have_no_turn_id() {
        let mut memory = AgentMemory::default();
        memory.add_message("user", "early");
        let turn = memory.initialize_turn().to_string();
        memory.add_message("user", "late");

        let turn_ids: Vec<Option<&str>> = memory.messages().map(|m| m.turn_id()).collect();
        assert_eq!(turn_ids, vec![None, Some(turn.as_str())]);
    }

    #[test]
    fn from_config_applies_capacity_and_policy() {
        let config = MemoryConfig {
            max_messages: Some(2),
            load_overflow: LoadOverflow::Reject,
        };
        let memory = AgentMemory::from_config(&config);
        assert_eq!(memory.max_messages(), Some(2));
        assert_eq!(memory.load_overflow(), LoadOverflow::Reject);
    }

    #[test]
    fn load_truncates_oversized_history_by_default() {
        let mut memory = AgentMemory::with_registry(None, TypeRegistry::new());
        let text = r#"{"max_messages":1,"current_turn_id":null,"history":[
            {"role":"user","turn_id":null,"content":"old","content_type":null},
            {"role":"user","turn_id":null,"content":"new","content_type":null}]}"#;
        memory.load(text).expect("load");
        assert_eq!(memory.max_messages(), Some(1));
        assert_eq!(opaque_contents(&memory), vec!["new"]);
    }

    #[test]
    fn load_rejects_oversized_history_when_configured() {
        let mut memory = AgentMemory::with_registry(None, TypeRegistry::new())
            .with_load_overflow(LoadOverflow::Reject);
        memory.add_message("user", "kept");
        let text = r#"{"max_messages":0,"current_turn_id":"t","history":[
            {"role":"user","turn_id":null,"content":"x","content_type":null}]}"#;
        let err = memory.load(text).unwrap_err();
        assert!(matches!(err, MemoryError::LoadFormat(_)));
        assert_eq!(opaque_contents(&memory), vec!["kept"]);
        assert_eq!(memory.max_messages(), None);
        assert_eq!(memory.get_current_turn_id(), None);
    }

    #[test]
    fn copy_keeps_registry_handle() {
        let registry = TypeRegistry::new();
        let memory = AgentMemory::with_registry(Some(3), registry.clone());
        let copy = memory.copy();
        assert_eq!(copy.max_messages(), Some(3));
        assert_eq!(copy.registry().names(), registry.names());
        assert_eq!(copy.history(), memory.history());
    }
}
