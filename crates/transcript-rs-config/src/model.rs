//! Configuration schema for Transcript.

use serde::{Deserialize, Serialize};

/// Root config for the Transcript SDK.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TranscriptConfig {
    #[serde(default, rename = "$schema")]
    pub schema: Option<String>,
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl TranscriptConfig {
    /// Start building a config programmatically with defaults applied.
    pub fn builder() -> TranscriptConfigBuilder {
        TranscriptConfigBuilder::new()
    }
}

/// Builder for assembling a `TranscriptConfig` in code.
#[derive(Debug, Default, Clone)]
pub struct TranscriptConfigBuilder {
    config: TranscriptConfig,
}

impl TranscriptConfigBuilder {
    /// Create a new builder seeded with default config values.
    pub fn new() -> Self {
        Self {
            config: TranscriptConfig::default(),
        }
    }

    /// Replace the memory configuration.
    pub fn memory(mut self, memory: MemoryConfig) -> Self {
        self.config.memory = memory;
        self
    }

    /// Set the history capacity; `None` keeps every message.
    pub fn max_messages(mut self, max_messages: Option<usize>) -> Self {
        self.config.memory.max_messages = max_messages;
        self
    }

    /// Set how oversized documents are treated on load.
    pub fn load_overflow(mut self, load_overflow: LoadOverflow) -> Self {
        self.config.memory.load_overflow = load_overflow;
        self
    }

    /// Finish building the config.
    pub fn build(self) -> TranscriptConfig {
        self.config
    }
}

/// Agent memory settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MemoryConfig {
    /// Maximum retained messages; absent or null means unbounded.
    #[serde(default)]
    pub max_messages: Option<usize>,
    /// Policy for documents holding more messages than their capacity.
    #[serde(default)]
    pub load_overflow: LoadOverflow,
}

/// What `load` does when a document exceeds its own `max_messages`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LoadOverflow {
    /// Keep the newest messages that fit.
    #[default]
    Truncate,
    /// Fail the load.
    Reject,
}
