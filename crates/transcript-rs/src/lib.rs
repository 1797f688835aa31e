//! Public SDK surface for Transcript.
//!
//! This crate re-exports the schema, memory and config building blocks and
//! provides a small initialization helper to keep consumer setup consistent.

/// Re-export for convenience.
pub use transcript_rs_config as config;
/// Re-export for convenience.
pub use transcript_rs_memory as memory;
/// Re-export for convenience.
pub use transcript_rs_schema as schema;

pub use transcript_rs_config::{LoadOverflow, MemoryConfig, TranscriptConfig};
pub use transcript_rs_memory::{AgentMemory, HistoryEntry, MemoryError, Message};
pub use transcript_rs_schema::{Content, ContentCodec, Schema, SchemaObject, TypeRegistry};

#[inline]
/// Initialize logging using env_logger if the "logging" feature is enabled.
///
/// This is a no-op if the feature is not enabled.
pub fn init_logging() {
    #[cfg(feature = "logging")]
    {
        let _ = env_logger::try_init();
    }
}
