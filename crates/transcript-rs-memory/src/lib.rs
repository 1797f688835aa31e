//! Bounded, turn-correlated conversation memory for Transcript.

pub mod buffer;
pub mod document;
pub mod error;
pub mod memory;
pub mod model;
pub mod turn;

/// Capacity-bounded history buffer.
pub use buffer::HistoryBuffer;
/// Persisted document model.
pub use document::{MemoryDocument, MessageRecord};
/// Memory error type.
pub use error::MemoryError;
/// Agent memory façade.
pub use memory::AgentMemory;
/// Stored message and its serialized projection.
pub use model::{HistoryEntry, Message};
/// Turn id tracking.
pub use turn::TurnTracker;
