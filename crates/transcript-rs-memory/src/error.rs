//! Error types for memory operations.

use transcript_rs_schema::{SchemaError, TypeResolutionError, ValidationError};

/// Errors returned by memory persistence and projection.
#[derive(Debug, thiserror::Error)]
pub enum MemoryError {
    /// Input could not be parsed into the persisted document shape.
    #[error("invalid memory document: {0}")]
    LoadFormat(String),
    /// A persisted content type could not be resolved.
    #[error("type resolution error: {0}")]
    TypeResolution(#[from] TypeResolutionError),
    /// Persisted content failed its type's validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<SchemaError> for MemoryError {
    fn from(err: SchemaError) -> Self {
        match err {
            SchemaError::TypeResolution(err) => MemoryError::TypeResolution(err),
            SchemaError::Validation(err) => MemoryError::Validation(err),
            SchemaError::Serialize(err) => MemoryError::Serialize(err),
        }
    }
}
