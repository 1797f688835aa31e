//! Error types for schema resolution, validation and registration.

use thiserror::Error;

/// Failure to map a qualified type name back to a registered schema type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeResolutionError {
    /// Name is not of the form `<namespace>.<type>`.
    #[error("malformed type name: {0}")]
    Malformed(String),
    /// No registered type lives in the requested namespace.
    #[error("unknown namespace `{namespace}` (while resolving `{name}`)")]
    UnknownNamespace { namespace: String, name: String },
    /// Namespace is known but the symbol is not registered in it.
    #[error("type `{symbol}` not found in namespace `{namespace}`")]
    UnknownSymbol { namespace: String, symbol: String },
}

/// JSON content did not satisfy the field contract of a schema type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed for `{type_name}`: {message}")]
pub struct ValidationError {
    /// Qualified name of the type that rejected the input.
    pub type_name: String,
    /// Human readable reason.
    pub message: String,
}

impl ValidationError {
    /// Build a validation error for the given type.
    pub fn new(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            message: message.into(),
        }
    }
}

/// Errors returned when registering schema types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Qualified name is not of the form `<namespace>.<type>`.
    #[error("invalid qualified name: {0}")]
    InvalidName(String),
    /// A different type already owns this qualified name.
    #[error("qualified name already registered by another type: {0}")]
    Conflict(String),
    /// Registry no longer accepts registrations.
    #[error("registry is sealed; cannot register {0}")]
    Sealed(String),
}

/// Errors surfaced by the content codec.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Persisted type name could not be resolved.
    #[error(transparent)]
    TypeResolution(#[from] TypeResolutionError),
    /// Persisted content failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Encoding a schema value to JSON failed.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
