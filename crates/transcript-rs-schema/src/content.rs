//! Message content: a schema-validated record or an opaque value.

use crate::schema::{Schema, SchemaObject};
use std::sync::Arc;

/// Payload carried by a message.
///
/// Schema values are shared through `Arc`; cloning content never copies the
/// record itself.
#[derive(Debug, Clone)]
pub enum Content {
    /// Structured record whose type can be recovered by qualified name.
    Schema(Arc<dyn SchemaObject>),
    /// Any other value, stored and persisted as-is.
    Opaque(String),
}

impl Content {
    /// Wrap a schema value.
    pub fn schema<T: Schema>(value: T) -> Self {
        Content::Schema(Arc::new(value))
    }

    /// Wrap an opaque value.
    pub fn opaque(value: impl Into<String>) -> Self {
        Content::Opaque(value.into())
    }

    /// Qualified type name for schema content, `None` for opaque content.
    pub fn type_name(&self) -> Option<&'static str> {
        match self {
            Content::Schema(value) => Some(value.qualified_name()),
            Content::Opaque(_) => None,
        }
    }

    /// True when the content is a schema value.
    pub fn is_schema(&self) -> bool {
        matches!(self, Content::Schema(_))
    }

    /// Borrow the concrete schema value if it has type `T`.
    pub fn downcast_ref<T: Schema>(&self) -> Option<&T> {
        match self {
            Content::Schema(value) => value.as_any().downcast_ref::<T>(),
            Content::Opaque(_) => None,
        }
    }

    /// Borrow the raw text of opaque content.
    pub fn as_opaque(&self) -> Option<&str> {
        match self {
            Content::Opaque(value) => Some(value),
            Content::Schema(_) => None,
        }
    }
}

impl PartialEq for Content {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Content::Schema(left), Content::Schema(right)) => left.dyn_eq(&**right),
            (Content::Opaque(left), Content::Opaque(right)) => left == right,
            _ => false,
        }
    }
}

impl From<String> for Content {
    fn from(value: String) -> Self {
        Content::Opaque(value)
    }
}

impl From<&str> for Content {
    fn from(value: &str) -> Self {
        Content::Opaque(value.to_string())
    }
}

impl From<Arc<dyn SchemaObject>> for Content {
    fn from(value: Arc<dyn SchemaObject>) -> Self {
        Content::Schema(value)
    }
}
