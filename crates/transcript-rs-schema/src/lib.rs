//! Schema capability, polymorphic content and the type registry.
//!
//! Structured records implement [`Schema`] and are registered by qualified
//! name in a [`TypeRegistry`]. [`ContentCodec`] turns [`Content`] into text
//! plus an optional type name and back again.

mod codec;
mod content;
mod error;
mod registry;
mod schema;

/// Content encoding and decoding.
pub use codec::{ContentCodec, SerializedContent};
/// Tagged content variant.
pub use content::Content;
/// Error types for resolution, validation and registration.
pub use error::{RegistryError, SchemaError, TypeResolutionError, ValidationError};
/// Type registry and registered capability bundles.
pub use registry::{SchemaType, TypeRegistry};
/// Schema capability traits.
pub use schema::{Schema, SchemaObject, split_qualified_name};
