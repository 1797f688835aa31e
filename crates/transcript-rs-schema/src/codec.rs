//! Conversion between content values and their persisted text form.

use crate::content::Content;
use crate::error::SchemaError;
use crate::registry::TypeRegistry;
use log::debug;
use serde::{Deserialize, Serialize};

/// Persisted form of a content value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedContent {
    /// Canonical JSON for schema values, raw text for opaque values.
    pub text: String,
    /// Qualified type name; `None` for opaque values.
    pub type_name: Option<String>,
}

/// Encodes content to text and rebuilds it through a type registry.
#[derive(Debug, Clone)]
pub struct ContentCodec {
    registry: TypeRegistry,
}

impl ContentCodec {
    /// Codec that resolves type names against `registry`.
    pub fn new(registry: TypeRegistry) -> Self {
        Self { registry }
    }

    /// Codec backed by the process-wide registry.
    pub fn global() -> Self {
        Self::new(TypeRegistry::global().clone())
    }

    /// Registry used for reconstruction.
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Encode a content value. Opaque content passes through unchanged.
    pub fn serialize(&self, content: &Content) -> Result<SerializedContent, SchemaError> {
        match content {
            Content::Schema(value) => Ok(SerializedContent {
                text: value.to_json_text()?,
                type_name: Some(value.qualified_name().to_string()),
            }),
            Content::Opaque(raw) => Ok(SerializedContent {
                text: raw.clone(),
                type_name: None,
            }),
        }
    }

    /// Rebuild a content value from its persisted form.
    pub fn deserialize(&self, text: &str, type_name: Option<&str>) -> Result<Content, SchemaError> {
        let Some(type_name) = type_name else {
            return Ok(Content::Opaque(text.to_string()));
        };
        let schema_type = self.registry.resolve(type_name)?;
        let value = schema_type.from_json(text)?;
        debug!(
            "deserialized schema content (type={}, len={})",
            type_name,
            text.len()
        );
        Ok(Content::Schema(value))
    }
}

impl Default for ContentCodec {
    fn default() -> Self {
        Self::global()
    }
}

#[cfg(test)]
mod tests {
    use super::{ContentCodec, SerializedContent};
    use crate::{Content, Schema, SchemaError, TypeRegistry, TypeResolutionError};
    use pretty_assertions::assert_eq;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Point {
        x: i64,
        y: i64,
    }

    impl Schema for Point {
        const QUALIFIED_NAME: &'static str = "tests.codec.Point";
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Segment {
        label: String,
        start: Point,
        end: Point,
    }

    impl Schema for Segment {
        const QUALIFIED_NAME: &'static str = "tests.codec.Segment";

        fn validate(&self) -> Result<(), String> {
            if self.label.is_empty() {
                return Err("label must not be empty".to_string());
            }
            Ok(())
        }
    }

    fn codec() -> ContentCodec {
        let registry = TypeRegistry::new();
        registry.register::<Point>().expect("point");
        registry.register::<Segment>().expect("segment");
        ContentCodec::new(registry)
    }

    fn segment() -> Segment {
        Segment {
            label: "diag".to_string(),
            start: Point { x: 0, y: 0 },
            end: Point { x: 3, y: 4 },
        }
    }

    #[test]
    fn serialize_nested_schema_value() {
        let serialized = codec()
            .serialize(&Content::schema(segment()))
            .expect("serialize");
        assert_eq!(
            serialized,
            SerializedContent {
                text: r#"{"label":"diag","start":{"x":0,"y":0},"end":{"x":3,"y":4}}"#.to_string(),
                type_name: Some("tests.codec.Segment".to_string()),
            }
        );
    }

    #[test]
    fn serialize_opaque_is_identity() {
        let serialized = codec()
            .serialize(&Content::opaque("Not a schema"))
            .expect("serialize");
        assert_eq!(serialized.text, "Not a schema");
        assert_eq!(serialized.type_name, None);
    }

    #[test]
    fn deserialize_rebuilds_equal_value() {
        let codec = codec();
        let original = Content::schema(segment());
        let serialized = codec.serialize(&original).expect("serialize");
        let restored = codec
            .deserialize(&serialized.text, serialized.type_name.as_deref())
            .expect("deserialize");
        assert_eq!(restored, original);
        assert_eq!(
            restored.downcast_ref::<Segment>().map(|s| s.end.y),
            Some(4)
        );
    }

    #[test]
    fn deserialize_without_type_is_opaque() {
        let restored = codec().deserialize("{\"x\":1}", None).expect("opaque");
        assert_eq!(restored, Content::opaque("{\"x\":1}"));
    }

    #[test]
    fn deserialize_reports_resolution_and_validation_failures() {
        let codec = codec();
        let err = codec
            .deserialize("{}", Some("invalid.module.Class"))
            .unwrap_err();
        assert!(matches!(
            err,
            SchemaError::TypeResolution(TypeResolutionError::UnknownNamespace { .. })
        ));

        let err = codec
            .deserialize(r#"{"x":"one","y":2}"#, Some("tests.codec.Point"))
            .unwrap_err();
        assert!(matches!(err, SchemaError::Validation(_)));

        let text = r#"{"label":"","start":{"x":0,"y":0},"end":{"x":1,"y":1}}"#;
        let err = codec
            .deserialize(text, Some("tests.codec.Segment"))
            .unwrap_err();
        match err {
            SchemaError::Validation(err) => assert_eq!(err.message, "label must not be empty"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
