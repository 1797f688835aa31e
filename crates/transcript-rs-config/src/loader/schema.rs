//! Schema validation helpers for Transcript JSON5 configuration.

use crate::ConfigError;
use serde_json::{Map, Value};

/// Accepted spellings for `memory.load_overflow`.
const LOAD_OVERFLOW_VALUES: &[&str] = &["truncate", "reject"];

/// Validate a single config layer against the schema.
pub(super) fn validate_layer_schema(value: &Value, layer: &str) -> Result<(), ConfigError> {
    let map = expect_object(value, layer, "")?;
    ensure_allowed_keys(map, &["$schema", "memory"], layer, "")?;

    if let Some(value) = map.get("$schema") {
        expect_string(value, layer, "$schema")?;
    }
    if let Some(value) = map.get("memory") {
        validate_memory(value, layer, "memory")?;
    }
    Ok(())
}

/// Validate the "memory" block.
fn validate_memory(value: &Value, layer: &str, path: &str) -> Result<(), ConfigError> {
    let map = expect_object(value, layer, path)?;
    ensure_allowed_keys(map, &["max_messages", "load_overflow"], layer, path)?;

    if let Some(value) = map.get("max_messages") {
        if !value.is_null() && !value.is_u64() {
            return Err(invalid_field(
                layer,
                &join_path(path, "max_messages"),
                "expected non-negative integer or null",
            ));
        }
    }
    if let Some(value) = map.get("load_overflow") {
        let field = join_path(path, "load_overflow");
        let Some(mode) = value.as_str() else {
            return Err(invalid_field(layer, &field, "expected string"));
        };
        if !LOAD_OVERFLOW_VALUES.contains(&mode) {
            return Err(invalid_field(
                layer,
                &field,
                &format!("expected one of {}", LOAD_OVERFLOW_VALUES.join(", ")),
            ));
        }
    }
    Ok(())
}

/// Expect a JSON object or return a typed error.
fn expect_object<'a>(
    value: &'a Value,
    layer: &str,
    path: &str,
) -> Result<&'a Map<String, Value>, ConfigError> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(invalid_field(layer, path, "expected object")),
    }
}

/// Expect a JSON string or return a typed error.
fn expect_string(value: &Value, layer: &str, path: &str) -> Result<(), ConfigError> {
    if value.as_str().is_some() {
        Ok(())
    } else {
        Err(invalid_field(layer, path, "expected string"))
    }
}

/// Ensure an object contains only allowed keys.
fn ensure_allowed_keys(
    map: &Map<String, Value>,
    allowed: &[&str],
    layer: &str,
    path: &str,
) -> Result<(), ConfigError> {
    match map.keys().find(|key| !allowed.contains(&key.as_str())) {
        Some(key) => Err(ConfigError::UnknownKey {
            layer: layer.to_string(),
            key: join_path(path, key),
        }),
        None => Ok(()),
    }
}

/// Join nested paths for better error messages.
fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

/// Build a structured invalid-field error.
fn invalid_field(layer: &str, path: &str, message: &str) -> ConfigError {
    let normalized_path = if path.is_empty() { "root" } else { path };
    ConfigError::InvalidField {
        path: format!("{layer}:{normalized_path}"),
        message: message.to_string(),
    }
}
