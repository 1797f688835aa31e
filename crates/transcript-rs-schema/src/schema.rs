//! The schema capability contract implemented by structured record types.

use crate::error::ValidationError;
use log::warn;
use regex::Regex;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::any::Any;
use std::fmt;
use std::sync::LazyLock;

/// Accepted shape for qualified names: dotted identifiers, at least two segments.
static QUALIFIED_NAME: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)+$").ok());

/// Structured record that can be validated, encoded and found again by name.
///
/// Construction goes through serde followed by the [`Schema::validate`] hook,
/// so a type only has to derive `Serialize`/`Deserialize` and pick a stable
/// `QUALIFIED_NAME`. Field declaration order defines the canonical JSON text.
pub trait Schema:
    Serialize + DeserializeOwned + fmt::Debug + PartialEq + Send + Sync + 'static
{
    /// Stable `<namespace path>.<type name>` identifier used as registry key.
    const QUALIFIED_NAME: &'static str;

    /// Extra field constraints that serde cannot express.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }

    /// Construct an instance from a field mapping, validating every field.
    fn from_fields(fields: Value) -> Result<Self, ValidationError> {
        let value: Self = serde_json::from_value(fields)
            .map_err(|err| ValidationError::new(Self::QUALIFIED_NAME, err.to_string()))?;
        value
            .validate()
            .map_err(|message| ValidationError::new(Self::QUALIFIED_NAME, message))?;
        Ok(value)
    }

    /// Canonical JSON text for this instance.
    fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Object-safe view of a [`Schema`] value, stored inside `Content`.
pub trait SchemaObject: fmt::Debug + Send + Sync + 'static {
    /// Qualified name of the concrete type.
    fn qualified_name(&self) -> &'static str;
    /// Canonical JSON text for the value.
    fn to_json_text(&self) -> Result<String, serde_json::Error>;
    /// Access the concrete value for downcasting.
    fn as_any(&self) -> &dyn Any;
    /// Field-by-field equality against another schema value.
    fn dyn_eq(&self, other: &dyn SchemaObject) -> bool;
}

impl<T: Schema> SchemaObject for T {
    fn qualified_name(&self) -> &'static str {
        T::QUALIFIED_NAME
    }

    fn to_json_text(&self) -> Result<String, serde_json::Error> {
        self.to_json()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn SchemaObject) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }
}

/// Split a qualified name into `(namespace, symbol)` if it is well formed.
pub fn split_qualified_name(name: &str) -> Option<(&str, &str)> {
    let Some(pattern) = QUALIFIED_NAME.as_ref() else {
        warn!("qualified name pattern unavailable; rejecting name (name={name})");
        return None;
    };
    if !pattern.is_match(name) {
        return None;
    }
    name.rsplit_once('.')
}
