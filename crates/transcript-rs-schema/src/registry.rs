//! Registry mapping qualified type names to schema types.

use crate::error::{RegistryError, TypeResolutionError, ValidationError};
use crate::schema::{Schema, SchemaObject, split_qualified_name};
use log::debug;
use parking_lot::RwLock;
use serde_json::Value;
use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

/// Process-wide registry shared by every memory instance by default.
static GLOBAL: LazyLock<TypeRegistry> = LazyLock::new(TypeRegistry::new);

type Constructor = fn(Value) -> Result<Arc<dyn SchemaObject>, ValidationError>;

/// Capability bundle for one registered schema type.
#[derive(Clone, Copy)]
pub struct SchemaType {
    name: &'static str,
    type_id: TypeId,
    construct: Constructor,
}

impl SchemaType {
    /// Capture the capability bundle of `T`.
    pub fn of<T: Schema>() -> Self {
        Self {
            name: T::QUALIFIED_NAME,
            type_id: TypeId::of::<T>(),
            construct: construct_erased::<T>,
        }
    }

    /// Qualified name the type was registered under.
    pub fn qualified_name(&self) -> &'static str {
        self.name
    }

    /// Validate a field mapping and build an instance.
    pub fn construct(&self, fields: Value) -> Result<Arc<dyn SchemaObject>, ValidationError> {
        (self.construct)(fields)
    }

    /// Parse JSON text and build an instance.
    pub fn from_json(&self, text: &str) -> Result<Arc<dyn SchemaObject>, ValidationError> {
        let fields: Value = serde_json::from_str(text)
            .map_err(|err| ValidationError::new(self.name, format!("invalid json: {err}")))?;
        self.construct(fields)
    }
}

impl fmt::Debug for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SchemaType({})", self.name)
    }
}

fn construct_erased<T: Schema>(fields: Value) -> Result<Arc<dyn SchemaObject>, ValidationError> {
    let value = T::from_fields(fields)?;
    Ok(Arc::new(value))
}

#[derive(Default)]
struct RegistryState {
    types: HashMap<String, SchemaType>,
    sealed: bool,
}

/// In-memory registry for schema types, keyed by qualified name.
///
/// Cloning yields another handle to the same registry.
#[derive(Default, Clone)]
pub struct TypeRegistry {
    state: Arc<RwLock<RegistryState>>,
}

impl TypeRegistry {
    /// Create an empty, isolated registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry.
    pub fn global() -> &'static TypeRegistry {
        &GLOBAL
    }

    /// Register `T` under its qualified name.
    ///
    /// Registering the same type again is a no-op.
    pub fn register<T: Schema>(&self) -> Result<(), RegistryError> {
        self.register_type(SchemaType::of::<T>())
    }

    /// Register a previously captured capability bundle.
    pub fn register_type(&self, schema_type: SchemaType) -> Result<(), RegistryError> {
        let name = schema_type.qualified_name();
        if split_qualified_name(name).is_none() {
            return Err(RegistryError::InvalidName(name.to_string()));
        }
        let mut state = self.state.write();
        if let Some(existing) = state.types.get(name) {
            if existing.type_id == schema_type.type_id {
                return Ok(());
            }
            return Err(RegistryError::Conflict(name.to_string()));
        }
        if state.sealed {
            return Err(RegistryError::Sealed(name.to_string()));
        }
        debug!("registering schema type (name={name})");
        state.types.insert(name.to_string(), schema_type);
        Ok(())
    }

    /// Refuse further registrations; lookups keep working.
    pub fn seal(&self) {
        let mut state = self.state.write();
        if !state.sealed {
            debug!("sealing type registry (types={})", state.types.len());
            state.sealed = true;
        }
    }

    /// Whether the registry has been sealed.
    pub fn is_sealed(&self) -> bool {
        self.state.read().sealed
    }

    /// Whether a type is registered under this exact name.
    pub fn contains(&self, qualified_name: &str) -> bool {
        self.state.read().types.contains_key(qualified_name)
    }

    /// All registered qualified names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.state.read().types.keys().cloned().collect();
        names.sort();
        names
    }

    /// Look up the schema type registered under `qualified_name`.
    pub fn resolve(&self, qualified_name: &str) -> Result<SchemaType, TypeResolutionError> {
        let Some((namespace, symbol)) = split_qualified_name(qualified_name) else {
            return Err(TypeResolutionError::Malformed(qualified_name.to_string()));
        };
        let state = self.state.read();
        if let Some(schema_type) = state.types.get(qualified_name) {
            debug!("resolved schema type (name={qualified_name})");
            return Ok(*schema_type);
        }
        let namespace_known = state
            .types
            .keys()
            .filter_map(|name| name.rsplit_once('.'))
            .any(|(registered, _)| registered == namespace);
        if namespace_known {
            Err(TypeResolutionError::UnknownSymbol {
                namespace: namespace.to_string(),
                symbol: symbol.to_string(),
            })
        } else {
            Err(TypeResolutionError::UnknownNamespace {
                namespace: namespace.to_string(),
                name: qualified_name.to_string(),
            })
        }
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("TypeRegistry")
            .field("types", &state.types.len())
            .field("sealed", &state.sealed)
            .finish()
    }
}
