//! Layered configuration loader.
//!
//! Discovers configuration layers (user, cwd, runtime overrides), validates
//! each against the schema, merges them and produces a final
//! `TranscriptConfig`.

mod layer_io;
mod merge;
mod schema;


use crate::{ConfigError, TranscriptConfig};
use log::{debug, info};
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Default config filename in local layers.
const DEFAULT_CONFIG_FILE: &str = "transcript.json5";
/// Default config directory under the home directory.
const DEFAULT_CONFIG_DIR: &str = ".transcript";

/// Effective config plus metadata about which layers were loaded.
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    /// The merged, validated config.
    pub config: TranscriptConfig,
    /// Metadata for each layer that contributed to the config.
    pub layers: Vec<ConfigLayer>,
}

/// Origin for a single config layer in the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigLayerSource {
    /// User-specific configuration.
    User,
    /// Current working directory configuration.
    Cwd,
    /// Runtime overrides (highest precedence).
    Runtime,
}

/// Metadata about a loaded config layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLayer {
    /// Layer origin.
    pub source: ConfigLayerSource,
    /// Location on disk.
    pub path: PathBuf,
}

/// Options controlling layered config discovery and overrides.
#[derive(Debug, Clone)]
pub struct LayeredConfigOptions {
    /// Working directory searched for `transcript.json5`.
    pub cwd: PathBuf,
    /// Optional user config path (defaults to `~/.transcript/transcript.json5`).
    pub user_config_path: Option<PathBuf>,
    /// Runtime override config paths applied last.
    pub runtime_paths: Vec<PathBuf>,
}

impl LayeredConfigOptions {
    /// Create options with default layer locations for the provided cwd.
    pub fn new(cwd: impl AsRef<Path>) -> Self {
        Self {
            cwd: cwd.as_ref().to_path_buf(),
            user_config_path: layer_io::default_user_config_path(),
            runtime_paths: Vec::new(),
        }
    }

    /// Replace the user config location.
    pub fn with_user_path(mut self, path: Option<PathBuf>) -> Self {
        self.user_config_path = path;
        self
    }

    /// Add a runtime override config path that is applied last.
    pub fn with_runtime_path(mut self, path: impl AsRef<Path>) -> Self {
        self.runtime_paths.push(path.as_ref().to_path_buf());
        self
    }
}

impl TranscriptConfig {
    /// Load a single config from a path (no layering).
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        info!("loading config from path: {}", path.as_ref().display());
        let contents = fs::read_to_string(path)?;
        let value: Value = json5::from_str(&contents)?;
        config_from_value(value, "config")
    }

    /// Load a single config from JSON5 contents (no layering).
    pub fn load_from_str(contents: &str) -> Result<Self, ConfigError> {
        debug!("loading config from raw contents (len={})", contents.len());
        let value: Value = json5::from_str(contents)?;
        config_from_value(value, "config")
    }

    /// Load a layered config stack using the default layer locations.
    pub fn load_layered(cwd: impl AsRef<Path>) -> Result<LayeredConfig, ConfigError> {
        info!(
            "loading layered config with defaults (cwd={})",
            cwd.as_ref().display()
        );
        Self::load_layered_with_options(LayeredConfigOptions::new(cwd))
    }

    /// Load a layered config stack using explicit layer locations and overrides.
    ///
    /// Layer precedence (low -> high): user, cwd, runtime overrides.
    pub fn load_layered_with_options(
        options: LayeredConfigOptions,
    ) -> Result<LayeredConfig, ConfigError> {
        let cwd = canonical_or_self(&options.cwd);
        debug!("resolved cwd for config load: {}", cwd.display());
        let mut loaded = Vec::new();
        let mut seen_paths = HashSet::new();

        let cwd_path = cwd.join(DEFAULT_CONFIG_FILE);
        for (source, path) in [
            (ConfigLayerSource::User, options.user_config_path.as_deref()),
            (ConfigLayerSource::Cwd, Some(cwd_path.as_path())),
        ] {
            let Some(layer) = layer_io::load_optional_layer(source, path)? else {
                continue;
            };
            if !seen_paths.insert(canonical_or_self(&layer.meta.path)) {
                debug!(
                    "skipping duplicate layer (source={:?}, path={})",
                    source,
                    layer.meta.path.display()
                );
                continue;
            }
            loaded.push(layer);
        }

        for runtime_path in &options.runtime_paths {
            let layer = layer_io::load_required_layer(ConfigLayerSource::Runtime, runtime_path)?;
            debug!("loaded runtime layer (path={})", runtime_path.display());
            loaded.push(layer);
        }

        let mut merged = Value::Object(serde_json::Map::new());
        let mut layers = Vec::with_capacity(loaded.len());
        for layer in loaded {
            merge::merge_json_values(&mut merged, &layer.value);
            layers.push(layer.meta);
        }

        let config = config_from_value(merged, "effective")?;
        info!("layered config loaded (layers={})", layers.len());
        Ok(LayeredConfig { config, layers })
    }

    /// Validate configuration invariants that cannot be expressed in serde.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(schema) = &self.schema {
            if schema.trim().is_empty() {
                return Err(ConfigError::InvalidField {
                    path: "$schema".to_string(),
                    message: "must not be blank".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Internal representation of a loaded config layer.
#[derive(Debug, Clone)]
struct LoadedLayer {
    meta: ConfigLayer,
    value: Value,
}

/// Canonical form of `path` when it exists, the path itself otherwise.
fn canonical_or_self(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

fn config_from_value(value: Value, label: &str) -> Result<TranscriptConfig, ConfigError> {
    schema::validate_layer_schema(&value, label)?;
    let config: TranscriptConfig = serde_json::from_value(value)?;
    config.validate()?;
    Ok(config)
}
