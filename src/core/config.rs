//! Submodule configuration parsing
//!
//! The configuration file (`git-submodules.yaml` by default) declares the
//! submodules the working directory should contain:
//!
//! ```yaml
//! submodules:
//!   - name: lib
//!     url: https://example.com/lib.git
//!     path: vendor/lib
//!     branch: main   # optional
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "git-submodules.yaml";

/// Top-level key holding the submodule list.
pub const SUBMODULES_KEY: &str = "submodules";

/// Errors that can occur when loading a submodule config
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file '{}' not found", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file '{path}': {source}", path = .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing YAML file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid config file format: {0}")]
    Schema(String),
}

/// A single declared submodule.
///
/// The required fields are optional here so that an incomplete entry is
/// reported and skipped on its own instead of rejecting the whole file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SubmoduleSpec {
    pub name: Option<String>,
    pub url: Option<String>,
    pub path: Option<String>,
    /// Branch to track (`git submodule add -b`)
    #[serde(default)]
    pub branch: Option<String>,
}

fn scalar_text(value: &serde_yaml::Value) -> serde_yaml::Value {
    match value {
        serde_yaml::Value::String(_) => value.clone(),
        serde_yaml::Value::Number(n) => serde_yaml::Value::String(n.to_string()),
        serde_yaml::Value::Bool(b) => serde_yaml::Value::String(b.to_string()),
        _ => serde_yaml::Value::Null,
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

impl SubmoduleSpec {
    /// Names of required fields that are missing or blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if present(&self.name).is_none() {
            missing.push("name");
        }
        if present(&self.url).is_none() {
            missing.push("url");
        }
        if present(&self.path).is_none() {
            missing.push("path");
        }
        missing
    }

    /// Declared name, if set and non-blank.
    pub fn name(&self) -> Option<&str> {
        present(&self.name)
    }

    /// Declared url, trimmed, if set and non-blank.
    pub fn url(&self) -> Option<&str> {
        present(&self.url).map(str::trim)
    }

    /// Declared path, if set and non-blank.
    pub fn path(&self) -> Option<&str> {
        present(&self.path)
    }

    /// Declared branch, if set and non-blank.
    pub fn branch(&self) -> Option<&str> {
        present(&self.branch)
    }

    /// Read one entry of the `submodules` list.
    ///
    /// Numbers and booleans are taken as their text. Any other non-string
    /// value, or an entry that is not a mapping at all, leaves the field
    /// unset so the entry is reported as incomplete.
    pub fn from_entry(entry: &serde_yaml::Value) -> Self {
        let serde_yaml::Value::Mapping(fields) = entry else {
            return Self::default();
        };

        let normalized: serde_yaml::Mapping = fields
            .iter()
            .filter(|(key, _)| key.is_string())
            .map(|(key, value)| (key.clone(), scalar_text(value)))
            .collect();

        serde_yaml::from_value(serde_yaml::Value::Mapping(normalized)).unwrap_or_default()
    }

    /// Human-readable label for messages: the name, falling back to the path.
    pub fn label(&self) -> &str {
        present(&self.name)
            .or_else(|| present(&self.path))
            .unwrap_or("<unnamed>")
    }
}

/// Ordered list of declared submodules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmoduleConfig {
    pub submodules: Vec<SubmoduleSpec>,
}

impl SubmoduleConfig {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content)
    }

    /// Parse config YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let doc: serde_yaml::Value = serde_yaml::from_str(yaml)?;

        let mapping = match doc {
            serde_yaml::Value::Mapping(mapping) => mapping,
            serde_yaml::Value::Null => {
                return Err(ConfigError::Schema("config file is empty".to_string()))
            }
            _ => {
                return Err(ConfigError::Schema(
                    "top level must be a mapping".to_string(),
                ))
            }
        };

        let submodules = mapping
            .get(SUBMODULES_KEY)
            .ok_or_else(|| ConfigError::Schema(format!("Missing '{}' key", SUBMODULES_KEY)))?;

        let entries = submodules.as_sequence().ok_or_else(|| {
            ConfigError::Schema(format!(
                "'{}' must be a list of submodule entries",
                SUBMODULES_KEY
            ))
        })?;

        let submodules = entries.iter().map(SubmoduleSpec::from_entry).collect();

        Ok(Self { submodules })
    }
}
