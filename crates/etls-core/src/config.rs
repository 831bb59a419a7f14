//! TOML configuration holding the ETL registry.
//!
//! The registry lives under the dotted key [`ETL_CLASSES_KEY`]:
//!
//! ```toml
//! [etls.etl_classes]
//! MyCoolEtl = "App\\Etls\\MyCoolEtl"
//! nightlySync = "App\\Etls\\NightlySync"
//! ```
//!
//! `toml` is built with `preserve_order`, so tables iterate in document
//! order and the registry inherits that order.

use std::path::Path;

use crate::error::{Error, Result};
use crate::registry::EtlRegistry;

/// Dotted key of the ETL table.
pub const ETL_CLASSES_KEY: &str = "etls.etl_classes";

/// A parsed configuration document.
#[derive(Debug, Clone)]
pub struct EtlsConfig {
    root: toml::Value,
}

impl EtlsConfig {
    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "Read configuration file");
        let table: toml::Table = toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
        Ok(Self::from_table(table))
    }

    /// Parse a configuration document from a string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(content).map_err(|e| Error::config(e.to_string()))?;
        Ok(Self::from_table(table))
    }

    /// Wrap an already-parsed document.
    pub fn from_table(table: toml::Table) -> Self {
        Self {
            root: toml::Value::Table(table),
        }
    }

    /// Look up any value by dotted key.
    pub fn get(&self, key: &str) -> Option<&toml::Value> {
        get_nested_value(&self.root, key)
    }

    /// Build the ETL registry from [`ETL_CLASSES_KEY`].
    ///
    /// An absent key, or a key that holds something other than a table, is
    /// [`Error::ConfigurationMissing`]. An empty table is a valid, empty registry.
    pub fn registry(&self) -> Result<EtlRegistry> {
        self.registry_at(ETL_CLASSES_KEY)
    }

    /// Build the ETL registry from an arbitrary dotted key.
    pub fn registry_at(&self, key: &str) -> Result<EtlRegistry> {
        let table = self
            .get(key)
            .and_then(toml::Value::as_table)
            .ok_or_else(|| Error::configuration_missing(key))?;

        let mut pairs = Vec::with_capacity(table.len());
        for (name, value) in table {
            let class = value.as_str().ok_or_else(|| {
                Error::invalid_entry(
                    name.as_str(),
                    format!("class must be a string, found {}", value.type_str()),
                )
            })?;
            pairs.push((name.as_str(), class));
        }

        let registry = EtlRegistry::from_pairs(pairs)?;
        tracing::debug!(key, entries = registry.len(), "Loaded ETL registry");
        Ok(registry)
    }
}

/// Navigate a dotted key path in a TOML value tree.
pub fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    let mut current = value;
    for part in key.split('.') {
        current = current.as_table()?.get(part)?;
    }
    Some(current)
}
