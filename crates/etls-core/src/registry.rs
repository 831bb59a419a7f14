//! The ETL registry: logical names mapped to implementing class identifiers.
//!
//! The registry keeps entries in the order they were supplied. Nothing in
//! this crate ever sorts it, so a listing mirrors the configuration file.

use crate::error::{Error, Result};

/// One registered ETL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EtlRegistryEntry {
    logical_name: String,
    class_name: String,
}

impl EtlRegistryEntry {
    /// Create an entry. The class name is opaque and never validated.
    pub fn new(logical_name: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            logical_name: logical_name.into(),
            class_name: class_name.into(),
        }
    }

    /// The configuration key, in whatever casing it was written.
    pub fn logical_name(&self) -> &str {
        &self.logical_name
    }

    /// The fully-qualified class identifier.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }
}

/// Ordered, key-unique, read-only mapping of logical names to class names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EtlRegistry {
    entries: Vec<EtlRegistryEntry>,
}

impl EtlRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from `(logical_name, class_name)` pairs, keeping their order.
    ///
    /// Returns [`Error::InvalidEntry`] if a logical name appears twice.
    pub fn from_pairs<I, N, C>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: Into<String>,
    {
        let mut entries: Vec<EtlRegistryEntry> = Vec::new();
        for (name, class) in pairs {
            let entry = EtlRegistryEntry::new(name, class);
            if entries
                .iter()
                .any(|e| e.logical_name == entry.logical_name)
            {
                return Err(Error::invalid_entry(
                    entry.logical_name,
                    "duplicate logical name",
                ));
            }
            entries.push(entry);
        }
        Ok(Self { entries })
    }

    /// Number of registered ETLs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no ETLs are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a class name by logical name.
    pub fn get(&self, logical_name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.logical_name == logical_name)
            .map(|e| e.class_name.as_str())
    }

    /// Iterate entries in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, EtlRegistryEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a EtlRegistry {
    type Item = &'a EtlRegistryEntry;
    type IntoIter = std::slice::Iter<'a, EtlRegistryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
