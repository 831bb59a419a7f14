//! Formatting and emitting the ETL listing.
//!
//! Each entry becomes exactly one line:
//!
//! ```text
//! {kebab-case-name} found in class {FullyQualifiedClassName}
//! ```
//!
//! Lines follow registry order. There is no header, no trailer and no blank
//! line between entries.

use std::io::Write;

use crate::error::{Error, Result};
use crate::registry::{EtlRegistry, EtlRegistryEntry};
use crate::util::ids::to_kebab_case;

/// Format a single listing line (without the line terminator).
///
/// # Examples
///
/// ```
/// use etls_core::registry::EtlRegistryEntry;
/// use etls_core::lister::format_entry;
///
/// let entry = EtlRegistryEntry::new("MyCoolEtl", "App\\Etls\\MyCoolEtl");
/// assert_eq!(format_entry(&entry), "my-cool-etl found in class App\\Etls\\MyCoolEtl");
/// ```
pub fn format_entry(entry: &EtlRegistryEntry) -> String {
    format!(
        "{} found in class {}",
        to_kebab_case(entry.logical_name()),
        entry.class_name()
    )
}

/// Produces the listing for a registry it borrows.
#[derive(Debug, Clone, Copy)]
pub struct Lister<'a> {
    registry: &'a EtlRegistry,
}

impl<'a> Lister<'a> {
    /// Create a lister over `registry`.
    pub fn new(registry: &'a EtlRegistry) -> Self {
        Self { registry }
    }

    /// Formatted lines, in registry order.
    pub fn lines(&self) -> impl Iterator<Item = String> + 'a {
        self.registry.iter().map(format_entry)
    }

    /// Write every line followed by `\n`, then flush.
    ///
    /// Returns the number of lines written.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> Result<usize> {
        let mut written = 0;
        for line in self.lines() {
            writeln!(out, "{line}").map_err(Error::OutputWrite)?;
            written += 1;
            tracing::trace!(line = %line, "Wrote listing line");
        }
        out.flush().map_err(Error::OutputWrite)?;
        tracing::debug!(lines = written, "Listing complete");
        Ok(written)
    }
}

/// Collect the listing for `registry` as owned lines.
pub fn list(registry: &EtlRegistry) -> Vec<String> {
    Lister::new(registry).lines().collect()
}
