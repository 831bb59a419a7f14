//! etls core: ETL registry, configuration, and listing.
//!
//! This crate holds everything the `etls` command needs apart from argument
//! parsing: reading the ordered ETL table from TOML, kebab-casing logical
//! names, and writing the listing to any [`std::io::Write`] sink.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`registry`]: Ordered ETL registry
//! - [`config`]: TOML configuration and the `etls.etl_classes` table
//! - [`lister`]: Listing format and output
//! - [`util`]: Name casing and config file location
//!
//! # Example
//!
//! ```
//! use etls_core::{EtlsConfig, Lister};
//!
//! let config = EtlsConfig::from_toml_str(r#"
//! [etls.etl_classes]
//! MyCoolEtl = "App\\Etls\\MyCoolEtl"
//! "#)?;
//! let registry = config.registry()?;
//!
//! let mut out = Vec::new();
//! Lister::new(&registry).write_to(&mut out)?;
//! assert_eq!(out, b"my-cool-etl found in class App\\Etls\\MyCoolEtl\n");
//! # Ok::<(), etls_core::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod lister;
pub mod registry;
pub mod util;

// Re-export key types at crate root for convenience
pub use config::{ETL_CLASSES_KEY, EtlsConfig};
pub use error::{Error, Result};
pub use lister::{Lister, format_entry, list};
pub use registry::{EtlRegistry, EtlRegistryEntry};

// Convenience re-exports from util
pub use util::ids::to_kebab_case;
pub use util::resolver::ConfigResolver;
