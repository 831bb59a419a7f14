//! Utility modules for name handling and configuration paths.
//!
//! # Modules
//!
//! - [`ids`]: Kebab-case conversion for logical ETL names
//! - [`resolver`]: Configuration file location

pub mod ids;
pub mod resolver;
