//! Error types for etls-core

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for etls-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading the registry or writing a listing
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The expected configuration key is absent or is not a table
    #[error("Configuration missing: no ETL table at '{key}'")]
    ConfigurationMissing {
        /// Dotted key that was looked up
        key: String,
    },

    /// A registry entry could not be accepted
    #[error("Invalid ETL entry '{name}': {message}")]
    InvalidEntry {
        /// Logical name of the entry
        name: String,
        /// What went wrong
        message: String,
    },

    /// Malformed or unlocatable configuration
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// Reading a configuration file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The output sink rejected a write
    #[error("Failed to write listing: {0}")]
    OutputWrite(#[source] std::io::Error),
}

impl Error {
    /// Creates a configuration error with a message.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a missing-configuration error for a dotted key.
    pub fn configuration_missing<S: Into<String>>(key: S) -> Self {
        Error::ConfigurationMissing { key: key.into() }
    }

    /// Creates an invalid-entry error.
    pub fn invalid_entry<N, M>(name: N, message: M) -> Self
    where
        N: Into<String>,
        M: Into<String>,
    {
        Error::InvalidEntry {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path it occurred on.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Returns whether this error comes from the configuration rather than the output sink.
    pub fn is_config_error(&self) -> bool {
        match self {
            Error::ConfigurationMissing { .. }
            | Error::InvalidEntry { .. }
            | Error::Config { .. }
            | Error::Io { .. } => true,
            Error::OutputWrite(_) => false,
        }
    }
}
