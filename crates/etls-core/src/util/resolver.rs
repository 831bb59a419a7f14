//! Configuration file location.
//!
//! `ConfigResolver` decides which TOML file the registry is read from.
//! An explicit path always wins (the CLI binds `--config` and `ETLS_CONFIG`
//! to it), then a project-local file in the working directory, then the
//! per-user file under the platform config directory.
//!
//! # Example
//!
//! ```no_run
//! use etls_core::util::resolver::ConfigResolver;
//!
//! let resolver = ConfigResolver::new("etls");
//! if let Some(path) = resolver.resolve(None) {
//!     println!("Config: {}", path.display());
//! }
//! ```

use std::path::{Path, PathBuf};

/// Default name of the project-local configuration file.
pub const LOCAL_CONFIG_FILE: &str = "etls.toml";

/// File name used inside the platform config directory.
pub const USER_CONFIG_FILE: &str = "config.toml";

/// Resolves the configuration file for a project.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    /// Project name, used as the platform config subdirectory (e.g. "etls")
    project_name: String,
    /// Project-local file name looked up in `working_dir`
    local_file: String,
    /// Directory searched for `local_file`; the process cwd when unset
    working_dir: Option<PathBuf>,
    /// Overrides the platform config directory (mainly for tests)
    user_config_dir: Option<PathBuf>,
}

impl ConfigResolver {
    /// Create a resolver for the given project name.
    pub fn new(project_name: &str) -> Self {
        Self {
            project_name: project_name.to_string(),
            local_file: LOCAL_CONFIG_FILE.to_string(),
            working_dir: None,
            user_config_dir: None,
        }
    }

    /// Set the project-local file name (default `etls.toml`).
    pub fn with_local_file(mut self, file_name: &str) -> Self {
        self.local_file = file_name.to_string();
        self
    }

    /// Search `dir` instead of the process working directory.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Use `dir` instead of the platform config directory.
    pub fn with_user_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.user_config_dir = Some(dir.into());
        self
    }

    /// Get the project name.
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Path of the project-local config file, whether or not it exists.
    pub fn local_config_path(&self) -> PathBuf {
        match &self.working_dir {
            Some(dir) => dir.join(&self.local_file),
            None => PathBuf::from(&self.local_file),
        }
    }

    /// Path of the per-user config file, whether or not it exists.
    ///
    /// Returns `None` when the platform has no config directory.
    pub fn user_config_path(&self) -> Option<PathBuf> {
        let base = match &self.user_config_dir {
            Some(dir) => dir.clone(),
            None => dirs::config_dir()?.join(&self.project_name),
        };
        Some(base.join(USER_CONFIG_FILE))
    }

    /// Resolve the config file path.
    ///
    /// Checks in order:
    /// 1. `explicit` (returned as-is, even if missing, so the caller can report it)
    /// 2. Project-local file, if it exists
    /// 3. Per-user file under the platform config directory
    pub fn resolve(&self, explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }

        let local = self.local_config_path();
        if is_file(&local) {
            return Some(local);
        }

        self.user_config_path()
    }
}

fn is_file(path: &Path) -> bool {
    path.metadata().map(|m| m.is_file()).unwrap_or(false)
}
