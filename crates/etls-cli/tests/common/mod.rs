//! Common test utilities and harness for etls integration tests.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use etls_core::ConfigResolver;
use tempfile::TempDir;

/// Test harness owning a scratch directory.
///
/// The resolver it hands out never looks at the real working directory or
/// the real platform config directory.
pub struct TestHarness {
    /// Scratch directory, removed on drop
    pub dir: TempDir,
}

impl TestHarness {
    /// Creates a harness with an empty scratch directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Writes `contents` to `name` inside the scratch directory.
    pub fn write_config(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("write config");
        path
    }

    /// Resolver rooted in the scratch directory.
    pub fn resolver(&self) -> ConfigResolver {
        ConfigResolver::new("etls")
            .with_working_dir(self.dir.path())
            .with_user_config_dir(self.dir.path().join("user"))
    }

    /// Runs the `etls` binary inside the scratch directory.
    pub fn run_etls(&self, args: &[&str]) -> Output {
        run_etls_in(self.dir.path(), args)
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs the compiled `etls` binary with a clean logging and config environment.
pub fn run_etls_in(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_etls"))
        .args(args)
        .current_dir(cwd)
        .env_remove("ETLS_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .expect("run etls binary")
}

/// Registry from the README example.
pub const SAMPLE_CONFIG: &str = r#"
[etls.etl_classes]
MyCoolEtl = "App\\Etls\\MyCoolEtl"
nightlySync = "App\\Etls\\NightlySync"
etlAB = "App\\Etls\\EtlAB"
Users_Import = "App\\Etls\\UsersImport"
"#;

/// Expected stdout for [`SAMPLE_CONFIG`].
pub const SAMPLE_LISTING: &str = "my-cool-etl found in class App\\Etls\\MyCoolEtl\n\
nightly-sync found in class App\\Etls\\NightlySync\n\
etl-a-b found in class App\\Etls\\EtlAB\n\
users-import found in class App\\Etls\\UsersImport\n";
