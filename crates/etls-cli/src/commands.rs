//! Handler functions for etls subcommands.
//!
//! Handlers take their output sinks as arguments so they can be driven from
//! tests; [`handle_command`] wires them to the process stdout and stderr.

use std::io::Write;
use std::path::PathBuf;

use etls_core::{ConfigResolver, Error, EtlsConfig, Lister, Result};

use crate::cli::{Command, ConfigAction};

/// Project name used for the platform config directory.
pub const PROJECT_NAME: &str = "etls";

// ============================================================================
// Command dispatch
// ============================================================================

/// Run a parsed subcommand against stdout/stderr.
pub fn handle_command(config_path: Option<&str>, command: &Command) -> Result<()> {
    let resolver = ConfigResolver::new(PROJECT_NAME);
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();

    match command {
        Command::List => {
            cmd_list(&resolver, config_path, &mut stdout.lock())?;
        }
        Command::Config {
            action: ConfigAction::Path,
        } => {
            cmd_config_path(&resolver, config_path, &mut stdout.lock(), &mut stderr.lock())?;
        }
    }
    Ok(())
}

// ============================================================================
// Command handlers
// ============================================================================

/// List registered ETLs to `out`.
///
/// The registry is fully loaded before the first byte is written, so a
/// configuration problem never produces a partial listing.
pub fn cmd_list<W: Write + ?Sized>(
    resolver: &ConfigResolver,
    config_path: Option<&str>,
    out: &mut W,
) -> Result<usize> {
    let path = existing_config_path(resolver, config_path)?;
    let config = EtlsConfig::load(&path)?;
    let registry = config.registry()?;
    tracing::info!(path = %path.display(), entries = registry.len(), "Listing ETLs");

    Lister::new(&registry).write_to(out)
}

/// Print the resolved config file path to `out`.
///
/// A hint goes to `err` when the file does not exist yet.
pub fn cmd_config_path<W, E>(
    resolver: &ConfigResolver,
    config_path: Option<&str>,
    out: &mut W,
    err: &mut E,
) -> Result<()>
where
    W: Write + ?Sized,
    E: Write + ?Sized,
{
    let path = resolve_config_path(resolver, config_path)?;
    writeln!(out, "{}", path.display()).map_err(Error::OutputWrite)?;
    if !path.exists() {
        writeln!(
            err,
            "(file does not exist; create it with an [etls.etl_classes] table or pass --config)"
        )
        .map_err(Error::OutputWrite)?;
    }
    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

fn resolve_config_path(resolver: &ConfigResolver, config_path: Option<&str>) -> Result<PathBuf> {
    resolver
        .resolve(config_path)
        .ok_or_else(|| Error::config("Could not determine config directory for this platform"))
}

fn existing_config_path(resolver: &ConfigResolver, config_path: Option<&str>) -> Result<PathBuf> {
    let path = resolve_config_path(resolver, config_path)?;
    if !path.exists() {
        return Err(Error::config(format!(
            "Config file does not exist at {}. Create it or pass --config.",
            path.display()
        )));
    }
    Ok(path)
}

// ============================================================================
// Tests
// ============================================================================
