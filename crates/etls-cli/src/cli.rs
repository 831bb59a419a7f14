//! Command-line argument definitions.

use clap::{Parser, Subcommand};

/// Environment variable bound to `--config`.
pub const CONFIG_ENV_VAR: &str = "ETLS_CONFIG";

/// etls - list the ETLs registered in configuration
#[derive(Parser, Debug)]
#[command(name = "etls")]
#[command(author, version, about = "List configured ETLs", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true, env = CONFIG_ENV_VAR)]
    pub config: Option<String>,

    /// Enable verbose (debug) logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List ETLs with their kebab-case names and classes
    #[command(alias = "etls:list")]
    List,

    /// Configuration helpers
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `config` subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
}
