//! # etls-cli
//!
//! Command-line front end for listing configured ETLs.
//!
//! This crate provides:
//! - Argument parsing (`etls list`, `etls config path`)
//! - Command handlers that write to any output sink
//! - Tracing setup for stderr logging

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod logging;

pub use cli::{Args, Command, ConfigAction};
pub use commands::{cmd_config_path, cmd_list, handle_command};
