//! etls CLI
//!
//! Lists the ETLs registered under `etls.etl_classes` in the configuration file.

#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;

use etls_cli::{Args, handle_command, logging};

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    tracing::debug!(command = ?args.command, config = ?args.config, "Starting etls");
    handle_command(args.config.as_deref(), &args.command)?;
    Ok(())
}
