//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `tamperbay` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Mapping run failures to a non-zero exit code
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use log::error;
use std::process;

use tamperbay::initialization::init_logger_with;
use tamperbay::{run_tamper, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    if let Err(e) = run_tamper(config).await {
        error!("{e:#}");
        process::exit(1);
    }
    Ok(())
}
