//! CLI module.

use args::{Args, CommandExecutor};
use clap::Parser;
use ghook_config::Config;
use ghook_logging::configure_logging;
use tracing::info;

pub(crate) mod args;
mod commands;
#[cfg(test)]
mod testutils;

pub(crate) use anyhow::Result;

/// Initialize command line.
pub fn initialize_command_line() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env(env!("CARGO_PKG_VERSION").to_string());
    configure_logging(&config)?;

    info!("ghook {}", config.version);

    let args = Args::parse();
    CommandExecutor::parse_args(config, args)
}
