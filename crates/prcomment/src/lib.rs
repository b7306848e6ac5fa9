//! CLI module.

use anyhow::Result;
use args::{Args, CommandExecutor};
use clap::Parser;
use prcomment_config::Config;
use prcomment_logging::configure_logging;
use shadow_rs::shadow;
use tracing::debug;

pub(crate) mod args;
mod commands;
mod config_validator;
mod context;
#[cfg(test)]
mod testutils;

shadow!(build);

/// Get version data.
pub fn get_version_data() -> String {
    format!(
        "{} {} (commit {} - {})",
        build::PROJECT_NAME,
        build::PKG_VERSION,
        build::COMMIT_HASH,
        build::COMMIT_DATE_3339
    )
}

/// Initialize command line.
pub fn initialize_command_line() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env(env!("CARGO_PKG_VERSION").to_string())?;
    configure_logging(&config)?;

    debug!("{}", get_version_data());

    let args = Args::parse();
    if args.uses_api() {
        config_validator::validate_configuration(&config)?;
    }

    CommandExecutor::parse_args(config, args)
}
