//! Command-line interface.

pub mod commands;
pub mod output;
pub mod types;

pub use output::handle_error;
pub use types::{Cli, Commands};

use anyhow::Result;

use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::logging::LoggerImpl;

/// Load configuration for the invocation, from `--config` when given.
pub fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

/// Run a parsed command line.
pub fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let _logger = LoggerImpl::init(&config.logging)?;

    match &cli.command {
        Commands::Lookup(args) => commands::lookup::execute(args, &config, cli.json),
        Commands::Breeds => commands::breeds::execute(&config, cli.json),
    }
}
