//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands::lookup::LookupArgs;

#[derive(Parser, Debug)]
#[command(name = "breedcache")]
#[command(about = "Breedcache - cached breed to sub-breed lookups", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Load configuration from this YAML file instead of .breedcache/
    #[arg(short, long, global = true, env = "BREEDCACHE_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve breeds to their sub-breeds through the cache
    Lookup(LookupArgs),

    /// List the configured breed table
    Breeds,
}
