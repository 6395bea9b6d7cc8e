//! Breedcache CLI entry point.

use clap::Parser;

use breedcache::cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = breedcache::cli::run(&cli) {
        breedcache::cli::handle_error(&err, cli.json);
    }
}
