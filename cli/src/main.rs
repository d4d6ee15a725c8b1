//! Main entry point for tablediff CLI

use clap::Parser;

mod cli;
mod commands;
mod output;

use cli::Cli;

fn main() {
    // Load environment variables from .env file if present
    if std::path::Path::new(".env").exists() {
        if let Err(e) = dotenv::dotenv() {
            eprintln!("Warning: Failed to load .env file: {e}");
        }
    }

    // Parse command line arguments (env-sourced defaults need dotenv first)
    let cli = Cli::parse();

    // Initialize logging; verbose mode also logs every rendered SQL statement
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    // Run the comparison; mismatches and infrastructure errors both exit 1,
    // but errors go through the error path with the failing statement logged
    match commands::run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}
