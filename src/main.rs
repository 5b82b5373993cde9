//! Gator - current-user management over a users table
//!
//! This is the main entry point for the Gator command-line application.
//! It initializes logging, runs the requested command and maps errors
//! to the process exit code.

use clap::Parser;
use gator::cli::{self, Cli};
use std::process;
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise "warn", or "debug" with --verbose
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli::run(&cli) {
        tracing::debug!("{} error: {:?}", e.category(), e);
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}
