//! Command-line argument structures for Gator

use clap::Parser;
use std::path::PathBuf;

/// Gator - manage the current user and the users table
#[derive(Parser, Debug)]
#[command(name = "gator")]
#[command(about = "Manage the current user and the users table")]
#[command(version, long_about = None)]
pub struct Cli {
    /// Configuration file path (default: ~/.gatorconfig.json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to run: login, register, reset or users
    #[arg(value_name = "COMMAND")]
    pub command: Option<String>,

    /// Arguments passed to the command
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}
