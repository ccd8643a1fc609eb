//! CLI Module
//!
//! Command-line interface for crabmail using Clap v4.

use clap::{Parser, Subcommand};

/// Crabmail - Terminal Mail Client Account Setup
#[derive(Parser, Debug)]
#[command(name = "crabmail")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug mode (creates log files in .crabmail/logs/)
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the account-setup wizard (default)
    Setup {
        /// Start the wizard on a named page (e.g. "account-choose")
        #[arg(long)]
        start_page: Option<String>,
    },

    /// Show effective configuration
    Config,
}
