//! Command-line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "bolao", version, about = "Manage lottery pool entries and check them against a draw")]
pub struct Cli {
    /// SQLite file holding the saved entries (overrides BOLAO_DB).
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive form (default).
    Form,
    /// Print the saved entries.
    List,
    /// Check the saved entries against a drawn result.
    Apply {
        /// Drawn numbers, comma-separated.
        #[arg(long)]
        result: String,
        /// Draw date label shown in the report.
        #[arg(long)]
        date: Option<String>,
    },
}
