//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Validate medication-management records before submission.
#[derive(Debug, Parser)]
#[command(name = "medrx", version, about)]
pub struct Cli {
    /// Emit the result as a JSON error envelope instead of plain text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a user record from a JSON file.
    User { file: PathBuf },
    /// Validate an insurance record from a JSON file.
    Insurance { file: PathBuf },
    /// Validate a prescription record from a JSON file.
    Prescription { file: PathBuf },
}
