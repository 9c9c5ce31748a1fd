use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "kunai")]
#[command(about = "Read, check and write vCard 4.0 contact files")]
pub struct Cli {
    /// Configuration file; defaults to `kunai.toml` when present
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse, validate and rewrite a card in canonical form
    Convert {
        /// Card to read
        input: PathBuf,
        /// Destination, replaced if it exists
        output: PathBuf,
    },

    /// Print a card in human-readable form
    Show {
        /// Card to read
        file: PathBuf,
    },

    /// Parse and validate a card, printing `OK` on success
    Validate {
        /// Card to read
        file: PathBuf,
    },

    /// List every valid card in a directory
    List {
        /// Directory to scan (not recursive)
        dir: PathBuf,
    },
}
