//! CLI argument definitions for the gamebgm command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};
use gamebgm_cli::input::RequestArgs;

/// gamebgm - Procedural Game Music Generator
#[derive(Parser)]
#[command(name = "gamebgm")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Generate a WAV file from a request file and/or flags
    Generate {
        #[command(flatten)]
        request: RequestArgs,

        /// Output WAV path
        #[arg(short, long)]
        out: String,

        /// Also write the metadata JSON to this path
        #[arg(long)]
        meta: Option<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Validate a request and print the values the engine would use
    Validate {
        #[command(flatten)]
        request: RequestArgs,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Inspect a generated WAV file (format, length, peak, PCM hash)
    Inspect {
        /// Path to the WAV file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}
