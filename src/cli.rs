use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "playrange")]
#[command(author, version, about = "Inspect buffered media ranges and fragment liveness")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the contiguous buffered block around a playback position
    Info {
        /// Snapshot file (JSON)
        #[arg(required = true)]
        snapshot: PathBuf,

        /// Playback position in seconds
        #[arg(short, long, allow_negative_numbers = true)]
        position: f64,

        /// Largest hole in seconds to bridge (overrides config)
        #[arg(long)]
        max_hole: Option<f64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether a playback position is buffered
    Check {
        /// Snapshot file (JSON)
        #[arg(required = true)]
        snapshot: PathBuf,

        /// Playback position in seconds
        #[arg(short, long, allow_negative_numbers = true)]
        position: f64,
    },

    /// List the tracked fragments that still have buffered data
    Filter {
        /// Snapshot file (JSON)
        #[arg(required = true)]
        snapshot: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        file: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
