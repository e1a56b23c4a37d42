use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Dock Grid - plan and replay dock-transit box moves
#[derive(Parser, Debug)]
#[command(name = "dockgrid")]
#[command(about = "Scrambles a grid of boxes by routing every move through a dock, then replays it")]
#[command(version)]
pub struct Cli {
    /// Simulation config (JSON). Defaults are used when omitted.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file. The interactive viewer only logs when this is set.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive terminal viewer (default)
    Tui,
    /// Print the move plan: swaps, per-box step counts and totals
    Plan,
    /// Replay the whole plan without a terminal UI
    Play {
        /// Delay between steps in milliseconds (defaults to the config value)
        #[arg(short, long)]
        interval_ms: Option<u64>,
        /// Write one SVG per frame into this directory
        #[arg(short, long)]
        frames: Option<PathBuf>,
    },
    /// Export the grid as an SVG document
    Render {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Render the grid after the whole plan has been played
        #[arg(long)]
        after: bool,
    },
    /// Configuration file helpers
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write the default configuration to a file
    Init {
        /// Destination path
        path: PathBuf,
    },
    /// Validate a configuration file
    Validate {
        /// Path to configuration file to validate
        path: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
