//! Command-line interface for noughts.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Noughts - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe with session scores", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it does not exist)
    #[arg(short, long, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Directory for persisted scores, overriding the config file
    #[arg(long)]
    pub scores_dir: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Play in the terminal
    #[default]
    Play,

    /// Print the persisted scores
    Scores,

    /// Delete the persisted scores
    ResetScores,
}
