//! Command-line interface for the level-validation tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Validate tile-escape level files
#[derive(Parser, Debug)]
#[command(name = "tile-escape")]
#[command(about = "Solvability and difficulty checks for tile-escape levels", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML config file (grid size, search limits)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log search details (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the full breadth-first search on every level
    Validate {
        /// Level files, each holding one level or an array of levels
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Print the shortest solution as tile ids
        #[arg(long)]
        solution: bool,

        #[command(flatten)]
        limits: LimitArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the cheap heuristic estimate only
    Estimate {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args, Debug, Clone, Copy, Default)]
pub struct LimitArgs {
    /// Stop after expanding this many states
    #[arg(long)]
    pub max_states: Option<usize>,

    /// Ignore solutions longer than this
    #[arg(long)]
    pub max_moves: Option<u32>,

    /// Wall-clock budget per level, in milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,
}

#[derive(Args, Debug, Clone, Copy, Default)]
pub struct OutputArgs {
    /// One JSON object per line instead of text
    #[arg(long)]
    pub json: bool,
}
