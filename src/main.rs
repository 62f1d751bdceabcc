//! Level-validation runner (default binary).
//!
//! Loads level files, runs the solvability analyzer on each level and
//! prints one row per level. Unsolvable levels are a normal result; only
//! unreadable files, bad JSON or structurally broken levels fail the run.

mod cli;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command, LimitArgs};
use tile_escape::config::EngineConfig;
use tile_escape::core::{load_levels, Level};
use tile_escape::engine::{analyze, estimate_level};
use tile_escape::report::{EstimateRow, LevelRow, Summary};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };

    match cli.command {
        Command::Validate {
            files,
            solution,
            limits,
            output,
        } => {
            apply_limits(&mut config, limits);
            validate(&config, &files, solution, output.json)
        }
        Command::Estimate { files, output } => estimate(&config, &files, output.json),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn apply_limits(config: &mut EngineConfig, limits: LimitArgs) {
    if let Some(max_states) = limits.max_states {
        config.search.max_states = max_states.max(1);
    }
    if let Some(max_moves) = limits.max_moves {
        config.search.max_moves = max_moves;
    }
    if let Some(ms) = limits.timeout_ms {
        config.search.timeout_ms = Some(ms);
    }
}

fn read_levels(path: &Path) -> Result<Vec<Level>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read level file {}", path.display()))?;
    let levels =
        load_levels(&json).with_context(|| format!("invalid level file {}", path.display()))?;
    for level in &levels {
        if !level.malformed_tiles().is_empty() {
            warn!(
                file = %path.display(),
                level = level.id,
                tiles = ?level.malformed_tiles(),
                "level has tiles without a valid direction"
            );
        }
    }
    Ok(levels)
}

fn validate(config: &EngineConfig, files: &[PathBuf], solution: bool, json: bool) -> Result<()> {
    let geometry = config.geometry();
    let limits = config.limits();
    info!(
        max_states = limits.max_states,
        max_moves = limits.max_moves,
        timeout_ms = config.search.timeout_ms,
        "validating levels"
    );

    let mut summary = Summary::default();
    for file in files {
        let path = file.as_path();
        for level in read_levels(path)? {
            let analysis = analyze(&level, geometry, &limits);
            let row = LevelRow::new(path.display().to_string(), &analysis, solution);
            summary.record(&row);
            if json {
                println!("{}", serde_json::to_string(&row)?);
            } else {
                println!("{row}");
            }
        }
    }

    info!(
        levels = summary.levels,
        solvable = summary.solvable,
        unsolvable = summary.unsolvable,
        capped = summary.capped,
        "validation finished"
    );
    if !json {
        println!("{summary}");
    }
    Ok(())
}

fn estimate(config: &EngineConfig, files: &[PathBuf], json: bool) -> Result<()> {
    let geometry = config.geometry();
    for file in files {
        let path = file.as_path();
        for level in read_levels(path)? {
            let estimate = estimate_level(&level, geometry);
            let row = EstimateRow::new(path.display().to_string(), &level, &estimate);
            if json {
                println!("{}", serde_json::to_string(&row)?);
            } else {
                println!("{row}");
            }
        }
    }
    Ok(())
}
