//! Strictly Minimax - command line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, PlayArgs};
use std::path::Path;
use strictly_minimax::{Board, GameConfig, suggest, tui};
use tracing::{info, instrument};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command.unwrap_or(Command::Play(PlayArgs::default())) {
        Command::Play(args) => run_play(config, args),
        Command::Suggest {
            board,
            mark,
            depth,
            json,
        } => run_suggest(&config, board, mark.map(Into::into), depth, json),
    }
}

/// Run the interactive game
fn run_play(config: GameConfig, args: PlayArgs) -> Result<()> {
    let config = config.with_overrides(args.into());
    config.validate()?;
    initialize_tracing(config.log_file())?;

    info!(?config, "Starting game");
    tui::run_tui(&config)
}

/// Print the analysis of one position
fn run_suggest(
    config: &GameConfig,
    board: Board,
    mark: Option<strictly_minimax::Mark>,
    depth: u32,
    json: bool,
) -> Result<()> {
    initialize_tracing(config.log_file())?;

    let analysis = suggest(board, mark, depth);
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&analysis).context("Failed to serialize analysis")?
        );
    } else {
        println!("{}", analysis);
    }
    Ok(())
}

/// Send logs to a file; the terminal belongs to the game.
#[instrument]
fn initialize_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init();

    info!("Tracing initialized");
    Ok(())
}
