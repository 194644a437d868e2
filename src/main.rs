//! Flawless - unified CLI.

use anyhow::{Context, Result};
use clap::Parser;
use flawless::{Cli, Command, Game, PlayConfig, analyze};
use flawless_tictactoe::Board;
use std::io;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Play {
            first,
            no_color,
            config,
        } => run_play(first, no_color, config),
        Command::Analyze {
            board,
            engine,
            json,
            no_color,
        } => run_analyze(&board, engine, json, no_color),
    }
}

/// Run interactive games on stdin/stdout
#[instrument]
fn run_play(
    first: Option<flawless::Seating>,
    no_color: bool,
    config: Option<std::path::PathBuf>,
) -> Result<()> {
    let config = PlayConfig::load(config.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(first, no_color);
    info!(?config, "Starting interactive play");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let score = Game::new(stdin.lock(), stdout.lock(), &config).run()?;
    println!("Final score: {}", score);
    Ok(())
}

/// Analyze a single position
#[instrument]
fn run_analyze(
    board: &str,
    engine: Option<flawless::Side>,
    json: bool,
    no_color: bool,
) -> Result<()> {
    let parsed: Board = board
        .parse()
        .with_context(|| format!("Invalid board `{}`", board))?;
    let analysis = analyze(&parsed, engine.map(Into::into))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print!("{}", analysis.report(&parsed, !no_color));
    }
    Ok(())
}
