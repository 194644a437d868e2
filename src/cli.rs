//! Command-line interface for flawless.

use crate::analyze::Side;
use crate::config::Seating;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Flawless - tic-tac-toe against a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "flawless")]
#[command(about = "Tic-tac-toe against a rule-based computer that never loses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Who moves first (overrides the config file)
        #[arg(long, value_enum)]
        first: Option<Seating>,

        /// Disable coloured highlighting of the last moves
        #[arg(long)]
        no_color: bool,

        /// Path to a TOML config file (default: ./flawless.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the computer's move for a position
    Analyze {
        /// Board as nine characters, rows optionally separated by `/`,
        /// e.g. `X../.O./..X`
        board: String,

        /// Symbol the computer plays (default: inferred side to move)
        #[arg(long, value_enum)]
        engine: Option<Side>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,

        /// Disable colour in text output
        #[arg(long)]
        no_color: bool,
    },
}
