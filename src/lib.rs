//! Flawless - terminal front end for the never-lose tic-tac-toe engine.
//!
//! # Architecture
//!
//! - **Play**: interactive games over any reader/writer pair
//! - **Analyze**: one-shot move suggestion for a given board
//! - **Render**: board text with highlighted last moves
//! - **Config**: TOML settings with CLI overrides
//!
//! The decision logic itself lives in [`flawless_tictactoe`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analyze;
mod cli;
mod config;
mod input;
mod play;
mod render;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, PlayConfig, Seating};

// Crate-level exports - Front end
pub use analyze::{Analysis, Side, TurnError, analyze, side_to_move};
pub use input::{Command as InputCommand, HELP, InputError, parse_command};
pub use play::{Game, Scoreboard};
pub use render::board_string;
