//! Command-line interface for strictly_tictactoe_match.

use clap::{Parser, Subcommand, ValueEnum};

/// Strictly Tic-Tac-Toe - play a match in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe_match")]
#[command(about = "Tic-tac-toe against a friend or a random-move computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Who sits in the second seat.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    /// Player versus player
    Pvp,
    /// Player versus computer
    Pvc,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a match on stdin/stdout
    Play {
        /// Name of player one (X). Blank uses the configured default.
        #[arg(long)]
        player1: Option<String>,

        /// Name of player two (O). Ignored against the computer.
        #[arg(long)]
        player2: Option<String>,

        /// Match mode
        #[arg(short, long, value_enum, default_value_t = GameMode::Pvp)]
        mode: GameMode,

        /// Path to a TOML match configuration
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Seed for the computer's move choice
        #[arg(long)]
        seed: Option<u64>,

        /// Emit events as JSON lines instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML
    Config {
        /// Path to a TOML match configuration
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },
}
