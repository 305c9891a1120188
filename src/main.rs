//! Strictly Tic-Tac-Toe - terminal front end
//!
//! Thin adapter from stdin lines to a match session.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, GameMode};
use std::path::PathBuf;
use strictly_tictactoe_match::{
    ChannelPresentation, MatchConfig, MatchController, MatchSession, TerminalCommand,
    TerminalRenderer,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so the board on stdout stays readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            player1,
            player2,
            mode,
            config,
            seed,
            json,
        } => run_play(player1, player2, mode, config, seed, json).await,
        Command::Config { config } => print_config(config),
    }
}

/// Loads the config file if given, otherwise defaults.
fn load_config(path: Option<PathBuf>) -> Result<MatchConfig> {
    match path {
        Some(path) => MatchConfig::from_file(&path)
            .with_context(|| format!("Failed to load {}", path.display())),
        None => Ok(MatchConfig::default()),
    }
}

/// Prints the effective configuration.
fn print_config(path: Option<PathBuf>) -> Result<()> {
    let config = load_config(path)?;
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Runs an interactive match until stdin closes or the user quits.
#[instrument(skip_all, fields(mode = ?mode, seed = ?seed))]
async fn run_play(
    player1: Option<String>,
    player2: Option<String>,
    mode: GameMode,
    config: Option<PathBuf>,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let config = load_config(config)?;
    let (player1, player2) = config.resolve_names(player1.as_deref(), player2.as_deref());
    let vs_computer = mode == GameMode::Pvc;

    let (presentation, mut event_rx) = ChannelPresentation::channel();
    let controller = match seed {
        Some(seed) => MatchController::with_seed(presentation, seed),
        None => MatchController::new(presentation),
    }
    .with_computer_name(config.computer_name());
    let session = MatchSession::with_config(controller, &config);
    let mut renderer = TerminalRenderer::new(std::io::stdout(), json);

    info!(%player1, %player2, vs_computer, "Starting terminal match");
    session.start_match(&player1, &player2, vs_computer);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            Some(event) = event_rx.recv() => renderer.render(&event)?,
            line = lines.next_line() => {
                let Some(line) = line? else {
                    // Piped input can end while the computer is still due to reply
                    session.wait_for_computer_move().await;
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<TerminalCommand>() {
                    Ok(TerminalCommand::Cell(cell)) => {
                        session.attempt_move(cell);
                    }
                    Ok(TerminalCommand::Restart) => {
                        session.start_match(&player1, &player2, vs_computer);
                    }
                    Ok(TerminalCommand::Quit) => break,
                    Err(e) => {
                        warn!(input = %line, "Unrecognized input");
                        eprintln!("{}", e);
                    }
                }
            }
        }
    }

    // Flush whatever the last move produced
    while let Ok(event) = event_rx.try_recv() {
        renderer.render(&event)?;
    }

    info!(result = %session.result_message(), "Terminal match ended");
    Ok(())
}
