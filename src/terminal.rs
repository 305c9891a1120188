//! Line-oriented terminal front end.
//!
//! Translates typed commands into session calls and renders
//! [`MatchEvent`]s as text or JSON lines.

use crate::games::tictactoe::{Board, CELL_COUNT};
use crate::presentation::MatchEvent;
use std::io::Write;
use std::str::FromStr;
use tracing::instrument;

/// A line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalCommand {
    /// Play the given cell (0-based).
    Cell(usize),
    /// Start a new match with the same players.
    Restart,
    /// Leave the program.
    Quit,
}

impl FromStr for TerminalCommand {
    type Err = String;

    /// Cells are typed 1-9, matching the hints on the rendered board.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return match num {
                1..=CELL_COUNT => Ok(TerminalCommand::Cell(num - 1)),
                _ => Err(format!("Cell must be 1-{}, got {}", CELL_COUNT, num)),
            };
        }
        match s.to_lowercase().as_str() {
            "r" | "restart" => Ok(TerminalCommand::Restart),
            "q" | "quit" | "exit" => Ok(TerminalCommand::Quit),
            _ => Err(format!("Unknown command: {:?}", s)),
        }
    }
}

/// Writes match events to an output stream.
#[derive(Debug)]
pub struct TerminalRenderer<W> {
    out: W,
    json: bool,
}

impl<W: Write> TerminalRenderer<W> {
    /// Creates a renderer; `json` emits one JSON object per event.
    pub fn new(out: W, json: bool) -> Self {
        Self { out, json }
    }

    /// Renders a single event.
    #[instrument(skip(self))]
    pub fn render(&mut self, event: &MatchEvent) -> std::io::Result<()> {
        if self.json {
            let line = serde_json::to_string(event)?;
            writeln!(self.out, "{}", line)?;
            return self.out.flush();
        }

        match event {
            MatchEvent::Reset => writeln!(self.out, "New match")?,
            MatchEvent::BoardChanged { board } => {
                writeln!(self.out, "\n{}\n", Board::from_squares(*board))?;
            }
            MatchEvent::TurnChanged { player: Some(name) } => writeln!(self.out, "Turn: {}", name)?,
            MatchEvent::TurnChanged { player: None } => writeln!(self.out, "Turn: -")?,
            MatchEvent::Result { message } => writeln!(self.out, "Result: {}", message)?,
            MatchEvent::Win { combination, mark } => {
                let [a, b, c] = combination.map(|index| index + 1);
                writeln!(self.out, "Winning line: {}-{}-{} ({})", a, b, c, mark)?;
            }
            MatchEvent::BoardLocked => {
                writeln!(self.out, "Board locked. Type `restart` or `quit`.")?
            }
        }
        self.out.flush()
    }

    /// Consumes the renderer, returning the output stream.
    pub fn into_inner(self) -> W {
        self.out
    }
}
