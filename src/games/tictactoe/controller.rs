//! Match lifecycle: turn discipline, outcome detection, computer moves.

use super::rules::{Win, check_winner, is_full};
use super::types::{Board, Mark, Player};
use crate::presentation::Presentation;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Default name given to the computer seat.
pub const COMPUTER_NAME: &str = "Computer";

/// Result line shown before any outcome.
pub const RESULT_PLACEHOLDER: &str = "-";

/// Result line for a full board without a winner.
pub const TIE_MESSAGE: &str = "It's a tie";

/// Lifecycle phase of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum MatchPhase {
    /// No match has been started yet.
    NotStarted,
    /// Moves are being accepted.
    InProgress,
    /// A line was completed.
    Won(Win),
    /// The board filled up without a winner.
    Tied,
}

impl MatchPhase {
    /// True once the match has been won or tied.
    pub fn is_over(&self) -> bool {
        matches!(self, MatchPhase::Won(_) | MatchPhase::Tied)
    }
}

/// Snapshot of the controller's turn state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    /// Current phase.
    pub phase: MatchPhase,
    /// Player to move; `None` before the first match.
    pub active_player: Option<Player>,
    /// Whether the match is finished.
    pub game_over: bool,
    /// Whether a scheduled computer move is pending.
    pub awaiting_computer_move: bool,
    /// Identifier of the current match.
    pub generation: u64,
}

/// Ticket for a pending computer move.
///
/// Carries the generation of the match that requested it so a move
/// scheduled before a restart is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComputerTurn {
    generation: u64,
}

impl ComputerTurn {
    /// Generation of the match that issued this ticket.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What happened to a move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Preconditions failed; nothing changed and nothing was notified.
    Ignored,
    /// Move applied; the next human player is to move.
    Continued,
    /// Move applied; the computer must move next.
    ComputerTurn(ComputerTurn),
    /// Move applied and completed a line.
    Won(Win),
    /// Move applied and filled the board.
    Tied,
}

/// Owns the board, both players, and the turn state of one match session.
///
/// All board writes go through [`Board::set_cell`]; the controller never
/// pre-checks occupancy itself.
#[derive(Debug)]
pub struct MatchController<P> {
    board: Board,
    players: Option<[Player; 2]>,
    active: usize,
    phase: MatchPhase,
    awaiting_computer_move: bool,
    generation: u64,
    result: String,
    computer_name: String,
    presentation: P,
    rng: StdRng,
}

impl<P: Presentation> MatchController<P> {
    /// Creates a controller with an entropy-seeded computer opponent.
    pub fn new(presentation: P) -> Self {
        Self::with_rng(presentation, StdRng::from_entropy())
    }

    /// Creates a controller whose computer moves are reproducible.
    pub fn with_seed(presentation: P, seed: u64) -> Self {
        Self::with_rng(presentation, StdRng::seed_from_u64(seed))
    }

    fn with_rng(presentation: P, rng: StdRng) -> Self {
        Self {
            board: Board::new(),
            players: None,
            active: 0,
            phase: MatchPhase::NotStarted,
            awaiting_computer_move: false,
            generation: 0,
            result: RESULT_PLACEHOLDER.to_string(),
            computer_name: COMPUTER_NAME.to_string(),
            presentation,
            rng,
        }
    }

    /// Renames the computer seat for matches started afterwards.
    pub fn with_computer_name(mut self, name: impl Into<String>) -> Self {
        self.computer_name = name.into();
        self
    }

    /// Starts a fresh match, abandoning any match in progress.
    ///
    /// Player one always takes X and moves first. With `vs_computer` the
    /// second seat becomes the computer and `player2_name` is ignored.
    #[instrument(skip(self))]
    pub fn start_game(&mut self, player1_name: &str, player2_name: &str, vs_computer: bool) {
        let player1 = Player::new(player1_name.to_string(), Mark::X, false);
        let player2 = if vs_computer {
            Player::new(self.computer_name.clone(), Mark::O, true)
        } else {
            Player::new(player2_name.to_string(), Mark::O, false)
        };

        self.players = Some([player1, player2]);
        self.active = 0;
        self.phase = MatchPhase::InProgress;
        self.awaiting_computer_move = false;
        self.generation += 1;
        self.result = RESULT_PLACEHOLDER.to_string();
        self.board.reset();

        info!(generation = self.generation, vs_computer, "Match started");

        self.presentation.on_reset();
        self.presentation.on_board_changed(self.board.squares());
        self.presentation.on_turn_changed(Some(player1_name));
        self.presentation.on_result(&self.result);
    }

    /// Attempts a human move at `index` for the active player.
    ///
    /// Silently ignored when no match is running, the match is over, a
    /// computer move is pending, or the cell cannot be written.
    #[instrument(skip(self))]
    pub fn play_round(&mut self, index: usize) -> MoveOutcome {
        let Some(players) = &self.players else {
            debug!("No match started, move ignored");
            return MoveOutcome::Ignored;
        };
        if self.phase.is_over() {
            debug!(phase = %self.phase, "Match over, move ignored");
            return MoveOutcome::Ignored;
        }
        let player = &players[self.active];
        if self.awaiting_computer_move || *player.is_computer() {
            debug!("Computer move pending, move ignored");
            return MoveOutcome::Ignored;
        }
        let mark = *player.mark();
        if !self.board.set_cell(index, mark) {
            debug!("Cell unavailable, move ignored");
            return MoveOutcome::Ignored;
        }
        self.end_of_turn()
    }

    /// Plays the computer's move for a ticket issued by [`Self::play_round`].
    ///
    /// Stale tickets (from an earlier match) and tickets arriving when no
    /// computer move is pending are discarded.
    #[instrument(skip(self))]
    pub fn computer_move(&mut self, turn: ComputerTurn) -> MoveOutcome {
        if turn.generation != self.generation {
            debug!(
                current = self.generation,
                "Stale computer move discarded"
            );
            return MoveOutcome::Ignored;
        }
        if !self.awaiting_computer_move || self.phase.is_over() {
            debug!("No computer move pending");
            return MoveOutcome::Ignored;
        }
        let Some(players) = &self.players else {
            return MoveOutcome::Ignored;
        };
        let mark = *players[self.active].mark();
        self.awaiting_computer_move = false;

        let empty = self.board.empty_cells();
        let Some(&index) = empty.choose(&mut self.rng) else {
            debug!("No empty cells for computer");
            return MoveOutcome::Ignored;
        };
        debug!(index, "Computer chose cell");
        if !self.board.set_cell(index, mark) {
            return MoveOutcome::Ignored;
        }
        self.end_of_turn()
    }

    /// Evaluates the board after a successful write.
    fn end_of_turn(&mut self) -> MoveOutcome {
        self.presentation.on_board_changed(self.board.squares());

        let Some(players) = &self.players else {
            return MoveOutcome::Ignored;
        };

        if let Some(win) = check_winner(&self.board) {
            let name = players[self.active].name();
            self.phase = MatchPhase::Won(win);
            self.result = format!("{} wins!", name);
            info!(winner = %name, combination = ?win.combination, "Match won");

            self.presentation.on_win(win.combination, win.mark);
            self.presentation.on_result(&self.result);
            self.presentation.on_turn_changed(None);
            self.presentation.on_board_locked();
            return MoveOutcome::Won(win);
        }

        if is_full(&self.board) {
            self.phase = MatchPhase::Tied;
            self.result = TIE_MESSAGE.to_string();
            info!("Match tied");

            self.presentation.on_result(&self.result);
            self.presentation.on_turn_changed(None);
            self.presentation.on_board_locked();
            return MoveOutcome::Tied;
        }

        self.active = 1 - self.active;
        let next = &players[self.active];
        self.presentation.on_turn_changed(Some(next.name().as_str()));

        if *next.is_computer() {
            self.awaiting_computer_move = true;
            MoveOutcome::ComputerTurn(ComputerTurn {
                generation: self.generation,
            })
        } else {
            MoveOutcome::Continued
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns both players, X first; `None` before the first match.
    pub fn players(&self) -> Option<&[Player; 2]> {
        self.players.as_ref()
    }

    /// Returns the player to move.
    pub fn active_player(&self) -> Option<&Player> {
        self.players.as_ref().map(|players| &players[self.active])
    }

    /// Returns the current phase.
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Whether the match has been won or tied.
    pub fn is_game_over(&self) -> bool {
        self.phase.is_over()
    }

    /// Whether a computer move is pending.
    pub fn is_awaiting_computer_move(&self) -> bool {
        self.awaiting_computer_move
    }

    /// Identifier of the current match; bumped by every start.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Current result line.
    pub fn result_message(&self) -> &str {
        &self.result
    }

    /// Returns a snapshot of the turn state.
    pub fn state(&self) -> MatchState {
        MatchState {
            phase: self.phase,
            active_player: self.active_player().cloned(),
            game_over: self.phase.is_over(),
            awaiting_computer_move: self.awaiting_computer_move,
            generation: self.generation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::NullPresentation;

    #[test]
    fn test_move_before_start_is_ignored() {
        let mut controller = MatchController::new(NullPresentation);
        assert_eq!(controller.play_round(0), MoveOutcome::Ignored);
        assert_eq!(controller.phase(), MatchPhase::NotStarted);
        assert!(controller.board().is_empty(0));
    }

    #[test]
    fn test_stale_ticket_is_discarded() {
        let mut controller = MatchController::with_seed(NullPresentation, 7);
        controller.start_game("Alice", "", true);
        let MoveOutcome::ComputerTurn(turn) = controller.play_round(4) else {
            panic!("computer should be next");
        };
        controller.start_game("Alice", "", true);
        assert_eq!(turn.generation(), 1);
        assert_eq!(controller.generation(), 2);
        assert_eq!(controller.computer_move(turn), MoveOutcome::Ignored);
        assert_eq!(controller.board().empty_cells().len(), 9);
        assert!(!controller.is_awaiting_computer_move());
    }

    #[test]
    fn test_ticket_used_once() {
        let mut controller = MatchController::with_seed(NullPresentation, 7);
        controller.start_game("Alice", "", true);
        let MoveOutcome::ComputerTurn(turn) = controller.play_round(4) else {
            panic!("computer should be next");
        };
        assert_eq!(controller.computer_move(turn), MoveOutcome::Continued);
        assert_eq!(controller.computer_move(turn), MoveOutcome::Ignored);
        assert_eq!(controller.board().empty_cells().len(), 7);
    }

    #[test]
    fn test_custom_computer_name() {
        let mut controller =
            MatchController::with_seed(NullPresentation, 1).with_computer_name("Robot");
        controller.start_game("Alice", "Bob", true);
        let [_, computer] = controller.players().expect("match started");
        assert_eq!(computer.name(), "Robot");
        assert!(*computer.is_computer());
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(MatchPhase::Tied.to_string(), "Tied");
        assert!(!MatchPhase::InProgress.is_over());
    }
}
