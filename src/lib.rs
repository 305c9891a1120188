//! Strictly Tic-Tac-Toe - a two-player match engine
//!
//! Human-vs-human or human-vs-computer tic-tac-toe. The match controller owns
//! all game logic and reports every change through the [`Presentation`]
//! trait, so any front end can render it.
//!
//! # Architecture
//!
//! - **Board**: nine cells, single-occupancy writes, reset
//! - **MatchController**: turn order, win/tie detection, computer moves
//! - **MatchSession**: shared controller plus the delayed computer move
//! - **Presentation**: outbound notifications (no-op or channel-backed)
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe_match::{MatchController, NullPresentation};
//!
//! let mut controller = MatchController::new(NullPresentation);
//! controller.start_game("Alice", "Bob", false);
//! for cell in [0, 3, 1, 4, 2] {
//!     controller.play_round(cell);
//! }
//! assert_eq!(controller.result_message(), "Alice wins!");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod presentation;
mod session;
mod terminal;

// Crate-level exports - Configuration
pub use config::{ConfigError, MatchConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, CELL_COUNT, COMPUTER_NAME, ComputerTurn, Mark, MatchController, MatchPhase, MatchState,
    MoveOutcome, Player, RESULT_PLACEHOLDER, Square, TIE_MESSAGE, WIN_COMBINATIONS, Win,
    check_winner, is_full,
};

// Crate-level exports - Notifications
pub use presentation::{ChannelPresentation, MatchEvent, NullPresentation, Presentation};

// Crate-level exports - Session management
pub use session::MatchSession;

// Crate-level exports - Terminal front end
pub use terminal::{TerminalCommand, TerminalRenderer};
