mod controller;
mod rules;
mod types;

pub use controller::{
    COMPUTER_NAME, ComputerTurn, MatchController, MatchPhase, MatchState, MoveOutcome,
    RESULT_PLACEHOLDER, TIE_MESSAGE,
};
pub use rules::{WIN_COMBINATIONS, Win, check_winner, is_full};
pub use types::{Board, CELL_COUNT, Mark, Player, Square};
