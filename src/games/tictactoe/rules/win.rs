//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, checked in this order: rows, columns, diagonals.
pub const WIN_COMBINATIONS: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// A completed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Win {
    /// Cell indices of the winning line.
    pub combination: [usize; 3],
    /// Marker filling the line.
    pub mark: Mark,
}

/// Checks if there is a winner on the board.
///
/// Returns the first line in [`WIN_COMBINATIONS`] order whose three cells
/// hold the same marker, so boards with several complete lines resolve
/// deterministically.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Win> {
    let squares = board.squares();
    WIN_COMBINATIONS.iter().find_map(|&combination| {
        let [a, b, c] = combination;
        match squares[a] {
            Square::Occupied(mark) if squares[b] == squares[a] && squares[c] == squares[a] => {
                Some(Win { combination, mark })
            }
            _ => None,
        }
    })
}
