//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules are kept apart from
//! board storage so the match controller and tests can evaluate any
//! position.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{Win, WIN_COMBINATIONS, check_winner};
