//! Outbound notifications from the match controller.
//!
//! The controller never renders anything itself. Front ends implement
//! [`Presentation`] (or consume [`MatchEvent`]s from a channel) and draw
//! whatever they like.

use crate::games::tictactoe::{CELL_COUNT, Mark, Square};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{instrument, warn};

/// Receiver of match notifications.
///
/// Every call is fire-and-forget. Default bodies ignore the notification,
/// so implementors only override what they render.
pub trait Presentation {
    /// The board changed; `board` is a fresh snapshot.
    fn on_board_changed(&mut self, _board: &[Square; CELL_COUNT]) {}

    /// The player to move changed. `None` means nobody is to move.
    fn on_turn_changed(&mut self, _player: Option<&str>) {}

    /// The result line changed.
    fn on_result(&mut self, _message: &str) {}

    /// A line was completed.
    fn on_win(&mut self, _combination: [usize; 3], _mark: Mark) {}

    /// No further input is accepted until the next match starts.
    fn on_board_locked(&mut self) {}

    /// A new match started; clear highlights and locks.
    fn on_reset(&mut self) {}
}

/// Presentation that discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPresentation;

impl Presentation for NullPresentation {}

/// Notification sent from the controller to a front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum MatchEvent {
    /// Board re-render requested.
    BoardChanged {
        /// Snapshot of all cells.
        board: [Square; CELL_COUNT],
    },
    /// Active player changed.
    TurnChanged {
        /// Name of the player to move, if any.
        player: Option<String>,
    },
    /// Result line changed.
    Result {
        /// Message to display.
        message: String,
    },
    /// A line was completed.
    Win {
        /// Winning cell indices.
        combination: [usize; 3],
        /// Marker filling the line.
        mark: Mark,
    },
    /// Input is locked.
    BoardLocked,
    /// A new match started.
    Reset,
}

/// Presentation that forwards notifications over an unbounded channel.
#[derive(Debug, Clone)]
pub struct ChannelPresentation {
    event_tx: mpsc::UnboundedSender<MatchEvent>,
}

impl ChannelPresentation {
    /// Creates a presentation sending to `event_tx`.
    pub fn new(event_tx: mpsc::UnboundedSender<MatchEvent>) -> Self {
        Self { event_tx }
    }

    /// Creates a presentation together with its receiving end.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<MatchEvent>) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        (Self::new(event_tx), event_rx)
    }

    #[instrument(skip(self))]
    fn send(&self, event: MatchEvent) {
        if self.event_tx.send(event).is_err() {
            warn!("Event receiver dropped, notification discarded");
        }
    }
}

impl Presentation for ChannelPresentation {
    fn on_board_changed(&mut self, board: &[Square; CELL_COUNT]) {
        self.send(MatchEvent::BoardChanged { board: *board });
    }

    fn on_turn_changed(&mut self, player: Option<&str>) {
        self.send(MatchEvent::TurnChanged {
            player: player.map(str::to_string),
        });
    }

    fn on_result(&mut self, message: &str) {
        self.send(MatchEvent::Result {
            message: message.to_string(),
        });
    }

    fn on_win(&mut self, combination: [usize; 3], mark: Mark) {
        self.send(MatchEvent::Win { combination, mark });
    }

    fn on_board_locked(&mut self) {
        self.send(MatchEvent::BoardLocked);
    }

    fn on_reset(&mut self) {
        self.send(MatchEvent::Reset);
    }
}
