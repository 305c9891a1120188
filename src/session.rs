//! Match session driving the deferred computer move.

use crate::config::MatchConfig;
use crate::games::tictactoe::{Board, ComputerTurn, MatchController, MatchState, MoveOutcome};
use crate::presentation::Presentation;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::{debug, instrument, warn};

/// One running game: a controller plus the timer that plays for the computer.
///
/// Cloning yields another handle to the same match.
#[derive(Debug)]
pub struct MatchSession<P> {
    controller: Arc<Mutex<MatchController<P>>>,
    computer_delay: Duration,
}

impl<P> Clone for MatchSession<P> {
    fn clone(&self) -> Self {
        Self {
            controller: Arc::clone(&self.controller),
            computer_delay: self.computer_delay,
        }
    }
}

impl<P: Presentation + Send + 'static> MatchSession<P> {
    /// Creates a session around `controller`.
    pub fn new(controller: MatchController<P>, computer_delay: Duration) -> Self {
        Self {
            controller: Arc::new(Mutex::new(controller)),
            computer_delay,
        }
    }

    /// Creates a session using the delay from `config`.
    pub fn with_config(controller: MatchController<P>, config: &MatchConfig) -> Self {
        Self::new(controller, config.computer_delay())
    }

    /// Starts a new match; any pending computer move becomes stale.
    #[instrument(skip(self))]
    pub fn start_match(&self, player1_name: &str, player2_name: &str, vs_computer: bool) {
        self.lock()
            .start_game(player1_name, player2_name, vs_computer);
    }

    /// Forwards a human move and schedules the computer's reply if needed.
    ///
    /// Against the computer the reply runs on the current tokio runtime;
    /// without one the move is ignored and the board is left untouched.
    #[instrument(skip(self))]
    pub fn attempt_move(&self, cell: usize) -> MoveOutcome {
        let runtime = Handle::try_current().ok();
        let outcome = {
            let mut controller = self.lock();
            let vs_computer = controller
                .players()
                .is_some_and(|[_, second]| *second.is_computer());
            if vs_computer && runtime.is_none() {
                warn!("No tokio runtime to schedule the computer, move ignored");
                return MoveOutcome::Ignored;
            }
            controller.play_round(cell)
        };
        if let (MoveOutcome::ComputerTurn(turn), Some(runtime)) = (outcome, runtime) {
            self.schedule_computer_move(&runtime, turn);
        }
        outcome
    }

    /// Waits until no computer move is pending.
    ///
    /// Returns immediately when the computer is not due to move.
    pub async fn wait_for_computer_move(&self) {
        while self.state().awaiting_computer_move {
            tokio::time::sleep(self.computer_delay).await;
        }
    }

    /// Plays the computer's move after the configured delay.
    #[instrument(skip(self, runtime))]
    fn schedule_computer_move(&self, runtime: &Handle, turn: ComputerTurn) {
        let controller = Arc::clone(&self.controller);
        let delay = self.computer_delay;
        debug!(?delay, "Scheduling computer move");
        runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let outcome = controller
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .computer_move(turn);
            debug!(?outcome, "Computer move finished");
        });
    }

    /// Returns a snapshot of the turn state.
    pub fn state(&self) -> MatchState {
        self.lock().state()
    }

    /// Returns a copy of the board.
    pub fn board(&self) -> Board {
        self.lock().board().clone()
    }

    /// Current result line.
    pub fn result_message(&self) -> String {
        self.lock().result_message().to_string()
    }

    /// Delay before the computer plays.
    pub fn computer_delay(&self) -> Duration {
        self.computer_delay
    }

    fn lock(&self) -> MutexGuard<'_, MatchController<P>> {
        self.controller
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
