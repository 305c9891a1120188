//! Tests for the session's delayed computer move.

use std::time::Duration;
use strictly_tictactoe_match::{
    ChannelPresentation, MatchConfig, MatchController, MatchEvent, MatchSession, MoveOutcome,
    NullPresentation, Square,
};

const DELAY: Duration = Duration::from_millis(300);

fn session() -> MatchSession<NullPresentation> {
    MatchSession::new(MatchController::with_seed(NullPresentation, 3), DELAY)
}

#[tokio::test(start_paused = true)]
async fn test_computer_moves_after_delay() {
    let session = session();
    session.start_match("Alice", "", true);

    assert!(matches!(
        session.attempt_move(4),
        MoveOutcome::ComputerTurn(_)
    ));
    assert!(session.state().awaiting_computer_move);

    tokio::time::sleep(DELAY / 2).await;
    assert_eq!(session.board().empty_cells().len(), 8);

    tokio::time::sleep(DELAY).await;
    let state = session.state();
    assert!(!state.awaiting_computer_move);
    assert_eq!(session.board().empty_cells().len(), 7);
    assert_eq!(state.active_player.expect("active").name(), "Alice");
}

#[tokio::test(start_paused = true)]
async fn test_human_input_rejected_during_delay() {
    let session = session();
    session.start_match("Alice", "", true);
    session.attempt_move(0);

    assert_eq!(session.attempt_move(1), MoveOutcome::Ignored);
    assert_eq!(session.attempt_move(8), MoveOutcome::Ignored);
    assert_eq!(session.board().empty_cells().len(), 8);

    tokio::time::sleep(DELAY * 2).await;
    let empty = session.board().empty_cells();
    assert_eq!(empty.len(), 7);
    assert_ne!(session.attempt_move(empty[0]), MoveOutcome::Ignored);
}

#[tokio::test(start_paused = true)]
async fn test_restart_discards_pending_computer_move() {
    let session = session();
    session.start_match("Alice", "", true);
    session.attempt_move(4);

    session.start_match("Alice", "", true);
    tokio::time::sleep(DELAY * 2).await;

    assert_eq!(session.board().snapshot(), [Square::Empty; 9]);
    let state = session.state();
    assert!(!state.awaiting_computer_move);
    assert_eq!(state.generation, 2);
    assert_eq!(state.active_player.expect("active").name(), "Alice");
}

#[tokio::test(start_paused = true)]
async fn test_events_reach_channel_in_order() {
    let (presentation, mut event_rx) = ChannelPresentation::channel();
    let controller = MatchController::with_seed(presentation, 11);
    let session = MatchSession::with_config(controller, &MatchConfig::default());
    session.start_match("Alice", "", true);
    session.attempt_move(0);

    tokio::time::sleep(session.computer_delay() * 2).await;

    let mut turns = Vec::new();
    while let Ok(event) = event_rx.try_recv() {
        if let MatchEvent::TurnChanged { player } = event {
            turns.push(player);
        }
    }
    assert_eq!(
        turns,
        vec![
            Some("Alice".to_string()),
            Some("Computer".to_string()),
            Some("Alice".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_pvp_session_needs_no_timer() {
    let session = MatchSession::new(MatchController::new(NullPresentation), DELAY);
    session.start_match("Alice", "Bob", false);
    for cell in [0, 3, 1, 4] {
        assert_eq!(session.attempt_move(cell), MoveOutcome::Continued);
    }
    assert!(matches!(session.attempt_move(2), MoveOutcome::Won(_)));
    assert_eq!(session.result_message(), "Alice wins!");
    assert!(session.state().game_over);
}

#[test]
fn test_vs_computer_move_without_runtime_leaves_match_playable() {
    let session = session();
    session.start_match("Alice", "", true);

    assert_eq!(session.attempt_move(0), MoveOutcome::Ignored);
    assert_eq!(session.board().empty_cells().len(), 9);
    let state = session.state();
    assert!(!state.awaiting_computer_move);
    assert_eq!(state.active_player.expect("active").name(), "Alice");
}

#[test]
fn test_pvp_moves_work_without_runtime() {
    let session = session();
    session.start_match("Alice", "Bob", false);
    assert_eq!(session.attempt_move(0), MoveOutcome::Continued);
    assert_eq!(session.attempt_move(4), MoveOutcome::Continued);
    assert_eq!(session.board().empty_cells().len(), 7);
}

#[tokio::test(start_paused = true)]
async fn test_wait_for_computer_move_settles_reply() {
    let session = session();
    session.start_match("Alice", "", true);
    session.attempt_move(4);
    assert!(session.state().awaiting_computer_move);

    session.wait_for_computer_move().await;
    assert!(!session.state().awaiting_computer_move);
    assert_eq!(session.board().empty_cells().len(), 7);

    // Nothing pending: returns without touching the board.
    session.wait_for_computer_move().await;
    assert_eq!(session.board().empty_cells().len(), 7);
}
