//! Tests for loading match configuration from disk.

use std::io::Write;
use std::time::Duration;
use strictly_tictactoe_match::{MatchConfig, MatchController, NullPresentation};

#[test]
fn test_load_config_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "computer_delay_ms = 1000\nplayer1_default = \"Host\"\nplayer2_default = \"Guest\""
    )
    .expect("write config");

    let config = MatchConfig::from_file(file.path()).expect("valid config");
    assert_eq!(config.computer_delay(), Duration::from_secs(1));
    assert_eq!(
        config.resolve_names(None, Some("")),
        ("Host".to_string(), "Guest".to_string())
    );
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = MatchConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_configured_computer_name_reaches_match() {
    let config = MatchConfig::from_toml("computer_name = \"Robot\"").expect("valid config");
    let mut controller = MatchController::with_seed(NullPresentation, 5)
        .with_computer_name(config.computer_name());
    controller.start_game("Alice", "", true);

    let [_, computer] = controller.players().expect("match started");
    assert_eq!(computer.name(), "Robot");
}
