//! Snapshot and event serialization

use falling_blocks::core::{GameSnapshot, GameState, Rules, SequenceSource};
use falling_blocks::types::{GameAction, LockEvent, PieceKind};

#[test]
fn snapshot_json_has_expected_shape() {
    let mut game = GameState::with_source(SequenceSource::repeat(PieceKind::T), Rules::default());
    game.start();
    game.board_mut().set(0, 19, 3);

    let v = serde_json::to_value(game.snapshot()).unwrap();
    let board = v["board"].as_array().unwrap();
    assert_eq!(board.len(), 20);
    assert!(board.iter().all(|row| row.as_array().unwrap().len() == 10));
    assert_eq!(v["board"][19][0], 3);

    assert_eq!(v["active"]["kind"], "t");
    assert_eq!(v["active"]["x"], 4);
    assert_eq!(v["active"]["y"], 0);
    assert_eq!(v["next"], "t");
    assert_eq!(v["score"], 0);
    assert_eq!(v["level"], 1);
    assert_eq!(v["drop_interval_ms"], 1000);
}

#[test]
fn snapshot_round_trips_through_json() {
    let mut game = GameState::new(99);
    game.start();
    game.apply_action(GameAction::MoveLeft);
    game.apply_action(GameAction::SoftDrop);

    let snap = game.snapshot();
    let text = serde_json::to_string(&snap).unwrap();
    let back: GameSnapshot = serde_json::from_str(&text).unwrap();
    assert_eq!(back, snap);
}

#[test]
fn snapshot_into_matches_snapshot() {
    let mut game = GameState::new(5);
    game.start();
    game.drop_piece();

    let mut reused = GameSnapshot::default();
    game.snapshot_into(&mut reused);
    assert_eq!(reused, game.snapshot());
}

#[test]
fn action_names_parse_and_serialize() {
    for action in [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::RotateCw,
        GameAction::RotateCcw,
        GameAction::Pause,
    ] {
        let json = serde_json::to_value(action).unwrap();
        assert_eq!(json, serde_json::Value::String(action.as_str().to_string()));
        assert_eq!(GameAction::from_str(action.as_str()), Some(action));
    }
    assert_eq!(GameAction::from_str("hardDrop"), None);
}

#[test]
fn lock_event_json_fields() {
    let event = LockEvent {
        lines_cleared: 3,
        points: 70,
        level_up: true,
        game_over: false,
        score: 70,
        level: 2,
    };
    let v = serde_json::to_value(event).unwrap();
    assert_eq!(v["lines_cleared"], 3);
    assert_eq!(v["points"], 70);
    assert_eq!(v["level_up"], true);
    assert_eq!(v["level"], 2);
}
