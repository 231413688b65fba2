//! Session flow and headless script tests

use tui_2048::core::{Flow, GameConfig, GameSession, Grid, Screen, ScriptedRng};
use tui_2048::script::{parse_moves, run_script, ScriptStep};
use tui_2048::types::{Direction, GameAction};

fn session(rows: &[[u32; 4]]) -> GameSession<ScriptedRng> {
    GameSession::with_grid(Grid::from_rows(rows, ScriptedRng::default()).unwrap())
}

/// One move away from a full board with no pairs.
fn nearly_stuck() -> GameSession<ScriptedRng> {
    // Sliding right fills (3, 0); the scripted spawn then puts a 2 there.
    session(&[[2, 4, 2, 4], [4, 2, 4, 2], [8, 4, 2, 4], [16, 8, 32, 0]])
}

#[test]
fn test_new_session_is_playing() {
    let s = GameSession::new(&GameConfig::default()).unwrap();
    assert_eq!(s.screen(), Screen::Playing);
    assert_eq!(s.moves(), 0);
    assert_eq!(s.last_move(), None);
    assert_eq!(s.grid().size(), 4);
    assert_eq!(s.grid().empty_count(), 14);
}

#[test]
fn test_bad_size_is_an_error() {
    let config = GameConfig {
        size: 0,
        seed: Some(1),
    };
    assert!(GameSession::new(&config).is_err());
}

#[test]
fn test_same_seed_same_game() {
    let config = GameConfig {
        size: 5,
        seed: Some(2048),
    };
    let mut a = GameSession::new(&config).unwrap();
    let mut b = GameSession::new(&config).unwrap();
    for dir in [Direction::Left, Direction::Up, Direction::Right, Direction::Down].repeat(10) {
        a.play(dir);
        b.play(dir);
        assert_eq!(a.snapshot(), b.snapshot());
    }
}

#[test]
fn test_move_leads_to_game_over() {
    let mut s = nearly_stuck();
    assert!(s.play(Direction::Right));
    assert_eq!(s.grid().rows()[3], vec![2, 16, 8, 32]);
    assert!(s.game_over());
    assert_eq!(s.screen(), Screen::GameOver);

    // Further moves are ignored.
    let before = s.snapshot();
    assert!(!s.play(Direction::Left));
    assert_eq!(s.snapshot(), before);
    assert_eq!(s.apply_action(GameAction::Move(Direction::Up)), Flow::Continue);
    assert_eq!(s.snapshot(), before);
}

#[test]
fn test_game_over_quits_without_confirmation() {
    let mut s = nearly_stuck();
    s.play(Direction::Right);
    assert_eq!(s.apply_action(GameAction::Quit), Flow::Exit);
}

#[test]
fn test_game_over_restart_starts_fresh() {
    let mut s = nearly_stuck();
    s.play(Direction::Right);
    assert_eq!(s.apply_action(GameAction::Restart), Flow::Continue);

    assert_eq!(s.screen(), Screen::Playing);
    assert_eq!(s.moves(), 0);
    assert_eq!(s.last_move(), None);
    assert!(!s.last_move_changed());
    assert_eq!(s.grid().empty_count(), 14);
}

#[test]
fn test_restart_needs_confirmation_while_playing() {
    let mut s = session(&[[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
    s.play(Direction::Right);
    assert_eq!(s.moves(), 1);

    s.apply_action(GameAction::Restart);
    assert_eq!(s.screen(), Screen::ConfirmRestart);
    assert_eq!(s.moves(), 1);

    s.apply_action(GameAction::Restart);
    assert_eq!(s.screen(), Screen::Playing);
    assert_eq!(s.moves(), 0);
}

#[test]
fn test_confirm_screens_switch_and_resume() {
    let mut s = session(&[[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);

    s.apply_action(GameAction::Quit);
    assert_eq!(s.screen(), Screen::ConfirmQuit);

    // The other confirm key switches the question.
    s.apply_action(GameAction::Restart);
    assert_eq!(s.screen(), Screen::ConfirmRestart);
    s.apply_action(GameAction::Quit);
    assert_eq!(s.screen(), Screen::ConfirmQuit);

    // A move resumes play and is applied.
    assert_eq!(s.apply_action(GameAction::Move(Direction::Right)), Flow::Continue);
    assert_eq!(s.screen(), Screen::Playing);
    assert_eq!(s.moves(), 1);
    assert_eq!(s.grid().value_at(0, 3), Some(4));
}

#[test]
fn test_snapshot_reflects_session() {
    let mut s = session(&[[0, 0, 0, 2], [0; 4], [0; 4], [0; 4]]);
    s.play(Direction::Right);
    let snap = s.snapshot();

    assert_eq!(snap.moves, 0);
    assert_eq!(snap.last_move, Some(Direction::Right));
    assert!(!snap.last_move_changed);
    assert!(snap.playable());
    assert_eq!(snap.grid.value_at(0, 3), Some(2));
}

#[test]
fn test_parse_moves() {
    assert_eq!(
        parse_moves("rRu l\nD").unwrap(),
        vec![
            Direction::Right,
            Direction::Right,
            Direction::Up,
            Direction::Left,
            Direction::Down
        ]
    );
    assert!(parse_moves("").unwrap().is_empty());
    assert!(parse_moves("RX").is_err());
}

#[test]
fn test_run_script_writes_json_lines() {
    let mut s = session(&[[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let moves = parse_moves("RR").unwrap();
    let mut out = Vec::new();

    let played = run_script(&mut s, &moves, &mut out).unwrap();
    assert_eq!(played, 2);

    let text = String::from_utf8(out).unwrap();
    let steps: Vec<ScriptStep> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(steps.len(), 2);

    assert_eq!(steps[0].step, 0);
    assert_eq!(steps[0].direction, Direction::Right);
    assert!(steps[0].changed);
    assert_eq!(steps[0].snapshot.moves, 1);
    assert_eq!(steps[0].snapshot.grid.value_at(0, 3), Some(4));

    let raw: serde_json::Value = serde_json::from_str(text.lines().next().unwrap()).unwrap();
    assert_eq!(raw["direction"], "right");
    assert_eq!(raw["snapshot"]["screen"], "playing");
}

#[test]
fn test_run_script_stops_at_game_over() {
    let mut s = nearly_stuck();
    let moves = parse_moves("RLLL").unwrap();
    let mut out = Vec::new();

    let played = run_script(&mut s, &moves, &mut out).unwrap();
    assert_eq!(played, 1);

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 1);
    let raw: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
    assert_eq!(raw["snapshot"]["screen"], "game_over");
    assert_eq!(raw["snapshot"]["grid"]["can_move"], false);
}
