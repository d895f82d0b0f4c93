//! Integration tests - full sessions driven through commands and ticks

use blockfall::core::{GamePhase, GameState, ScriptedSource};
use blockfall::types::{GameAction, PieceKind, INITIAL_FALL_SPEED, MOVE_DELAY, YELLOW};

fn scripted(kinds: &[PieceKind]) -> GameState {
    let picks: Vec<usize> = kinds
        .iter()
        .map(|k| PieceKind::ALL.iter().position(|a| a == k).unwrap())
        .collect();
    GameState::with_rng(Box::new(ScriptedSource::new(picks)))
}

fn shift(state: &mut GameState, dx: i8) {
    let action = if dx < 0 {
        GameAction::MoveLeft
    } else {
        GameAction::MoveRight
    };
    for _ in 0..dx.unsigned_abs() {
        assert!(state.apply_action(action));
    }
}

/// Push the falling piece to the floor, then tick until it locks.
fn drop_and_lock(state: &mut GameState) {
    while state.apply_action(GameAction::MoveDown) {}
    let frames = (MOVE_DELAY / INITIAL_FALL_SPEED) as usize;
    for _ in 0..frames * 2 {
        if state.tick() {
            return;
        }
    }
    panic!("piece never locked");
}

#[test]
fn test_full_row_clears_and_scores() {
    let mut state = scripted(&[
        PieceKind::I,
        PieceKind::O,
        PieceKind::O,
        PieceKind::O,
        PieceKind::T,
    ]);

    shift(&mut state, -3);
    drop_and_lock(&mut state);

    drop_and_lock(&mut state);

    shift(&mut state, 2);
    drop_and_lock(&mut state);

    shift(&mut state, 4);
    drop_and_lock(&mut state);

    assert_eq!(state.score(), 100);
    assert_eq!(state.level(), 1);
    assert_eq!(state.active().unwrap().kind, PieceKind::T);

    let bottom = state.board().row(19).unwrap();
    assert!(bottom[..4].iter().all(|c| c.is_none()));
    assert!(bottom[4..].iter().all(|c| *c == Some(YELLOW)));
    assert!(state.board().row(18).unwrap().iter().all(|c| c.is_none()));
}

#[test]
fn test_stacking_to_the_top_ends_the_game() {
    let mut state = scripted(&[PieceKind::O]);

    let mut locks = 0;
    while !state.game_over() {
        drop_and_lock(&mut state);
        locks += 1;
        assert!(locks <= 10, "stack should reach the top after 10 pieces");
    }

    assert_eq!(locks, 10);
    assert_eq!(state.phase(), GamePhase::GameOver);
    assert!(state.board().is_occupied(4, 0));
    assert!(state.board().is_occupied(5, 0));

    // Nothing moves after game over.
    let before = state.snapshot();
    for _ in 0..120 {
        assert!(!state.tick());
    }
    assert!(!state.apply_action(GameAction::MoveLeft));
    assert!(!state.apply_action(GameAction::Rotate));
    assert!(!state.apply_action(GameAction::Pause));
    assert_eq!(state.snapshot(), before);
}

#[test]
fn test_restart_after_game_over() {
    let mut state = scripted(&[PieceKind::O]);
    while !state.game_over() {
        drop_and_lock(&mut state);
    }

    assert!(state.apply_action(GameAction::Restart));

    assert!(!state.game_over());
    assert!(state.running());
    assert!(!state.paused());
    assert_eq!(state.score(), 0);
    assert_eq!(state.level(), 1);
    assert_eq!(state.fall_speed(), INITIAL_FALL_SPEED);
    assert!(state.board().cells().iter().all(|c| c.is_none()));
    assert_eq!(state.active().unwrap().kind, PieceKind::O);
}

#[test]
fn test_pause_freezes_the_piece() {
    let mut state = scripted(&[PieceKind::T]);
    let start = state.active().unwrap();

    assert!(state.apply_action(GameAction::Pause));
    assert_eq!(state.phase(), GamePhase::Paused);
    for _ in 0..200 {
        state.tick();
    }
    assert!(!state.apply_action(GameAction::MoveLeft));
    assert!(!state.apply_action(GameAction::Rotate));
    assert_eq!(state.active().unwrap(), start);

    assert!(state.apply_action(GameAction::Pause));
    for _ in 0..60 {
        state.tick();
    }
    assert_eq!(state.active().unwrap().y, start.y + 1);
}

#[test]
fn test_quit_stops_the_session() {
    let mut state = GameState::new(99);
    state.apply_action(GameAction::Pause);
    assert!(state.apply_action(GameAction::Quit));
    assert!(!state.running());
}

#[test]
fn test_level_up_speeds_up_falling() {
    let mut state = GameState::new(5);

    state.update_score(4);
    state.update_score(1);
    assert_eq!(state.score(), 900);
    assert_eq!(state.level(), 1);

    state.update_score(1);
    assert_eq!(state.score(), 1000);
    assert_eq!(state.level(), 2);
    assert!((state.fall_speed() - INITIAL_FALL_SPEED * 0.9).abs() < 1e-12);

    // 1000 + 800 * 2 crosses the level 2 threshold but levels up only once.
    state.update_score(4);
    assert_eq!(state.score(), 2600);
    assert_eq!(state.level(), 3);
}

#[test]
fn test_seeded_sessions_are_reproducible() {
    let mut a = GameState::new(2024);
    let mut b = GameState::new(2024);

    for i in 0..3000 {
        if i % 7 == 0 {
            a.apply_action(GameAction::Rotate);
            b.apply_action(GameAction::Rotate);
        }
        a.tick();
        b.tick();
        assert_eq!(a.snapshot(), b.snapshot());
    }
}
