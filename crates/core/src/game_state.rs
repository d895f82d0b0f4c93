//! Game state module - the play session
//!
//! This module ties together the board, the random source and scoring. It owns
//! score, level and fall speed, advances the falling piece once per frame, and
//! turns discrete commands into board mutations.
//!
//! Every command that can collide is applied first and undone right after when
//! the board reports a collision. A rejected rotation is undone by rotating three
//! more times, which completes a full turn.

use std::fmt;

use log::info;

use crate::board::Board;
use crate::rng::{RandomSource, SimpleRng};
use crate::scoring::{calculate_line_score, level_threshold};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::tetromino::Tetromino;
use crate::types::{GameAction, GRID_WIDTH, INITIAL_FALL_SPEED, LEVEL_SPEEDUP, MOVE_DELAY};

/// Coarse session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Running,
    Paused,
    GameOver,
}

/// Complete game state
pub struct GameState {
    board: Board,
    rng: Box<dyn RandomSource>,
    score: u32,
    level: u32,
    fall_speed: f64,
    fall_progress: f64,
    running: bool,
    paused: bool,
}

impl GameState {
    /// Create a new game with a deterministic LCG seeded with `seed`
    pub fn new(seed: u32) -> Self {
        Self::with_rng(Box::new(SimpleRng::new(seed)))
    }

    /// Create a new game drawing pieces from `rng`. The first piece is spawned immediately.
    pub fn with_rng(rng: Box<dyn RandomSource>) -> Self {
        let mut state = Self {
            board: Board::new(),
            rng,
            score: 0,
            level: 1,
            fall_speed: INITIAL_FALL_SPEED,
            fall_progress: 0.0,
            running: true,
            paused: false,
        };
        state.board.spawn_piece(state.rng.as_mut());
        state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn fall_speed(&self) -> f64 {
        self.fall_speed
    }

    pub fn fall_progress(&self) -> f64 {
        self.fall_progress
    }

    /// False once a quit command has been applied
    pub fn running(&self) -> bool {
        self.running
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.board.game_over()
    }

    pub fn phase(&self) -> GamePhase {
        if self.board.game_over() {
            GamePhase::GameOver
        } else if self.paused {
            GamePhase::Paused
        } else {
            GamePhase::Running
        }
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.board.current_piece().copied()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for scripted setups
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let rows = self.board.cells().chunks(GRID_WIDTH as usize);
        for (dst, src) in out.board.iter_mut().zip(rows) {
            dst.copy_from_slice(src);
        }
        out.active = self.active().map(ActiveSnapshot::from);
        out.score = self.score;
        out.level = self.level;
        out.paused = self.paused;
        out.game_over = self.board.game_over();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Advance one frame. Returns true when the falling piece stepped down or locked.
    ///
    /// Does nothing while paused or after game over.
    pub fn tick(&mut self) -> bool {
        if self.paused || self.board.game_over() || self.board.current_piece().is_none() {
            return false;
        }

        self.fall_progress += self.fall_speed;
        if self.fall_progress < MOVE_DELAY {
            return false;
        }
        self.fall_progress = 0.0;

        if !self.try_move(0, 1) {
            self.lock_and_spawn();
        }
        true
    }

    /// Lock the falling piece, clear lines, score them and spawn the next piece
    fn lock_and_spawn(&mut self) {
        self.board.lock_piece();
        let lines = self.board.clear_lines();
        self.update_score(lines);
        self.board.spawn_piece(self.rng.as_mut());
    }

    /// Add the points for `lines_cleared` and level up at most once.
    ///
    /// Only 1 to 4 lines score. A level up happens when the score reaches
    /// `level * 1000`, and multiplies the fall speed by the speedup factor.
    pub fn update_score(&mut self, lines_cleared: usize) {
        let points = calculate_line_score(lines_cleared, self.level);
        if points == 0 {
            return;
        }
        self.score = self.score.saturating_add(points);

        if self.score >= level_threshold(self.level) {
            self.level += 1;
            self.fall_speed *= LEVEL_SPEEDUP;
            info!(
                "level up: level {} score {} fall speed {:.3}",
                self.level, self.score, self.fall_speed
            );
        }
    }

    /// Try to move the falling piece, undoing the move on collision
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(piece) = self.board.current_piece_mut() else {
            return false;
        };
        piece.move_by(dx, dy);

        if self.board.check_collision() {
            if let Some(piece) = self.board.current_piece_mut() {
                piece.move_by(-dx, -dy);
            }
            return false;
        }
        true
    }

    /// Try to rotate the falling piece clockwise, undoing the rotation on collision
    pub fn try_rotate(&mut self) -> bool {
        let Some(piece) = self.board.current_piece_mut() else {
            return false;
        };
        piece.rotate();

        if self.board.check_collision() {
            if let Some(piece) = self.board.current_piece_mut() {
                for _ in 0..3 {
                    piece.rotate();
                }
            }
            return false;
        }
        true
    }

    /// Reset score, level, speed, flags and board, then spawn a fresh piece.
    pub fn restart(&mut self) {
        info!("restart (final score {}, level {})", self.score, self.level);
        self.board.reset();
        self.score = 0;
        self.level = 1;
        self.fall_speed = INITIAL_FALL_SPEED;
        self.fall_progress = 0.0;
        self.running = true;
        self.paused = false;
        self.board.spawn_piece(self.rng.as_mut());
    }

    /// Apply a game action. Returns false when the action was ignored or rejected.
    ///
    /// Quit is always honored. After game over only Restart is honored. While
    /// paused only Pause is honored.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if action == GameAction::Quit {
            self.running = false;
            return true;
        }

        if self.board.game_over() {
            if action == GameAction::Restart {
                self.restart();
                return true;
            }
            return false;
        }

        if action == GameAction::Pause {
            self.paused = !self.paused;
            return true;
        }
        if self.paused {
            return false;
        }

        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::MoveDown => self.try_move(0, 1),
            GameAction::Rotate => self.try_rotate(),
            GameAction::Pause | GameAction::Restart | GameAction::Quit => false,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameState")
            .field("board", &self.board)
            .field("score", &self.score)
            .field("level", &self.level)
            .field("fall_speed", &self.fall_speed)
            .field("fall_progress", &self.fall_progress)
            .field("running", &self.running)
            .field("paused", &self.paused)
            .finish_non_exhaustive()
    }
}
