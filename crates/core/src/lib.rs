//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the simulation: grid, falling piece, collision,
//! locking, line clearing, scoring and level progression. It has **no
//! dependencies** on terminals, input devices or timing sources:
//!
//! - **Deterministic**: piece selection goes through an injected [`RandomSource`]
//! - **Testable**: every rule is reachable through plain method calls
//! - **Portable**: the renderer pulls a [`GameSnapshot`]; the driver pushes commands
//!
//! # Module Structure
//!
//! - [`pieces`]: shape matrices, clockwise rotation, the seven immutable templates
//! - [`tetromino`]: the falling piece (shape, color, position)
//! - [`board`]: 10x20 grid with collision detection, locking and line clearing
//! - [`game_state`]: the session: score, level, fall timing, command handling
//! - [`rng`]: random sources for piece selection
//! - [`scoring`]: line clear points and level thresholds
//! - [`snapshot`]: read-only view for renderers
//!
//! # Game Rules
//!
//! The rules are deliberately plain:
//!
//! - **Random pieces**: every spawn picks one of the seven shapes uniformly
//! - **Naive rotation**: clockwise only, no wall kicks; a blocked rotation is undone
//! - **Scoring**: 100/300/500/800 points for 1-4 lines, times the level
//! - **Levels**: reaching `level * 1000` points raises the level by one and
//!   speeds up falling by a factor of 0.9
//! - **Game over**: a freshly spawned piece collides
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::MoveDown);
//!
//! for _ in 0..60 {
//!     game.tick();
//! }
//! assert!(!game.game_over());
//! assert_eq!(game.score(), 0);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) once per frame. Each
//! frame adds the fall speed to a progress counter; when it reaches
//! `MOVE_DELAY` the piece steps down one row, or locks if it cannot.

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod tetromino;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GamePhase, GameState};
pub use pieces::{get_shape, template, Shape, ShapeTemplate, TEMPLATES};
pub use rng::{PcgSource, RandomSource, ScriptedSource, SimpleRng};
pub use scoring::{calculate_line_score, level_threshold};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use tetromino::Tetromino;
