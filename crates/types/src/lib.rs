//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation core, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//!
//! # Timing Constants
//!
//! The simulation advances in whole frames rather than milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FPS` | 60 | Target frame rate of the driver loop |
//! | `MOVE_DELAY` | 30.0 | Fall progress needed for one automatic row drop |
//! | `INITIAL_FALL_SPEED` | 0.5 | Fall progress gained per frame at level 1 |
//! | `LEVEL_SPEEDUP` | 0.9 | Fall speed multiplier applied on level up |
//!
//! With the defaults a piece drops one row every 60 frames (one second) at level 1.
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceKind, CYAN, GRID_HEIGHT, GRID_WIDTH};
//!
//! assert_eq!(PieceKind::I.color(), CYAN);
//!
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

/// Grid width in cells (10 columns)
pub const GRID_WIDTH: u8 = 10;

/// Grid height in cells (20 rows)
pub const GRID_HEIGHT: u8 = 20;

/// Target frame rate of the driver loop
pub const FPS: u32 = 60;

/// Fall progress threshold for one automatic downward step
pub const MOVE_DELAY: f64 = 30.0;

/// Fall progress accumulated per frame at the start of a game
pub const INITIAL_FALL_SPEED: f64 = 0.5;

/// Fall speed multiplier applied on every level up (< 1 makes falls faster)
pub const LEVEL_SPEEDUP: f64 = 0.9;

/// Score needed per level: level `n` ends once score reaches `n * LEVEL_SCORE_STEP`
pub const LEVEL_SCORE_STEP: u32 = 1000;

/// Base points for a single line clear
pub const POINTS_SINGLE: u32 = 100;

/// Base points for a double line clear
pub const POINTS_DOUBLE: u32 = 300;

/// Base points for a triple line clear
pub const POINTS_TRIPLE: u32 = 500;

/// Base points for a four line clear
pub const POINTS_TETRIS: u32 = 800;

/// Line clear scoring table indexed by number of lines cleared
///
/// Points are multiplied by the current level. Counts outside 1..=4 score nothing.
pub const LINE_SCORES: [u32; 5] = [0, POINTS_SINGLE, POINTS_DOUBLE, POINTS_TRIPLE, POINTS_TETRIS];

/// 24-bit RGB color of a piece or a locked cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const BLACK: Color = Color::new(0, 0, 0);
pub const WHITE: Color = Color::new(255, 255, 255);
pub const GRAY: Color = Color::new(128, 128, 128);

/// Border wall color
pub const WALL_COLOR: Color = Color::new(169, 169, 169);

/// Play area background color
pub const BACKGROUND: Color = BLACK;

pub const CYAN: Color = Color::new(0, 255, 255);
pub const YELLOW: Color = Color::new(255, 255, 0);
pub const PURPLE: Color = Color::new(128, 0, 128);
pub const ORANGE: Color = Color::new(255, 165, 0);
pub const BLUE: Color = Color::new(0, 0, 255);
pub const GREEN: Color = Color::new(0, 255, 0);
pub const RED: Color = Color::new(255, 0, 0);

/// The seven tetromino piece kinds
///
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **L**: Orange, L-shaped
/// - **J**: Blue, J-shaped (mirror of L)
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// All kinds in template order. Random selection indexes into this.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Palette color for this kind
    pub fn color(&self) -> Color {
        match self {
            PieceKind::I => CYAN,
            PieceKind::O => YELLOW,
            PieceKind::T => PURPLE,
            PieceKind::L => ORANGE,
            PieceKind::J => BLUE,
            PieceKind::S => GREEN,
            PieceKind::Z => RED,
        }
    }
}

/// Discrete commands delivered by the input layer
///
/// Every command is edge-triggered: one key press produces one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    MoveDown,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Toggle pause state
    Pause,
    /// Start a fresh game (only while game over)
    Restart,
    /// Stop the session
    Quit,
}

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(Color)`: Locked cell, holding the color of the piece that filled it
pub type Cell = Option<Color>;
