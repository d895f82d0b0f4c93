//! Board module - owns the grid and the falling piece
//!
//! The grid is 10x20 where each cell is empty or holds the color of the piece
//! that was locked there. Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)
//!
//! Collision treats the side walls and the floor as hard bounds. Rows above the
//! top edge (negative y) are never checked, so a piece may spawn or rotate partly
//! above the visible grid.

use log::{debug, info, trace};

use crate::rng::RandomSource;
use crate::tetromino::Tetromino;
use crate::types::{Cell, Color, PieceKind, GRID_HEIGHT, GRID_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (GRID_WIDTH as usize) * (GRID_HEIGHT as usize);

const WIDTH: usize = GRID_WIDTH as usize;
const HEIGHT: usize = GRID_HEIGHT as usize;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
    current: Option<Tetromino>,
    game_over: bool,
}

impl Board {
    /// Create a new empty board with no active piece
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
            current: None,
            game_over: false,
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= GRID_WIDTH as i8 || y < 0 || y >= GRID_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y).is_some_and(|row| row.iter().all(|cell| cell.is_some()))
    }

    /// One row of cells, or None past the bottom
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= HEIGHT {
            return None;
        }
        let start = y * WIDTH;
        Some(&self.cells[start..start + WIDTH])
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The falling piece, if one has been spawned
    pub fn current_piece(&self) -> Option<&Tetromino> {
        self.current.as_ref()
    }

    pub fn current_piece_mut(&mut self) -> Option<&mut Tetromino> {
        self.current.as_mut()
    }

    /// Set once a freshly spawned piece collides; cleared only by a new board
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Spawn a uniformly random piece at the top center.
    ///
    /// Sets game over if the new piece already collides. Returns false in that case.
    pub fn spawn_piece(&mut self, rng: &mut dyn RandomSource) -> bool {
        self.spawn(Tetromino::random(rng))
    }

    /// Spawn a specific kind at the top center (deterministic variant of `spawn_piece`)
    pub fn spawn_kind(&mut self, kind: PieceKind) -> bool {
        self.spawn(Tetromino::new(kind))
    }

    fn spawn(&mut self, piece: Tetromino) -> bool {
        trace!("spawn {:?} at ({}, {})", piece.kind, piece.x, piece.y);
        self.current = Some(piece);
        if self.check_collision() {
            info!("spawn of {:?} blocked: game over", piece.kind);
            self.game_over = true;
            return false;
        }
        true
    }

    /// Whether the falling piece overlaps a wall, the floor, or a locked cell.
    ///
    /// Returns false when there is no falling piece.
    pub fn check_collision(&self) -> bool {
        match self.current {
            Some(ref piece) => self.collides(piece),
            None => false,
        }
    }

    /// Collision test for an arbitrary piece against this grid
    pub fn collides(&self, piece: &Tetromino) -> bool {
        piece.cells().any(|(x, y)| {
            x < 0
                || x >= GRID_WIDTH as i8
                || y >= GRID_HEIGHT as i8
                || (y >= 0 && self.is_occupied(x, y))
        })
    }

    /// Write the falling piece's color into the grid under each occupied sub-cell.
    ///
    /// The piece must be collision free at its current position. Sub-cells above
    /// the top edge have no grid cell and are dropped.
    pub fn lock_piece(&mut self) {
        let Some(piece) = self.current else {
            return;
        };
        self.lock_cells(&piece);
        debug!("locked {:?} at ({}, {})", piece.kind, piece.x, piece.y);
    }

    fn lock_cells(&mut self, piece: &Tetromino) {
        let color: Color = piece.color;
        for (x, y) in piece.cells() {
            self.set(x, y, Some(color));
        }
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Scans from the bottom. A cleared row is removed and an empty row is inserted
    /// at the top, then the same index is checked again since a new row has slid
    /// into it. The index only moves up past rows that are not full.
    pub fn clear_lines(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = HEIGHT;
        while y > 0 {
            if self.is_row_full(y - 1) {
                self.remove_row(y - 1);
                cleared += 1;
            } else {
                y -= 1;
            }
        }
        if cleared > 0 {
            debug!("cleared {} line(s)", cleared);
        }
        cleared
    }

    /// Delete row `y`, shift everything above it down by one and empty the top row
    fn remove_row(&mut self, y: usize) {
        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..y * WIDTH, WIDTH);
        self.cells[..WIDTH].fill(None);
    }

    /// Empty the grid and drop the falling piece and game-over flag
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Create from a 2D vector for testing (converts to flat array)
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        assert_eq!(rows.len(), HEIGHT);
        assert!(rows.iter().all(|row| row.len() == WIDTH));

        let mut board = Self::new();
        for (y, row) in rows.iter().enumerate() {
            board.cells[y * WIDTH..(y + 1) * WIDTH].copy_from_slice(row);
        }
        board
    }

    /// Convert to 2D vector for testing/display
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.cells.chunks(WIDTH).map(|row| row.to_vec()).collect()
    }

    /// Place a piece without spawning it, for scripted setups
    pub fn set_current_piece(&mut self, piece: Tetromino) {
        self.current = Some(piece);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
