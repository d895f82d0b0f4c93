//! The falling piece: its current shape matrix, color and grid position.
//!
//! All operations are unconditional geometric transforms. Validating a new
//! position against the grid (and undoing the transform) is the caller's job.

use crate::pieces::{template, MinoOffsets, Shape};
use crate::rng::RandomSource;
use crate::types::{Color, PieceKind, GRID_WIDTH};

/// Active falling piece
///
/// `x`/`y` locate the top-left corner of the shape matrix in grid coordinates.
/// They may be transiently out of bounds while a move is being checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Color,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino at the spawn position: horizontally centered, row 0
    pub fn new(kind: PieceKind) -> Self {
        let t = template(kind);
        let x = (GRID_WIDTH / 2) as i8 - (t.shape.cols() / 2) as i8;
        Self {
            kind,
            shape: t.shape,
            color: t.color,
            x,
            y: 0,
        }
    }

    /// Create a tetromino of a uniformly chosen kind
    pub fn random(rng: &mut dyn RandomSource) -> Self {
        let kind = PieceKind::ALL[rng.pick(PieceKind::ALL.len())];
        Self::new(kind)
    }

    /// Replace the shape with its 90° clockwise rotation. Position is unchanged.
    pub fn rotate(&mut self) {
        self.shape = self.shape.rotated_cw();
    }

    /// Translate by (dx, dy) without any validation
    pub fn move_by(&mut self, dx: i8, dy: i8) {
        self.x += dx;
        self.y += dy;
    }

    /// Occupied sub-cell offsets relative to (x, y)
    pub fn offsets(&self) -> MinoOffsets {
        self.shape.offsets()
    }

    /// Absolute grid coordinates of every occupied sub-cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.offsets()
            .into_iter()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedSource;

    #[test]
    fn test_tetromino_new() {
        let piece = Tetromino::new(PieceKind::T);

        assert_eq!(piece.kind, PieceKind::T);
        assert_eq!(piece.color, PieceKind::T.color());
        // 10 / 2 - 3 / 2
        assert_eq!(piece.x, 4);
        assert_eq!(piece.y, 0);
    }

    #[test]
    fn test_spawn_column_per_kind() {
        assert_eq!(Tetromino::new(PieceKind::I).x, 3);
        assert_eq!(Tetromino::new(PieceKind::O).x, 4);
        assert_eq!(Tetromino::new(PieceKind::L).x, 4);
        assert_eq!(Tetromino::new(PieceKind::S).x, 4);
    }

    #[test]
    fn test_random_uses_source() {
        let mut rng = ScriptedSource::new(vec![6, 0]);
        assert_eq!(Tetromino::random(&mut rng).kind, PieceKind::Z);
        assert_eq!(Tetromino::random(&mut rng).kind, PieceKind::I);
    }

    #[test]
    fn test_move_by() {
        let mut piece = Tetromino::new(PieceKind::O);
        piece.move_by(1, 0);
        assert_eq!((piece.x, piece.y), (5, 0));
        piece.move_by(0, 1);
        assert_eq!((piece.x, piece.y), (5, 1));
        piece.move_by(-7, -3);
        assert_eq!((piece.x, piece.y), (-2, -2));
    }

    #[test]
    fn test_rotate_keeps_position() {
        let mut piece = Tetromino::new(PieceKind::I);
        piece.rotate();
        assert_eq!((piece.x, piece.y), (3, 0));
        assert_eq!(piece.shape.rows(), 4);
        assert_eq!(piece.shape.cols(), 1);
    }

    #[test]
    fn test_cells_are_absolute() {
        let mut piece = Tetromino::new(PieceKind::O);
        piece.move_by(0, 5);
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells, vec![(4, 5), (5, 5), (4, 6), (5, 6)]);
    }
}
