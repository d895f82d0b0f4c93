//! Pieces module - shape matrices and the seven tetromino templates
//!
//! A shape is a small rectangular boolean matrix (at most 4x4). Rotation is a
//! pure function from an `R x C` matrix to a `C x R` matrix; there are no
//! per-shape rotation tables and no wall kicks.

use arrayvec::ArrayVec;

use crate::types::{Color, PieceKind, BLUE, CYAN, GREEN, ORANGE, PURPLE, RED, YELLOW};

/// Largest row or column count a shape matrix can have
pub const MAX_SHAPE_DIM: usize = 4;

/// Offset of an occupied sub-cell relative to the shape's top-left corner, as (x, y)
pub type MinoOffset = (i8, i8);

/// Occupied offsets of a shape in row-major order
pub type MinoOffsets = ArrayVec<MinoOffset, { MAX_SHAPE_DIM * MAX_SHAPE_DIM }>;

/// Rectangular boolean matrix of occupied/unoccupied sub-cells.
///
/// Storage outside `rows x cols` is always `false`, so two shapes compare equal
/// exactly when their dimensions and occupied cells match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from a 0/1 matrix.
    pub const fn from_matrix<const R: usize, const C: usize>(matrix: [[u8; C]; R]) -> Self {
        assert!(R > 0 && C > 0 && R <= MAX_SHAPE_DIM && C <= MAX_SHAPE_DIM);

        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let mut y = 0;
        while y < R {
            let mut x = 0;
            while x < C {
                cells[y][x] = matrix[y][x] != 0;
                x += 1;
            }
            y += 1;
        }

        Self {
            rows: R as u8,
            cols: C as u8,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Whether the sub-cell at (x, y) is occupied. Out-of-range reads are empty.
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.cols() && y < self.rows() && self.cells[y][x]
    }

    /// 90° clockwise rotation: `new[i][j] = old[R-1-j][i]`, size `C x R`.
    pub fn rotated_cw(&self) -> Self {
        let r = self.rows();
        let c = self.cols();
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (i, row) in cells.iter_mut().enumerate().take(c) {
            for (j, cell) in row.iter_mut().enumerate().take(r) {
                *cell = self.cells[r - 1 - j][i];
            }
        }

        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }

    /// Occupied sub-cells as (x, y) offsets, row by row.
    pub fn offsets(&self) -> MinoOffsets {
        let mut out = ArrayVec::new();
        for y in 0..self.rows() {
            for x in 0..self.cols() {
                if self.cells[y][x] {
                    out.push((x as i8, y as i8));
                }
            }
        }
        out
    }

    /// Row-major copy of the matrix, for tests and debugging.
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        (0..self.rows())
            .map(|y| self.cells[y][..self.cols()].to_vec())
            .collect()
    }
}

/// Immutable template a piece is spawned from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeTemplate {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Color,
}

/// The seven templates, in `PieceKind::ALL` order.
pub static TEMPLATES: [ShapeTemplate; 7] = [
    ShapeTemplate {
        kind: PieceKind::I,
        shape: Shape::from_matrix([[1, 1, 1, 1]]),
        color: CYAN,
    },
    ShapeTemplate {
        kind: PieceKind::O,
        shape: Shape::from_matrix([[1, 1], [1, 1]]),
        color: YELLOW,
    },
    ShapeTemplate {
        kind: PieceKind::T,
        shape: Shape::from_matrix([[0, 1, 0], [1, 1, 1]]),
        color: PURPLE,
    },
    ShapeTemplate {
        kind: PieceKind::L,
        shape: Shape::from_matrix([[1, 0], [1, 0], [1, 1]]),
        color: ORANGE,
    },
    ShapeTemplate {
        kind: PieceKind::J,
        shape: Shape::from_matrix([[0, 1], [0, 1], [1, 1]]),
        color: BLUE,
    },
    ShapeTemplate {
        kind: PieceKind::S,
        shape: Shape::from_matrix([[0, 1, 1], [1, 1, 0]]),
        color: GREEN,
    },
    ShapeTemplate {
        kind: PieceKind::Z,
        shape: Shape::from_matrix([[1, 1, 0], [0, 1, 1]]),
        color: RED,
    },
];

/// Get the template for a piece kind
pub fn template(kind: PieceKind) -> &'static ShapeTemplate {
    match kind {
        PieceKind::I => &TEMPLATES[0],
        PieceKind::O => &TEMPLATES[1],
        PieceKind::T => &TEMPLATES[2],
        PieceKind::L => &TEMPLATES[3],
        PieceKind::J => &TEMPLATES[4],
        PieceKind::S => &TEMPLATES[5],
        PieceKind::Z => &TEMPLATES[6],
    }
}

/// Get the spawn-orientation shape for a piece kind
pub fn get_shape(kind: PieceKind) -> Shape {
    template(kind).shape
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_follow_kind_order() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(TEMPLATES[i].kind, *kind);
            assert_eq!(template(*kind).color, kind.color());
        }
    }

    #[test]
    fn every_template_has_four_minos() {
        for t in TEMPLATES.iter() {
            assert_eq!(t.shape.offsets().len(), 4, "{:?}", t.kind);
        }
    }

    #[test]
    fn rotate_t_clockwise() {
        // .#.      #.
        // ###  ->  ##
        //          #.
        let t = get_shape(PieceKind::T).rotated_cw();
        assert_eq!(t.rows(), 3);
        assert_eq!(t.cols(), 2);
        assert_eq!(
            t.to_rows(),
            vec![
                vec![true, false],
                vec![true, true],
                vec![true, false],
            ]
        );
    }

    #[test]
    fn rotate_i_swaps_dimensions() {
        let i = get_shape(PieceKind::I);
        let v = i.rotated_cw();
        assert_eq!((v.rows(), v.cols()), (4, 1));
        assert_eq!(v.offsets().as_slice(), &[(0, 0), (0, 1), (0, 2), (0, 3)]);
        assert_eq!(v.rotated_cw(), i);
    }

    #[test]
    fn rotate_l_visits_four_orientations() {
        let l0 = get_shape(PieceKind::L);
        let l1 = l0.rotated_cw();
        let l2 = l1.rotated_cw();
        let l3 = l2.rotated_cw();

        assert_eq!(
            l1.to_rows(),
            vec![vec![true, true, true], vec![true, false, false]]
        );
        assert_ne!(l0, l2);
        assert_ne!(l1, l3);
        assert_eq!(l3.rotated_cw(), l0);
    }

    #[test]
    fn o_rotation_is_identity() {
        let o = get_shape(PieceKind::O);
        assert_eq!(o.rotated_cw(), o);
    }

    #[test]
    fn out_of_range_reads_are_empty() {
        let s = get_shape(PieceKind::S);
        assert!(!s.is_filled(3, 0));
        assert!(!s.is_filled(0, 2));
        assert!(s.is_filled(1, 0));
    }
}
