//! Pieces module - tetromino catalog and matrix rotation
//!
//! Every piece is a small square matrix of cell values. The catalog hands out a
//! fresh matrix per call; rotation mutates that matrix in place, so two spawned
//! pieces never share storage.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::types::{PieceKind, EMPTY_CELL};

/// Largest matrix side used by the catalog (the I piece)
pub const MAX_SHAPE_SIZE: usize = 4;

type Row = ArrayVec<u8, MAX_SHAPE_SIZE>;

/// Square matrix of cell values describing one piece in its current rotation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    rows: ArrayVec<Row, MAX_SHAPE_SIZE>,
}

impl Shape {
    /// Build a shape from literal rows.
    ///
    /// # Panics
    ///
    /// Panics if `N` is larger than [`MAX_SHAPE_SIZE`].
    pub fn from_rows<const N: usize>(rows: [[u8; N]; N]) -> Self {
        assert!(N <= MAX_SHAPE_SIZE, "shape side {} exceeds {}", N, MAX_SHAPE_SIZE);
        Self {
            rows: rows.iter().map(|r| r.iter().copied().collect()).collect(),
        }
    }

    /// Side length of the matrix
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Cell value at local (x, y), `None` outside the matrix
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.rows.iter().map(|r| r.as_slice())
    }

    /// Non-empty cells as `(dx, dy, value)` local offsets
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, u8)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &v)| v != EMPTY_CELL)
                .map(move |(x, &v)| (x as i32, y as i32, v))
        })
    }

    /// Piece kind encoded in the cells
    pub fn kind(&self) -> Option<PieceKind> {
        self.cells().next().and_then(|(_, _, v)| PieceKind::from_cell(v))
    }

    /// Rotate 90° in place.
    ///
    /// Transposes, then mirrors horizontally for clockwise or vertically for
    /// counter-clockwise.
    pub fn rotate(&mut self, clockwise: bool) {
        let n = self.size();
        for y in 0..n {
            for x in 0..y {
                let tmp = self.rows[x][y];
                self.rows[x][y] = self.rows[y][x];
                self.rows[y][x] = tmp;
            }
        }

        if clockwise {
            for row in self.rows.iter_mut() {
                row.reverse();
            }
        } else {
            self.rows.reverse();
        }
    }
}

/// Create a fresh shape matrix for a piece kind
pub fn create_piece(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_rows([
            [0, 1, 0, 0],
            [0, 1, 0, 0],
            [0, 1, 0, 0],
            [0, 1, 0, 0],
        ]),
        PieceKind::L => Shape::from_rows([
            [0, 2, 0],
            [0, 2, 0],
            [0, 2, 2],
        ]),
        PieceKind::J => Shape::from_rows([
            [0, 3, 0],
            [0, 3, 0],
            [3, 3, 0],
        ]),
        PieceKind::O => Shape::from_rows([
            [4, 4],
            [4, 4],
        ]),
        PieceKind::Z => Shape::from_rows([
            [5, 5, 0],
            [0, 5, 5],
            [0, 0, 0],
        ]),
        PieceKind::S => Shape::from_rows([
            [0, 6, 6],
            [6, 6, 0],
            [0, 0, 0],
        ]),
        PieceKind::T => Shape::from_rows([
            [0, 7, 0],
            [7, 7, 7],
            [0, 0, 0],
        ]),
    }
}

/// Horizontal kick offsets tried after a rotation collides.
///
/// The probe steps +1, -2, +3, -4, ... accumulate from the starting column, so
/// the yielded offsets are +1, -1, +2, -2, ... The search stops once the next
/// step would exceed `width`.
pub fn kick_offsets(width: usize) -> impl Iterator<Item = i32> {
    let width = width as i32;
    let mut shift: i32 = 0;
    let mut step: i32 = 1;
    let mut done = false;
    std::iter::from_fn(move || {
        if done {
            return None;
        }
        shift += step;
        step = -(step + step.signum());
        if step > width {
            done = true;
            return None;
        }
        Some(shift)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_piece_has_four_cells_of_its_own_value() {
        for kind in PieceKind::ALL {
            let shape = create_piece(kind);
            let cells: Vec<_> = shape.cells().collect();
            assert_eq!(cells.len(), 4, "{:?}", kind);
            assert!(cells.iter().all(|&(_, _, v)| v == kind.cell_value()));
            assert_eq!(shape.kind(), Some(kind));
        }
    }

    #[test]
    fn shape_sizes() {
        assert_eq!(create_piece(PieceKind::I).size(), 4);
        assert_eq!(create_piece(PieceKind::O).size(), 2);
        for kind in [PieceKind::L, PieceKind::J, PieceKind::Z, PieceKind::S, PieceKind::T] {
            assert_eq!(create_piece(kind).size(), 3);
        }
    }

    #[test]
    fn catalog_returns_independent_matrices() {
        let mut a = create_piece(PieceKind::T);
        let b = create_piece(PieceKind::T);
        a.rotate(true);
        assert_ne!(a, b);
        assert_eq!(b, create_piece(PieceKind::T));
    }

    #[test]
    fn t_rotates_clockwise() {
        let mut t = create_piece(PieceKind::T);
        t.rotate(true);
        assert_eq!(t, Shape::from_rows([[0, 7, 0], [0, 7, 7], [0, 7, 0]]));
    }

    #[test]
    fn t_rotates_counter_clockwise() {
        let mut t = create_piece(PieceKind::T);
        t.rotate(false);
        assert_eq!(t, Shape::from_rows([[0, 7, 0], [7, 7, 0], [0, 7, 0]]));
    }

    #[test]
    fn i_rotates_into_a_row() {
        let mut i = create_piece(PieceKind::I);
        i.rotate(true);
        assert_eq!(
            i,
            Shape::from_rows([[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]])
        );
    }

    #[test]
    fn opposite_rotations_cancel() {
        for kind in PieceKind::ALL {
            let mut shape = create_piece(kind);
            shape.rotate(true);
            shape.rotate(false);
            assert_eq!(shape, create_piece(kind), "{:?}", kind);
        }
    }

    #[test]
    fn kick_offsets_follow_the_probe_sequence() {
        assert_eq!(kick_offsets(4).collect::<Vec<_>>(), vec![1, -1, 2]);
        assert_eq!(kick_offsets(3).collect::<Vec<_>>(), vec![1, -1, 2]);
        assert_eq!(kick_offsets(2).collect::<Vec<_>>(), vec![1]);
    }
}
