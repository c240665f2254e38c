//! Board module - manages the game grid
//!
//! The board is a fixed-size grid of cell values (`0` empty, `1..=7` locked
//! blocks). Storage is a flat row-major array for cache locality.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//! Dimensions never change after creation.

use crate::pieces::Shape;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, EMPTY_CELL};

/// The game board, `width` columns by `height` rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<u8>,
}

impl Board {
    /// Create an empty board of the given size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![EMPTY_CELL; width * height],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<u8> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, value: u8) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// One row, left to right
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|&v| v != EMPTY_CELL))
            .unwrap_or(false)
    }

    /// Whether a board cell blocks a piece cell at (x, y).
    ///
    /// Cells above the top edge never block, which is what lets pieces spawn
    /// partially outside the board. Cells left, right or below the grid
    /// always block.
    fn blocks(&self, x: i32, y: i32) -> bool {
        if y < 0 {
            return x < 0 || x as usize >= self.width;
        }
        match self.get(x, y) {
            Some(v) => v != EMPTY_CELL,
            None => true,
        }
    }

    /// Check whether `shape` placed with its top-left corner at (x, y)
    /// overlaps a wall, the floor or a locked block
    pub fn collides(&self, shape: &Shape, x: i32, y: i32) -> bool {
        shape.cells().any(|(dx, dy, _)| self.blocks(x + dx, y + dy))
    }

    /// Write every non-empty cell of `shape` into the board.
    ///
    /// Callers only freeze pieces that do not collide; cells that would land
    /// outside the grid are skipped.
    pub fn freeze(&mut self, shape: &Shape, x: i32, y: i32) {
        for (dx, dy, value) in shape.cells() {
            self.set(x + dx, y + dy, value);
        }
    }

    /// Remove every full row, shifting the rows above down and filling the
    /// top with empty rows. Returns the number of rows removed.
    ///
    /// Full rows are found first, then the survivors are compacted towards the
    /// bottom in a single pass, so no row is skipped when several collapse.
    pub fn sweep(&mut self) -> usize {
        let full: Vec<bool> = (0..self.height).map(|y| self.is_row_full(y)).collect();
        let cleared = full.iter().filter(|&&f| f).count();
        if cleared == 0 {
            return 0;
        }

        let width = self.width;
        let mut write_y = self.height;
        for read_y in (0..self.height).rev() {
            if full[read_y] {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(EMPTY_CELL);
        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|&&v| v != EMPTY_CELL).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY_CELL);
    }

    /// Copy the board into a fixed-size grid (the main board's dimensions).
    ///
    /// Rows or columns that do not fit are left untouched.
    pub fn write_u8_grid(
        &self,
        out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    ) {
        let w = self.width.min(BOARD_WIDTH as usize);
        for (y, dst) in out.iter_mut().enumerate().take(self.height) {
            let start = y * self.width;
            dst[..w].copy_from_slice(&self.cells[start..start + w]);
        }
    }

    /// Build a board from literal rows (top to bottom)
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len();
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        let mut board = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.iter().enumerate().take(width) {
                board.cells[y * width + x] = v;
            }
        }
        board
    }
}

impl Default for Board {
    /// The standard 10x20 playfield
    fn default() -> Self {
        Self::new(BOARD_WIDTH as usize, BOARD_HEIGHT as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::create_piece;
    use crate::types::PieceKind;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::default();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
    }

    #[test]
    fn test_cells_above_top_do_not_block() {
        let board = Board::default();
        assert!(!board.blocks(4, -1));
        assert!(board.blocks(-1, -1));
        assert!(board.blocks(10, -3));
        assert!(board.blocks(4, 20));
    }

    #[test]
    fn test_sweep_two_separated_rows() {
        let rows: [&[u8]; 4] = [&[0, 0, 0, 0], &[1, 1, 1, 1], &[2, 0, 0, 0], &[3, 3, 3, 3]];
        let mut board = Board::from_rows(&rows);

        assert_eq!(board.sweep(), 2);
        assert_eq!(board.row(0), Some(&[0, 0, 0, 0][..]));
        assert_eq!(board.row(1), Some(&[0, 0, 0, 0][..]));
        assert_eq!(board.row(2), Some(&[0, 0, 0, 0][..]));
        assert_eq!(board.row(3), Some(&[2, 0, 0, 0][..]));
        assert_eq!(board.height(), 4);
    }

    #[test]
    fn test_freeze_skips_cells_outside() {
        let mut board = Board::new(4, 4);
        board.freeze(&create_piece(PieceKind::O), 3, 3);
        assert_eq!(board.get(3, 3), Some(4));
        assert_eq!(board.occupied(), 1);
    }

    #[test]
    fn test_write_u8_grid() {
        let mut board = Board::default();
        board.set(2, 19, 6);
        let mut grid = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        board.write_u8_grid(&mut grid);
        assert_eq!(grid[19][2], 6);
        assert_eq!(grid.iter().flatten().filter(|&&v| v != 0).count(), 1);
    }
}
