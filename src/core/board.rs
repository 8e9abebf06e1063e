//! Board model: the grid of settled cells.
//!
//! A 10x22 grid stored as a flat array for cache locality, row-major with
//! row 0 at the top. Cells hold the color of a settled piece or `None`.
//! Collision testing, merging and batched line removal all live here; the
//! falling piece itself is owned by the session.

use arrayvec::ArrayVec;

use crate::types::{Cell, Color, BOARD_CELLS, BOARD_HEIGHT, BOARD_WIDTH};

/// The grid of settled cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x).
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_CELLS],
        }
    }

    /// Flat index for (x, y), or `None` when out of bounds.
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Cell at (x, y); `None` when out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set the cell at (x, y). Returns false when out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// True iff any of the given cells is out of bounds or lands on a settled
    /// cell. Bounds are checked before the grid is indexed.
    pub fn has_collision(&self, blocks: &[(i8, i8)]) -> bool {
        blocks.iter().any(|&(x, y)| match Self::index(x, y) {
            Some(idx) => self.cells[idx].is_some(),
            None => true,
        })
    }

    /// Write `color` into every given cell.
    ///
    /// Callers are expected to have collision-checked the cells first;
    /// out-of-bounds entries are skipped rather than indexed.
    pub fn merge(&mut self, blocks: &[(i8, i8)], color: Color) {
        for &(x, y) in blocks {
            self.set(x, y, Some(color));
        }
    }

    /// True iff every cell of row `y` is occupied.
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Indices of all completely filled rows, top to bottom.
    ///
    /// A single lock touches at most four rows, so at most four rows can
    /// complete at once; the result is stack-allocated.
    pub fn full_rows(&self) -> ArrayVec<usize, 4> {
        let mut rows = ArrayVec::new();
        for y in 0..BOARD_HEIGHT as usize {
            if self.is_row_full(y) {
                // Cannot overflow: a full board still has at most 4 rows
                // completed by the last merge, but guard anyway.
                if rows.try_push(y).is_err() {
                    break;
                }
            }
        }
        rows
    }

    /// Remove the given rows in one batch and prepend that many empty rows at
    /// the top. Indices may be in any order; duplicates are undefined. Total
    /// row count and the relative order of surviving rows are preserved.
    pub fn clear_lines(&mut self, rows: &[usize]) {
        if rows.is_empty() {
            return;
        }

        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        // Compact surviving rows toward the bottom, skipping cleared ones.
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if rows.contains(&read_y) {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                let dst = write_y * width;
                self.cells.copy_within(src..src + width, dst);
            }
        }

        // Blank the freed rows at the top.
        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }
    }

    /// True iff any cell of the topmost row is occupied (the loss condition).
    pub fn top_row_occupied(&self) -> bool {
        self.cells[..BOARD_WIDTH as usize]
            .iter()
            .any(|cell| cell.is_some())
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// The flat cell array, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 21), Some(219));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 22), None);
    }

    #[test]
    fn merge_then_get() {
        let mut board = Board::new();
        board.merge(&[(0, 0), (5, 10)], Color::Purple);

        assert_eq!(board.get(0, 0), Some(Some(Color::Purple)));
        assert_eq!(board.get(5, 10), Some(Some(Color::Purple)));
        assert_eq!(board.get(1, 0), Some(None));
    }

    #[test]
    fn collision_checks_bounds_before_grid() {
        let board = Board::new();
        // Every out-of-bounds coordinate collides on an empty board.
        assert!(board.has_collision(&[(-1, 0)]));
        assert!(board.has_collision(&[(10, 0)]));
        assert!(board.has_collision(&[(0, -1)]));
        assert!(board.has_collision(&[(0, 22)]));
        assert!(!board.has_collision(&[(0, 0), (9, 21)]));
    }

    #[test]
    fn full_rows_reports_in_top_down_order() {
        let mut board = Board::new();
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, 21, Some(Color::Cyan));
            board.set(x, 19, Some(Color::Cyan));
        }
        let rows = board.full_rows();
        assert_eq!(rows.as_slice(), &[19, 21]);
    }

    #[test]
    fn clear_lines_drops_rows_above() {
        let mut board = Board::new();
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, 21, Some(Color::Cyan));
        }
        board.set(3, 20, Some(Color::Red));

        board.clear_lines(&[21]);

        // The marker above the cleared row drops by one.
        assert_eq!(board.get(3, 21), Some(Some(Color::Red)));
        assert_eq!(board.get(3, 20), Some(None));
        assert!(board.cells()[..BOARD_WIDTH as usize]
            .iter()
            .all(|c| c.is_none()));
    }

    #[test]
    fn clear_lines_is_order_independent() {
        let mut a = Board::new();
        let mut b = Board::new();
        for board in [&mut a, &mut b] {
            for x in 0..BOARD_WIDTH as i8 {
                board.set(x, 18, Some(Color::Green));
                board.set(x, 20, Some(Color::Green));
            }
            board.set(0, 19, Some(Color::Orange));
        }

        a.clear_lines(&[18, 20]);
        b.clear_lines(&[20, 18]);
        assert_eq!(a, b);
        // The sandwiched marker row survives at the bottom.
        assert_eq!(a.get(0, 21), Some(Some(Color::Orange)));
    }

    #[test]
    fn top_row_occupancy() {
        let mut board = Board::new();
        assert!(!board.top_row_occupied());
        board.set(9, 0, Some(Color::Blue));
        assert!(board.top_row_occupied());
    }
}
