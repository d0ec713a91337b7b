//! The playfield: a 10x20 grid of locked cells.
//!
//! Cells are stored row-major in one flat array, `y * 10 + x`, with row 0 at
//! the top. A falling piece may hang above the board (negative rows); those
//! cells are never checked against occupancy and never written.

use crate::pieces::Tetromino;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const COLS: usize = BOARD_WIDTH as usize;
const ROWS: usize = BOARD_HEIGHT as usize;

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    cells: [Cell; COLS * ROWS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [None; COLS * ROWS],
        }
    }

    /// Flat index of an in-bounds coordinate
    #[inline]
    fn index(x: i8, y: i8) -> Option<usize> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        (x < COLS && y < ROWS).then_some(y * COLS + x)
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// `None` off the board, `Some(cell)` on it.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|i| self.cells[i])
    }

    /// Returns false (and writes nothing) off the board.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        let Some(i) = Self::index(x, y) else {
            return false;
        };
        self.cells[i] = cell;
        true
    }

    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        self.get(x, y).flatten().is_some()
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        y < ROWS && self.row(y).iter().all(Option::is_some)
    }

    fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y * COLS..(y + 1) * COLS]
    }

    /// Whether `piece` is out of bounds or overlaps locked cells.
    ///
    /// Columns must lie in `[0, W)` and rows below `H`. Rows above the board
    /// (negative) are legal and never checked for occupancy.
    pub fn collides(&self, piece: &Tetromino) -> bool {
        piece.cells().any(|(x, y)| {
            x < 0
                || x >= BOARD_WIDTH as i8
                || y >= BOARD_HEIGHT as i8
                || (y >= 0 && self.is_occupied(x, y))
        })
    }

    /// Write the piece's kind into every in-bounds cell it covers.
    ///
    /// Cells outside the board (typically rows above the top) are skipped.
    pub fn lock(&mut self, piece: &Tetromino) {
        for (x, y) in piece.cells() {
            self.set(x, y, Some(piece.kind));
        }
    }

    /// Drop row `y`: everything above slides down one row and the top row
    /// comes in empty.
    fn remove_row(&mut self, y: usize) {
        self.cells.copy_within(0..y * COLS, COLS);
        self.cells[..COLS].fill(None);
    }

    /// Clear every full row and return how many were removed.
    ///
    /// Scans bottom to top. After a removal the same row index is checked again,
    /// since the row that slid into it may be full as well.
    pub fn clear_full_lines(&mut self) -> u32 {
        let mut cleared = 0;
        let mut y = ROWS;

        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                self.remove_row(row);
                cleared += 1;
            } else {
                y -= 1;
            }
        }

        cleared
    }

    /// Copy the grid out as type ids (0 = empty) for snapshots.
    pub fn write_u8_grid(&self, out: &mut [[u8; COLS]; ROWS]) {
        for (y, row) in out.iter_mut().enumerate() {
            for (v, cell) in row.iter_mut().zip(self.row(y)) {
                *v = cell.map_or(0, |k| k.id());
            }
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Fill row `y` with `kind`. No-op off the board.
    ///
    /// Setup helper for building positions in tests and benchmarks; gameplay
    /// only writes cells through [`Board::lock`].
    pub fn fill_row(&mut self, y: i8, kind: PieceKind) {
        for x in 0..BOARD_WIDTH as i8 {
            self.set(x, y, Some(kind));
        }
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
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_remove_row_shifts_rows_above() {
        let mut board = Board::new();
        board.set(2, 0, Some(PieceKind::T));
        board.set(4, 5, Some(PieceKind::L));
        board.fill_row(6, PieceKind::I);

        board.remove_row(6);

        assert_eq!(board.get(2, 1), Some(Some(PieceKind::T)));
        assert_eq!(board.get(4, 6), Some(Some(PieceKind::L)));
        assert!(!board.is_row_full(6));
        assert!((0..10).all(|x| board.get(x, 0) == Some(None)));
    }

    #[test]
    fn test_u8_grid_export_uses_piece_ids() {
        let mut board = Board::new();
        board.set(0, 19, Some(PieceKind::Z));
        board.set(9, 0, Some(PieceKind::I));

        let mut grid = [[0u8; COLS]; ROWS];
        board.write_u8_grid(&mut grid);

        assert_eq!(grid[19][0], 7);
        assert_eq!(grid[0][9], 1);
        assert_eq!(grid[10][5], 0);
    }
}
