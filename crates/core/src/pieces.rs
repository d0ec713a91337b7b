//! Pieces module - Tetromino templates and matrix rotation
//!
//! Every piece lives in a fixed 4x4 matrix stored row-major as `[u8; 16]`.
//! A cell holds the piece's type id (1..=7) or 0 for empty. Rotation is a pure
//! transform over a full copy of the matrix; applying it four times in the same
//! direction yields the starting matrix.

use crate::types::{PieceKind, RotateDirection, PIECE_CELLS, PIECE_SIZE, SPAWN_X, SPAWN_Y};

/// Row-major 4x4 piece matrix
pub type PieceMatrix = [u8; PIECE_CELLS];

/// Base shapes, indexed by `PieceKind::id() - 1`
#[rustfmt::skip]
const TEMPLATES: [PieceMatrix; 7] = [
    // I
    [0, 0, 0, 0,
     1, 1, 1, 1,
     0, 0, 0, 0,
     0, 0, 0, 0],
    // J
    [2, 0, 0, 0,
     2, 2, 2, 0,
     0, 0, 0, 0,
     0, 0, 0, 0],
    // L
    [0, 0, 3, 0,
     3, 3, 3, 0,
     0, 0, 0, 0,
     0, 0, 0, 0],
    // O
    [0, 4, 4, 0,
     0, 4, 4, 0,
     0, 0, 0, 0,
     0, 0, 0, 0],
    // S
    [0, 5, 5, 0,
     5, 5, 0, 0,
     0, 0, 0, 0,
     0, 0, 0, 0],
    // T
    [0, 6, 0, 0,
     6, 6, 6, 0,
     0, 0, 0, 0,
     0, 0, 0, 0],
    // Z
    [7, 7, 0, 0,
     0, 7, 7, 0,
     0, 0, 0, 0,
     0, 0, 0, 0],
];

/// Base shape for a piece kind
pub fn template_for(kind: PieceKind) -> &'static PieceMatrix {
    &TEMPLATES[(kind.id() - 1) as usize]
}

/// Base shape for a raw type id.
///
/// # Panics
///
/// Panics if `id` is not in `1..=7`.
pub fn template_for_id(id: u8) -> &'static PieceMatrix {
    assert!((1..=7).contains(&id), "piece type id out of range: {id}");
    &TEMPLATES[(id - 1) as usize]
}

/// Rotate a matrix 90° clockwise: source (r, c) lands on (c, N-1-r)
pub fn rotate_cw(matrix: &PieceMatrix) -> PieceMatrix {
    let mut out = [0u8; PIECE_CELLS];
    for r in 0..PIECE_SIZE {
        for c in 0..PIECE_SIZE {
            out[c * PIECE_SIZE + (PIECE_SIZE - 1 - r)] = matrix[r * PIECE_SIZE + c];
        }
    }
    out
}

/// Rotate a matrix 90° counter-clockwise: source (r, c) lands on (N-1-c, r)
pub fn rotate_ccw(matrix: &PieceMatrix) -> PieceMatrix {
    let mut out = [0u8; PIECE_CELLS];
    for r in 0..PIECE_SIZE {
        for c in 0..PIECE_SIZE {
            out[(PIECE_SIZE - 1 - c) * PIECE_SIZE + r] = matrix[r * PIECE_SIZE + c];
        }
    }
    out
}

/// Rotate in the given direction
pub fn rotate(matrix: &PieceMatrix, direction: RotateDirection) -> PieceMatrix {
    match direction {
        RotateDirection::Clockwise => rotate_cw(matrix),
        RotateDirection::CounterClockwise => rotate_ccw(matrix),
    }
}

/// Iterate the occupied `(col, row)` offsets of a matrix
pub fn occupied_offsets(matrix: &PieceMatrix) -> impl Iterator<Item = (i8, i8)> + '_ {
    matrix
        .iter()
        .enumerate()
        .filter(|&(_, &v)| v != 0)
        .map(|(i, _)| ((i % PIECE_SIZE) as i8, (i / PIECE_SIZE) as i8))
}

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    /// Current rotation state (a mutable copy of the template)
    pub matrix: PieceMatrix,
    /// Anchor column of the matrix's top-left corner
    pub x: i8,
    /// Anchor row of the matrix's top-left corner (may be negative)
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino from its template at the spawn anchor
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            matrix: *template_for(kind),
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Absolute board coordinates `(x, y)` of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        occupied_offsets(&self.matrix).map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Copy shifted by `(dx, dy)`
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Copy with the matrix rotated
    pub fn rotated(&self, direction: RotateDirection) -> Self {
        Self {
            matrix: rotate(&self.matrix, direction),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_carry_their_own_id() {
        for kind in PieceKind::ALL {
            let t = template_for(kind);
            assert_eq!(occupied_offsets(t).count(), 4, "{kind:?} must have 4 minos");
            assert!(t.iter().all(|&v| v == 0 || v == kind.id()));
        }
    }

    #[test]
    fn cw_moves_top_left_to_top_right() {
        let mut m = [0u8; PIECE_CELLS];
        m[0] = 9;
        let r = rotate_cw(&m);
        assert_eq!(r[3], 9);
        assert_eq!(r.iter().filter(|&&v| v != 0).count(), 1);
    }

    #[test]
    fn ccw_moves_top_left_to_bottom_left() {
        let mut m = [0u8; PIECE_CELLS];
        m[0] = 9;
        let r = rotate_ccw(&m);
        assert_eq!(r[12], 9);
    }

    #[test]
    fn cw_then_ccw_is_identity() {
        for kind in PieceKind::ALL {
            let t = template_for(kind);
            assert_eq!(&rotate_ccw(&rotate_cw(t)), t);
        }
    }

    #[test]
    fn spawned_piece_cells_are_offset_by_anchor() {
        let piece = Tetromino::spawn(PieceKind::I);
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells, vec![(3, 0), (4, 0), (5, 0), (6, 0)]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn template_for_id_rejects_zero() {
        let _ = template_for_id(0);
    }
}
