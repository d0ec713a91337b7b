//! Shared vocabulary for every blockfall crate.
//!
//! Constants, piece kinds, player actions and lock events. Nothing here
//! depends on the game rules or on the terminal.
//!
//! # Board Dimensions
//!
//! The playfield is fixed at 10 columns by 20 rows. Pieces live in a 4x4
//! matrix whose top-left corner (the anchor) spawns at column
//! `BOARD_WIDTH / 2 - 2` and row `-1`, so the first row of a template starts
//! hidden above the visible board.
//!
//! # Gravity
//!
//! | Constant | ms | Meaning |
//! |---|---|---|
//! | `BASE_GRAVITY_MS` | 800 | Delay between gravity ticks at level 1 |
//! | `GRAVITY_STEP_MS` | 60 | Delay removed per level |
//! | `GRAVITY_FLOOR_MS` | 80 | Fastest gravity |
//! | `FRAME_IDLE_MS` | 10 | Sleep between loop iterations |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::T.id(), 6);
//! assert_eq!(PieceKind::from_id(6), Some(PieceKind::T));
//! assert_eq!(usize::from(BOARD_WIDTH) * usize::from(BOARD_HEIGHT), 200);
//! ```

/// Playfield columns
pub const BOARD_WIDTH: u8 = 10;

/// Playfield rows
pub const BOARD_HEIGHT: u8 = 20;

/// Side length of the square piece matrix
pub const PIECE_SIZE: usize = 4;

/// Number of cells in a piece matrix (row-major)
pub const PIECE_CELLS: usize = PIECE_SIZE * PIECE_SIZE;

/// Spawn anchor column (horizontally centred 4x4 matrix)
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8 - (PIECE_SIZE / 2) as i8;

/// Spawn anchor row (one row above the visible board)
pub const SPAWN_Y: i8 = -1;

/// Gravity delay at level 1
pub const BASE_GRAVITY_MS: u32 = 800;

/// Gravity delay removed per level above 1
pub const GRAVITY_STEP_MS: u32 = 60;

/// Gravity never gets faster than this
pub const GRAVITY_FLOOR_MS: u32 = 80;

/// Idle sleep between loop iterations
pub const FRAME_IDLE_MS: u64 = 10;

/// Lines needed per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Points per cell of successful soft drop
pub const SOFT_DROP_POINTS: u32 = 1;

/// Per-line bonus when a hard drop clears lines
pub const HARD_DROP_LINE_BONUS: u32 = 10;

/// Per-line bonus when a gravity lock clears lines
pub const GRAVITY_LINE_BONUS: u32 = 100;

/// Horizontal offsets tried, in order, when a rotation collides.
///
/// This is a flat list shared by all pieces, not a per-piece kick table.
pub const WALL_KICKS: [i8; 4] = [-1, 1, -2, 2];

/// Base points indexed by lines cleared in one lock (0..=4).
///
/// Multiplied by `level + 1`; clears beyond 4 lines score
/// `1200 * lines * (level + 1)`.
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Piece shapes
///
/// Declared in template order; [`PieceKind::id`] is the 1-based index
/// stored in board cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds, in id order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Type identifier in `1..=7`
    pub fn id(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::J => 2,
            PieceKind::L => 3,
            PieceKind::O => 4,
            PieceKind::S => 5,
            PieceKind::T => 6,
            PieceKind::Z => 7,
        }
    }

    /// Inverse of [`PieceKind::id`]
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_id(1), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_id(4), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_id(0), None);
    /// ```
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1..=7 => Some(Self::ALL[(id - 1) as usize]),
            _ => None,
        }
    }
}

/// Direction of a 90° rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotateDirection {
    Clockwise,
    CounterClockwise,
}

/// Player commands understood by the game state.
///
/// Quit is handled by the loop and has no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    /// One row down, one point if it moved
    SoftDrop,
    /// Straight to the floor, then lock
    HardDrop,
    RotateCw,
    RotateCcw,
    Pause,
}

/// What caused the active piece to lock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockCause {
    /// Gravity tick found the piece resting
    Gravity,
    /// Player hard-dropped the piece
    HardDrop,
}

impl LockCause {
    /// Per-line bonus awarded on top of the line-clear table
    pub fn line_bonus(&self) -> u32 {
        match self {
            LockCause::Gravity => GRAVITY_LINE_BONUS,
            LockCause::HardDrop => HARD_DROP_LINE_BONUS,
        }
    }
}

/// Outcome of the most recent lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub cause: LockCause,
    pub lines_cleared: u32,
    /// Total points awarded by this lock (line table plus drop bonus).
    pub score_awarded: u32,
    pub leveled_up: bool,
}

/// Board cell: `None` when empty, otherwise the kind that locked there
pub type Cell = Option<PieceKind>;
