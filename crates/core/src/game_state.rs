//! Game state module - manages the complete game state
//!
//! This module ties together all core components: board, pieces, RNG, and scoring.
//! It sequences spawn -> fall/move/rotate -> lock -> clear -> respawn, and stops
//! for good once a freshly spawned piece overlaps the stack.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

use crate::board::Board;
use crate::pieces::Tetromino;
use crate::rng::PieceRandomizer;
use crate::scoring::{calculate_lock_score, level_for_lines};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{
    GameAction, LockCause, LockEvent, PieceKind, RotateDirection, SOFT_DROP_POINTS, WALL_KICKS,
};

/// Where the game is in its lifecycle.
///
/// `Spawning`, `Locking` and `LineClearing` are transient inside a single
/// call; between calls the game is either `Falling` or `GameOver`. Pause is
/// tracked separately and does not change the phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Spawning,
    Falling,
    Locking,
    LineClearing,
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = StdRng> {
    board: Board,
    active: Tetromino,
    next: PieceKind,
    randomizer: PieceRandomizer<R>,
    phase: Phase,
    /// Last lock/line-clear event (consumed by observers).
    last_event: Option<LockEvent>,
    score: u32,
    level: u32,
    lines: u32,
    paused: bool,
}

impl GameState<StdRng> {
    /// Create a new game with a seeded standard RNG
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameState<R> {
    /// Create a new game drawing pieces from `rng`
    pub fn new(rng: R) -> Self {
        let mut state = Self {
            board: Board::new(),
            // Placeholders, replaced by reset().
            active: Tetromino::spawn(PieceKind::I),
            next: PieceKind::I,
            randomizer: PieceRandomizer::new(rng),
            phase: Phase::Spawning,
            last_event: None,
            score: 0,
            level: 1,
            lines: 0,
            paused: false,
        };
        state.reset();
        state
    }

    /// Start a new game on the same random source.
    ///
    /// Clears the board and counters, draws a next piece and promotes it.
    pub fn reset(&mut self) {
        self.board.clear();
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.paused = false;
        self.last_event = None;
        self.phase = Phase::Spawning;
        self.next = self.randomizer.draw();
        self.spawn();
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn active(&self) -> &Tetromino {
        &self.active
    }

    pub fn next(&self) -> PieceKind {
        self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for setting up positions.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);

        out.active = Some(ActiveSnapshot::from(self.active));
        out.next = self.next;
        out.paused = self.paused;
        out.game_over = self.game_over();
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn can_act(&self) -> bool {
        !self.paused && self.phase != Phase::GameOver
    }

    /// Promote the next piece to active and draw a new next piece.
    ///
    /// Sets game over and returns false if the new piece already collides.
    pub fn spawn(&mut self) -> bool {
        if self.phase == Phase::GameOver {
            return false;
        }

        self.phase = Phase::Spawning;
        self.active = Tetromino::spawn(self.next);
        self.next = self.randomizer.draw();
        trace!(kind = ?self.active.kind, next = ?self.next, "spawned piece");

        if self.board.collides(&self.active) {
            self.phase = Phase::GameOver;
            info!(
                score = self.score,
                lines = self.lines,
                level = self.level,
                "game over"
            );
            return false;
        }

        self.phase = Phase::Falling;
        true
    }

    /// Shift the active piece horizontally; no-op if the target collides.
    pub fn move_horizontal(&mut self, dx: i8) -> bool {
        if !self.can_act() {
            return false;
        }

        let moved = self.active.shifted(dx, 0);
        if self.board.collides(&moved) {
            return false;
        }
        self.active = moved;
        true
    }

    /// Rotate the active piece, trying the flat wall-kick list on collision.
    ///
    /// The first kick offset that fits is committed. If none fits, the piece
    /// keeps its previous matrix and position.
    pub fn rotate(&mut self, direction: RotateDirection) -> bool {
        if !self.can_act() {
            return false;
        }

        let rotated = self.active.rotated(direction);
        if !self.board.collides(&rotated) {
            self.active = rotated;
            return true;
        }

        for dx in WALL_KICKS {
            let kicked = rotated.shifted(dx, 0);
            if !self.board.collides(&kicked) {
                self.active = kicked;
                return true;
            }
        }

        false
    }

    /// Move the active piece down one row if legal.
    ///
    /// Does not award points; see [`GameState::apply_action`].
    pub fn soft_drop(&mut self) -> bool {
        if !self.can_act() {
            return false;
        }

        let down = self.active.shifted(0, 1);
        if self.board.collides(&down) {
            return false;
        }
        self.active = down;
        true
    }

    /// Drop the active piece as far as it goes and lock it.
    ///
    /// Returns the number of lines cleared.
    pub fn hard_drop(&mut self) -> u32 {
        if !self.can_act() {
            return 0;
        }

        loop {
            let down = self.active.shifted(0, 1);
            if self.board.collides(&down) {
                break;
            }
            self.active = down;
        }

        self.lock_active(LockCause::HardDrop)
    }

    /// One gravity step.
    ///
    /// Returns true if the piece moved down. When it cannot, the piece locks,
    /// lines clear, and the next piece spawns (possibly ending the game).
    pub fn tick_gravity(&mut self) -> bool {
        if !self.can_act() {
            return false;
        }

        let down = self.active.shifted(0, 1);
        if !self.board.collides(&down) {
            self.active = down;
            return true;
        }

        self.lock_active(LockCause::Gravity);
        false
    }

    /// Lock the active piece, clear lines, score, and respawn
    fn lock_active(&mut self, cause: LockCause) -> u32 {
        self.phase = Phase::Locking;
        self.board.lock(&self.active);

        self.phase = Phase::LineClearing;
        let cleared = self.board.clear_full_lines();

        // Scored at the level in effect before this clear.
        let result = calculate_lock_score(cleared, self.level, cause);
        self.score = self.score.saturating_add(result.total);

        let previous_level = self.level;
        if cleared > 0 {
            self.lines = self.lines.saturating_add(cleared);
            self.level = level_for_lines(self.lines);
        }
        let leveled_up = self.level != previous_level;

        debug!(
            ?cause,
            lines = cleared,
            points = result.total,
            score = self.score,
            "piece locked"
        );
        if leveled_up {
            info!(level = self.level, lines = self.lines, "level up");
        }

        self.last_event = Some(LockEvent {
            cause,
            lines_cleared: cleared,
            score_awarded: result.total,
            leveled_up,
        });

        self.spawn();
        cleared
    }

    /// Flip the pause flag. Ignored after game over.
    pub fn toggle_pause(&mut self) -> bool {
        if self.phase == Phase::GameOver {
            return false;
        }
        self.paused = !self.paused;
        debug!(paused = self.paused, "pause toggled");
        true
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Pause => self.toggle_pause(),
            GameAction::MoveLeft => self.move_horizontal(-1),
            GameAction::MoveRight => self.move_horizontal(1),
            GameAction::SoftDrop => {
                let moved = self.soft_drop();
                if moved {
                    self.score = self.score.saturating_add(SOFT_DROP_POINTS);
                }
                moved
            }
            GameAction::HardDrop => {
                if !self.can_act() {
                    return false;
                }
                self.hard_drop();
                true
            }
            GameAction::RotateCw => self.rotate(RotateDirection::Clockwise),
            GameAction::RotateCcw => self.rotate(RotateDirection::CounterClockwise),
        }
    }
}

impl Default for GameState<StdRng> {
    fn default() -> Self {
        Self::seeded(1)
    }
}
