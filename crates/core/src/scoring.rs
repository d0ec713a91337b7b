//! Scoring module - classic line-clear table plus drop bonuses
//!
//! A single lock can earn up to two awards, and they add up:
//! - the line-clear table `{1: 40, 2: 100, 3: 300, 4: 1200} * (level + 1)`,
//!   with larger clears scored as `1200 * lines * (level + 1)`;
//! - a per-line bonus that depends on what locked the piece
//!   (10 for a hard drop, 100 for gravity).
//!
//! Soft drop awards are separate: one point per cell actually descended.
//! The level used is the one in effect *before* the clear is counted.

use crate::types::{LockCause, LINES_PER_LEVEL, LINE_SCORES};

/// Score calculation result for one lock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    /// Points from the line-clear table.
    pub line_clear_score: u32,
    /// Per-line bonus from the drop type.
    pub drop_bonus: u32,
    pub total: u32,
}

/// Line-clear table points
/// lines: number of lines cleared
/// level: current level (1-based)
pub fn line_clear_score(lines: u32, level: u32) -> u32 {
    let multiplier = level.saturating_add(1);
    match lines {
        0 => 0,
        1..=4 => LINE_SCORES[lines as usize].saturating_mul(multiplier),
        n => LINE_SCORES[4].saturating_mul(n).saturating_mul(multiplier),
    }
}

/// Calculate the complete award for a lock that cleared `lines`
pub fn calculate_lock_score(lines: u32, level: u32, cause: LockCause) -> ScoreResult {
    let line_clear_score = line_clear_score(lines, level);
    let drop_bonus = cause.line_bonus().saturating_mul(lines);
    ScoreResult {
        line_clear_score,
        drop_bonus,
        total: line_clear_score.saturating_add(drop_bonus),
    }
}

/// Level as a pure function of total lines cleared
pub fn level_for_lines(lines: u32) -> u32 {
    1 + lines / LINES_PER_LEVEL
}
