//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: Same random source produces identical games
//! - **Testable**: Unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, headless)
//!
//! # Module Structure
//!
//! - [`pieces`]: 4x4 tetromino templates and matrix rotation
//! - [`board`]: 10x20 game board with collision detection, locking and line clearing
//! - [`game_state`]: Active/next piece, scoring, leveling and game-over sequencing
//! - [`rng`]: Uniform random piece selection over an injectable source
//! - [`scoring`]: Classic line-clear table plus drop bonuses
//! - [`timing`]: Gravity delay curve and frame-delta accumulator
//! - [`snapshot`]: Plain-data view handed to the renderer
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::GameAction;
//!
//! // Create a game from a seed
//! let mut game = GameState::seeded(12345);
//!
//! // Apply game actions
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::HardDrop);
//!
//! // A single piece cannot clear a line on an empty board
//! assert_eq!(game.lines(), 0);
//! assert_eq!(game.level(), 1);
//! ```
//!
//! # Timing
//!
//! Gravity runs at `max(80, 800 - (level - 1) * 60)` milliseconds per row.
//! Feed frame deltas into a [`GravityTimer`] and call
//! [`GameState::tick_gravity`] whenever it fires.

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod timing;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GameState, Phase};
pub use pieces::{rotate_ccw, rotate_cw, template_for, template_for_id, PieceMatrix, Tetromino};
pub use rng::PieceRandomizer;
pub use scoring::{calculate_lock_score, level_for_lines, line_clear_score, ScoreResult};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use timing::{gravity_delay, gravity_delay_ms, GravityTimer};
