//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that is then flushed to a terminal
//! backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep drawing pure so the view can be tested without a terminal
//! - Two terminal columns per board cell to compensate for glyph aspect ratio

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Layout, Viewport, INFO_PANEL_WIDTH};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
