//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] (plus quit) and
//! polls the terminal without ever blocking the game loop.

pub mod map;
pub mod poll;

pub use blockfall_types as types;

pub use map::{handle_key_event, map_key_event, should_quit, InputEvent};
pub use poll::{InputPoll, TerminalKeys, MAX_EVENTS_PER_FRAME};
