//! Non-blocking keyboard polling.
//!
//! Reads whatever crossterm has buffered with a zero timeout and never waits
//! for a key. Release events are dropped; auto-repeat counts as a press.

use std::io;
use std::time::Duration;

use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::{map_key_event, InputEvent};

/// Upper bound on events consumed per frame. Extra keys wait for the next one.
pub const MAX_EVENTS_PER_FRAME: usize = 8;

/// Result of one poll.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputPoll {
    pub events: ArrayVec<InputEvent, MAX_EVENTS_PER_FRAME>,
    /// The terminal was resized; the next frame should redraw fully.
    pub resized: bool,
}

impl InputPoll {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && !self.resized
    }
}

/// Keyboard reader backed by the process terminal.
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl TerminalKeys {
    pub fn new() -> Self {
        Self
    }

    /// Drain pending terminal events without blocking.
    pub fn poll(&mut self) -> io::Result<InputPoll> {
        let mut out = InputPoll::default();

        while !out.events.is_full() && event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Release {
                        continue;
                    }
                    if let Some(input) = map_key_event(key) {
                        out.events.push(input);
                    }
                }
                Event::Resize(_, _) => out.resized = true,
                _ => {}
            }
        }

        Ok(out)
    }
}
