//! The per-frame game loop, minus terminal I/O.
//!
//! One frame: dispatch pending input, feed the elapsed time into the gravity
//! timer and tick gravity when it fires. Rendering and the idle sleep stay
//! with the caller, so the whole loop can be driven from tests with
//! synthetic input and time.

use std::time::Duration;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{error, info};

use crate::core::{GameState, GravityTimer};
use crate::input::InputEvent;
use crate::types::GameAction;

/// Whether the loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Owns the game session and its gravity cadence.
#[derive(Debug, Clone)]
pub struct Runner<R = StdRng> {
    game: GameState<R>,
    gravity: GravityTimer,
}

impl<R: Rng> Runner<R> {
    pub fn new(game: GameState<R>) -> Self {
        Self {
            game,
            gravity: GravityTimer::new(),
        }
    }

    pub fn game(&self) -> &GameState<R> {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut GameState<R> {
        &mut self.game
    }

    pub fn gravity(&self) -> &GravityTimer {
        &self.gravity
    }

    /// Dispatch one input.
    ///
    /// Quit always wins. After game over nothing else is accepted; while
    /// paused only the pause toggle is.
    pub fn handle_input(&mut self, input: InputEvent) -> Flow {
        match input {
            InputEvent::Quit => {
                info!(
                    score = self.game.score(),
                    lines = self.game.lines(),
                    level = self.game.level(),
                    game_over = self.game.game_over(),
                    "quit"
                );
                Flow::Quit
            }
            InputEvent::Action(_) if self.game.game_over() => Flow::Continue,
            InputEvent::Action(GameAction::Pause) => {
                self.game.toggle_pause();
                Flow::Continue
            }
            InputEvent::Action(_) if self.game.paused() => Flow::Continue,
            InputEvent::Action(action) => {
                self.game.apply_action(action);
                Flow::Continue
            }
        }
    }

    /// Accumulate `elapsed` and run a gravity tick if one is due.
    ///
    /// Time does not accumulate while paused or after game over.
    /// Returns true if gravity ticked.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if self.game.paused() || self.game.game_over() {
            return false;
        }

        if self.gravity.advance(elapsed, self.game.level()) {
            self.game.tick_gravity();
            return true;
        }
        false
    }

    /// One loop iteration: all pending input, then gravity.
    pub fn frame(
        &mut self,
        inputs: impl IntoIterator<Item = InputEvent>,
        elapsed: Duration,
    ) -> Flow {
        for input in inputs {
            if self.handle_input(input) == Flow::Quit {
                return Flow::Quit;
            }
        }

        self.advance(elapsed);
        Flow::Continue
    }
}

/// Combine the game loop's outcome with the terminal teardown's.
///
/// Both failures are logged. A loop error wins; otherwise a failed restore is
/// returned so the process exits non-zero.
pub fn finish_session(result: Result<()>, restored: Result<()>) -> Result<()> {
    if let Err(e) = &restored {
        error!(error = %e, "terminal restore failed");
    }
    if let Err(e) = &result {
        error!(error = %e, "game loop failed");
    }
    result.and(restored)
}
