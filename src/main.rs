//! Terminal runner (default binary).
//!
//! Polls the keyboard without blocking, advances the game by the measured
//! frame time, renders through the framebuffer renderer, then sleeps briefly.

use std::fs::OpenOptions;
use std::sync::Mutex;
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::terminal;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use blockfall::core::{GameSnapshot, GameState};
use blockfall::input::TerminalKeys;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::{finish_session, Config, Flow, Runner};

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(&config)?;

    let game = match config.seed {
        Some(seed) => GameState::seeded(seed),
        None => GameState::new(StdRng::from_entropy()),
    };
    info!(seed = ?config.seed, "starting game");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, Runner::new(game), &config);

    // Always try to restore terminal state.
    let restored = term.exit();
    finish_session(result, restored)
}

fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(config.log_level())
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, mut runner: Runner, config: &Config) -> Result<()> {
    let mut keys = TerminalKeys::new();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut last_frame = Instant::now();

    loop {
        let input = keys.poll()?;
        if input.resized {
            term.invalidate();
        }

        let now = Instant::now();
        let elapsed = now.duration_since(last_frame);
        last_frame = now;

        if runner.frame(input.events, elapsed) == Flow::Quit {
            return Ok(());
        }

        // Render.
        let (w, h) = terminal::size().unwrap_or((80, 24));
        runner.game().snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        thread::sleep(config.frame_interval());
    }
}
