//! Frame loop tests - input dispatch and gravity cadence with synthetic time

use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::anyhow;
use blockfall::core::GameState;
use blockfall::input::InputEvent;
use blockfall::types::{GameAction, PieceKind, BOARD_WIDTH};
use blockfall::{finish_session, Flow, Runner};
use rand::rngs::mock::StepRng;

fn runner() -> Runner<StepRng> {
    Runner::new(GameState::new(StepRng::new(0, 0)))
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_quit_always_stops_the_loop() {
    let mut r = runner();
    assert_eq!(r.handle_input(InputEvent::Quit), Flow::Quit);

    let mut paused = runner();
    paused.handle_input(InputEvent::Action(GameAction::Pause));
    assert_eq!(paused.handle_input(InputEvent::Quit), Flow::Quit);
}

#[test]
fn test_gravity_fires_after_level_delay() {
    let mut r = runner();
    let y = r.game().active().y;

    assert!(!r.advance(ms(799)));
    assert_eq!(r.game().active().y, y);

    assert!(r.advance(ms(1)));
    assert_eq!(r.game().active().y, y + 1);
    assert_eq!(r.gravity().accumulated(), Duration::ZERO);
}

#[test]
fn test_gravity_drops_overshoot() {
    let mut r = runner();
    // A long stall yields a single tick, not a burst.
    assert!(r.advance(ms(5_000)));
    assert_eq!(r.game().active().y, 0);
    assert!(!r.advance(ms(10)));
}

#[test]
fn test_pause_blocks_actions_and_time() {
    let mut r = runner();
    let before = *r.game().active();

    r.handle_input(InputEvent::Action(GameAction::Pause));
    assert!(r.game().paused());
    r.handle_input(InputEvent::Action(GameAction::MoveLeft));
    r.handle_input(InputEvent::Action(GameAction::HardDrop));
    assert!(!r.advance(ms(10_000)));
    assert_eq!(*r.game().active(), before);

    r.handle_input(InputEvent::Action(GameAction::Pause));
    assert!(!r.game().paused());
    // Paused time was not banked.
    assert!(!r.advance(ms(1)));
    assert_eq!(r.gravity().accumulated(), ms(1));

    r.handle_input(InputEvent::Action(GameAction::MoveLeft));
    assert_eq!(r.game().active().x, before.x - 1);
}

#[test]
fn test_frame_dispatches_all_events_then_gravity() {
    let mut r = runner();
    let events = [
        InputEvent::Action(GameAction::MoveRight),
        InputEvent::Action(GameAction::MoveRight),
        InputEvent::Action(GameAction::SoftDrop),
    ];

    assert_eq!(r.frame(events, ms(800)), Flow::Continue);
    assert_eq!(r.game().active().x, 5);
    // One row from the soft drop, one from gravity.
    assert_eq!(r.game().active().y, 1);
    assert_eq!(r.game().score(), 1);
}

#[test]
fn test_frame_stops_at_quit() {
    let mut r = runner();
    let events = [
        InputEvent::Action(GameAction::MoveLeft),
        InputEvent::Quit,
        InputEvent::Action(GameAction::MoveLeft),
    ];

    assert_eq!(r.frame(events, ms(800)), Flow::Quit);
    assert_eq!(r.game().active().x, 2);
    // Gravity does not run on the quitting frame.
    assert_eq!(r.game().active().y, -1);
}

#[test]
fn test_game_over_ignores_everything_but_quit() {
    let mut r = runner();
    for y in 0..2 {
        for x in 1..BOARD_WIDTH as i8 {
            r.game_mut().board_mut().set(x, y, Some(PieceKind::O));
        }
    }
    assert!(!r.game_mut().spawn());
    assert!(r.game().game_over());

    let before = r.game().snapshot();
    assert_eq!(
        r.handle_input(InputEvent::Action(GameAction::Pause)),
        Flow::Continue
    );
    assert!(!r.game().paused());
    assert!(!r.advance(ms(10_000)));
    assert_eq!(r.game().snapshot(), before);

    assert_eq!(r.handle_input(InputEvent::Quit), Flow::Quit);
}

/// Log sink shared between the subscriber and the test.
#[derive(Clone, Default)]
struct LogBuf(Arc<Mutex<Vec<u8>>>);

impl Write for LogBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl LogBuf {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buf = LogBuf::default();
    let writer = buf.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, buf.contents())
}

#[test]
fn test_finish_session_clean_exit() {
    let (out, logs) = capture_logs(|| finish_session(Ok(()), Ok(())));
    assert!(out.is_ok());
    assert!(logs.is_empty());
}

#[test]
fn test_finish_session_reports_failed_terminal_restore() {
    let (out, logs) =
        capture_logs(|| finish_session(Ok(()), Err(anyhow!("raw mode stuck"))));

    let err = out.unwrap_err();
    assert_eq!(err.to_string(), "raw mode stuck");
    assert!(logs.contains("terminal restore failed"), "{logs}");
    assert!(logs.contains("raw mode stuck"), "{logs}");
}

#[test]
fn test_finish_session_prefers_loop_error_but_logs_both() {
    let (out, logs) = capture_logs(|| {
        finish_session(Err(anyhow!("poll failed")), Err(anyhow!("raw mode stuck")))
    });

    assert_eq!(out.unwrap_err().to_string(), "poll failed");
    assert!(logs.contains("game loop failed"), "{logs}");
    assert!(logs.contains("terminal restore failed"), "{logs}");
}
