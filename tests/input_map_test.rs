use blockfall::input::{map_key_event, InputEvent, InputPoll};
use blockfall::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> Option<InputEvent> {
    map_key_event(KeyEvent::from(code))
}

#[test]
fn every_action_has_a_key() {
    let bound = [
        (KeyCode::Left, GameAction::MoveLeft),
        (KeyCode::Right, GameAction::MoveRight),
        (KeyCode::Down, GameAction::SoftDrop),
        (KeyCode::Char(' '), GameAction::HardDrop),
        (KeyCode::Up, GameAction::RotateCw),
        (KeyCode::Char('z'), GameAction::RotateCcw),
        (KeyCode::Char('p'), GameAction::Pause),
    ];
    for (code, action) in bound {
        assert_eq!(key(code), Some(InputEvent::Action(action)), "{code:?}");
    }
}

#[test]
fn quit_keys() {
    assert_eq!(key(KeyCode::Char('q')), Some(InputEvent::Quit));
    assert_eq!(key(KeyCode::Char('Q')), Some(InputEvent::Quit));
    assert_eq!(
        map_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Some(InputEvent::Quit)
    );
    // Plain 'c' is not bound.
    assert_eq!(key(KeyCode::Char('c')), None);
}

#[test]
fn unbound_keys_are_ignored() {
    for code in [KeyCode::Enter, KeyCode::Esc, KeyCode::Tab, KeyCode::Char('a')] {
        assert_eq!(key(code), None, "{code:?}");
    }
}

#[test]
fn empty_poll_has_no_events() {
    let poll = InputPoll::default();
    assert!(poll.is_empty());
    assert!(!poll.resized);
}
