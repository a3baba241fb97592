use crossterm::event::Event as CrosstermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyEventState;
use crossterm::event::KeyModifiers;

use super::handle_crossterm;
use crate::domain::models::Event;

fn key(code: KeyCode, modifiers: KeyModifiers) -> CrosstermEvent {
    return CrosstermEvent::Key(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    });
}

#[test]
fn it_maps_navigation_keys() {
    let cases = [
        (KeyCode::Up, Event::KeyboardUp),
        (KeyCode::Char('k'), Event::KeyboardUp),
        (KeyCode::Down, Event::KeyboardDown),
        (KeyCode::Char('j'), Event::KeyboardDown),
        (KeyCode::Home, Event::KeyboardHome),
        (KeyCode::Char('g'), Event::KeyboardHome),
        (KeyCode::End, Event::KeyboardEnd),
        (KeyCode::Char('G'), Event::KeyboardEnd),
        (KeyCode::Enter, Event::KeyboardEnter),
        (KeyCode::Char('r'), Event::KeyboardRefresh),
    ];

    for (code, expected) in cases {
        assert_eq!(handle_crossterm(key(code, KeyModifiers::NONE)), Some(expected));
    }
}

#[test]
fn it_maps_quit_keys() {
    assert_eq!(
        handle_crossterm(key(KeyCode::Char('q'), KeyModifiers::NONE)),
        Some(Event::KeyboardQuit)
    );
    assert_eq!(
        handle_crossterm(key(KeyCode::Esc, KeyModifiers::NONE)),
        Some(Event::KeyboardQuit)
    );
    assert_eq!(
        handle_crossterm(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Some(Event::KeyboardQuit)
    );
}

#[test]
fn it_passes_unknown_keys_through_as_unhandled() {
    assert_eq!(
        handle_crossterm(key(KeyCode::Char('c'), KeyModifiers::NONE)),
        Some(Event::Unhandled)
    );
    assert_eq!(
        handle_crossterm(key(KeyCode::F(5), KeyModifiers::NONE)),
        Some(Event::Unhandled)
    );
}

#[test]
fn it_ignores_key_releases() {
    let release = CrosstermEvent::Key(KeyEvent {
        code: KeyCode::Down,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    });
    assert_eq!(handle_crossterm(release), None);
}

#[test]
fn it_maps_resizes() {
    assert_eq!(
        handle_crossterm(CrosstermEvent::Resize(80, 24)),
        Some(Event::Resize(80, 24))
    );
    assert_eq!(handle_crossterm(CrosstermEvent::FocusGained), None);
}
