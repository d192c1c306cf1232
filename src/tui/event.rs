//! Terminal input → core `Event`.
//!
//! Only key presses and resizes reach the core. Key repeats and releases
//! (reported by some terminals) are dropped so a single press is never
//! counted twice.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::action::{Event, Key};

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> io::Result<Option<Event>> {
    poll_event_timeout(Duration::ZERO)
}

/// Wait up to `timeout` for the next event the core cares about.
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<Event>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    let raw = event::read()?;
    log::trace!("Terminal event: {:?}", raw);
    Ok(translate(raw))
}

pub fn translate(event: TermEvent) -> Option<Event> {
    match event {
        TermEvent::Key(key_event) => translate_key(key_event).map(Event::KeyPress),
        TermEvent::Resize(width, height) => Some(Event::Resize { width, height }),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<Key> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    if key_event.modifiers.contains(KeyModifiers::CONTROL) {
        return match key_event.code {
            KeyCode::Char('c') => Some(Key::CtrlC),
            _ => None,
        };
    }
    match key_event.code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Esc),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        _ => None,
    }
}
