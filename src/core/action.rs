//! # Events and the reducer
//!
//! Everything that can happen to a session becomes an `Event`: a key press,
//! a terminal resize, or the outcome of a save the host ran for us.
//!
//! `update()` consumes the current session and one event, and hands back the
//! next session plus at most one `Effect` for the host to execute. It does no
//! I/O of its own.
//!
//! ```text
//! Session + Event  →  update()  →  (Session, Option<Effect>)
//! ```
//!
//! Keys that mean nothing in the current state fall through to the default
//! arm and leave the session untouched.

use crate::core::item::Item;
use crate::core::navigation::{self, Direction};
use crate::core::state::{InteractionState, Modal, Notification, Session};

/// Keys as the core understands them. The TUI adapter maps terminal input
/// onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Esc,
    Tab,
    Backspace,
    Up,
    Down,
    Left,
    Right,
    CtrlC,
}

impl Key {
    fn arrow(&self) -> Option<Direction> {
        match self {
            Key::Up => Some(Direction::Up),
            Key::Down => Some(Direction::Down),
            Key::Left => Some(Direction::Left),
            Key::Right => Some(Direction::Right),
            _ => None,
        }
    }

    /// Arrow keys plus the vim letters.
    fn direction(&self) -> Option<Direction> {
        match self {
            Key::Char('k') => Some(Direction::Up),
            Key::Char('j') => Some(Direction::Down),
            Key::Char('h') => Some(Direction::Left),
            Key::Char('l') => Some(Direction::Right),
            other => other.arrow(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    KeyPress(Key),
    Resize { width: u16, height: u16 },
    PersistResult {
        id: u64,
        ok: bool,
        error: Option<String>,
    },
}

/// A snapshot of the store to write out, tagged so the result can be matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistRequest {
    pub id: u64,
    pub items: Vec<Item>,
}

/// Work the host performs on the reducer's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Quit,
    Persist(PersistRequest),
}

pub fn update(mut session: Session, event: Event) -> (Session, Option<Effect>) {
    let effect = match event {
        Event::Resize { width, height } => {
            session.resize(width, height);
            None
        }
        Event::PersistResult { id, ok, error } => {
            persist_finished(&mut session, id, ok, error);
            None
        }
        Event::KeyPress(key) => {
            session.notification = None;
            handle_key(&mut session, key)
        }
    };
    (session, effect)
}

fn handle_key(session: &mut Session, key: Key) -> Option<Effect> {
    match key {
        Key::CtrlC => return Some(Effect::Quit),
        Key::Esc => return escape(session),
        _ => {}
    }

    match session.interaction {
        InteractionState::Browsing => browsing(session, key),
        InteractionState::QueryEditing => query_editing(session, key),
        InteractionState::QueryNavigating => query_navigating(session, key),
        InteractionState::ModalOpen => {
            if key == Key::Enter {
                session.modal = None;
                session.interaction = InteractionState::Browsing;
            }
            None
        }
    }
}

fn escape(session: &mut Session) -> Option<Effect> {
    match session.interaction {
        InteractionState::QueryEditing | InteractionState::QueryNavigating => {
            clear_query(session);
            session.interaction = InteractionState::Browsing;
            None
        }
        InteractionState::ModalOpen => {
            session.modal = None;
            session.interaction = InteractionState::Browsing;
            None
        }
        // A committed filter is cleared before Esc is allowed to quit.
        InteractionState::Browsing if !session.query.is_empty() => {
            clear_query(session);
            None
        }
        InteractionState::Browsing => Some(Effect::Quit),
    }
}

fn browsing(session: &mut Session, key: Key) -> Option<Effect> {
    if let Some(direction) = key.direction() {
        step(session, direction);
        return None;
    }
    match key {
        Key::Tab | Key::Char('/') => {
            session.interaction = InteractionState::QueryEditing;
            None
        }
        Key::Char('a') => {
            open_modal(session, Modal::Add);
            None
        }
        Key::Char('e') => {
            let target = selected_name(session);
            open_modal(session, Modal::Edit { target });
            None
        }
        Key::Char('d') => {
            let target = selected_name(session);
            open_modal(session, Modal::Delete { target });
            None
        }
        Key::Char(' ') => toggle_selected(session),
        _ => None,
    }
}

fn query_editing(session: &mut Session, key: Key) -> Option<Effect> {
    // hjkl are text here; only the real arrow keys move the selection.
    if let Some(direction) = key.arrow() {
        step(session, direction);
        return None;
    }
    match key {
        Key::Char(c) if !c.is_control() => {
            session.query.push(c);
            session.refresh_filter();
        }
        Key::Backspace => {
            if session.query.pop().is_some() {
                session.refresh_filter();
            }
        }
        Key::Enter => session.interaction = InteractionState::Browsing,
        Key::Tab => session.interaction = InteractionState::QueryNavigating,
        _ => {}
    }
    None
}

fn query_navigating(session: &mut Session, key: Key) -> Option<Effect> {
    if let Some(direction) = key.direction() {
        step(session, direction);
        return None;
    }
    match key {
        Key::Tab => {
            session.interaction = InteractionState::QueryEditing;
            None
        }
        Key::Enter => {
            session.interaction = InteractionState::Browsing;
            None
        }
        Key::Char(' ') => toggle_selected(session),
        _ => None,
    }
}

fn step(session: &mut Session, direction: Direction) {
    session.position = navigation::navigate(
        session.position,
        &session.layout,
        session.filtered_len(),
        direction,
    );
}

fn clear_query(session: &mut Session) {
    session.query.clear();
    session.refresh_filter();
}

fn selected_name(session: &Session) -> Option<String> {
    session.selected_item().map(|item| item.name.clone())
}

fn open_modal(session: &mut Session, modal: Modal) {
    session.modal = Some(modal);
    session.interaction = InteractionState::ModalOpen;
}

/// Flip the selected item in place and ask the host to save the store.
fn toggle_selected(session: &mut Session) -> Option<Effect> {
    let index = session.selected_store_index()?;
    let item = &mut session.items[index];
    item.active = !item.active;

    let id = session.next_persist_id;
    session.next_persist_id += 1;
    session.pending_persists.push(id);
    Some(Effect::Persist(PersistRequest {
        id,
        items: session.items.clone(),
    }))
}

/// A failed save is reported but the in-memory toggle stands.
fn persist_finished(session: &mut Session, id: u64, ok: bool, error: Option<String>) {
    let was_pending = match session.pending_persists.iter().position(|&p| p == id) {
        Some(slot) => {
            session.pending_persists.remove(slot);
            true
        }
        None => false,
    };

    if !ok {
        let reason = error.unwrap_or_else(|| "unknown error".to_string());
        session.notification = Some(Notification::error(format!("Save failed: {reason}")));
    } else if was_pending && session.pending_persists.is_empty() {
        session.notification = Some(Notification::info("Inventory saved"));
    }
}
