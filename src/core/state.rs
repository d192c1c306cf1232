//! # Session State
//!
//! Everything the reducer reads and writes, in one value.
//!
//! ```text
//! Session
//! ├── items: Vec<Item>              // the full store, unfiltered
//! ├── interaction: InteractionState // Browsing / QueryEditing / ...
//! ├── position: Position            // active column + filtered index
//! ├── query: String                 // live search text
//! ├── visible: Vec<usize>           // store indices matching `query`
//! ├── viewport: Viewport            // last reported terminal size
//! ├── layout: Layout                // derived from viewport.width only
//! ├── modal: Option<Modal>          // set while ModalOpen
//! ├── notification: Option<...>     // transient, dismissed by next key
//! ├── pending_persists: Vec<u64>    // save requests still in flight
//! └── next_persist_id: u64
//! ```
//!
//! Fields are only written by `update()` in action.rs. The helpers here keep
//! the derived fields (`visible`, `layout`, `position`) consistent.

use crate::core::filter::filter_indices;
use crate::core::item::{self, Item};
use crate::core::layout::{Layout, compute_layout};
use crate::core::navigation::{self, Position};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InteractionState {
    #[default]
    Browsing,
    /// Query has focus; printable keys edit it.
    QueryEditing,
    /// Query is frozen; keys drive the filtered list.
    QueryNavigating,
    /// A blocking dialog is shown.
    ModalOpen,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// The stubbed create/edit/delete dialogs. `target` names the item that was
/// selected when the dialog opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    Add,
    Edit { target: Option<String> },
    Delete { target: Option<String> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub items: Vec<Item>,
    pub interaction: InteractionState,
    pub position: Position,
    pub query: String,
    pub visible: Vec<usize>,
    pub viewport: Viewport,
    pub layout: Layout,
    pub modal: Option<Modal>,
    pub notification: Option<Notification>,
    pub pending_persists: Vec<u64>,
    pub next_persist_id: u64,
}

impl Session {
    /// A fresh session with a zero viewport. Renders "Loading..." until the
    /// host reports a size.
    pub fn new(items: Vec<Item>) -> Self {
        let visible = (0..items.len()).collect();
        Self {
            items,
            interaction: InteractionState::default(),
            position: Position::default(),
            query: String::new(),
            visible,
            viewport: Viewport::default(),
            layout: compute_layout(0),
            modal: None,
            notification: None,
            pending_persists: Vec::new(),
            next_persist_id: 1,
        }
    }

    pub fn with_notification(mut self, notification: Notification) -> Self {
        self.notification = Some(notification);
        self
    }

    /// The filtered view, in store order.
    pub fn filtered(&self) -> impl Iterator<Item = &Item> + '_ {
        self.visible.iter().map(|&index| &self.items[index])
    }

    pub fn filtered_len(&self) -> usize {
        self.visible.len()
    }

    /// Store index of the selected entry, if the filtered view has one.
    pub fn selected_store_index(&self) -> Option<usize> {
        self.visible.get(self.position.selected_index).copied()
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.selected_store_index().map(|index| &self.items[index])
    }

    pub fn active_count(&self) -> usize {
        item::active_count(&self.items)
    }

    /// Recompute `visible` from `query`, then re-clamp the selection.
    pub(crate) fn refresh_filter(&mut self) {
        self.visible = filter_indices(&self.items, &self.query);
        self.reclamp();
    }

    /// Record a new terminal size and rebuild the layout from its width.
    pub(crate) fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Viewport { width, height };
        self.layout = compute_layout(width);
        self.reclamp();
    }

    pub(crate) fn reclamp(&mut self) {
        self.position = navigation::clamp(self.position, &self.layout, self.visible.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{numbered_items, test_session};

    #[test]
    fn test_session_new_defaults() {
        let session = test_session();
        assert_eq!(session.interaction, InteractionState::Browsing);
        assert_eq!(session.viewport, Viewport::default());
        assert!(session.viewport.is_empty());
        assert_eq!(session.layout.column_count, 1);
        assert_eq!(session.position, Position::default());
        assert_eq!(session.filtered_len(), session.items.len());
        assert_eq!(session.next_persist_id, 1);
    }

    #[test]
    fn test_refresh_filter_reclamps_selection() {
        let mut session = Session::new(numbered_items(100));
        session.position.selected_index = 50;
        session.query = "item-007".to_string();
        session.refresh_filter();
        assert_eq!(session.filtered_len(), 1);
        assert_eq!(session.position.selected_index, 0);
        assert_eq!(session.selected_item().map(|i| i.name.as_str()), Some("item-007"));
    }

    #[test]
    fn test_selected_item_none_when_filter_empty() {
        let mut session = test_session();
        session.query = "no-such-thing".to_string();
        session.refresh_filter();
        assert_eq!(session.position.selected_index, 0);
        assert!(session.selected_item().is_none());
    }

    #[test]
    fn test_resize_rebuilds_layout_and_clamps_column() {
        let mut session = test_session();
        session.resize(100, 30);
        session.position.active_column = 1;
        session.resize(60, 30);
        assert_eq!(session.layout.column_count, 1);
        assert_eq!(session.position.active_column, 0);
        assert_eq!(session.viewport, Viewport { width: 60, height: 30 });
    }
}
