//! # View Projection
//!
//! Turns a `Session` into text. Nothing here decides anything: the filtered
//! list, layout and selection all come from the session as the reducer left
//! it.
//!
//! `render()` produces a plain-text frame. The ratatui adapter draws the same
//! pieces (`key_hints`, `status_line`, `list_cells`, `grid_cells`, ...) with
//! colour and borders on top.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::item::Item;
use crate::core::layout::{GRID_COLUMNS, LayoutMode};
use crate::core::state::{InteractionState, Modal, NotificationLevel, Session};

pub const LOADING_TEXT: &str = "Loading...";
pub const TITLE: &str = "MCP Hub";

/// One rendered entry of the filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell<'a> {
    pub item: &'a Item,
    pub selected: bool,
}

impl Cell<'_> {
    pub fn label(&self) -> String {
        let cursor = if self.selected { ">" } else { " " };
        format!("{} {} {}", cursor, self.item.marker(), self.item.name)
    }
}

pub fn key_hints(session: &Session) -> &'static str {
    match session.interaction {
        InteractionState::Browsing => {
            "a=Add • d=Delete • e=Edit • Space=Toggle • /=Search • Tab=Focus Search • ESC=Exit • ↑↓←→=Navigate"
        }
        InteractionState::QueryEditing => {
            "Type to search • Tab=Navigate Mode • ↑↓←→=Navigate • Enter=Apply • ESC=Cancel"
        }
        InteractionState::QueryNavigating => {
            "Navigate Mode • Tab=Input Mode • ↑↓←→/hjkl=Navigate • Space=Toggle • Enter=Apply • ESC=Cancel"
        }
        InteractionState::ModalOpen => "Enter=Confirm • ESC=Cancel",
    }
}

/// Counter over the whole store, not the filtered view.
pub fn status_line(session: &Session) -> String {
    format!(
        "MCPs: {}/{} Active • Layout: {}",
        session.active_count(),
        session.items.len(),
        session.layout.mode.name()
    )
}

pub fn footer_text(session: &Session) -> String {
    match session.interaction {
        InteractionState::QueryEditing => format!("Search: {}_", session.query),
        InteractionState::QueryNavigating => {
            format!("Search: {} [NAVIGATION MODE]", session.query)
        }
        _ if !session.query.is_empty() => format!(
            "Found {} MCPs matching '{}' • Esc to clear",
            session.filtered_len(),
            session.query
        ),
        _ => format!(
            "Terminal: {}x{} • Tab or / to search • Space to toggle",
            session.viewport.width, session.viewport.height
        ),
    }
}

pub fn notification_text(session: &Session) -> Option<String> {
    session.notification.as_ref().map(|n| match n.level {
        NotificationLevel::Info => format!("✓ {}", n.message),
        NotificationLevel::Error => format!("✗ {}", n.message),
    })
}

/// Shown instead of the list when there is nothing to list.
pub fn empty_message(session: &Session) -> Option<String> {
    if session.items.is_empty() {
        Some("No MCPs configured".to_string())
    } else if session.visible.is_empty() {
        Some(format!("No MCPs match '{}'", session.query))
    } else {
        None
    }
}

pub fn list_cells(session: &Session) -> Vec<Cell<'_>> {
    let selected = session.position.selected_index;
    session
        .filtered()
        .enumerate()
        .map(|(index, item)| Cell {
            item,
            selected: index == selected,
        })
        .collect()
}

/// Row-major grid of the filtered list, padded with empty cells up to the
/// layout's row count.
pub fn grid_cells(session: &Session) -> Vec<Vec<Option<Cell<'_>>>> {
    let mut cells = list_cells(session).into_iter();
    let rows = session.layout.grid_row_count(session.filtered_len());
    (0..rows)
        .map(|_| (0..GRID_COLUMNS).map(|_| cells.next()).collect())
        .collect()
}

/// Right-hand panel of the two-column layout.
pub fn details_lines(session: &Session) -> Vec<String> {
    let Some(item) = session.selected_item() else {
        return vec!["No MCP selected".to_string()];
    };
    let mut lines = vec![
        format!("Name: {}", item.name),
        format!("Type: {}", item.category.label()),
        format!("Status: {}", if item.active { "Active" } else { "Inactive" }),
        String::new(),
        "Launch:".to_string(),
        format!("  {}", item.launch.summary()),
    ];
    if !item.launch.env.is_empty() {
        lines.push(String::new());
        lines.push("Environment:".to_string());
        lines.extend(item.launch.env.keys().map(|key| format!("  {key}")));
    }
    lines
}

pub fn modal_title(modal: &Modal) -> &'static str {
    match modal {
        Modal::Add => " Add MCP ",
        Modal::Edit { .. } => " Edit MCP ",
        Modal::Delete { .. } => " Delete MCP ",
    }
}

pub fn modal_body(modal: &Modal) -> String {
    match modal {
        Modal::Add => "Add a new MCP server to the inventory.".to_string(),
        Modal::Edit { target: Some(name) } => format!("Edit '{name}'."),
        Modal::Delete { target: Some(name) } => format!("Delete '{name}' from the inventory?"),
        Modal::Edit { target: None } | Modal::Delete { target: None } => {
            "No MCP selected.".to_string()
        }
    }
}

/// Pad or cut `text` to exactly `width` terminal columns.
pub fn fit(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str(&" ".repeat(width - used));
    out
}

/// The whole frame as text.
pub fn render(session: &Session) -> String {
    if session.viewport.is_empty() {
        return LOADING_TEXT.to_string();
    }

    let mut lines = vec![
        TITLE.to_string(),
        key_hints(session).to_string(),
        status_line(session),
        String::new(),
    ];
    lines.extend(body_lines(session));
    if let Some(modal) = &session.modal {
        lines.push(String::new());
        lines.push(format!("[{}]", modal_title(modal).trim()));
        lines.push(modal_body(modal));
    }
    lines.push(String::new());
    if let Some(note) = notification_text(session) {
        lines.push(note);
    }
    lines.push(footer_text(session));

    let mut frame = lines
        .iter()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n");
    frame.push('\n');
    frame
}

fn panel_title(title: &str, focused: bool) -> String {
    if focused {
        format!("[ {title} ]")
    } else {
        format!("  {title}  ")
    }
}

fn list_panel(session: &Session, focused: bool) -> Vec<String> {
    let mut lines = vec![panel_title("MCPs", focused)];
    match empty_message(session) {
        Some(message) => lines.push(message),
        None => lines.extend(list_cells(session).iter().map(Cell::label)),
    }
    lines
}

fn body_lines(session: &Session) -> Vec<String> {
    let column = session.position.active_column;
    match session.layout.mode {
        LayoutMode::Narrow => list_panel(session, true),
        LayoutMode::Medium => {
            let left = list_panel(session, column == 0);
            let mut right = vec![panel_title("Status & Details", column == 1)];
            right.extend(details_lines(session));
            side_by_side(&left, &right, session.layout.column_widths[0] as usize)
        }
        LayoutMode::Grid => {
            let mut lines = vec![panel_title("MCP Inventory", true)];
            if let Some(message) = empty_message(session) {
                lines.push(message);
                return lines;
            }
            let width = session.layout.column_widths[0] as usize;
            lines.extend(grid_cells(session).iter().map(|row| {
                row.iter()
                    .map(|cell| fit(&cell.map(|c| c.label()).unwrap_or_default(), width))
                    .collect::<String>()
            }));
            lines
        }
    }
}

fn side_by_side(left: &[String], right: &[String], left_width: usize) -> Vec<String> {
    let rows = left.len().max(right.len());
    (0..rows)
        .map(|row| {
            let l = left.get(row).map(String::as_str).unwrap_or("");
            let r = right.get(row).map(String::as_str).unwrap_or("");
            format!("{}  {}", fit(l, left_width), r)
        })
        .collect()
}

/// Display width of `text` in terminal columns.
pub fn display_width(text: &str) -> usize {
    text.width()
}
