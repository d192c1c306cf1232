//! # Navigation Engine
//!
//! Two regimes, picked by the layout:
//!
//! - **Panels** (1 or 2 columns): Left/Right move focus between panels,
//!   Up/Down move the selection, but only while the item list (column 0)
//!   has focus.
//! - **Grid** (4 columns): focus is pinned to column 0. Left/Right step the
//!   flat index by one, Up/Down by a row of four.
//!
//! A move that would leave the valid range is dropped. Nothing wraps.

use crate::core::layout::{GRID_COLUMNS, Layout};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    pub active_column: usize,
    /// Index into the filtered list.
    pub selected_index: usize,
}

/// Apply one directional move. `item_count` is the filtered length.
pub fn navigate(position: Position, layout: &Layout, item_count: usize, direction: Direction) -> Position {
    let position = clamp(position, layout, item_count);
    if layout.is_grid() {
        navigate_grid(position, item_count, direction)
    } else {
        navigate_panels(position, layout, item_count, direction)
    }
}

fn navigate_grid(position: Position, item_count: usize, direction: Direction) -> Position {
    let index = position.selected_index;
    let target = match direction {
        Direction::Left => index.checked_sub(1),
        Direction::Right => Some(index + 1),
        Direction::Up => index.checked_sub(GRID_COLUMNS),
        Direction::Down => Some(index + GRID_COLUMNS),
    };
    match target {
        Some(next) if next < item_count => Position {
            active_column: 0,
            selected_index: next,
        },
        _ => position,
    }
}

fn navigate_panels(position: Position, layout: &Layout, item_count: usize, direction: Direction) -> Position {
    let mut next = position;
    match direction {
        Direction::Left => next.active_column = position.active_column.saturating_sub(1),
        Direction::Right => {
            if position.active_column + 1 < layout.column_count {
                next.active_column += 1;
            }
        }
        // Only the item list has rows; the details panel ignores vertical moves.
        Direction::Up if position.active_column == 0 => {
            next.selected_index = position.selected_index.saturating_sub(1);
        }
        Direction::Down if position.active_column == 0 => {
            if position.selected_index + 1 < item_count {
                next.selected_index += 1;
            }
        }
        Direction::Up | Direction::Down => {}
    }
    next
}

/// Pull a position back inside the layout and list bounds.
///
/// An empty list pins the selection to 0, which callers treat as "nothing
/// selected".
pub fn clamp(position: Position, layout: &Layout, item_count: usize) -> Position {
    let active_column = if layout.is_grid() {
        0
    } else {
        position.active_column.min(layout.column_count.saturating_sub(1))
    };
    Position {
        active_column,
        selected_index: position.selected_index.min(item_count.saturating_sub(1)),
    }
}
