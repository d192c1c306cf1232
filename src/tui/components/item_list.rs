//! # ItemList Component
//!
//! The filtered inventory as a vertical list, one item per line. Used for the
//! single-panel layout and the left panel of the two-panel layout.
//!
//! Scrolling is delegated to ratatui's `ListState`: selecting the row keeps it
//! on screen however long the list gets.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use crate::core::state::Session;
use crate::core::view::{self, Cell};
use crate::tui::component::Component;
use crate::tui::components::panel_block;

pub struct ItemList<'a> {
    session: &'a Session,
    focused: bool,
}

impl<'a> ItemList<'a> {
    pub fn new(session: &'a Session, focused: bool) -> Self {
        Self { session, focused }
    }
}

/// One list/grid cell as a styled line.
pub fn cell_line(cell: &Cell<'_>) -> Line<'static> {
    let marker_style = if cell.item.active {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let name_style = if cell.selected {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(Color::Gray)
    };
    let cursor = if cell.selected { "> " } else { "  " };
    Line::from(vec![
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
        Span::styled(cell.item.marker(), marker_style),
        Span::raw(" "),
        Span::styled(cell.item.name.clone(), name_style),
    ])
}

impl Component for ItemList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = panel_block("MCPs", self.focused);

        if let Some(message) = view::empty_message(self.session) {
            let empty = Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let cells = view::list_cells(self.session);
        let items: Vec<ListItem> = cells.iter().map(|c| ListItem::new(cell_line(c))).collect();
        let mut list_state = ListState::default();
        list_state.select(Some(self.session.position.selected_index));

        frame.render_stateful_widget(List::new(items).block(block), area, &mut list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Event, update};
    use crate::test_support::{numbered_items, sized_session};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(session: &Session, width: u16, height: u16) -> Vec<String> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| ItemList::new(session, true).render(f, f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn test_lists_filtered_items_with_selection_marker() {
        let session = sized_session(60);
        let rows = draw(&session, 40, 8);
        assert!(rows[0].contains("MCPs"));
        assert!(rows[1].contains("> ○ github-mcp"));
        assert!(rows[2].contains("  ○ docker-mcp"));
    }

    #[test]
    fn test_selection_scrolls_into_view() {
        let mut session = update(
            Session::new(numbered_items(50)),
            Event::Resize { width: 60, height: 10 },
        )
        .0;
        session.position.selected_index = 40;
        let rows = draw(&session, 30, 6);
        assert!(rows.iter().any(|r| r.contains("> ○ item-040")));
        assert!(!rows.iter().any(|r| r.contains("item-000")));
    }

    #[test]
    fn test_empty_inventory_message() {
        let session = update(Session::new(vec![]), Event::Resize { width: 60, height: 10 }).0;
        let rows = draw(&session, 40, 4);
        assert!(rows[1].contains("No MCPs configured"));
    }
}
