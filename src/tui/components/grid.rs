//! # Grid Component
//!
//! Wide-terminal view: the filtered list laid out row-major in four columns.
//! Column widths come from `core::layout`; row count from
//! `Layout::grid_row_count`. When the rows outgrow the panel, the view scrolls
//! just far enough to keep the selected row visible.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::layout::GRID_COLUMNS;
use crate::core::state::Session;
use crate::core::view;
use crate::tui::component::Component;
use crate::tui::components::item_list::cell_line;
use crate::tui::components::panel_block;

pub struct Grid<'a> {
    session: &'a Session,
}

impl<'a> Grid<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }
}

/// First row to draw so that `selected_row` fits in `visible_rows`.
pub fn scroll_offset(selected_row: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 {
        return selected_row;
    }
    (selected_row + 1).saturating_sub(visible_rows)
}

/// Pad a styled line with spaces out to `width` columns, or cut it short.
fn fixed_width(line: Line<'static>, width: usize) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut used = 0;
    for span in line.spans {
        let remaining = width.saturating_sub(used);
        if remaining == 0 {
            break;
        }
        let text = view::fit(&span.content, remaining.min(view::display_width(&span.content)));
        used += view::display_width(&text);
        spans.push(Span::styled(text, span.style));
    }
    spans.push(Span::raw(" ".repeat(width.saturating_sub(used))));
    spans
}

impl Component for Grid<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = panel_block("MCP Inventory", true);

        if let Some(message) = view::empty_message(self.session) {
            let empty = Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let widths = &self.session.layout.column_widths;
        let lines: Vec<Line> = view::grid_cells(self.session)
            .into_iter()
            .map(|row| {
                let spans = row
                    .iter()
                    .enumerate()
                    .flat_map(|(column, cell)| {
                        let width = widths.get(column).copied().unwrap_or(0) as usize;
                        let line = cell.as_ref().map(cell_line).unwrap_or_default();
                        fixed_width(line, width)
                    })
                    .collect::<Vec<_>>();
                Line::from(spans)
            })
            .collect();

        let inner_height = block.inner(area).height as usize;
        let selected_row = self.session.position.selected_index / GRID_COLUMNS;
        let offset = scroll_offset(selected_row, inner_height);

        let paragraph = Paragraph::new(lines)
            .block(block)
            .scroll((offset as u16, 0));
        frame.render_widget(paragraph, area);
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
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| Grid::new(session).render(f, f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect::<String>())
            .collect()
    }

    #[test]
    fn test_scroll_offset() {
        assert_eq!(scroll_offset(0, 5), 0);
        assert_eq!(scroll_offset(4, 5), 0);
        assert_eq!(scroll_offset(5, 5), 1);
        assert_eq!(scroll_offset(11, 5), 7);
    }

    #[test]
    fn test_grid_places_items_row_major() {
        let session = sized_session(150);
        let rows = draw(&session, 150, 12);
        assert!(rows[0].contains("MCP Inventory"));
        for name in ["github-mcp", "docker-mcp", "context7", "filesystem-mcp"] {
            assert!(rows[1].contains(name), "{name} missing from first row");
        }
        assert!(rows[2].contains("postgres"));
        assert!(rows[1].contains("> ○ github-mcp"));
    }

    #[test]
    fn test_grid_scrolls_to_selected_row() {
        let mut session = update(
            Session::new(numbered_items(60)),
            Event::Resize { width: 150, height: 40 },
        )
        .0;
        session.position.selected_index = 57;
        let rows = draw(&session, 150, 6);
        assert!(rows.iter().any(|r| r.contains("> ○ item-057")));
        assert!(!rows.iter().any(|r| r.contains("item-000")));
    }
}
