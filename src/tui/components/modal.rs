//! # Modal Dialog Component
//!
//! Overlay for the add/edit/delete dialogs. Drawn last, over the body, with
//! the area beneath cleared. Enter confirms and Esc cancels; both simply
//! close it for now.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::core::state::Modal;
use crate::core::view;
use crate::tui::component::Component;

pub const WIDTH_PERCENT: u16 = 60;
pub const HEIGHT_PERCENT: u16 = 30;

pub struct ModalDialog<'a> {
    modal: &'a Modal,
}

impl<'a> ModalDialog<'a> {
    pub fn new(modal: &'a Modal) -> Self {
        Self { modal }
    }
}

impl Component for ModalDialog<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(WIDTH_PERCENT, HEIGHT_PERCENT, area);
        frame.render_widget(Clear, overlay);

        let border = match self.modal {
            Modal::Delete { .. } => Color::Red,
            _ => Color::Cyan,
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(view::modal_title(self.modal))
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Confirm  Esc Cancel ").centered())
            .padding(Padding::uniform(1));

        let body = Paragraph::new(view::modal_body(self.modal))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(body, overlay);
    }
}

/// Compute a centered rect using percentage of the outer rect.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_centered_rect_is_inside_outer() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(60, 30, outer);
        assert_eq!(inner.width, 60);
        assert_eq!(inner.height, 12);
        assert_eq!(inner.x, 20);
        assert_eq!(inner.y, 14);
    }

    #[test]
    fn test_delete_dialog_names_target() {
        let modal = Modal::Delete {
            target: Some("docker-mcp".to_string()),
        };
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal
            .draw(|f| ModalDialog::new(&modal).render(f, f.area()))
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Delete MCP"));
        assert!(text.contains("docker-mcp"));
        assert!(text.contains("Esc Cancel"));
    }
}
