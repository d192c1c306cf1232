//! # TitleBar Component
//!
//! Three header lines: the app title, key hints for the current interaction
//! state, and the active/total counter with the layout name.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(view::key_hints(session), view::status_line(session));
//! title_bar.render(frame, area);
//! ```
//!
//! Both strings are produced by `core::view`, so the ratatui frame and the
//! plain-text projection never disagree about wording.

use crate::core::view::TITLE;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

/// Height the title bar needs.
pub const TITLE_BAR_HEIGHT: u16 = 3;

pub struct TitleBar {
    /// Key hints for the current interaction state
    pub hints: String,
    /// "MCPs: a/t Active • Layout: <name>"
    pub status: String,
}

impl TitleBar {
    pub fn new(hints: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            hints: hints.into(),
            status: status.into(),
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::styled(
                TITLE,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(self.hints.as_str(), Style::default().fg(Color::DarkGray)),
            Line::styled(self.status.as_str(), Style::default().fg(Color::Gray)),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(title_bar: &mut TitleBar, width: u16) -> String {
        let backend = TestBackend::new(width, TITLE_BAR_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_shows_all_three_lines() {
        let mut title_bar = TitleBar::new("Enter=Confirm • ESC=Cancel", "MCPs: 2/5 Active • Layout: Medium");
        let text = draw(&mut title_bar, 80);

        assert!(text.contains("MCP Hub"));
        assert!(text.contains("Enter=Confirm"));
        assert!(text.contains("MCPs: 2/5 Active"));
        assert!(text.contains("Layout: Medium"));
    }

    #[test]
    fn test_title_bar_truncates_on_narrow_terminal() {
        let mut title_bar = TitleBar::new("a very long hint line that will not fit", "MCPs: 0/0 Active");
        let text = draw(&mut title_bar, 10);
        assert!(text.starts_with("MCP Hub"));
        assert!(!text.contains("will not fit"));
    }

    #[test]
    fn test_title_bar_props_are_mutable() {
        let mut title_bar = TitleBar::new("", "");
        title_bar.status = "MCPs: 1/1 Active • Layout: Grid".to_string();
        assert!(draw(&mut title_bar, 60).contains("Layout: Grid"));
    }
}
