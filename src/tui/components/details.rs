//! Right-hand "Status & Details" panel of the two-panel layout.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::component::Component;
use crate::tui::components::panel_block;

pub struct Details {
    pub lines: Vec<String>,
    pub focused: bool,
}

impl Component for Details {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .lines
            .iter()
            .map(|line| match line.split_once(": ") {
                Some(("Status", "Active")) => {
                    Line::styled(line.as_str(), Style::default().fg(Color::Green))
                }
                _ => Line::raw(line.as_str()),
            })
            .collect();
        let paragraph = Paragraph::new(lines)
            .block(panel_block("Status & Details", self.focused))
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}
