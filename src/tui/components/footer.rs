//! Bottom line (search prompt / terminal size) and the transient
//! notification line above it.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::core::state::{InteractionState, NotificationLevel};
use crate::tui::component::Component;

pub struct Footer {
    pub text: String,
    /// Query has focus; drawn highlighted.
    pub editing: bool,
}

impl Component for Footer {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.editing {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        frame.render_widget(Paragraph::new(Line::styled(self.text.as_str(), style)), area);
    }
}

impl Footer {
    pub fn for_state(text: String, interaction: InteractionState) -> Self {
        Self {
            text,
            editing: matches!(
                interaction,
                InteractionState::QueryEditing | InteractionState::QueryNavigating
            ),
        }
    }
}

pub struct NotificationLine {
    pub text: String,
    pub level: NotificationLevel,
}

impl Component for NotificationLine {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let color = match self.level {
            NotificationLevel::Info => Color::Green,
            NotificationLevel::Error => Color::Red,
        };
        let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
        frame.render_widget(Paragraph::new(Line::styled(self.text.as_str(), style)), area);
    }
}
