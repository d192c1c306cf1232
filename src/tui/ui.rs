use crate::core::layout::LayoutMode;
use crate::core::state::Session;
use crate::core::view;
use crate::tui::component::Component;
use crate::tui::components::{
    Details, Footer, Grid, ItemList, ModalDialog, NotificationLine, TITLE_BAR_HEIGHT, TitleBar,
};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

/// Gap between the two panels of the medium layout.
const PANEL_GAP: u16 = 2;

pub fn draw_ui(frame: &mut Frame, session: &Session) {
    if session.viewport.is_empty() {
        draw_loading(frame, frame.area());
        return;
    }

    use Constraint::{Length, Min};
    let notification_height = u16::from(session.notification.is_some());
    let layout = Layout::vertical([
        Length(TITLE_BAR_HEIGHT),
        Min(0),
        Length(notification_height),
        Length(1),
    ]);
    let [title_area, body_area, notification_area, footer_area] = layout.areas(frame.area());

    TitleBar::new(view::key_hints(session), view::status_line(session)).render(frame, title_area);
    draw_body(frame, body_area, session);

    if let Some(notification) = &session.notification
        && let Some(text) = view::notification_text(session)
    {
        NotificationLine {
            text,
            level: notification.level,
        }
        .render(frame, notification_area);
    }

    Footer::for_state(view::footer_text(session), session.interaction).render(frame, footer_area);

    if let Some(modal) = &session.modal {
        ModalDialog::new(modal).render(frame, body_area);
    }
}

fn draw_loading(frame: &mut Frame, area: Rect) {
    let loading = Paragraph::new(view::LOADING_TEXT)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(loading, area);
}

fn draw_body(frame: &mut Frame, area: Rect, session: &Session) {
    let column = session.position.active_column;
    match session.layout.mode {
        LayoutMode::Narrow => ItemList::new(session, true).render(frame, area),
        LayoutMode::Medium => {
            let widths = &session.layout.column_widths;
            let constraints = widths.iter().map(|&w| Constraint::Length(w));
            let panels = Layout::horizontal(constraints)
                .spacing(PANEL_GAP)
                .split(area);
            ItemList::new(session, column == 0).render(frame, panels[0]);
            Details {
                lines: view::details_lines(session),
                focused: column == 1,
            }
            .render(frame, panels[1]);
        }
        LayoutMode::Grid => Grid::new(session).render(frame, area),
    }
}
