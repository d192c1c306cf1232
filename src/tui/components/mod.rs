//! # TUI Components
//!
//! Every component is stateless: it borrows what it shows from the session
//! (or takes strings already built by `core::view`) and draws it.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file, shared panel chrome)
//! ├── title_bar.rs     (title, key hints, active counter)
//! ├── item_list.rs     (vertical list of the filtered items)
//! ├── details.rs       (selected item's launch details)
//! ├── grid.rs          (four-column view for wide terminals)
//! ├── footer.rs        (search prompt and notification line)
//! └── modal.rs         (add/edit/delete overlay)
//! ```
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as props, never by reaching into global
//! state. This keeps each one testable against a `TestBackend` with nothing
//! more than a hand-built `Session`.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Padding};

pub mod details;
pub mod footer;
pub mod grid;
pub mod item_list;
pub mod modal;
pub mod title_bar;

pub use details::Details;
pub use footer::{Footer, NotificationLine};
pub use grid::Grid;
pub use item_list::ItemList;
pub use modal::ModalDialog;
pub use title_bar::{TITLE_BAR_HEIGHT, TitleBar};

/// Bordered panel. The focused panel gets a bright border and bold title.
pub fn panel_block(title: &str, focused: bool) -> Block<'static> {
    let (border, title_style) = if focused {
        (
            Style::default().fg(Color::Cyan),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray),
        )
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(format!(" {title} "))
        .title_style(title_style)
        .padding(Padding::horizontal(1))
}
