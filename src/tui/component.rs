use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive everything they show as props (struct fields) and
/// render into the `Rect` they are given. They never change the session;
/// only `core::action::update` does that.
pub trait Component {
    /// Render the component into the given area.
    ///
    /// Takes `&mut self` so a component can keep transient render state
    /// (such as a list's scroll offset) during the render pass.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
