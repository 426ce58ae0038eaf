pub mod confirm;
pub mod form;
pub mod hints;
pub mod prompt;
pub mod toast;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Box of fixed size centered in `area`, shrunk to fit.
pub fn centered_box(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height.min(area.height)),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width.min(area.width)),
            Constraint::Min(0),
        ])
        .split(vertical[1])[1]
}
