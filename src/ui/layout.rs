//! Layout helpers for modal geometry
//!
//! The overlay covers the whole frame; the container is a centered
//! rectangle split vertically into header, content and footer regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Calculate a centered rectangle covering the given percentages of `r`
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Split a container into header, content and footer regions
pub fn section_chunks(container: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header area
            Constraint::Min(3),    // Content area
            Constraint::Length(3), // Footer area
        ])
        .split(container);

    [chunks[0], chunks[1], chunks[2]]
}

/// Check whether a terminal cell falls inside a rectangle
pub fn hit(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x + rect.width
        && row >= rect.y
        && row < rect.y + rect.height
}

/// Split a footer region into equal-width button cells
pub fn button_row(footer: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }

    let constraints: Vec<Constraint> = (0..count)
        .map(|_| Constraint::Ratio(1, count as u32))
        .collect();

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(footer)
        .to_vec()
}
