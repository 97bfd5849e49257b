//! UI rendering helpers for TUI
//!
//! Layout helpers shared by the panels and modal overlays.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Narrowest panel that still shows bars and labels side by side.
pub const MIN_PANEL_WIDTH: u16 = 30;

/// Create a centered rectangle of the given size, clamped to `area`.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Split the frame into panels, status line and footer.
pub fn build_main_layout(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Areas for `count` panels: side by side when wide enough, else stacked.
pub fn panel_areas(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let direction = if area.width >= MIN_PANEL_WIDTH * count as u16 {
        Direction::Horizontal
    } else {
        Direction::Vertical
    };
    let share = u32::try_from(count).unwrap_or(u32::MAX);
    Layout::default()
        .direction(direction)
        .constraints(vec![Constraint::Ratio(1, share); count])
        .split(area)
        .to_vec()
}
