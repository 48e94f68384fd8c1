use ratatui::layout::{Constraint, Direction, Flex};
use ratatui::prelude::{Layout, Rect};

/// Area inside a one-cell border.
pub(super) fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// A `width` x `height` box centred in `r`, clipped to `r`.
pub(super) fn centered_box(width: u16, height: u16, r: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(r.height))])
        .flex(Flex::Center)
        .areas(r);
    let [area] = Layout::horizontal([Constraint::Length(width.min(r.width))])
        .flex(Flex::Center)
        .areas(row);
    area
}

/// Five equal card slots side by side, centred, each at most `max_width` wide.
pub(super) fn card_slots(area: Rect, max_width: u16) -> Vec<Rect> {
    let width = (area.width / 5).min(max_width);
    Layout::default()
        .direction(Direction::Horizontal)
        .flex(Flex::Center)
        .constraints([Constraint::Length(width); 5])
        .split(area)
        .to_vec()
}
