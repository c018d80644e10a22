use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Logo band on top (30%), product panel below (70%).
pub fn surface_regions(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Top padding that vertically centers `content_height` rows in `area`.
pub fn center_padding(area: Rect, content_height: usize) -> u16 {
    let content = u16::try_from(content_height).unwrap_or(u16::MAX);
    area.height.saturating_sub(content) / 2
}
