use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Computes the main layout regions.
///
/// # Returns
/// (header, canvas)
pub fn vertical(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(10)])
        .split(area);

    (chunks[0], chunks[1])
}

/// Maps a terminal cell inside the plotting area to display-space coordinates.
///
/// The cell's center is used, the top row maps to the highest `y`.
///
/// # Returns
/// `None` if the cell falls outside of `area`.
pub fn cell_to_display(
    area: Rect,
    col: u16,
    row: u16,
    x_bounds: [f32; 2],
    y_bounds: [f32; 2],
) -> Option<(f32, f32)> {
    let inside = col >= area.x
        && col < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height);

    if !inside {
        return None;
    }

    let fx = (f32::from(col - area.x) + 0.5) / f32::from(area.width);
    let fy = (f32::from(row - area.y) + 0.5) / f32::from(area.height);

    let x = x_bounds[0] + fx * (x_bounds[1] - x_bounds[0]);
    let y = y_bounds[1] - fy * (y_bounds[1] - y_bounds[0]);

    Some((x, y))
}
