use ratatui::{Frame, layout::Rect};
use regression::{
    render::{Series, SeriesStore},
    session::Session,
};

use super::{layout, widgets};

/// Draws the entire UI.
///
/// # Returns
/// The area the points are plotted in, used to map clicks back to display space.
pub fn draw(f: &mut Frame, session: &Session<SeriesStore>) -> Rect {
    let area = f.size();
    let (header_area, canvas_area) = layout::vertical(area);

    f.render_widget(
        widgets::header(session.events(), session.linear(), session.polynomial()),
        header_area,
    );

    let series = Series::ALL
        .iter()
        .map(|&series| {
            let points: Vec<(f64, f64)> = session
                .renderer()
                .points(series)
                .iter()
                .map(|&(x, y)| (f64::from(x), f64::from(y)))
                .collect();

            (series, points)
        })
        .collect::<Vec<_>>();

    let ([x_low, x_high], [y_low, y_high]) = session.normalizer().display_bounds();
    let x_bounds = [f64::from(x_low), f64::from(x_high)];
    let y_bounds = [f64::from(y_low), f64::from(y_high)];

    f.render_widget(widgets::canvas(&series, x_bounds, y_bounds), canvas_area);

    widgets::canvas_block().inner(canvas_area)
}
