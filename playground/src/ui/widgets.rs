use ratatui::{
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Wrap},
};
use regression::{render::Series, training::Regressor};

use super::theme::Theme;

pub fn header<'a>(
    clicks: usize,
    linear: &dyn Regressor,
    polynomial: &dyn Regressor,
) -> Paragraph<'a> {
    let line1 = Line::from(vec![
        Span::styled("Regression Playground", Theme::title()),
        Span::raw(format!("  |  Points: {clicks}  |  ")),
        Span::styled("click: add point  q: quit", Theme::dim()),
    ]);

    let lines = vec![
        line1,
        fit(linear, Series::Linear),
        fit(polynomial, Series::Polynomial),
    ];

    Paragraph::new(lines)
        .style(Theme::base())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border())
                .title("Overview"),
        )
        .wrap(Wrap { trim: true })
}

fn fit<'a>(regressor: &dyn Regressor, series: Series) -> Line<'a> {
    let params = regressor
        .param_names()
        .iter()
        .zip(regressor.params())
        .map(|(name, value)| format!("{name}={value:.3}"))
        .collect::<Vec<_>>()
        .join(" ");

    let loss = match regressor.last_losses().last() {
        Some(loss) => format!("  loss={loss:.5}"),
        None => String::new(),
    };

    Line::from(vec![
        Span::styled(format!("{:<11}", series.label()), Theme::series(series)),
        Span::raw(params),
        Span::styled(loss, Theme::dim()),
    ])
}

pub fn canvas_block<'a>() -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title("Canvas")
}

/// Plots every series inside `x_bounds` and `y_bounds`.
///
/// Curves are drawn as lines, data points as a scatter. No axis labels are set so the plot
/// spans the block's whole inner area.
pub fn canvas<'a>(
    series: &'a [(Series, Vec<(f64, f64)>)],
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
) -> Chart<'a> {
    let datasets = series
        .iter()
        .map(|(series, points)| {
            let graph_type = match series {
                Series::Linear | Series::Polynomial => GraphType::Line,
                Series::Data => GraphType::Scatter,
            };

            Dataset::default()
                .name(series.label())
                .marker(Marker::Braille)
                .graph_type(graph_type)
                .style(Theme::series(*series))
                .data(points)
        })
        .collect();

    Chart::new(datasets)
        .style(Theme::base())
        .block(canvas_block())
        .x_axis(Axis::default().bounds(x_bounds))
        .y_axis(Axis::default().bounds(y_bounds))
}
