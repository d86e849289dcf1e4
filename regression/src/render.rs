/// Identifies each of the series drawn on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Series {
    Linear,
    Polynomial,
    Data,
}

impl Series {
    pub const ALL: [Series; 3] = [Series::Linear, Series::Polynomial, Series::Data];

    pub fn label(&self) -> &'static str {
        match self {
            Series::Linear => "Linear",
            Series::Polynomial => "Polynomial",
            Series::Data => "Data",
        }
    }
}

/// The outbound side of a session: whatever draws the series.
///
/// Every point handed to a renderer is already in display space.
pub trait Renderer {
    /// Replaces every point of a series.
    fn replace_series(&mut self, series: Series, points: &[(f32, f32)]);

    /// Appends a single point at the end of a series.
    fn append_data_point(&mut self, series: Series, point: (f32, f32));

    /// Signals that a batch of mutations is complete and the canvas should be redrawn.
    fn request_redraw(&mut self);
}

/// An in-memory `Renderer` keeping the latest points of each series.
#[derive(Debug, Clone, Default)]
pub struct SeriesStore {
    linear: Vec<(f32, f32)>,
    polynomial: Vec<(f32, f32)>,
    data: Vec<(f32, f32)>,
    redraws: usize,
}

impl SeriesStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self, series: Series) -> &[(f32, f32)] {
        match series {
            Series::Linear => &self.linear,
            Series::Polynomial => &self.polynomial,
            Series::Data => &self.data,
        }
    }

    /// Returns how many redraws have been requested so far.
    pub fn redraws(&self) -> usize {
        self.redraws
    }

    fn points_mut(&mut self, series: Series) -> &mut Vec<(f32, f32)> {
        match series {
            Series::Linear => &mut self.linear,
            Series::Polynomial => &mut self.polynomial,
            Series::Data => &mut self.data,
        }
    }
}

impl Renderer for SeriesStore {
    fn replace_series(&mut self, series: Series, points: &[(f32, f32)]) {
        let stored = self.points_mut(series);
        stored.clear();
        stored.extend_from_slice(points);
    }

    fn append_data_point(&mut self, series: Series, point: (f32, f32)) {
        self.points_mut(series).push(point);
    }

    fn request_redraw(&mut self) {
        self.redraws += 1;
    }
}
