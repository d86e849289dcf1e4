use log::{info, trace};

use crate::{
    Result,
    configs::PlaygroundConfig,
    normalization::Normalizer,
    render::{Renderer, Series},
    training::{Regressor, RegressorBuilder},
};

/// A playground session: two regressors fed by the same stream of points.
///
/// Every added point is appended to the data series, fitted by both regressors and followed by
/// exactly one redraw request. Nothing reaches the renderer until the first point arrives.
pub struct Session<R: Renderer> {
    linear: Box<dyn Regressor>,
    polynomial: Box<dyn Regressor>,
    normalizer: Normalizer,
    renderer: R,
    events: usize,
}

impl<R: Renderer> Session<R> {
    /// Creates a new `Session`.
    ///
    /// # Arguments
    /// * `config` - The configuration of the normalizer and both regressors.
    /// * `renderer` - Receives every series update.
    ///
    /// # Returns
    /// An error if any part of the configuration is invalid.
    pub fn new(config: &PlaygroundConfig, renderer: R) -> Result<Self> {
        let normalizer = Normalizer::new(config.normalizer.max_x, config.normalizer.max_y)?;
        let builder = RegressorBuilder::new(config.seed);

        let linear = builder.build(&config.linear, normalizer)?;
        let polynomial = builder.build(&config.polynomial, normalizer)?;

        info!(
            "session started with linear {:?} and polynomial {:?}",
            linear.params(),
            polynomial.params()
        );

        Ok(Self::from_regressors(linear, polynomial, normalizer, renderer))
    }

    /// Creates a new `Session` out of already built regressors.
    ///
    /// # Arguments
    /// * `linear` - Feeds the linear series.
    /// * `polynomial` - Feeds the polynomial series.
    /// * `normalizer` - The one both regressors were built with, exposed to the front-end.
    /// * `renderer` - Receives every series update.
    pub fn from_regressors(
        linear: Box<dyn Regressor>,
        polynomial: Box<dyn Regressor>,
        normalizer: Normalizer,
        renderer: R,
    ) -> Self {
        Self {
            linear,
            polynomial,
            normalizer,
            renderer,
            events: 0,
        }
    }

    /// Handles a new display-space point.
    ///
    /// Returns once both regressors are refitted and the renderer holds their new curves.
    pub fn point_added(&mut self, x: f32, y: f32) {
        self.events += 1;
        trace!(event = self.events, x = x, y = y; "point added");

        self.renderer.append_data_point(Series::Data, (x, y));

        let curve = self.linear.observe(x, y);
        self.renderer.replace_series(Series::Linear, curve.points());

        let curve = self.polynomial.observe(x, y);
        self.renderer.replace_series(Series::Polynomial, curve.points());

        self.renderer.request_redraw();
    }

    pub fn linear(&self) -> &dyn Regressor {
        self.linear.as_ref()
    }

    pub fn polynomial(&self) -> &dyn Regressor {
        self.polynomial.as_ref()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Returns how many points were added so far.
    pub fn events(&self) -> usize {
        self.events
    }
}
