use std::num::NonZeroUsize;

use log::{trace, warn};

use super::OnlineTrainer;
use crate::{
    arch::{
        Model,
        loss::{LossFn, Mse},
        models::{Cubic, Linear},
    },
    dataset::Dataset,
    normalization::Normalizer,
    optimization::{Adam, GradientDescent, Optimizer},
    sampling::{Curve, CurveSampler, ScanStep},
};

/// A model fitted incrementally, one display-space point at a time.
pub trait Regressor {
    /// Adds a display-space point and refits the model over every point seen so far.
    ///
    /// # Arguments
    /// * `x` - The raw horizontal coordinate.
    /// * `y` - The raw vertical coordinate.
    ///
    /// # Returns
    /// The refitted curve, already taken into display space.
    fn observe(&mut self, x: f32, y: f32) -> Curve;

    /// Samples the current fit in the training domain.
    fn sample(&self) -> Curve;

    /// Returns the training-domain samples observed so far.
    fn dataset(&self) -> &Dataset;

    /// Returns the current parameters.
    fn params(&self) -> &[f32];

    /// Returns the name of each parameter, matching the order of `params`.
    fn param_names(&self) -> &'static [&'static str];

    /// Returns the loss of every step of the last training burst.
    fn last_losses(&self) -> &[f32];

    fn len(&self) -> usize {
        self.dataset().len()
    }

    fn is_empty(&self) -> bool {
        self.dataset().is_empty()
    }
}

/// The shared implementation of every regressor: a trainer plus the normalizer and the sampler
/// that take its curve in and out of display space.
pub struct OnlineRegressor<M, O, L = Mse>
where
    M: Model,
    O: Optimizer,
    L: LossFn,
{
    trainer: OnlineTrainer<M, O, L>,
    normalizer: Normalizer,
    sampler: CurveSampler,
    last_losses: Vec<f32>,
}

/// Fits `y = m·x + b` with plain gradient descent, sampled at both ends of the domain.
pub type LinearRegressor = OnlineRegressor<Linear, GradientDescent>;

/// Fits `y = a·x³ + b·x² + c·x + d` with Adam, sampled with a dense scan.
pub type PolynomialRegressor = OnlineRegressor<Cubic, Adam>;

impl<M, O, L> OnlineRegressor<M, O, L>
where
    M: Model,
    O: Optimizer,
    L: LossFn,
{
    /// Creates a new `OnlineRegressor`.
    ///
    /// # Arguments
    /// * `trainer` - The trainer owning the model, its parameters and the dataset.
    /// * `normalizer` - Maps display-space points into the training domain and back.
    /// * `sampler` - Decides where the curve gets evaluated.
    pub fn new(
        trainer: OnlineTrainer<M, O, L>,
        normalizer: Normalizer,
        sampler: CurveSampler,
    ) -> Self {
        Self {
            trainer,
            normalizer,
            sampler,
            last_losses: Vec::new(),
        }
    }
}

impl LinearRegressor {
    pub const EPOCHS: NonZeroUsize = NonZeroUsize::new(50).unwrap();
    pub const LEARNING_RATE: f32 = 0.5;

    /// Creates a linear regressor with the reference epochs, learning rate and sampler.
    ///
    /// # Arguments
    /// * `params` - The initial `[m, b]`.
    /// * `normalizer` - Maps display-space points into the training domain and back.
    pub fn linear(params: [f32; 2], normalizer: Normalizer) -> Self {
        let optimizer = GradientDescent::new(Self::LEARNING_RATE);
        let trainer = OnlineTrainer::sized(Linear, optimizer, Mse, params.into(), Self::EPOCHS);

        Self::new(trainer, normalizer, CurveSampler::Endpoints)
    }
}

impl PolynomialRegressor {
    pub const EPOCHS: NonZeroUsize = NonZeroUsize::new(100).unwrap();
    pub const LEARNING_RATE: f32 = 0.2;

    /// Creates a cubic regressor with the reference epochs, learning rate and sampler.
    ///
    /// # Arguments
    /// * `params` - The initial `[a, b, c, d]`.
    /// * `normalizer` - Maps display-space points into the training domain and back.
    pub fn polynomial(params: [f32; 4], normalizer: Normalizer) -> Self {
        let optimizer = Adam::with_learning_rate(params.len(), Self::LEARNING_RATE);
        let trainer = OnlineTrainer::sized(Cubic, optimizer, Mse, params.into(), Self::EPOCHS);
        let sampler = CurveSampler::Scan(ScanStep::DEFAULT);

        Self::new(trainer, normalizer, sampler)
    }
}

impl<M, O, L> Regressor for OnlineRegressor<M, O, L>
where
    M: Model,
    O: Optimizer,
    L: LossFn,
{
    fn observe(&mut self, x: f32, y: f32) -> Curve {
        let (x, y) = self.normalizer.normalize((x, y));
        trace!(x = x, y = y; "observing normalized point");

        self.trainer.push(x, y);

        self.last_losses = match self.trainer.train() {
            Ok(losses) => losses,
            Err(e) => {
                warn!("training burst aborted: {e}");
                Vec::new()
            }
        };

        self.sample().denormalize(&self.normalizer)
    }

    fn sample(&self) -> Curve {
        self.sampler.sample(self.trainer.model(), self.trainer.params())
    }

    fn dataset(&self) -> &Dataset {
        self.trainer.dataset()
    }

    fn params(&self) -> &[f32] {
        self.trainer.params()
    }

    fn param_names(&self) -> &'static [&'static str] {
        self.trainer.model().param_names()
    }

    fn last_losses(&self) -> &[f32] {
        &self.last_losses
    }
}
