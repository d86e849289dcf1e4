use std::num::NonZeroUsize;

use log::debug;

use crate::{
    RegressionErr, Result,
    arch::{Model, loss::LossFn},
    dataset::Dataset,
    optimization::Optimizer,
};

/// An online model trainer.
///
/// Owns the model's parameters, the optimizer's state and every sample observed so far. Each call
/// to `train` runs `epochs` full batch steps over the whole dataset.
pub struct OnlineTrainer<M, O, L>
where
    M: Model,
    O: Optimizer,
    L: LossFn,
{
    model: M,
    optimizer: O,
    loss_fn: L,
    dataset: Dataset,
    params: Vec<f32>,
    grad: Vec<f32>,
    epochs: NonZeroUsize,
}

impl<M, O, L> OnlineTrainer<M, O, L>
where
    M: Model,
    O: Optimizer,
    L: LossFn,
{
    /// Returns a new `OnlineTrainer`.
    ///
    /// # Arguments
    /// * `model` - The model that will be trained.
    /// * `optimizer` - The optimizer that dictates how to update the parameters on each step.
    /// * `loss_fn` - The loss function used to measure the difference between a model's output and the expected one.
    /// * `params` - The initial parameters, one per model parameter.
    /// * `epochs` - The amount of full batch steps to run per `train` call.
    ///
    /// # Returns
    /// An error if `params` doesn't match the model's size.
    pub fn new(
        model: M,
        optimizer: O,
        loss_fn: L,
        params: Vec<f32>,
        epochs: NonZeroUsize,
    ) -> Result<Self> {
        if params.len() != model.size() {
            return Err(RegressionErr::SizeMismatch {
                what: "initial parameters",
                got: params.len(),
                expected: model.size(),
            });
        }

        Ok(Self::sized(model, optimizer, loss_fn, params, epochs))
    }

    /// Same as `new`, for callers that already sized `params` after the model.
    pub(crate) fn sized(
        model: M,
        optimizer: O,
        loss_fn: L,
        params: Vec<f32>,
        epochs: NonZeroUsize,
    ) -> Self {
        debug_assert_eq!(params.len(), model.size());

        Self {
            grad: vec![0.; model.size()],
            model,
            optimizer,
            loss_fn,
            dataset: Dataset::new(),
            params,
            epochs,
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn params(&self) -> &[f32] {
        &self.params
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Appends a training-domain sample to the dataset.
    pub fn push(&mut self, x: f32, y: f32) {
        self.dataset.push(x, y);
    }

    /// Performs `epochs` full batch steps over every observed sample.
    ///
    /// # Returns
    /// The loss measured at each step, empty if there's no data to train with, or an error if the
    /// optimizer doesn't hold state for this model's parameters.
    pub fn train(&mut self) -> Result<Vec<f32>> {
        if self.dataset.is_empty() {
            return Ok(Vec::new());
        }

        let epochs = self.epochs.get();
        let mut losses = Vec::with_capacity(epochs);

        for _ in 0..epochs {
            losses.push(self.step()?);
        }

        let points = self.dataset.len();
        let loss = losses.last().copied().unwrap_or_default();
        debug!(points = points, epochs = epochs, loss = loss; "training burst finished");

        Ok(losses)
    }

    /// Runs a single full batch step.
    ///
    /// # Returns
    /// The loss before applying the update.
    fn step(&mut self) -> Result<f32> {
        let x = self.dataset.x();
        let y = self.dataset.y();

        let y_pred = self.model.forward(&self.params, x);
        let loss = self.loss_fn.loss(y_pred.view(), y);
        let d = self.loss_fn.loss_prime(y_pred.view(), y);

        self.model.backward(x, d.view(), &mut self.grad);
        self.optimizer.update_params(&self.grad, &mut self.params)?;

        Ok(loss)
    }
}
