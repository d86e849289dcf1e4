use ndarray::{Array1, ArrayView1};

/// A model with a fixed number of scalar parameters mapping an input `x` to a prediction.
///
/// Models don't own their parameters, they're handed a flat slice on every call so the trainer
/// can keep them next to the optimizer's state.
pub trait Model {
    /// Returns the amount of parameters in the model.
    fn size(&self) -> usize;

    /// Returns the name of each parameter, in the same order they're laid out in `params`.
    fn param_names(&self) -> &'static [&'static str];

    /// Evaluates the model at a single point.
    ///
    /// # Arguments
    /// * `params` - The model's parameters.
    /// * `x` - The input value.
    ///
    /// # Panics
    /// If `params` doesn't hold exactly `size()` values.
    fn eval(&self, params: &[f32], x: f32) -> f32;

    /// Makes a forward pass over a batch of inputs.
    ///
    /// # Arguments
    /// * `params` - The model's parameters.
    /// * `x` - The input batch.
    ///
    /// # Returns
    /// The prediction for every input.
    fn forward(&self, params: &[f32], x: ArrayView1<f32>) -> Array1<f32> {
        x.mapv(|x| self.eval(params, x))
    }

    /// Accumulates the gradient of the loss with respect to every parameter into `grad`.
    ///
    /// # Arguments
    /// * `x` - The input batch used in the forward pass.
    /// * `d` - The derivative of the loss with respect to each prediction.
    /// * `grad` - A buffer of `size()` values, overwritten with the gradient.
    ///
    /// # Panics
    /// If `grad` doesn't hold exactly `size()` values.
    fn backward(&self, x: ArrayView1<f32>, d: ArrayView1<f32>, grad: &mut [f32]);
}
