use ndarray::{Array1, ArrayView1};

/// Measures how far a model's predictions are from the expected outputs.
pub trait LossFn {
    /// Returns the loss of `y_pred` against `y`.
    fn loss(&self, y_pred: ArrayView1<f32>, y: ArrayView1<f32>) -> f32;

    /// Returns the derivative of the loss with respect to each prediction.
    fn loss_prime(&self, y_pred: ArrayView1<f32>, y: ArrayView1<f32>) -> Array1<f32>;
}
