use ndarray::{Array1, ArrayView1};

use super::LossFn;

/// Mean squared error loss function.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mse;

impl Mse {
    /// Returns a new `Mse`.
    pub fn new() -> Self {
        Self
    }
}

impl LossFn for Mse {
    fn loss(&self, y_pred: ArrayView1<f32>, y: ArrayView1<f32>) -> f32 {
        (&y_pred - &y)
            .mapv(|x| x.powi(2))
            .mean()
            .unwrap_or_default()
    }

    fn loss_prime(&self, y_pred: ArrayView1<f32>, y: ArrayView1<f32>) -> Array1<f32> {
        (&y_pred - &y) * (2.0 / y_pred.len() as f32)
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn loss_is_the_mean_of_the_squared_residuals() {
        let y_pred = array![1.0, 2.0, 3.0];
        let y = array![1.0, 0.0, 6.0];

        assert_eq!(Mse.loss(y_pred.view(), y.view()), (0.0 + 4.0 + 9.0) / 3.0);
    }

    #[test]
    fn empty_batch_has_no_loss() {
        let empty = Array1::<f32>::zeros(0);
        assert_eq!(Mse.loss(empty.view(), empty.view()), 0.0);
    }

    #[test]
    fn loss_prime() {
        let y_pred = array![1.0, 2.0];
        let y = array![0.0, 4.0];

        let d = Mse.loss_prime(y_pred.view(), y.view());
        assert_eq!(d, array![1.0, -2.0]);
    }
}
