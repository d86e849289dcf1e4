use ndarray::ArrayView1;

use crate::arch::Model;

/// A straight line, `y = m·x + b`.
///
/// Parameters are laid out as `[m, b]`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Linear;

impl Linear {
    /// Returns a new `Linear`.
    pub fn new() -> Self {
        Self
    }
}

impl Model for Linear {
    fn size(&self) -> usize {
        2
    }

    fn param_names(&self) -> &'static [&'static str] {
        &["m", "b"]
    }

    fn eval(&self, params: &[f32], x: f32) -> f32 {
        let &[m, b] = params else {
            panic!("a linear model has exactly 2 parameters, got {}", params.len());
        };

        m * x + b
    }

    fn backward(&self, x: ArrayView1<f32>, d: ArrayView1<f32>, grad: &mut [f32]) {
        let [grad_m, grad_b] = grad else {
            panic!("a linear model has exactly 2 gradients, got {}", grad.len());
        };

        *grad_m = (&d * &x).sum();
        *grad_b = d.sum();
    }
}
