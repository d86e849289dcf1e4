use ndarray::ArrayView1;

use crate::arch::Model;

/// A third degree polynomial, `y = a·x³ + b·x² + c·x + d`.
///
/// Parameters are laid out as `[a, b, c, d]`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Cubic;

impl Cubic {
    /// Returns a new `Cubic`.
    pub fn new() -> Self {
        Self
    }
}

impl Model for Cubic {
    fn size(&self) -> usize {
        4
    }

    fn param_names(&self) -> &'static [&'static str] {
        &["a", "b", "c", "d"]
    }

    fn eval(&self, params: &[f32], x: f32) -> f32 {
        let &[a, b, c, d] = params else {
            panic!("a cubic model has exactly 4 parameters, got {}", params.len());
        };

        a * x.powi(3) + b * x.powi(2) + c * x + d
    }

    fn backward(&self, x: ArrayView1<f32>, d: ArrayView1<f32>, grad: &mut [f32]) {
        let x2 = x.mapv(|x| x.powi(2));
        let x3 = &x2 * &x;

        let [grad_a, grad_b, grad_c, grad_d] = grad else {
            panic!("a cubic model has exactly 4 gradients, got {}", grad.len());
        };

        *grad_a = (&d * &x3).sum();
        *grad_b = (&d * &x2).sum();
        *grad_c = (&d * &x).sum();
        *grad_d = d.sum();
    }
}
