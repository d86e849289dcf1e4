use super::ParamGen;

/// Yields a predetermined list of coefficients, in order.
///
/// Used to pin a regressor's starting curve, e.g. `[m, b] = [0, 0]` for a flat line.
pub struct FixedParamGen {
    coefficients: Vec<f32>,
    next: usize,
}

impl FixedParamGen {
    /// Creates a new `FixedParamGen` over `coefficients`.
    pub fn new(coefficients: Vec<f32>) -> Self {
        Self {
            coefficients,
            next: 0,
        }
    }

    /// Creates a new `FixedParamGen` yielding `value` exactly `n` times.
    pub fn repeat(value: f32, n: usize) -> Self {
        Self::new(vec![value; n])
    }

    /// Returns how many coefficients are left.
    pub fn remaining(&self) -> usize {
        self.coefficients.len() - self.next
    }
}

impl ParamGen for FixedParamGen {
    fn sample(&mut self, n: usize) -> Option<Vec<f32>> {
        if self.remaining() == 0 {
            return None;
        }

        let end = self.next + n.min(self.remaining());
        let coefficients = self.coefficients[self.next..end].to_vec();
        self.next = end;

        Some(coefficients)
    }
}
