use std::{cell::RefCell, rc::Rc};

use rand::Rng;
use rand_distr::{Distribution, Uniform};

use super::ParamGen;
use crate::Result;

/// Draws initial coefficients from a probability distribution.
///
/// The random number generator is shared so that both regressors of a session, built from the
/// same seed, draw from a single deterministic stream.
pub struct RandParamGen<R: Rng, D: Distribution<f32>> {
    rng: Rc<RefCell<R>>,
    distribution: D,
    remaining: usize,
}

impl<R: Rng, D: Distribution<f32>> RandParamGen<R, D> {
    /// Creates a new `RandParamGen`.
    ///
    /// # Arguments
    /// * `rng` - The shared random number generator.
    /// * `distribution` - The distribution every coefficient is drawn from.
    /// * `limit` - How many coefficients it may yield in total.
    pub fn new(rng: Rc<RefCell<R>>, distribution: D, limit: usize) -> Self {
        Self {
            rng,
            distribution,
            remaining: limit,
        }
    }
}

impl<R: Rng> RandParamGen<R, Uniform<f32>> {
    /// Creates a new `RandParamGen` drawing uniformly from `[low, high)`.
    ///
    /// # Returns
    /// An error if the range is empty or not finite.
    pub fn uniform(rng: Rc<RefCell<R>>, limit: usize, low: f32, high: f32) -> Result<Self> {
        Ok(Self::new(rng, Uniform::new(low, high)?, limit))
    }
}

impl<R: Rng, D: Distribution<f32>> ParamGen for RandParamGen<R, D> {
    fn sample(&mut self, n: usize) -> Option<Vec<f32>> {
        if self.remaining == 0 {
            return None;
        }

        let n = n.min(self.remaining);
        self.remaining -= n;

        let mut rng = self.rng.borrow_mut();
        let coefficients = (0..n).map(|_| self.distribution.sample(&mut *rng)).collect();
        Some(coefficients)
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn seeded_rng() -> Rc<RefCell<StdRng>> {
        Rc::new(RefCell::new(StdRng::seed_from_u64(42)))
    }

    #[test]
    fn uniform_stays_in_range() {
        let mut param_gen = RandParamGen::uniform(seeded_rng(), 100, -1., 1.).unwrap();
        let coefficients = param_gen.sample(100).unwrap();

        assert_eq!(coefficients.len(), 100);
        assert!(coefficients.iter().all(|p| (-1.0..1.0).contains(p)));
        assert!(param_gen.sample(1).is_none());
    }

    #[test]
    fn same_seed_same_coefficients() {
        let mut a = RandParamGen::uniform(seeded_rng(), 4, -1., 1.).unwrap();
        let mut b = RandParamGen::uniform(seeded_rng(), 4, -1., 1.).unwrap();

        assert_eq!(a.sample(4), b.sample(4));
    }

    #[test]
    fn shared_rng_advances() {
        let rng = seeded_rng();
        let mut linear = RandParamGen::uniform(rng.clone(), 2, -1., 1.).unwrap();
        let mut cubic = RandParamGen::uniform(rng, 4, -1., 1.).unwrap();

        let linear = linear.sample(2).unwrap();
        let cubic = cubic.sample(4).unwrap();

        assert_ne!(linear[..], cubic[..2]);
    }

    #[test]
    fn invalid_ranges() {
        assert!(RandParamGen::uniform(seeded_rng(), 1, 1., -1.).is_err());
        assert!(RandParamGen::uniform(seeded_rng(), 1, 0.5, 0.5).is_err());
        assert!(RandParamGen::uniform(seeded_rng(), 1, f32::NEG_INFINITY, 0.).is_err());
    }

    #[test]
    fn limit_spans_several_calls() {
        let mut param_gen = RandParamGen::uniform(seeded_rng(), 6, -1., 1.).unwrap();

        assert_eq!(param_gen.sample(4).unwrap().len(), 4);
        assert_eq!(param_gen.sample(4).unwrap().len(), 2);
        assert!(param_gen.sample(1).is_none());
    }
}
