use crate::{RegressionErr, Result, arch::Model, normalization::Normalizer};

/// Lower end of the sampled training domain.
const DOMAIN_LOW: f32 = -1.;
/// Upper end of the sampled training domain.
const DOMAIN_HIGH: f32 = 1.;

/// A snapshot of a fitted curve: an ordered list of `(x, y)` points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Curve {
    points: Vec<(f32, f32)>,
}

impl Curve {
    pub fn new(points: Vec<(f32, f32)>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[(f32, f32)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Takes every point of the curve into display space.
    pub fn denormalize(self, normalizer: &Normalizer) -> Self {
        let points = self
            .points
            .into_iter()
            .map(|point| normalizer.denormalize(point))
            .collect();

        Self { points }
    }
}

/// The distance between consecutive `x` values of a scan, always in `[ScanStep::MIN, 2]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanStep(f32);

impl ScanStep {
    /// Step between consecutive points of the reference polynomial scan.
    pub const DEFAULT: ScanStep = ScanStep(0.02);
    /// Smallest accepted step, bounding a scan to 20000 points.
    pub const MIN: f32 = 1e-4;

    /// Creates a new `ScanStep`.
    ///
    /// # Returns
    /// An error if `step` is not in `[ScanStep::MIN, 2]`.
    pub fn new(step: f32) -> Result<Self> {
        if !(Self::MIN..=DOMAIN_HIGH - DOMAIN_LOW).contains(&step) {
            return Err(RegressionErr::InvalidStep(step));
        }

        Ok(Self(step))
    }

    pub fn get(&self) -> f32 {
        self.0
    }

    /// Returns how many points fit from the start of the domain up to, but excluding, its end.
    fn count(&self) -> usize {
        let ratio = (DOMAIN_HIGH - DOMAIN_LOW) as f64 / self.0 as f64;

        // 0.02 is not representable, snap to the nearest count when the step divides the
        // domain up to rounding so the end of the domain stays excluded.
        let n = if (ratio - ratio.round()).abs() < 1e-4 {
            ratio.round()
        } else {
            ratio.ceil()
        };

        n as usize
    }
}

impl Default for ScanStep {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Decides at which `x` values a fitted model gets evaluated for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurveSampler {
    /// Only both ends of the domain, enough to draw a straight line.
    Endpoints,
    /// A dense scan from the start of the domain up to, but excluding, its end.
    Scan(ScanStep),
}

impl CurveSampler {
    /// Creates a new scanning sampler.
    ///
    /// # Returns
    /// An error if `step` is not in `[ScanStep::MIN, 2]`.
    pub fn scan(step: f32) -> Result<Self> {
        Ok(Self::Scan(ScanStep::new(step)?))
    }

    /// Returns the `x` values this sampler evaluates, in ascending order.
    pub fn domain(&self) -> Vec<f32> {
        match self {
            CurveSampler::Endpoints => vec![DOMAIN_LOW, DOMAIN_HIGH],
            CurveSampler::Scan(step) => (0..step.count())
                .map(|k| DOMAIN_LOW + k as f32 * step.get())
                .collect(),
        }
    }

    /// Evaluates a model over the sampler's domain.
    ///
    /// # Arguments
    /// * `model` - The model to evaluate.
    /// * `params` - The model's current parameters.
    ///
    /// # Returns
    /// A freshly computed curve in the training domain.
    ///
    /// # Panics
    /// If `params` doesn't hold exactly `model.size()` values.
    pub fn sample<M: Model + ?Sized>(&self, model: &M, params: &[f32]) -> Curve {
        let points = self
            .domain()
            .into_iter()
            .map(|x| (x, model.eval(params, x)))
            .collect();

        Curve::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arch::models::{Cubic, Linear};

    #[test]
    fn endpoints() {
        let curve = CurveSampler::Endpoints.sample(&Linear, &[2., 1.]);
        assert_eq!(curve.points(), [(-1., -1.), (1., 3.)]);
    }

    #[test]
    fn default_scan_has_a_hundred_points() {
        let sampler = CurveSampler::Scan(ScanStep::default());
        let domain = sampler.domain();

        assert_eq!(domain.len(), 100);
        assert_eq!(domain[0], -1.);
        assert!(domain.iter().all(|&x| x < 1.));
        assert!((domain[99] - 0.98).abs() < 1e-5);

        for (k, pair) in domain.windows(2).enumerate() {
            assert!((pair[1] - pair[0] - 0.02).abs() < 1e-5, "step {k}");
        }
    }

    #[test]
    fn scan_with_uneven_step() {
        // -1, -0.25, 0.5
        let sampler = CurveSampler::scan(0.75).unwrap();
        assert_eq!(sampler.domain(), [-1., -0.25, 0.5]);

        let sampler = CurveSampler::scan(2.).unwrap();
        assert_eq!(sampler.domain(), [-1.]);
    }

    #[test]
    fn invalid_steps() {
        for step in [0., -0.1, 2.5, f32::NAN, f32::INFINITY, f32::MIN_POSITIVE / 2., 1e-6] {
            assert!(ScanStep::new(step).is_err(), "step {step}");
            assert!(CurveSampler::scan(step).is_err(), "step {step}");
        }
    }

    #[test]
    fn smallest_step() {
        let sampler = CurveSampler::scan(ScanStep::MIN).unwrap();
        assert!((19_999..=20_001).contains(&sampler.domain().len()));
    }

    #[test]
    fn default_step_is_valid() {
        let step = ScanStep::new(0.02).unwrap();

        assert_eq!(step, ScanStep::DEFAULT);
        assert_eq!(CurveSampler::scan(0.02), Ok(CurveSampler::Scan(step)));
    }

    #[test]
    #[should_panic(expected = "exactly 2 parameters")]
    fn wrong_amount_of_params() {
        CurveSampler::Endpoints.sample(&Linear, &[1., 0., 3.]);
    }

    #[test]
    fn resampling_is_idempotent() {
        let sampler = CurveSampler::scan(0.02).unwrap();
        let params = [0.3, -0.2, 0.7, 0.1];

        assert_eq!(
            sampler.sample(&Cubic, &params),
            sampler.sample(&Cubic, &params)
        );
    }

    #[test]
    fn denormalize() {
        let curve = Curve::new(vec![(-1., 0.5), (1., -0.25)]);
        let curve = curve.denormalize(&Normalizer::default());

        assert_eq!(curve.points(), [(-500., 250.), (500., -125.)]);
    }
}
