use crate::{RegressionErr, Result};

/// Horizontal display scale of the reference canvas.
pub const MAX_X: f32 = 500.;
/// Vertical display scale of the reference canvas.
pub const MAX_Y: f32 = 500.;

/// Maps display-space coordinates into the training domain and back.
///
/// Normalizing divides each axis by its scale and denormalizing multiplies by it, so learning
/// rates tuned for the training domain stay valid whatever the display size is. Coordinates are
/// never clamped: a point outside the visible extents normalizes outside of them too.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalizer {
    max_x: f32,
    max_y: f32,
}

impl Normalizer {
    /// Creates a new `Normalizer`.
    ///
    /// # Arguments
    /// * `max_x` - The horizontal scale.
    /// * `max_y` - The vertical scale.
    ///
    /// # Returns
    /// An error if any scale is not finite or not strictly positive.
    pub fn new(max_x: f32, max_y: f32) -> Result<Self> {
        for (axis, value) in [("x", max_x), ("y", max_y)] {
            if !value.is_finite() || value <= 0. {
                return Err(RegressionErr::InvalidScale { axis, value });
            }
        }

        Ok(Self { max_x, max_y })
    }

    /// Takes a display-space point into the training domain.
    pub fn normalize(&self, (x, y): (f32, f32)) -> (f32, f32) {
        (x / self.max_x, y / self.max_y)
    }

    /// Takes a training-domain point back into display space.
    pub fn denormalize(&self, (x, y): (f32, f32)) -> (f32, f32) {
        (x * self.max_x, y * self.max_y)
    }

    /// Returns the visible display extents as `([x_low, x_high], [y_low, y_high])`.
    ///
    /// The canvas shows half of each scale on either side of the origin.
    pub fn display_bounds(&self) -> ([f32; 2], [f32; 2]) {
        let (hx, hy) = (self.max_x / 2., self.max_y / 2.);
        ([-hx, hx], [-hy, hy])
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            max_x: MAX_X,
            max_y: MAX_Y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_and_back() {
        let normalizer = Normalizer::default();

        assert_eq!(normalizer.normalize((250., -125.)), (0.5, -0.25));
        assert_eq!(normalizer.denormalize((0.5, -0.25)), (250., -125.));
        assert_eq!(normalizer.denormalize((-1., 1.)), (-500., 500.));
    }

    #[test]
    fn out_of_range_is_not_clamped() {
        let normalizer = Normalizer::new(100., 10.).unwrap();

        assert_eq!(normalizer.normalize((300., -40.)), (3., -4.));
    }

    #[test]
    fn display_bounds() {
        let normalizer = Normalizer::default();
        assert_eq!(normalizer.display_bounds(), ([-250., 250.], [-250., 250.]));
    }

    #[test]
    fn invalid_scales() {
        assert_eq!(
            Normalizer::new(0., 1.),
            Err(RegressionErr::InvalidScale { axis: "x", value: 0. })
        );
        assert!(Normalizer::new(1., -2.).is_err());
        assert!(Normalizer::new(f32::INFINITY, 1.).is_err());
        assert!(Normalizer::new(1., f32::NAN).is_err());
    }
}
