use crate::{RegressionErr, Result};

/// A `ParamGen` generates values for the initial state of the model's parameters.
pub trait ParamGen {
    /// Should sample at most `n` parameters.
    ///
    /// # Arguments
    /// * `n` - The upper limit of samples to generate.
    ///
    /// # Returns
    /// An option whether the generator is exhausted.
    fn sample(&mut self, n: usize) -> Option<Vec<f32>>;
}

/// Draws exactly `n` parameters from a generator.
///
/// # Errors
/// `ParamGenExhausted` if the generator yields fewer than `n` values.
pub fn generate(param_gen: &mut dyn ParamGen, n: usize) -> Result<Vec<f32>> {
    let params = param_gen.sample(n).unwrap_or_default();

    if params.len() != n {
        return Err(RegressionErr::ParamGenExhausted {
            got: params.len(),
            expected: n,
        });
    }

    Ok(params)
}
