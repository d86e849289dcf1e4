use crate::Result;

/// Defines the strategy for updating model parameters based on calculated gradients.
pub trait Optimizer {
    /// Updates the provided slice of parameters using the gradient of the last step.
    ///
    /// # Arguments
    /// * `grad` - A reference to the model's gradient.
    /// * `params` - The parameters to update.
    ///
    /// # Returns
    /// An error if there's a mismatch in the sizes of `grad` and `params`.
    fn update_params(&mut self, grad: &[f32], params: &mut [f32]) -> Result<()>;
}

/// Checks `buf` holds one value per parameter.
///
/// # Arguments
/// * `what` - Names `buf` in the error.
/// * `buf` - The buffer to check.
/// * `params` - The parameters it should match.
pub(super) fn check_sizes(what: &'static str, buf: &[f32], params: &[f32]) -> Result<()> {
    if buf.len() != params.len() {
        return Err(crate::RegressionErr::SizeMismatch {
            what,
            got: buf.len(),
            expected: params.len(),
        });
    }

    Ok(())
}
