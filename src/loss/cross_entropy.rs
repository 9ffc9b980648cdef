use crate::error::{Error, Result};
use crate::math::matrix::Matrix;

/// Categorical cross-entropy over a one-hot target.
pub struct CrossEntropyLoss;

impl CrossEntropyLoss {
    /// L = -sum(expected[i] * ln(predicted[i]))
    ///
    /// Terms whose target is exactly 0 contribute nothing, so a prediction of 0
    /// for an inactive class does not turn the loss into NaN.
    pub fn loss(predicted: &Matrix, expected: &Matrix) -> Result<f64> {
        if predicted.dims() != expected.dims() {
            return Err(Error::mismatch("cross_entropy", predicted.dims(), expected.dims()));
        }
        Ok(-predicted
            .as_slice()
            .iter()
            .zip(expected.as_slice())
            .filter(|(_, &e)| e != 0.0)
            .map(|(p, e)| e * p.ln())
            .sum::<f64>())
    }

    /// ∂L/∂p_i = -e_i / p_i + (1 - e_i) / (1 - p_i)
    ///
    /// A prediction of exactly 0 or 1 divides by zero. Those entries are
    /// clamped to 0 so the backward pass stays finite; the clamp keeps training
    /// alive but the affected output receives no gradient for that step.
    pub fn derivative(predicted: &Matrix, expected: &Matrix) -> Result<Matrix> {
        let grad = expected.zip_with(predicted, |e, p| -(e / p) + (1.0 - e) / (1.0 - p))?;
        Ok(grad.map(|x| if x.is_finite() { x } else { 0.0 }))
    }
}
