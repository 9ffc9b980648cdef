use crate::error::Result;
use crate::math::matrix::Matrix;

pub struct MseLoss;

impl MseLoss {
    /// Scalar squared error: (p - y)ᵀ(p - y), summed over every entry.
    pub fn loss(predicted: &Matrix, expected: &Matrix) -> Result<f64> {
        let diff = predicted.sub(expected)?;
        Ok(diff.as_slice().iter().map(|d| d * d).sum())
    }

    /// Gradient w.r.t. the prediction: p - y
    pub fn derivative(predicted: &Matrix, expected: &Matrix) -> Result<Matrix> {
        predicted.sub(expected)
    }
}
