use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::loss::cross_entropy::CrossEntropyLoss;
use crate::loss::mse::MseLoss;
use crate::math::matrix::Matrix;

/// Selects which cost the training loop minimises.
///
/// - `MeanSquaredError`        — pair with Identity or Sigmoid output.
/// - `CategoricalCrossEntropy` — suited to one-hot targets with outputs in (0, 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostFunction {
    #[default]
    MeanSquaredError,
    CategoricalCrossEntropy,
}

impl CostFunction {
    /// Scalar cost of one prediction against its target.
    pub fn loss(&self, predicted: &Matrix, expected: &Matrix) -> Result<f64> {
        match self {
            CostFunction::MeanSquaredError => MseLoss::loss(predicted, expected),
            CostFunction::CategoricalCrossEntropy => CrossEntropyLoss::loss(predicted, expected),
        }
    }

    /// ∂cost/∂prediction, same shape as `predicted`.
    pub fn output_gradient(&self, predicted: &Matrix, expected: &Matrix) -> Result<Matrix> {
        match self {
            CostFunction::MeanSquaredError => MseLoss::derivative(predicted, expected),
            CostFunction::CategoricalCrossEntropy => {
                CrossEntropyLoss::derivative(predicted, expected)
            }
        }
    }
}
