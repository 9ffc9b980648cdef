use serde::{Deserialize, Serialize};

use crate::data::TrainingData;
use crate::error::Result;
use crate::loss::cost_function::CostFunction;
use crate::network::network::Network;

/// Cost and accuracy of a network over a held-out set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub samples: usize,
    pub mean_cost: f64,
    /// Fraction in [0, 1] of samples whose predicted `arg_max` matches the target's.
    pub accuracy: f64,
}

/// Scores `network` on `testing` without touching its parameters.
///
/// An empty set yields zero cost and zero accuracy.
pub fn evaluate<D: TrainingData>(
    network: &Network,
    testing: &[D],
    cost: CostFunction,
) -> Result<Evaluation> {
    let mut total_cost = 0.0;
    let mut correct = 0usize;

    for sample in testing {
        let expected = sample.output_data();
        let output = network.predict(&sample.input_data())?;
        total_cost += cost.loss(&output, &expected)?;
        if output.arg_max().is_some() && output.arg_max() == expected.arg_max() {
            correct += 1;
        }
    }

    let n = testing.len();
    if n == 0 {
        return Ok(Evaluation { samples: 0, mean_cost: 0.0, accuracy: 0.0 });
    }
    Ok(Evaluation {
        samples: n,
        mean_cost: total_cost / n as f64,
        accuracy: correct as f64 / n as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::activation::ActivationFunction;
    use crate::data::Sample;
    use crate::layers::dense::Layer;
    use crate::math::matrix::Matrix;

    /// Identity network that swaps its two inputs.
    fn swapper() -> Network {
        let weights = Matrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
        let layer = Layer::from_parts(weights, Matrix::zeros(2, 1), ActivationFunction::Identity).unwrap();
        Network::from_layers(vec![layer]).unwrap()
    }

    #[test]
    fn accuracy_counts_arg_max_agreement() {
        let testing = vec![
            Sample::new(&[0.2, 0.8], &[1.0, 0.0]),
            Sample::new(&[0.9, 0.1], &[1.0, 0.0]),
        ];
        let eval = evaluate(&swapper(), &testing, CostFunction::MeanSquaredError).unwrap();
        assert_eq!(eval.samples, 2);
        assert_eq!(eval.accuracy, 0.5);
        // (0.8-1)² + 0.2² = 0.08 and (0.1-1)² + 0.9² = 1.62
        assert!((eval.mean_cost - 0.85).abs() < 1e-12);
    }

    #[test]
    fn empty_set_scores_zero() {
        let testing: Vec<Sample> = vec![];
        let eval = evaluate(&swapper(), &testing, CostFunction::MeanSquaredError).unwrap();
        assert_eq!(eval, Evaluation { samples: 0, mean_cost: 0.0, accuracy: 0.0 });
    }
}
