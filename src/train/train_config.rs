use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::loss::cost_function::CostFunction;

/// Hyperparameters for a `train` run.
///
/// # Fields
/// - `max_epochs`      — upper bound on training steps; each epoch is one sampled minibatch
/// - `acceptable_cost` — training stops once `|average batch cost| <= acceptable_cost`
/// - `batch_size`      — samples drawn (with replacement) per epoch
/// - `learning_rate`   — SGD step size
/// - `cost_function`   — which cost to minimise
///
/// Missing JSON fields fall back to the `Default` values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub max_epochs: usize,
    pub acceptable_cost: f64,
    pub batch_size: usize,
    pub learning_rate: f64,
    pub cost_function: CostFunction,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            max_epochs: 10,
            acceptable_cost: 0.01,
            batch_size: 10,
            learning_rate: 0.01,
            cost_function: CostFunction::MeanSquaredError,
        }
    }
}

impl TrainConfig {
    pub fn new(max_epochs: usize, batch_size: usize, learning_rate: f64) -> Self {
        TrainConfig {
            max_epochs,
            batch_size,
            learning_rate,
            ..TrainConfig::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(Error::InvalidConfig("batch_size must be at least 1".into()));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "learning_rate must be finite and >= 0, got {}",
                self.learning_rate
            )));
        }
        if self.acceptable_cost.is_nan() {
            return Err(Error::InvalidConfig("acceptable_cost must not be NaN".into()));
        }
        Ok(())
    }

    /// Loads and validates a config from a JSON file.
    pub fn load_json(path: &str) -> Result<TrainConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: TrainConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}
