use serde::{Deserialize, Serialize};

/// Per-epoch training statistics recorded by `train`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Mean cost over the minibatch trained on in this epoch.
    pub train_cost: f64,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}

/// How a `train` run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainState {
    /// The batch cost reached `acceptable_cost`.
    Converged,
    /// `max_epochs` steps ran without reaching `acceptable_cost`.
    EpochLimitReached,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainOutcome {
    pub state: TrainState,
    /// Number of epochs actually run.
    pub epochs: usize,
    /// Average batch cost of the last epoch; `None` if no epoch ran.
    pub final_cost: Option<f64>,
    pub history: Vec<EpochStats>,
}
