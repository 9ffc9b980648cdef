use std::time::Instant;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::data::TrainingData;
use crate::error::{Error, Result};
use crate::network::network::Network;
use crate::optim::sgd::Sgd;
use crate::train::epoch_stats::{EpochStats, TrainOutcome, TrainState};
use crate::train::train_config::TrainConfig;
use crate::train::trainer::train_step;

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Trains `network` until the batch cost is acceptable or the epoch limit is hit.
///
/// Each epoch samples one fresh minibatch from `training` and runs a single
/// `train_step` on it. The loop stops as soon as `|cost| <= acceptable_cost`
/// (`TrainState::Converged`) or after `max_epochs` epochs
/// (`TrainState::EpochLimitReached`).
///
/// # Errors
/// Invalid config, an empty training set, or any shape mismatch between the
/// data and the network. A failed step aborts the run; earlier epochs' updates
/// are kept.
pub fn train<D, R>(
    network: &mut Network,
    training: &[D],
    config: &TrainConfig,
    rng: &mut R,
) -> Result<TrainOutcome>
where
    D: TrainingData,
    R: Rng + ?Sized,
{
    config.validate()?;
    if training.is_empty() {
        return Err(Error::EmptyDataset);
    }

    let optimizer = Sgd::new(config.learning_rate);
    let mut history = Vec::new();
    let mut state = TrainState::EpochLimitReached;

    for epoch in 1..=config.max_epochs {
        let t_start = Instant::now();

        let batch = sample_batch(training, config.batch_size, rng)?;
        let cost = train_step(network, &batch, config.cost_function, &optimizer)?;

        let elapsed_ms = t_start.elapsed().as_millis() as u64;
        if cost.is_finite() {
            debug!("Epoch {}: cost = {:.6}", epoch, cost);
        } else {
            warn!("Epoch {}: cost is not finite ({})", epoch, cost);
        }

        history.push(EpochStats { epoch, train_cost: cost, elapsed_ms });

        if cost.abs() <= config.acceptable_cost {
            state = TrainState::Converged;
            break;
        }
    }

    let final_cost = history.last().map(|s| s.train_cost);
    info!(
        "Training finished: {:?} after {} epochs, final cost = {:?}",
        state,
        history.len(),
        final_cost
    );

    Ok(TrainOutcome {
        state,
        epochs: history.len(),
        final_cost,
        history,
    })
}

/// Draws `batch_size` examples uniformly, with replacement.
pub fn sample_batch<'a, D, R>(training: &'a [D], batch_size: usize, rng: &mut R) -> Result<Vec<&'a D>>
where
    R: Rng + ?Sized,
{
    if training.is_empty() {
        return Err(Error::EmptyDataset);
    }
    Ok((0..batch_size)
        .map(|_| &training[rng.gen_range(0..training.len())])
        .collect())
}
