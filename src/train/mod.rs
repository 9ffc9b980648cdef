pub mod trainer;
pub mod epoch_stats;
pub mod train_config;
pub mod loop_fn;
pub mod evaluate;

pub use trainer::train_step;
pub use epoch_stats::{EpochStats, TrainOutcome, TrainState};
pub use train_config::TrainConfig;
pub use loop_fn::{train, sample_batch};
pub use evaluate::{evaluate, Evaluation};
