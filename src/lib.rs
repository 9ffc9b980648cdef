pub mod error;
pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod data;
pub mod train;

// Convenience re-exports
pub use error::{Error, Result};
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use layers::dense::Layer;
pub use network::network::Network;
pub use network::spec::{LayerSpec, NetworkSpec};
pub use loss::cost_function::CostFunction;
pub use optim::sgd::Sgd;
pub use data::{Sample, TrainingData};
pub use train::{evaluate, train, train_step, TrainConfig, TrainOutcome, TrainState};
