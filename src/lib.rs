pub mod math;
pub mod activation;
pub mod errors;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod eval;
pub mod data;
pub mod logging;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::{sigmoid, sigmoid_prime};
pub use errors::{NetworkError, Result};
pub use network::{Network, NetworkParameters, NetworkState, Settings};
pub use loss::mse::MseLoss;
pub use optim::sgd::Sgd;
pub use train::{train_loop, EpochStats, TrainConfig};
pub use data::{CsvDataProvider, DataProvider, Dataset};
