use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

use crate::data::dataset::Dataset;
use crate::errors::{NetworkError, Result};
use crate::eval::accuracy::accuracy;
use crate::math::matrix::Matrix;
use crate::network::forward::feed_forward;
use crate::network::parameters::NetworkParameters;
use crate::network::settings::Settings;
use crate::train::loop_fn::train_loop;
use crate::train::train_config::TrainConfig;

/// Where a network is in its lifecycle.
///
/// Freshly drawn parameters only exist inside `train_with` until the epoch
/// loop ends, so the initialized-but-untrained state is never observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkState {
    /// No successful `train` yet.
    Uninitialized,
    /// Parameters are set and read-only until the next `train`.
    Trained,
}

/// A 3-layer sigmoid network: input → hidden → output.
#[derive(Debug, Clone)]
pub struct Network {
    settings: Settings,
    params: Option<NetworkParameters>,
}

impl Network {
    pub fn new(settings: Settings) -> Network {
        Network { settings, params: None }
    }

    pub fn state(&self) -> NetworkState {
        match self.params {
            Some(_) => NetworkState::Trained,
            None => NetworkState::Uninitialized,
        }
    }

    /// Read-only snapshot of the trained parameters.
    pub fn parameters(&self) -> Option<&NetworkParameters> {
        self.params.as_ref()
    }

    /// Trains from scratch with the epochs and learning rate from `Settings`.
    pub fn train(&mut self, features: &Matrix, labels: &Matrix) -> Result<()> {
        let config = TrainConfig::from_settings(&self.settings);
        self.train_with(features, labels, &config)
    }

    /// Trains from scratch with an explicit loop configuration.
    ///
    /// Parameters are re-drawn on every call; a previous training run is
    /// discarded only once this one has finished. On error the network is
    /// left as it was.
    pub fn train_with(&mut self, features: &Matrix, labels: &Matrix, config: &TrainConfig) -> Result<()> {
        self.settings.validate()?;
        check_shapes(&self.settings, features, labels)?;

        let mut rng = match self.settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut params = NetworkParameters::random(&self.settings, &mut rng);

        info!(
            examples = features.rows,
            epochs = config.epochs,
            learning_rate = config.learning_rate,
            "training started"
        );
        let loss = train_loop(&mut params, features, labels, config);
        info!(loss, "training finished");

        self.params = Some(params);
        Ok(())
    }

    /// Inference-only forward pass.
    pub fn predict(&self, features: &Matrix) -> Result<Matrix> {
        let params = self.params.as_ref().ok_or(NetworkError::NotInitialized)?;
        expect_cols("feature columns", self.settings.input_neurons, features)?;
        Ok(feed_forward(features, params).output)
    }

    /// Classification accuracy in [0, 1] on `test`.
    pub fn validate(&self, test: &Dataset) -> Result<f64> {
        if self.params.is_none() {
            return Err(NetworkError::NotInitialized);
        }
        if test.is_empty() {
            return Err(NetworkError::ShapeMismatch {
                what: "test rows",
                expected: 1,
                actual: 0,
            });
        }
        expect_cols("label columns", self.settings.output_neurons, test.labels())?;

        let predictions = self.predict(test.features())?;
        Ok(accuracy(&predictions, test.labels()))
    }

    /// Logs the trained parameters; fails if the network is untrained.
    pub fn log_parameters(&self) -> Result<()> {
        let params = self.params.as_ref().ok_or(NetworkError::NotInitialized)?;
        params.log();
        Ok(())
    }
}

fn check_shapes(settings: &Settings, features: &Matrix, labels: &Matrix) -> Result<()> {
    if features.rows == 0 {
        return Err(NetworkError::ShapeMismatch {
            what: "training rows",
            expected: 1,
            actual: 0,
        });
    }
    if features.rows != labels.rows {
        return Err(NetworkError::ShapeMismatch {
            what: "label rows",
            expected: features.rows,
            actual: labels.rows,
        });
    }
    expect_cols("feature columns", settings.input_neurons, features)?;
    expect_cols("label columns", settings.output_neurons, labels)
}

fn expect_cols(what: &'static str, expected: usize, m: &Matrix) -> Result<()> {
    if m.cols != expected {
        return Err(NetworkError::ShapeMismatch {
            what,
            expected,
            actual: m.cols,
        });
    }
    Ok(())
}
