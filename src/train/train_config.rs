use std::sync::mpsc;
use crate::network::settings::Settings;
use crate::train::epoch_stats::EpochStats;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`        — total number of full-batch passes
/// - `learning_rate` — scale applied to every gradient
/// - `log_every`     — report the loss every this many epochs; `0` reports
///                     only the final epoch
/// - `progress_tx`   — optional channel sender receiving one `EpochStats` per
///                     reported epoch.  A dropped receiver does not stop the
///                     loop.
#[derive(Debug, Clone)]
pub struct TrainConfig {
    pub epochs: usize,
    pub learning_rate: f64,
    pub log_every: usize,
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
}

impl TrainConfig {
    /// Creates a minimal `TrainConfig` with no progress channel.
    pub fn new(epochs: usize, learning_rate: f64) -> Self {
        TrainConfig {
            epochs,
            learning_rate,
            log_every: 0,
            progress_tx: None,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        TrainConfig::new(settings.epochs, settings.learning_rate)
    }

    /// Whether the given 1-based epoch should be reported.
    pub(crate) fn reports(&self, epoch: usize) -> bool {
        epoch == self.epochs || (self.log_every > 0 && epoch % self.log_every == 0)
    }
}
