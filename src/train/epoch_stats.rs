use serde::{Serialize, Deserialize};

/// Statistics for one instrumented epoch of `train_loop`.
///
/// When a `progress_tx` channel is configured in `TrainConfig`, the loop sends
/// one `EpochStats` every `log_every` epochs and after the final epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Mean squared error of the predictions made during this epoch.
    pub train_loss: f64,
    /// Wall-clock time since the loop started, in milliseconds.
    pub elapsed_ms: u64,
}
