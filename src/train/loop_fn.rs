use std::time::Instant;

use tracing::{debug, warn};

use crate::loss::mse::MseLoss;
use crate::math::matrix::Matrix;
use crate::network::forward::feed_forward;
use crate::network::parameters::NetworkParameters;
use crate::optim::sgd::Sgd;
use crate::train::backprop::backward;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Runs `config.epochs` full-batch epochs over `features`/`labels`, updating
/// `params` in place, and returns the mean squared error of the predictions
/// made during the **last** epoch (before its update was applied).
///
/// Every epoch uses the whole dataset in its original order. There is no
/// early stopping; a NaN loss is reported once through `warn!` and training
/// carries on unchanged.
///
/// Shapes are not checked here; `Network::train` validates them first.
pub fn train_loop(
    params: &mut NetworkParameters,
    features: &Matrix,
    labels: &Matrix,
    config: &TrainConfig,
) -> f64 {
    let optimizer = Sgd::new(config.learning_rate);
    let t_start = Instant::now();

    let mut last_loss = f64::NAN;
    let mut nan_reported = false;

    for epoch in 1..=config.epochs {
        // ── Feedforward ────────────────────────────────────────────────────
        let pass = feed_forward(features, params);

        // ── Instrumentation (read-only) ───────────────────────────────────
        if config.reports(epoch) {
            let train_loss = MseLoss::loss(&pass.output, labels);
            last_loss = train_loss;

            let elapsed_ms = t_start.elapsed().as_millis() as u64;
            debug!(epoch, total = config.epochs, loss = train_loss, elapsed_ms, "epoch finished");

            if train_loss.is_nan() && !nan_reported {
                warn!(epoch, "training loss became NaN; parameters are no longer finite");
                nan_reported = true;
            }

            if let Some(ref tx) = config.progress_tx {
                // A dropped receiver only ends the reporting, not the training.
                let _ = tx.send(EpochStats {
                    epoch,
                    total_epochs: config.epochs,
                    train_loss,
                    elapsed_ms,
                });
            }
        }

        // ── Backpropagation ───────────────────────────────────────────────
        let deltas = backward(labels, &pass, &params.weights_out);

        // ── Update ────────────────────────────────────────────────────────
        optimizer.step(params, features, &pass, &deltas);
    }

    last_loss
}
