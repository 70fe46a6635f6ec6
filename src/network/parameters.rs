use rand::Rng;
use serde::Serialize;
use tracing::info;

use crate::math::matrix::Matrix;
use crate::network::settings::Settings;

/// The four trainable tensors of the network.
///
/// Shapes:
/// - `weights_hidden` — (input, hidden)
/// - `biases_hidden`  — (1, hidden), broadcast over rows
/// - `weights_out`    — (hidden, output)
/// - `biases_out`     — (1, output), broadcast over rows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkParameters {
    pub weights_hidden: Matrix,
    pub biases_hidden: Matrix,
    pub weights_out: Matrix,
    pub biases_out: Matrix,
}

impl NetworkParameters {
    /// Draws every entry independently from U[0, 1).
    pub fn random<R: Rng + ?Sized>(settings: &Settings, rng: &mut R) -> NetworkParameters {
        let weights_hidden = Matrix::random_uniform(settings.input_neurons, settings.hidden_neurons, rng);
        let biases_hidden = Matrix::random_uniform(1, settings.hidden_neurons, rng);
        let weights_out = Matrix::random_uniform(settings.hidden_neurons, settings.output_neurons, rng);
        let biases_out = Matrix::random_uniform(1, settings.output_neurons, rng);

        NetworkParameters {
            weights_hidden,
            biases_hidden,
            weights_out,
            biases_out,
        }
    }

    /// Logs every tensor at `info` level.
    pub fn log(&self) {
        info!("hidden layer weights =\n{}", self.weights_hidden);
        info!("hidden layer biases =\n{}", self.biases_hidden);
        info!("output layer weights =\n{}", self.weights_out);
        info!("output layer biases =\n{}", self.biases_out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn random_parameters_have_declared_shapes() {
        let settings = Settings {
            input_neurons: 5,
            output_neurons: 2,
            hidden_neurons: 7,
            ..Settings::default()
        };
        let params = NetworkParameters::random(&settings, &mut StdRng::seed_from_u64(1));

        assert_eq!(params.weights_hidden.shape(), (5, 7));
        assert_eq!(params.biases_hidden.shape(), (1, 7));
        assert_eq!(params.weights_out.shape(), (7, 2));
        assert_eq!(params.biases_out.shape(), (1, 2));

        let all = [
            &params.weights_hidden,
            &params.biases_hidden,
            &params.weights_out,
            &params.biases_out,
        ];
        for m in all {
            assert!(m.data.iter().flatten().all(|&x| (0.0..1.0).contains(&x)));
        }
    }
}
