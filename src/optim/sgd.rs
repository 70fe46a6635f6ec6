use crate::{
    math::matrix::Matrix,
    network::{forward::ForwardPass, parameters::NetworkParameters},
    train::backprop::Deltas,
};

pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one full-batch update to `params`.
    ///
    /// The deltas are built from `labels - output`, so each scaled gradient is
    /// added to its parameter.
    pub fn step(&self, params: &mut NetworkParameters, features: &Matrix, pass: &ForwardPass, deltas: &Deltas) {
        let lr = self.learning_rate;

        let nabla_weights_out = &pass.hidden.transpose() * &deltas.output;
        params.weights_out = &params.weights_out + &nabla_weights_out.scale(lr);

        let nabla_biases_out = deltas.output.sum_cols();
        params.biases_out = &params.biases_out + &nabla_biases_out.scale(lr);

        let nabla_weights_hidden = &features.transpose() * &deltas.hidden;
        params.weights_hidden = &params.weights_hidden + &nabla_weights_hidden.scale(lr);

        let nabla_biases_hidden = deltas.hidden.sum_cols();
        params.biases_hidden = &params.biases_hidden + &nabla_biases_hidden.scale(lr);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_adds_scaled_gradients() {
        let mut params = NetworkParameters {
            weights_hidden: Matrix::zeros(2, 1),
            biases_hidden: Matrix::zeros(1, 1),
            weights_out: Matrix::zeros(1, 1),
            biases_out: Matrix::zeros(1, 1),
        };
        let features = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let pass = ForwardPass {
            hidden: Matrix::from_data(vec![vec![0.5], vec![1.0]]),
            output: Matrix::zeros(2, 1),
        };
        let deltas = Deltas {
            output: Matrix::from_data(vec![vec![2.0], vec![4.0]]),
            hidden: Matrix::from_data(vec![vec![1.0], vec![-1.0]]),
        };

        Sgd::new(0.5).step(&mut params, &features, &pass, &deltas);

        // hiddenᵀ·δo = 0.5*2 + 1*4 = 5
        assert_eq!(params.weights_out, Matrix::from_data(vec![vec![2.5]]));
        assert_eq!(params.biases_out, Matrix::from_data(vec![vec![3.0]]));
        // Xᵀ·δh = [1 - 3, 2 - 4]
        assert_eq!(params.weights_hidden, Matrix::from_data(vec![vec![-1.0], vec![-1.0]]));
        assert_eq!(params.biases_hidden, Matrix::from_data(vec![vec![0.0]]));
    }
}
