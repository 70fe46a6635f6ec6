use crate::activation::sigmoid_prime;
use crate::math::matrix::Matrix;
use crate::network::forward::ForwardPass;

/// Error terms of both layers for one full-batch backward pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Deltas {
    pub output: Matrix,
    pub hidden: Matrix,
}

/// Propagates `labels - output` back through the output weights.
///
/// `pass` must come from the same parameters whose `weights_out` is given, and
/// the derivative is evaluated on the stored activations, not the
/// pre-activations.
pub fn backward(labels: &Matrix, pass: &ForwardPass, weights_out: &Matrix) -> Deltas {
    let error = labels - &pass.output;

    let output = error.hadamard(&pass.output.apply(sigmoid_prime));

    let errors_hidden = &output * &weights_out.transpose();
    let hidden = errors_hidden.hadamard(&pass.hidden.apply(sigmoid_prime));

    Deltas { output, hidden }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_prediction_has_zero_deltas() {
        let labels = Matrix::from_data(vec![vec![0.25, 0.75]]);
        let pass = ForwardPass {
            hidden: Matrix::from_data(vec![vec![0.5, 0.5, 0.5]]),
            output: labels.clone(),
        };
        let weights_out = Matrix::from_data(vec![vec![1.0, 2.0]; 3]);

        let deltas = backward(&labels, &pass, &weights_out);
        assert!(deltas.output.data.iter().flatten().all(|&x| x == 0.0));
        assert!(deltas.hidden.data.iter().flatten().all(|&x| x == 0.0));
    }

    #[test]
    fn deltas_use_activated_values() {
        // error = 1 - 0.5 = 0.5, σ'(a) = 0.5 * 0.5 = 0.25 → delta_out = 0.125
        let labels = Matrix::from_data(vec![vec![1.0]]);
        let pass = ForwardPass {
            hidden: Matrix::from_data(vec![vec![0.8, 0.1]]),
            output: Matrix::from_data(vec![vec![0.5]]),
        };
        let weights_out = Matrix::from_data(vec![vec![2.0], vec![-4.0]]);

        let deltas = backward(&labels, &pass, &weights_out);
        assert_eq!(deltas.output, Matrix::from_data(vec![vec![0.125]]));

        // errors_hidden = [0.25, -0.5]; σ'(0.8) = 0.16, σ'(0.1) = 0.09
        let expected = [0.25 * 0.8 * (1.0 - 0.8), -0.5 * 0.1 * (1.0 - 0.1)];
        for (got, want) in deltas.hidden.data[0].iter().zip(expected.iter()) {
            assert!((got - want).abs() < 1e-12);
        }
    }

    #[test]
    fn delta_shapes_follow_layers() {
        let labels = Matrix::zeros(4, 3);
        let pass = ForwardPass {
            hidden: Matrix::zeros(4, 5),
            output: Matrix::zeros(4, 3),
        };
        let deltas = backward(&labels, &pass, &Matrix::zeros(5, 3));
        assert_eq!(deltas.output.shape(), (4, 3));
        assert_eq!(deltas.hidden.shape(), (4, 5));
    }
}
