use crate::activation::sigmoid;
use crate::math::matrix::Matrix;
use crate::network::parameters::NetworkParameters;

/// Activations produced by one forward pass.
///
/// `hidden` is kept for backpropagation; inference only reads `output`.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardPass {
    pub hidden: Matrix,
    pub output: Matrix,
}

/// Feeds `features` (one example per row) through both sigmoid layers.
pub fn feed_forward(features: &Matrix, params: &NetworkParameters) -> ForwardPass {
    // z = X·W + b, a = σ(z)
    let hidden = (features * &params.weights_hidden)
        .add_row_broadcast(&params.biases_hidden)
        .apply(sigmoid);

    let output = (&hidden * &params.weights_out)
        .add_row_broadcast(&params.biases_out)
        .apply(sigmoid);

    ForwardPass { hidden, output }
}
