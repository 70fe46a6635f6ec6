use std::f64::consts::E;

/// Logistic activation `1 / (1 + e^-x)`.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}

/// Derivative of the sigmoid expressed through its output.
///
/// `a` must be an already-activated value `a = sigmoid(z)`; the result is
/// `σ'(z) = a (1 - a)`. Passing the raw pre-activation `z` gives a wrong
/// gradient.
pub fn sigmoid_prime(a: f64) -> f64 {
    a * (1.0 - a)
}
