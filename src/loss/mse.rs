use crate::math::matrix::Matrix;

pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE over every entry: mean((predicted - expected)²)
    pub fn loss(predicted: &Matrix, expected: &Matrix) -> f64 {
        let n = (predicted.rows * predicted.cols) as f64;
        predicted.data.iter().flatten().zip(expected.data.iter().flatten())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>() / n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mse_of_known_values() {
        let predicted = Matrix::from_data(vec![vec![1.0, 0.0], vec![0.5, 0.5]]);
        let expected = Matrix::from_data(vec![vec![0.0, 0.0], vec![0.5, 1.5]]);
        assert_eq!(MseLoss::loss(&predicted, &expected), 0.5);
    }
}
