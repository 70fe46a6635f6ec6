use crate::errors::{NetworkError, Result};
use crate::math::matrix::Matrix;

/// Features and one-hot labels, one example per row.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    features: Matrix,
    labels: Matrix,
}

impl Dataset {
    /// Pairs `features` with `labels`, rejecting differing row counts.
    pub fn new(features: Matrix, labels: Matrix) -> Result<Dataset> {
        if features.rows != labels.rows {
            return Err(NetworkError::ShapeMismatch {
                what: "label rows",
                expected: features.rows,
                actual: labels.rows,
            });
        }
        Ok(Dataset { features, labels })
    }

    pub fn features(&self) -> &Matrix {
        &self.features
    }

    pub fn labels(&self) -> &Matrix {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.features.rows
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Anything that can produce a `Dataset`, e.g. a CSV file on disk.
pub trait DataProvider {
    fn load(&self) -> Result<Dataset>;
}
