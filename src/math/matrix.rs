use rand::Rng;
use serde::{Serialize, Deserialize};
use std::fmt;
use std::ops::{Add, Sub, Mul};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Fills a (rows, cols) matrix with independent samples from U[0, 1).
    pub fn random_uniform<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen::<f64>();
            }
        }

        res
    }

    /// Builds a matrix from row vectors.
    ///
    /// Panics if the rows are not all the same length.
    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        let cols = data.first().map_or(0, |row| row.len());
        if data.iter().any(|row| row.len() != cols) {
            panic!("Matrix rows must all have the same length")
        }

        Matrix {
            rows: data.len(),
            cols,
            data
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i]
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    /// Applies a stateless scalar function to every entry.
    pub fn apply(&self, f: fn(f64) -> f64) -> Matrix {
        self.map(f)
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data
                .iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect()
        }
    }

    pub fn scale(&self, factor: f64) -> Matrix {
        self.map(|x| x * factor)
    }

    /// Element-wise (Hadamard) product of two same-shape matrices.
    pub fn hadamard(&self, rhs: &Matrix) -> Matrix {
        assert_same_shape(self, rhs);

        let data = self.data.iter().zip(rhs.data.iter())
            .map(|(row_a, row_b)| {
                row_a.iter().zip(row_b.iter()).map(|(x, y)| x * y).collect()
            })
            .collect();

        Matrix { rows: self.rows, cols: self.cols, data }
    }

    /// Adds a 1-row vector to every row of `self`.
    pub fn add_row_broadcast(&self, row: &Matrix) -> Matrix {
        if row.rows != 1 || row.cols != self.cols {
            panic!(
                "Cannot broadcast a {}x{} row over a {}x{} matrix",
                row.rows, row.cols, self.rows, self.cols
            )
        }

        let bias = &row.data[0];
        let data = self.data.iter()
            .map(|r| r.iter().zip(bias.iter()).map(|(x, b)| x + b).collect())
            .collect();

        Matrix { rows: self.rows, cols: self.cols, data }
    }

    /// Sums every column, producing a 1 x cols matrix.
    pub fn sum_cols(&self) -> Matrix {
        let mut res = Matrix::zeros(1, self.cols);

        for row in &self.data {
            for (acc, x) in res.data[0].iter_mut().zip(row.iter()) {
                *acc += x;
            }
        }

        res
    }

    /// Largest entry of row `i`; NaN entries are skipped.
    pub fn row_max(&self, i: usize) -> f64 {
        self.data[i].iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

fn assert_same_shape(a: &Matrix, b: &Matrix) {
    if a.rows != b.rows || a.cols != b.cols {
        panic!("Matrices are of incorrect sizes")
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.data.iter().enumerate() {
            let open = if i == 0 { '⎡' } else if i + 1 == self.rows { '⎣' } else { '⎢' };
            let close = if i == 0 { '⎤' } else if i + 1 == self.rows { '⎦' } else { '⎥' };
            let (open, close) = if self.rows == 1 { ('[', ']') } else { (open, close) };

            write!(f, "{}", open)?;
            for (j, x) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:>9.5}", x)?;
            }
            writeln!(f, "{}", close)?;
        }
        Ok(())
    }
}

impl Add for &Matrix {
    type Output = Matrix;

    fn add(self, rhs: Self) -> Self::Output {
        assert_same_shape(self, rhs);

        let mut res = Matrix::zeros(self.rows, self.cols);

        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[i][j] = self.data[i][j] + rhs.data[i][j];
            }
        }

        res
    }
}

impl Sub for &Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Self) -> Self::Output {
        assert_same_shape(self, rhs);

        let mut res = Matrix::zeros(self.rows, self.cols);

        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[i][j] = self.data[i][j] - rhs.data[i][j];
            }
        }

        res
    }
}

impl Mul for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.cols != rhs.rows {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res =  Matrix::zeros(self.rows, rhs.cols);

        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut sum = 0.0;

                for k in 0..self.cols {
                    sum += self.data[i][k] * rhs.data[k][j];
                }

                res.data[i][j] = sum;
            }
        }

        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn multiplies_2x2() {
        let a = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = Matrix::from_data(vec![vec![5.0, 6.0], vec![7.0, 8.0]]);
        let expected = Matrix::from_data(vec![vec![19.0, 22.0], vec![43.0, 50.0]]);
        assert_eq!(&a * &b, expected);
    }

    #[test]
    fn transpose_swaps_shape() {
        let a = Matrix::from_data(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let t = a.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.data[2][1], 6.0);
        assert_eq!(t.transpose(), a);
    }

    #[test]
    fn broadcast_adds_bias_to_every_row() {
        let a = Matrix::zeros(3, 2);
        let bias = Matrix::from_data(vec![vec![1.5, -2.0]]);
        let res = a.add_row_broadcast(&bias);
        for row in &res.data {
            assert_eq!(row, &vec![1.5, -2.0]);
        }
    }

    #[test]
    #[should_panic]
    fn broadcast_rejects_wrong_width() {
        let a = Matrix::zeros(3, 2);
        let bias = Matrix::from_data(vec![vec![1.0, 2.0, 3.0]]);
        a.add_row_broadcast(&bias);
    }

    #[test]
    fn sum_cols_collapses_rows() {
        let a = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]);
        assert_eq!(a.sum_cols(), Matrix::from_data(vec![vec![9.0, 12.0]]));
    }

    #[test]
    fn hadamard_and_scale() {
        let a = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = Matrix::from_data(vec![vec![2.0, 0.5], vec![-1.0, 0.0]]);
        assert_eq!(a.hadamard(&b), Matrix::from_data(vec![vec![2.0, 1.0], vec![-3.0, 0.0]]));
        assert_eq!(a.scale(0.5), Matrix::from_data(vec![vec![0.5, 1.0], vec![1.5, 2.0]]));
    }

    #[test]
    fn add_and_sub_are_elementwise() {
        let a = Matrix::from_data(vec![vec![1.0, 2.0]]);
        let b = Matrix::from_data(vec![vec![0.5, 0.25]]);
        assert_eq!(&a + &b, Matrix::from_data(vec![vec![1.5, 2.25]]));
        assert_eq!(&a - &b, Matrix::from_data(vec![vec![0.5, 1.75]]));
    }

    #[test]
    fn random_uniform_is_in_unit_interval_and_seedable() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = Matrix::random_uniform(5, 4, &mut rng);
        assert_eq!(m.shape(), (5, 4));
        assert!(m.data.iter().flatten().all(|&x| (0.0..1.0).contains(&x)));

        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(Matrix::random_uniform(5, 4, &mut rng), m);
    }

    #[test]
    fn row_max_picks_largest() {
        let m = Matrix::from_data(vec![vec![0.1, 0.7, 0.2]]);
        assert_eq!(m.row_max(0), 0.7);
    }

    #[test]
    fn from_empty_data_has_no_columns() {
        let m = Matrix::from_data(vec![]);
        assert_eq!(m.shape(), (0, 0));
    }
}
