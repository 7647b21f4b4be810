//! Matrix type for 2D numeric data.

use super::Vector;
use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};

/// A 2D matrix of floating-point values (row-major storage).
///
/// Rows are samples, columns are features.
///
/// # Examples
///
/// ```
/// use omset_forecast::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> Matrix<T> {
    /// Creates a new matrix from a vector of data.
    ///
    /// # Errors
    ///
    /// Returns an error if data length doesn't match rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(ForecastError::dimension_mismatch(
                "rows*cols",
                rows * cols,
                data.len(),
            ));
        }
        Ok(Self { data, rows, cols })
    }

    /// Builds a matrix from equally sized rows.
    ///
    /// An empty slice yields a `0 x cols` matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if any row length differs from `cols`.
    pub fn from_rows(cols: usize, rows: &[Vec<T>]) -> Result<Self> {
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            if row.len() != cols {
                return Err(ForecastError::dimension_mismatch("row length", cols, row.len()));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    /// Sets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row * self.cols + col] = value;
    }

    /// Returns a row as a Vector.
    #[must_use]
    pub fn row(&self, row_idx: usize) -> Vector<T> {
        Vector::from_slice(self.row_slice(row_idx))
    }

    /// Returns a row as a borrowed slice.
    #[must_use]
    pub fn row_slice(&self, row_idx: usize) -> &[T] {
        let start = row_idx * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Returns a column as a Vector.
    #[must_use]
    pub fn column(&self, col_idx: usize) -> Vector<T> {
        let data: Vec<T> = (0..self.rows)
            .map(|row| self.data[row * self.cols + col_idx])
            .collect();
        Vector::from_vec(data)
    }

    /// Returns rows `[start, end)` as a new matrix.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or `end > n_rows()`.
    #[must_use]
    pub fn slice_rows(&self, start: usize, end: usize) -> Self {
        Self {
            data: self.data[start * self.cols..end * self.cols].to_vec(),
            rows: end - start,
            cols: self.cols,
        }
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl Matrix<f64> {
    /// Creates a matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Transposes the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = vec![0.0; self.rows * self.cols];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Matrix-matrix multiplication.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions don't match.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(ForecastError::DimensionMismatch {
                expected: format!("{}x{} * {}xN", self.rows, self.cols, self.cols),
                actual: format!("{}x{}", other.rows, other.cols),
            });
        }

        let mut result = vec![0.0; self.rows * other.cols];
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.get(i, k) * other.get(k, j);
                }
                result[i * other.cols + j] = sum;
            }
        }

        Ok(Self {
            data: result,
            rows: self.rows,
            cols: other.cols,
        })
    }

    /// Matrix-vector multiplication.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions don't match.
    pub fn matvec(&self, vec: &Vector<f64>) -> Result<Vector<f64>> {
        if self.cols != vec.len() {
            return Err(ForecastError::dimension_mismatch(
                "matrix columns",
                self.cols,
                vec.len(),
            ));
        }

        let result: Vec<f64> = (0..self.rows)
            .map(|i| {
                self.row_slice(i)
                    .iter()
                    .zip(vec.as_slice())
                    .map(|(a, b)| a * b)
                    .sum()
            })
            .collect();

        Ok(Vector::from_vec(result))
    }

    /// Returns the mean of every column.
    ///
    /// An empty matrix yields zeros.
    #[must_use]
    pub fn column_means(&self) -> Vector<f64> {
        if self.rows == 0 {
            return Vector::from_vec(vec![0.0; self.cols]);
        }
        let mut sums = vec![0.0; self.cols];
        for i in 0..self.rows {
            for (sum, value) in sums.iter_mut().zip(self.row_slice(i)) {
                *sum += value;
            }
        }
        let n = self.rows as f64;
        Vector::from_vec(sums.into_iter().map(|s| s / n).collect())
    }

    /// Subtracts `means[j]` from every element of column `j`.
    ///
    /// # Errors
    ///
    /// Returns an error if `means` length differs from the column count.
    pub fn center_columns(&self, means: &Vector<f64>) -> Result<Self> {
        if means.len() != self.cols {
            return Err(ForecastError::dimension_mismatch(
                "column means",
                self.cols,
                means.len(),
            ));
        }
        let data = self
            .data
            .iter()
            .enumerate()
            .map(|(idx, value)| value - means[idx % self.cols])
            .collect();
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Solves the linear system Ax = b using Cholesky decomposition.
    ///
    /// The matrix must be symmetric positive definite. A pivot is rejected
    /// when it is not positive or falls below `tolerance` times the original
    /// diagonal entry, which makes the check invariant to column scaling.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::SingularMatrix`] if the matrix is not
    /// positive definite, or a dimension error if shapes disagree.
    pub fn cholesky_solve(&self, b: &Vector<f64>, tolerance: f64) -> Result<Vector<f64>> {
        if self.rows != self.cols {
            return Err(ForecastError::DimensionMismatch {
                expected: "square matrix".to_string(),
                actual: format!("{}x{}", self.rows, self.cols),
            });
        }
        if self.rows != b.len() {
            return Err(ForecastError::dimension_mismatch(
                "matrix rows",
                self.rows,
                b.len(),
            ));
        }

        let n = self.rows;

        // A = L * L^T
        let mut l = vec![0.0; n * n];

        for i in 0..n {
            for j in 0..=i {
                let mut sum = 0.0;

                if i == j {
                    for k in 0..j {
                        sum += l[j * n + k] * l[j * n + k];
                    }
                    let original = self.get(j, j);
                    let diag = original - sum;
                    if !diag.is_finite() || diag <= 0.0 || diag <= tolerance * original {
                        return Err(ForecastError::SingularMatrix { pivot: j });
                    }
                    l[j * n + j] = diag.sqrt();
                } else {
                    for k in 0..j {
                        sum += l[i * n + k] * l[j * n + k];
                    }
                    l[i * n + j] = (self.get(i, j) - sum) / l[j * n + j];
                }
            }
        }

        // Forward substitution: L * y = b
        let mut y = vec![0.0; n];
        for i in 0..n {
            let mut sum = 0.0;
            for j in 0..i {
                sum += l[i * n + j] * y[j];
            }
            y[i] = (b[i] - sum) / l[i * n + i];
        }

        // Backward substitution: L^T * x = y
        let mut x = vec![0.0; n];
        for i in (0..n).rev() {
            let mut sum = 0.0;
            for j in (i + 1)..n {
                sum += l[j * n + i] * x[j];
            }
            x[i] = (y[i] - sum) / l[i * n + i];
        }

        Ok(Vector::from_vec(x))
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod tests_matrix_contract;
