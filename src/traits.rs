//! Core estimator trait.
//!
//! Defines the fit/predict/score contract implemented by
//! [`crate::linear_model::LinearRegression`].

use crate::error::Result;
use crate::primitives::{Matrix, Vector};

/// Supervised regression estimator.
///
/// # Examples
///
/// ```
/// use omset_forecast::prelude::*;
///
/// // y = 2x + 1
/// let x_train = Matrix::from_vec(4, 1, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// let y_train = Vector::from_slice(&[3.0, 5.0, 7.0, 9.0]);
///
/// let x_test = Matrix::from_vec(2, 1, vec![5.0, 6.0]).unwrap();
/// let y_test = Vector::from_slice(&[11.0, 13.0]);
///
/// let mut model = LinearRegression::new();
/// model.fit(&x_train, &y_train).unwrap();
/// let predictions = model.predict(&x_test).unwrap();
/// assert_eq!(predictions.len(), 2);
/// let score = model.score(&x_test, &y_test).unwrap();
/// assert!(score > 0.99);
/// ```
pub trait Estimator {
    /// Fits the model to training data.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting fails (too few samples, dimension
    /// mismatch, singular matrix).
    fn fit(&mut self, x: &Matrix<f64>, y: &Vector<f64>) -> Result<()>;

    /// Predicts one target per row of `x`, in row order.
    ///
    /// # Errors
    ///
    /// Returns an error if the estimator is not fitted or `x` has the wrong
    /// number of columns.
    fn predict(&self, x: &Matrix<f64>) -> Result<Vector<f64>>;

    /// Computes the R² score of predictions on `x` against `y`.
    ///
    /// # Errors
    ///
    /// Propagates prediction errors and length mismatches.
    fn score(&self, x: &Matrix<f64>, y: &Vector<f64>) -> Result<f64>;

    /// Fits on `x` and returns the in-sample predictions.
    ///
    /// # Errors
    ///
    /// Propagates any `fit` or `predict` error.
    fn fit_predict(&mut self, x: &Matrix<f64>, y: &Vector<f64>) -> Result<Vector<f64>> {
        self.fit(x, y)?;
        self.predict(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ForecastError;

    // Predicts the training mean for every row.
    struct MeanEstimator {
        mean: Option<f64>,
    }

    impl Estimator for MeanEstimator {
        fn fit(&mut self, _x: &Matrix<f64>, y: &Vector<f64>) -> Result<()> {
            if y.is_empty() {
                return Err(ForecastError::InsufficientData {
                    required: 1,
                    actual: 0,
                });
            }
            self.mean = Some(y.mean());
            Ok(())
        }

        fn predict(&self, x: &Matrix<f64>) -> Result<Vector<f64>> {
            let mean = self.mean.ok_or(ForecastError::NotFitted)?;
            Ok(Vector::from_vec(vec![mean; x.n_rows()]))
        }

        fn score(&self, x: &Matrix<f64>, y: &Vector<f64>) -> Result<f64> {
            let y_pred = self.predict(x)?;
            crate::metrics::r_squared(&y_pred, y)
        }
    }

    #[test]
    fn test_fit_predict_default() {
        let mut est = MeanEstimator { mean: None };
        let x = Matrix::from_vec(3, 1, vec![1.0, 2.0, 3.0]).expect("matrix");
        let y = Vector::from_slice(&[2.0, 4.0, 6.0]);

        let predictions = est.fit_predict(&x, &y).expect("fit succeeds");
        assert_eq!(predictions.as_slice(), &[4.0, 4.0, 4.0]);
        // Predicting the mean everywhere explains nothing.
        assert_eq!(est.score(&x, &y).expect("scored"), 0.0);
    }

    #[test]
    fn test_predict_before_fit() {
        let est = MeanEstimator { mean: None };
        let x = Matrix::from_vec(1, 1, vec![1.0]).expect("matrix");
        assert!(matches!(est.predict(&x), Err(ForecastError::NotFitted)));
    }
}
