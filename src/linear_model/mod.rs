//! Linear models for regression.
//!
//! Ordinary Least Squares with an intercept: closed form for a single
//! predictor, Cholesky-solved normal equations for several.

use crate::config::{DEFAULT_MIN_SAMPLES, DEFAULT_SINGULAR_TOLERANCE};
use crate::error::{ForecastError, Result};
use crate::metrics::r_squared;
use crate::primitives::{Matrix, Vector};
use crate::traits::Estimator;
use serde::Serialize;
use tracing::debug;

/// A fitted linear model: `y = intercept + Σ coefficients[i] * x[i]`.
///
/// Produced by [`LinearRegression::fit`]; its dimensionality is fixed and
/// every sample passed to it must match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegressionModel {
    intercept: f64,
    coefficients: Vector<f64>,
}

impl RegressionModel {
    /// Intercept (bias) term.
    #[must_use]
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// One coefficient per feature, in sample order.
    #[must_use]
    pub fn coefficients(&self) -> &Vector<f64> {
        &self.coefficients
    }

    /// Number of features the model expects.
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    /// Predicts a single sample.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `sample` has the wrong length.
    pub fn predict_one(&self, sample: &[f64]) -> Result<f64> {
        if sample.len() != self.n_features() {
            return Err(ForecastError::dimension_mismatch(
                "sample features",
                self.n_features(),
                sample.len(),
            ));
        }
        let dot: f64 = sample
            .iter()
            .zip(self.coefficients.as_slice())
            .map(|(x, b)| x * b)
            .sum();
        Ok(self.intercept + dot)
    }

    /// Predicts every row of `x`; `result[i]` belongs to row `i`.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `x` has the wrong number of columns.
    pub fn predict(&self, x: &Matrix<f64>) -> Result<Vector<f64>> {
        if x.n_cols() != self.n_features() {
            return Err(ForecastError::dimension_mismatch(
                "sample features",
                self.n_features(),
                x.n_cols(),
            ));
        }
        Ok(x.matvec(&self.coefficients)?.add_scalar(self.intercept))
    }
}

/// Ordinary Least Squares (OLS) linear regression.
///
/// Fits a linear model by minimizing the residual sum of squares between
/// observed targets and predicted targets:
///
/// ```text
/// y = X β + b + ε
/// ```
///
/// # Solver
///
/// - One feature: `β = Sxy / Sxx`, `b = ȳ - β x̄`.
/// - Several features: columns are centered, the normal equations
///   `(XcᵀXc) β = Xcᵀ yc` are solved by Cholesky decomposition, and
///   `b = ȳ - β · x̄`. Centering is equivalent to an explicit intercept
///   column and keeps `XᵀX` far better conditioned on sales-sized values.
///
/// A feature column with (near) zero variance, or linearly dependent
/// columns, fail with [`ForecastError::SingularMatrix`].
///
/// # Examples
///
/// ```
/// use omset_forecast::prelude::*;
///
/// // y = 2x + 1
/// let x = Matrix::from_vec(4, 1, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// let y = Vector::from_slice(&[3.0, 5.0, 7.0, 9.0]);
///
/// let mut model = LinearRegression::new();
/// model.fit(&x, &y).unwrap();
///
/// let fitted = model.model().unwrap();
/// assert!((fitted.coefficients()[0] - 2.0).abs() < 1e-9);
/// assert!((fitted.intercept() - 1.0).abs() < 1e-9);
/// ```
///
/// # Performance
///
/// - Time complexity: O(n·p² + p³) where n = samples, p = features
/// - Space complexity: O(n·p)
#[derive(Debug, Clone)]
pub struct LinearRegression {
    model: Option<RegressionModel>,
    min_samples: usize,
    singular_tolerance: f64,
}

impl Default for LinearRegression {
    fn default() -> Self {
        Self::new()
    }
}

impl LinearRegression {
    /// Creates a new `LinearRegression` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            model: None,
            min_samples: DEFAULT_MIN_SAMPLES,
            singular_tolerance: DEFAULT_SINGULAR_TOLERANCE,
        }
    }

    /// Sets the minimum number of training samples.
    #[must_use]
    pub fn with_min_samples(mut self, min_samples: usize) -> Self {
        self.min_samples = min_samples;
        self
    }

    /// Sets the relative tolerance used to declare the system singular.
    #[must_use]
    pub fn with_singular_tolerance(mut self, tolerance: f64) -> Self {
        self.singular_tolerance = tolerance;
        self
    }

    /// Returns the fitted model, if any.
    #[must_use]
    pub fn model(&self) -> Option<&RegressionModel> {
        self.model.as_ref()
    }

    /// Consumes the estimator and returns the fitted model.
    ///
    /// # Errors
    ///
    /// Returns `NotFitted` if `fit` has not succeeded.
    pub fn into_model(self) -> Result<RegressionModel> {
        self.model.ok_or(ForecastError::NotFitted)
    }

    /// Returns true if the model has been fitted.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.model.is_some()
    }

    /// Rejects columns whose centered sum of squares is negligible next to
    /// their raw sum of squares (constant features).
    fn check_column_variance(&self, x: &Matrix<f64>, means: &Vector<f64>) -> Result<()> {
        for j in 0..x.n_cols() {
            let (raw, centered) = (0..x.n_rows()).fold((0.0, 0.0), |(raw, centered), i| {
                let v = x.get(i, j);
                (raw + v * v, centered + (v - means[j]).powi(2))
            });
            if centered <= 0.0 || centered <= self.singular_tolerance * raw {
                return Err(ForecastError::SingularMatrix { pivot: j });
            }
        }
        Ok(())
    }

    fn fit_simple(x: &Matrix<f64>, y: &Vector<f64>, x_mean: f64, y_mean: f64) -> RegressionModel {
        let (sxy, sxx) = (0..x.n_rows()).fold((0.0, 0.0), |(sxy, sxx), i| {
            let dx = x.get(i, 0) - x_mean;
            (sxy + dx * (y[i] - y_mean), sxx + dx * dx)
        });
        let slope = sxy / sxx;
        RegressionModel {
            intercept: y_mean - slope * x_mean,
            coefficients: Vector::from_vec(vec![slope]),
        }
    }

    fn fit_normal_equations(
        &self,
        x: &Matrix<f64>,
        y: &Vector<f64>,
        x_means: &Vector<f64>,
        y_mean: f64,
    ) -> Result<RegressionModel> {
        let x_centered = x.center_columns(x_means)?;
        let y_centered = y.add_scalar(-y_mean);

        let xt = x_centered.transpose();
        let xtx = xt.matmul(&x_centered)?;
        let xty = xt.matvec(&y_centered)?;

        let beta = xtx.cholesky_solve(&xty, self.singular_tolerance)?;
        let intercept = y_mean - beta.dot(x_means);

        Ok(RegressionModel {
            intercept,
            coefficients: beta,
        })
    }
}

impl Estimator for LinearRegression {
    /// Fits the model, replacing any previous fit.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `x` rows and `y` length differ, or `x` has no columns
    /// - there are fewer than `min_samples` rows
    /// - a feature is constant, the features are linearly dependent, or
    ///   there are fewer rows than parameters (features + intercept)
    fn fit(&mut self, x: &Matrix<f64>, y: &Vector<f64>) -> Result<()> {
        self.model = None;
        let (n_samples, n_features) = x.shape();

        if n_samples != y.len() {
            return Err(ForecastError::dimension_mismatch(
                "targets",
                n_samples,
                y.len(),
            ));
        }
        if n_features == 0 {
            return Err(ForecastError::dimension_mismatch("features", 1, 0));
        }

        if n_samples < self.min_samples {
            return Err(ForecastError::InsufficientData {
                required: self.min_samples,
                actual: n_samples,
            });
        }

        let x_means = x.column_means();
        let y_mean = y.mean();
        self.check_column_variance(x, &x_means)?;

        // Centered XᵀX has rank at most n_samples - 1.
        if n_samples <= n_features {
            let pivot = n_samples.saturating_sub(1);
            debug!(n_samples, n_features, pivot, "underdetermined system");
            return Err(ForecastError::SingularMatrix { pivot });
        }

        let model = if n_features == 1 {
            Self::fit_simple(x, y, x_means[0], y_mean)
        } else {
            self.fit_normal_equations(x, y, &x_means, y_mean)?
        };

        debug!(
            n_samples,
            n_features,
            intercept = model.intercept,
            "fitted linear regression"
        );
        self.model = Some(model);
        Ok(())
    }

    fn predict(&self, x: &Matrix<f64>) -> Result<Vector<f64>> {
        self.model.as_ref().ok_or(ForecastError::NotFitted)?.predict(x)
    }

    fn score(&self, x: &Matrix<f64>, y: &Vector<f64>) -> Result<f64> {
        let y_pred = self.predict(x)?;
        r_squared(&y_pred, y)
    }
}

#[cfg(test)]
#[path = "linear_model_tests.rs"]
mod tests;
