//! Regression quality metrics.
//!
//! R², MSE, RMSE, MAE and MAPE over actual vs. predicted targets, plus the
//! per-record accuracy shown next to each forecast. All functions take
//! `(y_pred, y_true)` in that order and require equal, non-zero lengths.
//! [`MetricsReport`] bundles them for one forecast run.

mod report;

pub use report::{AccuracyBand, ErrorMetrics, MetricsReport};

use crate::error::{ForecastError, Result};
use crate::primitives::Vector;

/// Checks that both sequences are non-empty and equally long.
fn check_pair(y_pred: &Vector<f64>, y_true: &Vector<f64>) -> Result<()> {
    if y_pred.len() != y_true.len() {
        return Err(ForecastError::dimension_mismatch(
            "predictions",
            y_true.len(),
            y_pred.len(),
        ));
    }
    if y_true.is_empty() {
        return Err(ForecastError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }
    Ok(())
}

fn residuals<'a>(
    y_pred: &'a Vector<f64>,
    y_true: &'a Vector<f64>,
) -> impl Iterator<Item = (f64, f64)> + 'a {
    y_true
        .as_slice()
        .iter()
        .zip(y_pred.as_slice())
        .map(|(&t, &p)| (t, t - p))
}

/// Residual sum of squares `Σ(y_true - y_pred)²`.
fn rss(y_pred: &Vector<f64>, y_true: &Vector<f64>) -> f64 {
    residuals(y_pred, y_true).map(|(_, r)| r * r).sum()
}

/// Computes the coefficient of determination (R²).
///
/// R² = 1 - (`SS_res` / `SS_tot`)
///
/// When every actual value is identical (`SS_tot` = 0) the result is 0,
/// not NaN, so a metrics block can always be rendered.
///
/// # Examples
///
/// ```
/// use omset_forecast::metrics::r_squared;
/// use omset_forecast::primitives::Vector;
///
/// let y_true = Vector::from_slice(&[3.0, -0.5, 2.0, 7.0]);
/// let y_pred = Vector::from_slice(&[2.5, 0.0, 2.0, 8.0]);
/// let r2 = r_squared(&y_pred, &y_true).unwrap();
/// assert!(r2 > 0.9);
/// ```
///
/// # Errors
///
/// Returns an error if lengths differ or the inputs are empty.
pub fn r_squared(y_pred: &Vector<f64>, y_true: &Vector<f64>) -> Result<f64> {
    check_pair(y_pred, y_true)?;

    let y_mean = y_true.mean();
    let ss_tot: f64 = y_true.as_slice().iter().map(|t| (t - y_mean).powi(2)).sum();

    if ss_tot == 0.0 {
        return Ok(0.0);
    }

    Ok(1.0 - rss(y_pred, y_true) / ss_tot)
}

/// Computes the Mean Squared Error (MSE).
///
/// MSE = (1/n) * `Σ(y_true - y_pred)²`
///
/// # Errors
///
/// Returns an error if lengths differ or the inputs are empty.
pub fn mse(y_pred: &Vector<f64>, y_true: &Vector<f64>) -> Result<f64> {
    check_pair(y_pred, y_true)?;
    Ok(rss(y_pred, y_true) / y_true.len() as f64)
}

/// Computes the Root Mean Squared Error (RMSE).
///
/// RMSE = sqrt(MSE)
///
/// # Examples
///
/// ```
/// use omset_forecast::metrics::rmse;
/// use omset_forecast::primitives::Vector;
///
/// let y_true = Vector::from_slice(&[2.0, 4.0, 6.0]);
/// let y_pred = Vector::from_slice(&[2.0, 4.0, 6.0]);
/// assert_eq!(rmse(&y_pred, &y_true).unwrap(), 0.0);
/// ```
///
/// # Errors
///
/// Returns an error if lengths differ or the inputs are empty.
pub fn rmse(y_pred: &Vector<f64>, y_true: &Vector<f64>) -> Result<f64> {
    Ok(mse(y_pred, y_true)?.sqrt())
}

/// Computes the Mean Absolute Error (MAE).
///
/// MAE = (1/n) * `Σ|y_true - y_pred|`
///
/// # Errors
///
/// Returns an error if lengths differ or the inputs are empty.
pub fn mae(y_pred: &Vector<f64>, y_true: &Vector<f64>) -> Result<f64> {
    check_pair(y_pred, y_true)?;
    let sum_abs: f64 = residuals(y_pred, y_true).map(|(_, r)| r.abs()).sum();
    Ok(sum_abs / y_true.len() as f64)
}

/// Computes the Mean Absolute Percentage Error (MAPE), in percent.
///
/// MAPE = (100/n) * `Σ |y_true - y_pred| / max(y_true, 1)`
///
/// The denominator is floored at 1 so zero-revenue periods do not divide
/// by zero. This inflates the error for actual values below 1 (and for
/// negative actuals, which are divided by 1).
///
/// # Examples
///
/// ```
/// use omset_forecast::metrics::mape;
/// use omset_forecast::primitives::Vector;
///
/// let y_true = Vector::from_slice(&[100.0, 200.0]);
/// let y_pred = Vector::from_slice(&[110.0, 180.0]);
/// assert!((mape(&y_pred, &y_true).unwrap() - 10.0).abs() < 1e-12);
/// ```
///
/// # Errors
///
/// Returns an error if lengths differ or the inputs are empty.
pub fn mape(y_pred: &Vector<f64>, y_true: &Vector<f64>) -> Result<f64> {
    check_pair(y_pred, y_true)?;
    let sum: f64 = residuals(y_pred, y_true)
        .map(|(t, r)| r.abs() / t.max(1.0))
        .sum();
    Ok(sum / y_true.len() as f64 * 100.0)
}

/// Per-record accuracy in percent: `max(0, (1 - |pred - actual| / max(actual, 1)) * 100)`.
///
/// `result[i]` belongs to record `i`.
///
/// # Errors
///
/// Returns an error if lengths differ or the inputs are empty.
pub fn record_accuracy(y_pred: &Vector<f64>, y_true: &Vector<f64>) -> Result<Vec<f64>> {
    check_pair(y_pred, y_true)?;
    Ok(residuals(y_pred, y_true)
        .map(|(t, r)| ((1.0 - r.abs() / t.max(1.0)) * 100.0).max(0.0))
        .collect())
}

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_regression_contract.rs"]
mod tests_regression_contract;
