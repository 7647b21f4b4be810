//! Pearson correlation.
//!
//! # Mathematical Background
//!
//! The coefficient is computed in raw-sum form, which needs a single pass
//! and no centering:
//!
//! ```text
//!            n Σxy - Σx Σy
//! r = ----------------------------------
//!     sqrt((n Σx² - (Σx)²)(n Σy² - (Σy)²))
//! ```
//!
//! A zero denominator (a constant variable) or fewer than two observations
//! give 0, not an error, so a correlation can always be displayed.

use crate::error::{ForecastError, Result};
use crate::primitives::Vector;

/// Variance terms below this fraction of `n Σx²` are cancellation noise from
/// a constant input, not real spread.
const RELATIVE_VARIANCE_FLOOR: f64 = 1e-12;

/// Computes the Pearson correlation coefficient between two vectors.
///
/// Range: [-1, 1]. Rounding can push the raw quotient a hair past ±1, so
/// the result is clamped.
///
/// # Errors
///
/// Returns an error if the vectors have different lengths.
///
/// # Examples
///
/// ```
/// use omset_forecast::primitives::Vector;
/// use omset_forecast::stats::corr;
///
/// let x = Vector::from_slice(&[1.0, 2.0, 3.0]);
/// let y = Vector::from_slice(&[2.0, 4.0, 6.0]);
/// assert!((corr(&x, &y).unwrap() - 1.0).abs() < 1e-12);
///
/// let flat = Vector::from_slice(&[5.0, 5.0, 5.0]);
/// assert_eq!(corr(&x, &flat).unwrap(), 0.0);
/// ```
pub fn corr(x: &Vector<f64>, y: &Vector<f64>) -> Result<f64> {
    let n = x.len();
    if n != y.len() {
        return Err(ForecastError::DimensionMismatch {
            expected: format!("{n} values in x"),
            actual: format!("{} values in y", y.len()),
        });
    }
    if n < 2 {
        return Ok(0.0);
    }

    let (mut sx, mut sy, mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0, 0.0, 0.0);
    for (&xi, &yi) in x.as_slice().iter().zip(y.as_slice()) {
        sx += xi;
        sy += yi;
        sxy += xi * yi;
        sxx += xi * xi;
        syy += yi * yi;
    }

    let n = n as f64;
    let var_x = n * sxx - sx * sx;
    let var_y = n * syy - sy * sy;
    if var_x <= RELATIVE_VARIANCE_FLOOR * n * sxx || var_y <= RELATIVE_VARIANCE_FLOOR * n * syy {
        return Ok(0.0);
    }

    let denominator = (var_x * var_y).sqrt();
    if denominator == 0.0 || !denominator.is_finite() {
        return Ok(0.0);
    }

    Ok(((n * sxy - sx * sy) / denominator).clamp(-1.0, 1.0))
}

#[cfg(test)]
#[path = "correlation_tests.rs"]
mod tests;
