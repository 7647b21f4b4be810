//! Train/test splitting for sales series.
//!
//! Records are time-ordered, so splits never shuffle: the first
//! `floor(train_ratio * n)` samples train, the rest are held out.

use crate::error::{ForecastError, Result};
use crate::primitives::{Matrix, Vector};

/// Sizes of an ordered train/test split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitSizes {
    /// Leading samples used for fitting.
    pub train: usize,
    /// Trailing samples held out.
    pub test: usize,
}

impl SplitSizes {
    /// Computes `train = floor(train_ratio * n)` and `test = n - train`.
    ///
    /// # Errors
    ///
    /// Returns an error unless `train_ratio` lies in (0, 1].
    ///
    /// # Examples
    ///
    /// ```
    /// use omset_forecast::model_selection::SplitSizes;
    ///
    /// let sizes = SplitSizes::ordered(7, 0.8).unwrap();
    /// assert_eq!((sizes.train, sizes.test), (5, 2));
    /// ```
    pub fn ordered(n_samples: usize, train_ratio: f64) -> Result<Self> {
        validate_ratio(train_ratio)?;
        let train = ((n_samples as f64 * train_ratio).floor() as usize).min(n_samples);
        Ok(Self {
            train,
            test: n_samples - train,
        })
    }
}

fn validate_ratio(train_ratio: f64) -> Result<()> {
    if train_ratio.is_nan() || train_ratio <= 0.0 || train_ratio > 1.0 {
        return Err(ForecastError::InvalidConfig {
            param: "train_ratio".to_string(),
            value: train_ratio.to_string(),
            constraint: "a ratio in (0, 1]".to_string(),
        });
    }
    Ok(())
}

/// Splits samples and targets into leading train and trailing test parts.
///
/// Returns `(x_train, x_test, y_train, y_test)`. Either part may be empty
/// for very small inputs or `train_ratio == 1.0`.
///
/// # Errors
///
/// Returns an error if `x` and `y` disagree on the number of samples or the
/// ratio is outside (0, 1].
///
/// # Examples
///
/// ```
/// use omset_forecast::model_selection::train_test_split;
/// use omset_forecast::primitives::{Matrix, Vector};
///
/// let x = Matrix::from_vec(5, 1, vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// let y = Vector::from_slice(&[10.0, 20.0, 30.0, 40.0, 50.0]);
///
/// let (x_train, x_test, y_train, y_test) = train_test_split(&x, &y, 0.8).unwrap();
/// assert_eq!(x_train.n_rows(), 4);
/// assert_eq!(x_test.get(0, 0), 5.0);
/// assert_eq!(y_train.as_slice(), &[10.0, 20.0, 30.0, 40.0]);
/// assert_eq!(y_test.as_slice(), &[50.0]);
/// ```
pub fn train_test_split(
    x: &Matrix<f64>,
    y: &Vector<f64>,
    train_ratio: f64,
) -> Result<(Matrix<f64>, Matrix<f64>, Vector<f64>, Vector<f64>)> {
    let n_samples = x.n_rows();
    if n_samples != y.len() {
        return Err(ForecastError::DimensionMismatch {
            expected: format!("{n_samples} targets"),
            actual: format!("{} targets", y.len()),
        });
    }

    let SplitSizes { train, .. } = SplitSizes::ordered(n_samples, train_ratio)?;

    Ok((
        x.slice_rows(0, train),
        x.slice_rows(train, n_samples),
        y.slice(0, train),
        y.slice(train, n_samples),
    ))
}
