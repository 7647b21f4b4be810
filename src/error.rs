//! Error types for forecasting operations.
//!
//! Every fallible operation in the crate returns [`ForecastError`]. Degenerate
//! metric inputs (zero variance, zero correlation denominator) are not errors;
//! they resolve to defined values inside [`crate::metrics`].

use thiserror::Error;

/// Main error type for forecasting operations.
///
/// # Examples
///
/// ```
/// use omset_forecast::error::ForecastError;
///
/// let err = ForecastError::InsufficientData { required: 3, actual: 2 };
/// assert!(err.to_string().contains("at least 3"));
/// ```
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Too few samples to fit a model.
    #[error("insufficient data: at least {required} samples required, got {actual}")]
    InsufficientData {
        /// Minimum number of samples
        required: usize,
        /// Number of samples provided
        actual: usize,
    },

    /// Normal equations could not be solved (rank-deficient features).
    #[error("singular matrix: pivot {pivot} is not positive definite, features are linearly dependent")]
    SingularMatrix {
        /// Index of the failing pivot (0-based feature position)
        pivot: usize,
    },

    /// Sample, model or target lengths disagree.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// A feature name is not one of the nine known sales fields.
    #[error("unknown feature: {0}")]
    UnknownFeature(String),

    /// Prediction was requested from an estimator that has not been fitted.
    #[error("model not fitted, call fit() first")]
    NotFitted,

    /// Invalid configuration value.
    #[error("invalid configuration: {param} = {value}, expected {constraint}")]
    InvalidConfig {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// JSON encoding or decoding failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl ForecastError {
    /// Create a dimension mismatch error with descriptive context.
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }
}

impl From<serde_json::Error> for ForecastError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, ForecastError>;
