//! Forecast configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config.
//!
//! ```
//! use omset_forecast::config::ForecastConfig;
//!
//! let config = ForecastConfig::from_json(r#"{ "train_ratio": 0.75 }"#).expect("valid config");
//! assert_eq!(config.min_samples, 3);
//! assert!((config.train_ratio - 0.75).abs() < 1e-12);
//! ```

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};

/// Minimum dataset length before any fit is attempted.
pub const DEFAULT_MIN_SAMPLES: usize = 3;

/// Share of records used for training in multi-variable mode.
pub const DEFAULT_TRAIN_RATIO: f64 = 0.8;

/// Relative Cholesky pivot threshold below which a system is singular.
pub const DEFAULT_SINGULAR_TOLERANCE: f64 = 1e-10;

/// Tunables for a forecast run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ForecastConfig {
    /// Datasets shorter than this fail with `InsufficientData`. At least 3.
    pub min_samples: usize,
    /// Fraction of records (in dataset order) that form the training slice.
    pub train_ratio: f64,
    /// Relative pivot tolerance for the normal-equation solve.
    pub singular_tolerance: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            min_samples: DEFAULT_MIN_SAMPLES,
            train_ratio: DEFAULT_TRAIN_RATIO,
            singular_tolerance: DEFAULT_SINGULAR_TOLERANCE,
        }
    }
}

impl ForecastConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum dataset length.
    #[must_use]
    pub fn with_min_samples(mut self, min_samples: usize) -> Self {
        self.min_samples = min_samples;
        self
    }

    /// Sets the training share of the ordered split.
    #[must_use]
    pub fn with_train_ratio(mut self, train_ratio: f64) -> Self {
        self.train_ratio = train_ratio;
        self
    }

    /// Sets the singular-matrix tolerance.
    #[must_use]
    pub fn with_singular_tolerance(mut self, tolerance: f64) -> Self {
        self.singular_tolerance = tolerance;
        self
    }

    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns `Serialization` for malformed JSON or unknown keys and
    /// `InvalidConfig` for out-of-range values.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every field against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.min_samples < 3 {
            return Err(invalid("min_samples", self.min_samples, ">= 3"));
        }
        if self.train_ratio.is_nan() || self.train_ratio <= 0.0 || self.train_ratio > 1.0 {
            return Err(invalid("train_ratio", self.train_ratio, "in (0, 1]"));
        }
        if !(0.0..1.0).contains(&self.singular_tolerance) {
            return Err(invalid(
                "singular_tolerance",
                self.singular_tolerance,
                "in [0, 1)",
            ));
        }
        Ok(())
    }
}

fn invalid(param: &str, value: impl ToString, constraint: &str) -> ForecastError {
    ForecastError::InvalidConfig {
        param: param.to_string(),
        value: value.to_string(),
        constraint: constraint.to_string(),
    }
}
