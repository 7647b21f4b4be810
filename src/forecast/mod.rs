//! One-shot forecast runs over a sales dataset.
//!
//! A run fits a fresh model on every call; nothing is cached between calls.
//!
//! - [`ForecastMode::Single`] fits omset against one feature using every
//!   record, and reports the Pearson correlation of that feature with omset.
//! - [`ForecastMode::AllFeatures`] fits all nine features on the leading
//!   `floor(train_ratio * n)` records, predicts every record, and reports the
//!   correlation of each feature with omset.
//!
//! Headline metrics always compare predictions with actuals over the whole
//! dataset. In multi-feature mode the held-out slice is also scored on its
//! own.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use omset_forecast::prelude::*;
//!
//! let day = |d| NaiveDate::from_ymd_opt(2024, 5, d).expect("valid date");
//! let record = |d, discount: f64| {
//!     let mut features = [0.0; Feature::COUNT];
//!     features[Feature::DiscountBill.index()] = discount;
//!     SalesRecord::new(day(d), features, 2.0 * discount)
//! };
//! let dataset = Dataset::new(vec![record(1, 1.0), record(2, 2.0), record(3, 3.0)]);
//!
//! let report = Forecaster::default()
//!     .run(&dataset, ForecastMode::default())
//!     .expect("forecast");
//! assert!((report.metrics.r2() - 1.0).abs() < 1e-9);
//! assert_eq!(report.metrics.correlation, Some(1.0));
//! ```

use crate::config::ForecastConfig;
use crate::data::{Dataset, DatasetSummary, Feature, FeatureSet};
use crate::error::{ForecastError, Result};
use crate::linear_model::{LinearRegression, RegressionModel};
use crate::metrics::{self, AccuracyBand, ErrorMetrics, MetricsReport};
use crate::model_selection::train_test_split;
use crate::stats::{corr, FeatureCorrelations};
use crate::traits::Estimator;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, instrument, warn};

/// Smallest training slice handed to the estimator. Dataset length is gated
/// separately by the configured `min_samples`.
const MIN_TRAIN_SAMPLES: usize = 2;

/// Which predictors a run fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastMode {
    /// Simple regression on one feature, fitted on every record.
    Single(Feature),
    /// Multiple regression on all nine features with an ordered split.
    AllFeatures,
}

impl Default for ForecastMode {
    fn default() -> Self {
        Self::Single(Feature::default())
    }
}

impl ForecastMode {
    /// Features this mode feeds to the model, in sample order.
    #[must_use]
    pub fn feature_set(self) -> FeatureSet {
        match self {
            Self::Single(feature) => FeatureSet::single(feature),
            Self::AllFeatures => FeatureSet::all(),
        }
    }
}

impl fmt::Display for ForecastMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(feature) => write!(f, "single({feature})"),
            Self::AllFeatures => f.write_str("all"),
        }
    }
}

impl FromStr for ForecastMode {
    type Err = ForecastError;

    /// `"all"` (or `"all_features"`) selects every feature; anything else
    /// must name a single feature.
    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        if needle.eq_ignore_ascii_case("all") || needle.eq_ignore_ascii_case("all_features") {
            return Ok(Self::AllFeatures);
        }
        needle.parse().map(Self::Single)
    }
}

/// Everything one forecast run produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastReport {
    /// Mode the run used.
    pub mode: ForecastMode,
    /// Fitted coefficients and intercept.
    pub model: RegressionModel,
    /// One prediction per record, in dataset order.
    pub predictions: Vec<f64>,
    /// Per-record accuracy percentage, aligned with `predictions`.
    pub record_accuracy: Vec<f64>,
    /// Fit quality.
    pub metrics: MetricsReport,
    /// Correlation of each feature with omset (multi-feature mode only).
    pub feature_correlations: Option<FeatureCorrelations>,
    /// Records, period and mean omset of the input.
    pub summary: DatasetSummary,
}

impl ForecastReport {
    /// Rating of each record's accuracy, aligned with `predictions`.
    #[must_use]
    pub fn accuracy_bands(&self) -> Vec<AccuracyBand> {
        self.record_accuracy
            .iter()
            .map(|&accuracy| AccuracyBand::from_accuracy(accuracy))
            .collect()
    }

    /// Renders the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if encoding fails (non-finite numbers are
    /// written as `null`, so this does not happen for fitted reports).
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A single predicted omset with the accuracy of the model behind it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointForecast {
    /// Predicted omset for the supplied sample.
    pub prediction: f64,
    /// `100 - MAPE` of the model over the dataset.
    pub accuracy: f64,
    /// R² of the model over the dataset.
    pub r2: f64,
}

/// Runs forecasts under one configuration.
#[derive(Debug, Clone, Default)]
pub struct Forecaster {
    config: ForecastConfig,
}

impl Forecaster {
    /// Creates a forecaster after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if any setting is out of range.
    pub fn new(config: ForecastConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Fits a model for `mode`, predicts every record and scores the fit.
    ///
    /// # Errors
    ///
    /// - `InsufficientData` if the dataset is shorter than `min_samples`, or
    ///   the training slice has fewer than two records
    /// - `SingularMatrix` if a selected feature is constant, the features are
    ///   linearly dependent on the training slice, or the training slice has
    ///   no more records than features
    #[instrument(level = "debug", skip_all, fields(n_records = dataset.len(), mode = %mode))]
    pub fn run(&self, dataset: &Dataset, mode: ForecastMode) -> Result<ForecastReport> {
        let n = dataset.len();
        if n < self.config.min_samples {
            warn!(
                required = self.config.min_samples,
                actual = n,
                "not enough records to fit"
            );
            return Err(ForecastError::InsufficientData {
                required: self.config.min_samples,
                actual: n,
            });
        }

        let x = dataset.samples(&mode.feature_set())?;
        let y = dataset.targets();

        let (x_train, y_train) = match mode {
            ForecastMode::Single(_) => (x.clone(), y.clone()),
            ForecastMode::AllFeatures => {
                let (x_train, _, y_train, _) = train_test_split(&x, &y, self.config.train_ratio)?;
                (x_train, y_train)
            }
        };
        let train = y_train.len();
        debug!(train, test = n - train, "split records");

        let mut estimator = LinearRegression::new()
            .with_min_samples(MIN_TRAIN_SAMPLES)
            .with_singular_tolerance(self.config.singular_tolerance);
        if let Err(err) = estimator.fit(&x_train, &y_train) {
            warn!(%err, train, "model fit failed");
            return Err(err);
        }
        let model = estimator.into_model()?;

        let predictions = model.predict(&x)?;
        let overall = ErrorMetrics::compute(&predictions, &y)?;
        let mut metrics = MetricsReport::new(overall, n, train);
        if train < n {
            let test = ErrorMetrics::compute(&predictions.slice(train, n), &y.slice(train, n))?;
            metrics = metrics.with_test_metrics(test);
        }

        let feature_correlations = match mode {
            ForecastMode::Single(feature) => {
                metrics = metrics.with_correlation(corr(&dataset.feature_column(feature), &y)?);
                None
            }
            ForecastMode::AllFeatures => Some(FeatureCorrelations::from_dataset(dataset)?),
        };

        let record_accuracy = metrics::record_accuracy(&predictions, &y)?;
        let summary = dataset.summary().ok_or(ForecastError::InsufficientData {
            required: self.config.min_samples,
            actual: 0,
        })?;

        debug!(
            r2 = metrics.r2(),
            rmse = metrics.rmse(),
            mape = metrics.mape(),
            "forecast complete"
        );

        Ok(ForecastReport {
            mode,
            model,
            predictions: predictions.into_vec(),
            record_accuracy,
            metrics,
            feature_correlations,
            summary,
        })
    }

    /// Fits a model for `mode` and predicts omset for one sample.
    ///
    /// `sample` holds one value per feature of the mode, in
    /// [`Feature::ALL`] order for [`ForecastMode::AllFeatures`].
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `sample` has the wrong length, plus
    /// any error of [`Forecaster::run`].
    #[instrument(level = "debug", skip_all, fields(mode = %mode))]
    pub fn predict_point(
        &self,
        dataset: &Dataset,
        mode: ForecastMode,
        sample: &[f64],
    ) -> Result<PointForecast> {
        let expected = mode.feature_set().len();
        if sample.len() != expected {
            return Err(ForecastError::dimension_mismatch(
                "sample features",
                expected,
                sample.len(),
            ));
        }

        let report = self.run(dataset, mode)?;
        let prediction = report.model.predict_one(sample)?;
        debug!(prediction, "point forecast");

        Ok(PointForecast {
            prediction,
            accuracy: report.metrics.accuracy(),
            r2: report.metrics.r2(),
        })
    }
}

#[cfg(test)]
#[path = "forecast_tests.rs"]
mod tests;
