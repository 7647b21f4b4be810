//! Metrics bundles handed to the presentation layer.

use super::{check_pair, residuals};
use crate::error::Result;
use crate::primitives::Vector;
use serde::Serialize;

/// R², RMSE, MAE and MAPE computed together over one actual/predicted pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ErrorMetrics {
    /// Coefficient of determination, 0 when the actuals have no variance.
    pub r2: f64,
    /// Root mean squared error.
    pub rmse: f64,
    /// Mean absolute error.
    pub mae: f64,
    /// Mean absolute percentage error with the `max(actual, 1)` floor.
    pub mape: f64,
}

impl ErrorMetrics {
    /// Computes every metric in a single pass over the residuals.
    ///
    /// # Errors
    ///
    /// Returns an error if lengths differ or the inputs are empty.
    pub fn compute(y_pred: &Vector<f64>, y_true: &Vector<f64>) -> Result<Self> {
        check_pair(y_pred, y_true)?;
        let n = y_true.len() as f64;
        let y_mean = y_true.mean();

        let (mut tss, mut rss, mut abs, mut pct) = (0.0, 0.0, 0.0, 0.0);
        for (t, r) in residuals(y_pred, y_true) {
            tss += (t - y_mean).powi(2);
            rss += r * r;
            abs += r.abs();
            pct += r.abs() / t.max(1.0);
        }

        Ok(Self {
            r2: if tss == 0.0 { 0.0 } else { 1.0 - rss / tss },
            rmse: (rss / n).sqrt(),
            mae: abs / n,
            mape: pct / n * 100.0,
        })
    }

    /// Model accuracy in percent as displayed to users: `100 - MAPE`.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        100.0 - self.mape
    }
}

/// Everything a forecast run reports about fit quality.
///
/// The headline metrics cover every record (actual vs. predicted), even in
/// multi-variable mode where the model only saw the training slice; the
/// test slice alone is reported in [`MetricsReport::test_metrics`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    /// Metrics over all records.
    #[serde(flatten)]
    pub overall: ErrorMetrics,
    /// Pearson correlation between the single feature and omset.
    pub correlation: Option<f64>,
    /// Number of records in the dataset.
    pub total_samples: usize,
    /// Records the model was fitted on.
    pub train_samples: usize,
    /// Records held out of fitting.
    pub test_samples: usize,
    /// Metrics over the held-out records only, when there are any.
    pub test_metrics: Option<ErrorMetrics>,
}

impl MetricsReport {
    /// Builds a report over all records.
    #[must_use]
    pub fn new(overall: ErrorMetrics, total_samples: usize, train_samples: usize) -> Self {
        Self {
            overall,
            correlation: None,
            total_samples,
            train_samples,
            test_samples: total_samples.saturating_sub(train_samples),
            test_metrics: None,
        }
    }

    /// Attaches the single-feature correlation.
    #[must_use]
    pub fn with_correlation(mut self, correlation: f64) -> Self {
        self.correlation = Some(correlation);
        self
    }

    /// Attaches metrics over the held-out slice.
    #[must_use]
    pub fn with_test_metrics(mut self, test: ErrorMetrics) -> Self {
        self.test_metrics = Some(test);
        self
    }

    /// R² over all records.
    #[must_use]
    pub fn r2(&self) -> f64 {
        self.overall.r2
    }

    /// RMSE over all records.
    #[must_use]
    pub fn rmse(&self) -> f64 {
        self.overall.rmse
    }

    /// MAE over all records.
    #[must_use]
    pub fn mae(&self) -> f64 {
        self.overall.mae
    }

    /// MAPE over all records.
    #[must_use]
    pub fn mape(&self) -> f64 {
        self.overall.mape
    }

    /// `100 - MAPE` over all records.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        self.overall.accuracy()
    }
}

/// Coarse rating of a per-record accuracy percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccuracyBand {
    /// Above 80%.
    High,
    /// Above 60%, up to 80%.
    Medium,
    /// 60% or less.
    Low,
}

impl AccuracyBand {
    /// Classifies an accuracy percentage.
    #[must_use]
    pub fn from_accuracy(accuracy: f64) -> Self {
        if accuracy > 80.0 {
            Self::High
        } else if accuracy > 60.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}
