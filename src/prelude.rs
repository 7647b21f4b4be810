//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use omset_forecast::prelude::*;
//! ```

pub use crate::config::ForecastConfig;
pub use crate::data::{Dataset, Feature, FeatureSet, SalesRecord};
pub use crate::error::ForecastError;
pub use crate::forecast::{ForecastMode, ForecastReport, Forecaster, PointForecast};
pub use crate::linear_model::{LinearRegression, RegressionModel};
pub use crate::metrics::{mae, mape, mse, r_squared, rmse, MetricsReport};
pub use crate::primitives::{Matrix, Vector};
pub use crate::stats::{corr, FeatureCorrelations};
pub use crate::traits::Estimator;
