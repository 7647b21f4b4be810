//! Omset forecasting: least-squares regression over periodic sales records.
//!
//! Fits revenue (omset) against one sales field or all nine jointly,
//! predicts every record, and reports R², RMSE, MAE, MAPE and Pearson
//! correlation for the fit.
//!
//! # Quick Start
//!
//! ```
//! use omset_forecast::prelude::*;
//!
//! // Create training data (y = 2*x + 1)
//! let x = Matrix::from_vec(4, 1, vec![
//!     1.0,
//!     2.0,
//!     3.0,
//!     4.0,
//! ]).unwrap();
//! let y = Vector::from_slice(&[3.0, 5.0, 7.0, 9.0]);
//!
//! // Train linear regression
//! let mut model = LinearRegression::new();
//! model.fit(&x, &y).unwrap();
//!
//! // Make predictions
//! let predictions = model.predict(&x).unwrap();
//! assert_eq!(predictions.len(), 4);
//! let r2 = model.score(&x, &y).unwrap();
//! assert!(r2 > 0.99);
//! ```
//!
//! Whole-dataset runs go through [`forecast::Forecaster`].
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`data`]: Sales records, features and the ordered dataset
//! - [`linear_model`]: Ordinary least squares regression
//! - [`metrics`]: R², RMSE, MAE, MAPE and per-record accuracy
//! - [`stats`]: Pearson correlation and feature ranking
//! - [`model_selection`]: Ordered train/test splitting
//! - [`forecast`]: End-to-end forecast runs and reports
//! - [`config`]: Tunables with serde loading and validation

pub mod config;
pub mod data;
pub mod error;
pub mod forecast;
pub mod linear_model;
pub mod metrics;
pub mod model_selection;
pub mod prelude;
pub mod primitives;
pub mod stats;
pub mod traits;

pub use error::{ForecastError, Result};
pub use primitives::{Matrix, Vector};
pub use traits::Estimator;
