//! Descriptive statistics over sales data.
//!
//! - Pearson correlation between two variables ([`corr`])
//! - Correlation of every sales field with omset ([`FeatureCorrelations`])
//!
//! # Examples
//!
//! ```
//! use omset_forecast::stats::corr;
//! use omset_forecast::primitives::Vector;
//!
//! let x = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]);
//! let y = Vector::from_slice(&[5.0, 4.0, 3.0, 2.0, 1.0]);
//! assert!((corr(&x, &y).unwrap() + 1.0).abs() < 1e-12);
//! ```

pub mod correlation;

pub use correlation::corr;

use crate::data::{Dataset, Feature};
use crate::error::Result;
use serde::ser::{Serialize, Serializer};

/// Pearson correlation of each feature column with the omset target.
///
/// Entries are kept in [`Feature::ALL`] order; [`FeatureCorrelations::ranked`]
/// gives the strongest relationships first. Serializes as a JSON object
/// keyed by feature name.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureCorrelations {
    entries: Vec<(Feature, f64)>,
}

impl FeatureCorrelations {
    /// Correlates every feature with the target over the whole dataset.
    ///
    /// # Errors
    ///
    /// Propagates correlation errors; columns built from one dataset always
    /// share the target's length, so none occur in practice.
    pub fn from_dataset(dataset: &Dataset) -> Result<Self> {
        let targets = dataset.targets();
        let entries = Feature::ALL
            .iter()
            .map(|&feature| Ok((feature, corr(&dataset.feature_column(feature), &targets)?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { entries })
    }

    /// Correlation of one feature with omset.
    #[must_use]
    pub fn get(&self, feature: Feature) -> f64 {
        self.entries
            .iter()
            .find(|(f, _)| *f == feature)
            .map_or(0.0, |&(_, r)| r)
    }

    /// Iterates `(feature, correlation)` in positional feature order.
    pub fn iter(&self) -> impl Iterator<Item = (Feature, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Entries sorted by absolute correlation, strongest first. Ties keep
    /// positional order.
    #[must_use]
    pub fn ranked(&self) -> Vec<(Feature, f64)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.abs().total_cmp(&a.1.abs()));
        ranked
    }

    /// Feature most strongly correlated with omset, if any.
    #[must_use]
    pub fn strongest(&self) -> Option<(Feature, f64)> {
        self.ranked().first().copied()
    }

    /// Number of entries (always nine for a dataset-derived ranking).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for FeatureCorrelations {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(f, r)| (f.name(), r)))
    }
}
