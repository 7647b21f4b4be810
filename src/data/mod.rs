//! Sales records and the ordered dataset handed in by ingestion.
//!
//! The ingestion layer parses spreadsheets, drops blank and summary rows and
//! coerces every field to a number before a [`Dataset`] is built. From here
//! on records are immutable and their order is the order of every sample,
//! target and prediction derived from them.

mod feature;

pub use feature::{Feature, FeatureSet};

use crate::error::{ForecastError, Result};
use crate::primitives::{Matrix, Vector};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One period of sales: nine operational fields and the omset target.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use omset_forecast::data::{Feature, SalesRecord};
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date");
/// let record = SalesRecord::new(date, [120.0, 2.0, 15.0, 5.0, 0.0, 900.0, 1000.0, 0.0, 8.3], 900.0);
/// assert_eq!(record.feature(Feature::GrossSales), 1000.0);
/// assert_eq!(record.omset(), 900.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    date: NaiveDate,
    features: [f64; Feature::COUNT],
    omset: f64,
}

impl SalesRecord {
    /// Creates a record. `features` follows [`Feature::ALL`] order.
    #[must_use]
    pub fn new(date: NaiveDate, features: [f64; Feature::COUNT], omset: f64) -> Self {
        Self {
            date,
            features,
            omset,
        }
    }

    /// Period the record covers.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Value of one feature.
    #[must_use]
    pub fn feature(&self, feature: Feature) -> f64 {
        self.features[feature.index()]
    }

    /// All nine feature values in positional order.
    #[must_use]
    pub fn features(&self) -> &[f64; Feature::COUNT] {
        &self.features
    }

    /// Revenue target.
    #[must_use]
    pub fn omset(&self) -> f64 {
        self.omset
    }

    /// Extracts the sample for `set`, one value per selected feature.
    #[must_use]
    pub fn sample(&self, set: &FeatureSet) -> Vec<f64> {
        set.features().iter().map(|&f| self.feature(f)).collect()
    }
}

/// Ordered collection of sales records.
///
/// Ingestion rebuilds it wholesale; the core only reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<SalesRecord>,
}

impl Dataset {
    /// Wraps records, keeping the order they arrive in.
    #[must_use]
    pub fn new(records: Vec<SalesRecord>) -> Self {
        Self { records }
    }

    /// Wraps records sorted by date ascending. The sort is stable, so
    /// records sharing a date keep their arrival order.
    #[must_use]
    pub fn sorted_by_date(mut records: Vec<SalesRecord>) -> Self {
        records.sort_by_key(SalesRecord::date);
        Self { records }
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the dataset holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in dataset order.
    #[must_use]
    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    /// Omset of every record, in order.
    #[must_use]
    pub fn targets(&self) -> Vector<f64> {
        self.records.iter().map(SalesRecord::omset).collect::<Vec<_>>().into()
    }

    /// One feature across all records, in order.
    #[must_use]
    pub fn feature_column(&self, feature: Feature) -> Vector<f64> {
        self.records
            .iter()
            .map(|r| r.feature(feature))
            .collect::<Vec<_>>()
            .into()
    }

    /// Builds the `n x d` sample matrix for `set`, one row per record.
    ///
    /// # Errors
    ///
    /// Returns an error if `set` is empty.
    pub fn samples(&self, set: &FeatureSet) -> Result<Matrix<f64>> {
        if set.is_empty() {
            return Err(ForecastError::dimension_mismatch("feature set", 1, 0));
        }
        let mut data = Vec::with_capacity(self.records.len() * set.len());
        for record in &self.records {
            data.extend(set.features().iter().map(|&f| record.feature(f)));
        }
        Matrix::from_vec(self.records.len(), set.len(), data)
    }

    /// Record count, covered period and mean omset; `None` when empty.
    #[must_use]
    pub fn summary(&self) -> Option<DatasetSummary> {
        let first = self.records.first()?;
        let last = self.records.last()?;
        Some(DatasetSummary {
            n_records: self.records.len(),
            first_date: first.date(),
            last_date: last.date(),
            mean_omset: self.targets().mean(),
        })
    }
}

impl From<Vec<SalesRecord>> for Dataset {
    fn from(records: Vec<SalesRecord>) -> Self {
        Self::new(records)
    }
}

/// Descriptive overview of a dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    /// Number of records.
    pub n_records: usize,
    /// Date of the first record in dataset order.
    pub first_date: NaiveDate,
    /// Date of the last record in dataset order.
    pub last_date: NaiveDate,
    /// Mean omset across all records.
    pub mean_omset: f64,
}

#[cfg(test)]
#[path = "data_tests.rs"]
mod tests;
