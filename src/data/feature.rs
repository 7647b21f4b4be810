//! The nine operational sales fields usable as regression predictors.

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A numeric field of a [`super::SalesRecord`] that can predict omset.
///
/// The declaration order is the positional order of every nine-feature
/// sample; [`Feature::ALL`] and [`Feature::index`] follow it.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    ItemSales,
    Void,
    /// Default predictor in single-variable mode.
    #[default]
    DiscountBill,
    DiscountItem,
    AmountRedeem,
    NetSales,
    GrossSales,
    PembayaranDp,
    AverageSales,
}

impl Feature {
    /// Every feature in positional order.
    pub const ALL: [Feature; 9] = [
        Feature::ItemSales,
        Feature::Void,
        Feature::DiscountBill,
        Feature::DiscountItem,
        Feature::AmountRedeem,
        Feature::NetSales,
        Feature::GrossSales,
        Feature::PembayaranDp,
        Feature::AverageSales,
    ];

    /// Number of known features.
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this feature inside a nine-feature sample.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Column name as stored by the ingestion layer.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Feature::ItemSales => "item_sales",
            Feature::Void => "void",
            Feature::DiscountBill => "discount_bill",
            Feature::DiscountItem => "discount_item",
            Feature::AmountRedeem => "amount_redeem",
            Feature::NetSales => "net_sales",
            Feature::GrossSales => "gross_sales",
            Feature::PembayaranDp => "pembayaran_dp",
            Feature::AverageSales => "average_sales",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Feature::ItemSales => "Item Sales",
            Feature::Void => "Void",
            Feature::DiscountBill => "Discount Bill",
            Feature::DiscountItem => "Discount Item",
            Feature::AmountRedeem => "Amount Redeem",
            Feature::NetSales => "Net Sales",
            Feature::GrossSales => "Gross Sales",
            Feature::PembayaranDp => "Pembayaran DP",
            Feature::AverageSales => "Average Sales",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Feature {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        Feature::ALL
            .into_iter()
            .find(|feature| feature.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ForecastError::UnknownFeature(s.to_string()))
    }
}

/// Ordered list of features selected for one fit.
///
/// Either a single feature or all nine; nothing in between can be built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureSet {
    features: Vec<Feature>,
}

impl FeatureSet {
    /// Single-variable mode.
    #[must_use]
    pub fn single(feature: Feature) -> Self {
        Self {
            features: vec![feature],
        }
    }

    /// Multi-variable mode with every feature in positional order.
    #[must_use]
    pub fn all() -> Self {
        Self {
            features: Feature::ALL.to_vec(),
        }
    }

    /// Number of features (sample dimensionality).
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns true if no features are selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Features in sample order.
    #[must_use]
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// True when this set contains exactly one feature.
    #[must_use]
    pub fn is_single(&self) -> bool {
        self.features.len() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_all_order() {
        for (i, feature) in Feature::ALL.iter().enumerate() {
            assert_eq!(feature.index(), i);
        }
        assert_eq!(Feature::COUNT, 9);
    }

    #[test]
    fn test_parse_round_trips_name() {
        for feature in Feature::ALL {
            let parsed: Feature = feature.name().parse().expect("known name");
            assert_eq!(parsed, feature);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive_and_trimmed() {
        let parsed: Feature = "  Net_Sales ".parse().expect("known name");
        assert_eq!(parsed, Feature::NetSales);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "omset".parse::<Feature>().unwrap_err();
        assert!(matches!(err, ForecastError::UnknownFeature(name) if name == "omset"));
    }

    #[test]
    fn test_default_is_discount_bill() {
        assert_eq!(Feature::default(), Feature::DiscountBill);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Feature::PembayaranDp.label(), "Pembayaran DP");
        assert_eq!(Feature::AverageSales.to_string(), "average_sales");
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&Feature::GrossSales).expect("serializable");
        assert_eq!(json, "\"gross_sales\"");
    }

    #[test]
    fn test_feature_sets() {
        let single = FeatureSet::single(Feature::Void);
        assert!(single.is_single());
        assert_eq!(single.features(), &[Feature::Void]);

        let all = FeatureSet::all();
        assert_eq!(all.len(), 9);
        assert!(!all.is_single());
        assert!(!all.is_empty());
    }
}
