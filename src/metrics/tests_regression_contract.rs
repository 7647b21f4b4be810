// =========================================================================
// FALSIFY-MR: regression metrics contract
//
// Each test tries to break one documented property of the metrics that
// accompany every forecast: R² bounds and its zero-variance guard, RMSE/MAE
// vanishing on perfect fits, and MAPE non-negativity with its floor of 1.
// =========================================================================

use super::*;
use crate::primitives::Vector;

/// FALSIFY-MR-001: R² = 1.0 for perfect predictions
#[test]
fn falsify_mr_001_r2_perfect() {
    let y_true = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    let y_pred = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]);

    let r2 = r_squared(&y_pred, &y_true).expect("equal lengths");
    assert!(
        (r2 - 1.0).abs() < 1e-12,
        "FALSIFIED MR-001: R²={r2} for perfect predictions, expected 1.0"
    );
}

/// FALSIFY-MR-002: R² ≤ 1.0 always
#[test]
fn falsify_mr_002_r2_upper_bound() {
    let y_true = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    let y_pred = Vector::from_slice(&[1.1, 2.2, 2.8, 4.1, 4.9]);

    let r2 = r_squared(&y_pred, &y_true).expect("equal lengths");
    assert!(r2 <= 1.0, "FALSIFIED MR-002: R²={r2} > 1.0");
}

/// FALSIFY-MR-003: R² < 0 when predictions are worse than the mean
#[test]
fn falsify_mr_003_r2_negative_for_bad_predictions() {
    let y_true = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    let y_pred = Vector::from_slice(&[10.0, 20.0, 30.0, 40.0, 50.0]);

    let r2 = r_squared(&y_pred, &y_true).expect("equal lengths");
    assert!(
        r2 < 0.0,
        "FALSIFIED MR-003: R²={r2} >= 0 for terrible predictions"
    );
}

/// FALSIFY-MR-004: R² = 0 exactly when every prediction is the actual mean
#[test]
fn falsify_mr_004_r2_zero_for_mean_predictor() {
    let y_true = Vector::from_slice(&[2.0, 4.0, 6.0, 8.0]);
    let y_pred = Vector::from_slice(&[5.0, 5.0, 5.0, 5.0]);

    let r2 = r_squared(&y_pred, &y_true).expect("equal lengths");
    assert_eq!(r2, 0.0, "FALSIFIED MR-004: R²={r2} for mean predictor");
}

/// FALSIFY-MR-005: zero total variance resolves R² to 0, never NaN
#[test]
fn falsify_mr_005_r2_zero_variance_guard() {
    let y_true = Vector::from_slice(&[5.0, 5.0, 5.0]);
    let y_pred = Vector::from_slice(&[4.0, 5.0, 9.0]);

    let r2 = r_squared(&y_pred, &y_true).expect("equal lengths");
    assert_eq!(r2, 0.0, "FALSIFIED MR-005: R²={r2} with TSS = 0");
}

/// FALSIFY-MR-006: RMSE ≥ MAE (quadratic mean dominates arithmetic mean)
#[test]
fn falsify_mr_006_rmse_dominates_mae() {
    let y_true = Vector::from_slice(&[3.0, -0.5, 2.0, 7.0]);
    let y_pred = Vector::from_slice(&[2.5, 0.0, 2.0, 8.0]);

    let rmse_v = rmse(&y_pred, &y_true).expect("equal lengths");
    let mae_v = mae(&y_pred, &y_true).expect("equal lengths");
    assert!(
        rmse_v >= mae_v,
        "FALSIFIED MR-006: RMSE={rmse_v} < MAE={mae_v}"
    );
}

/// FALSIFY-MR-007: MAPE is non-negative, also for zero and negative actuals
#[test]
fn falsify_mr_007_mape_non_negative() {
    let y_true = Vector::from_slice(&[0.0, -3.0, 0.5, 120.0]);
    let y_pred = Vector::from_slice(&[2.0, 1.0, 0.0, 100.0]);

    let m = mape(&y_pred, &y_true).expect("equal lengths");
    assert!(m >= 0.0, "FALSIFIED MR-007: MAPE={m} < 0");
    assert!(m.is_finite(), "FALSIFIED MR-007: MAPE={m} is not finite");
}

/// FALSIFY-MR-008: MAPE divides small actuals by 1
#[test]
fn falsify_mr_008_mape_floor() {
    // |0 - 2| / max(0, 1) = 2 -> 200%
    let y_true = Vector::from_slice(&[0.0]);
    let y_pred = Vector::from_slice(&[2.0]);

    let m = mape(&y_pred, &y_true).expect("equal lengths");
    assert!(
        (m - 200.0).abs() < 1e-12,
        "FALSIFIED MR-008: MAPE={m}, expected 200"
    );
}

/// FALSIFY-MR-009: bundled metrics agree with the standalone functions
#[test]
fn falsify_mr_009_bundle_matches_functions() {
    let y_true = Vector::from_slice(&[12.0, 15.0, 11.0, 20.0, 18.0]);
    let y_pred = Vector::from_slice(&[11.5, 16.0, 10.0, 19.0, 18.5]);

    let bundle = ErrorMetrics::compute(&y_pred, &y_true).expect("equal lengths");
    let pairs = [
        (bundle.r2, r_squared(&y_pred, &y_true).expect("ok")),
        (bundle.rmse, rmse(&y_pred, &y_true).expect("ok")),
        (bundle.mae, mae(&y_pred, &y_true).expect("ok")),
        (bundle.mape, mape(&y_pred, &y_true).expect("ok")),
    ];
    for (i, (a, b)) in pairs.iter().enumerate() {
        assert!(
            (a - b).abs() < 1e-12,
            "FALSIFIED MR-009: metric {i} bundle={a} standalone={b}"
        );
    }
}
