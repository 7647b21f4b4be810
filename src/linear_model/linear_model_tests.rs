use super::*;

/// Deterministic, non-collinear column generator for multi-feature fits.
fn wobble(i: usize, j: usize) -> f64 {
    let freq = 0.31 + 0.17 * j as f64;
    ((i + 1) as f64 * freq).sin() * 10.0 + ((i * i) % (j + 3)) as f64
}

fn nine_feature_data(n: usize) -> (Matrix<f64>, Vector<f64>, Vec<f64>) {
    let beta: Vec<f64> = (0..9).map(|j| j as f64 - 4.0).collect();
    let mut data = Vec::with_capacity(n * 9);
    let mut y = Vec::with_capacity(n);
    for i in 0..n {
        let row: Vec<f64> = (0..9).map(|j| wobble(i, j)).collect();
        y.push(50.0 + row.iter().zip(&beta).map(|(x, b)| x * b).sum::<f64>());
        data.extend(row);
    }
    let x = Matrix::from_vec(n, 9, data).expect("n*9 elements");
    (x, Vector::from_vec(y), beta)
}

#[test]
fn test_new() {
    let model = LinearRegression::new();
    assert!(!model.is_fitted());
    assert!(model.model().is_none());
}

#[test]
fn test_simple_regression() {
    // y = 2x + 1
    let x = Matrix::from_vec(4, 1, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    let y = Vector::from_slice(&[3.0, 5.0, 7.0, 9.0]);

    let mut model = LinearRegression::new();
    model.fit(&x, &y).unwrap();
    assert!(model.is_fitted());

    let fitted = model.model().unwrap();
    assert!((fitted.coefficients()[0] - 2.0).abs() < 1e-10);
    assert!((fitted.intercept() - 1.0).abs() < 1e-10);

    let predictions = model.predict(&x).unwrap();
    for i in 0..4 {
        assert!((predictions[i] - y[i]).abs() < 1e-10);
    }

    let r2 = model.score(&x, &y).unwrap();
    assert!((r2 - 1.0).abs() < 1e-12);
}

#[test]
fn test_three_point_line() {
    // samples [[1],[2],[3]], targets [2,4,6]
    let x = Matrix::from_vec(3, 1, vec![1.0, 2.0, 3.0]).unwrap();
    let y = Vector::from_slice(&[2.0, 4.0, 6.0]);

    let mut model = LinearRegression::new();
    let predictions = model.fit_predict(&x, &y).unwrap();

    let fitted = model.model().unwrap();
    assert!(fitted.intercept().abs() < 1e-10);
    assert!((fitted.coefficients()[0] - 2.0).abs() < 1e-10);
    for (p, t) in predictions.as_slice().iter().zip([2.0, 4.0, 6.0]) {
        assert!((p - t).abs() < 1e-10);
    }
}

#[test]
fn test_multivariate_regression() {
    // y = 1 + 2*x1 + 3*x2
    let x = Matrix::from_vec(4, 2, vec![1.0, 1.0, 2.0, 1.0, 1.0, 2.0, 2.0, 2.0]).unwrap();
    let y = Vector::from_slice(&[6.0, 8.0, 9.0, 11.0]);

    let mut model = LinearRegression::new();
    model.fit(&x, &y).unwrap();

    let fitted = model.model().unwrap();
    assert!((fitted.coefficients()[0] - 2.0).abs() < 1e-9);
    assert!((fitted.coefficients()[1] - 3.0).abs() < 1e-9);
    assert!((fitted.intercept() - 1.0).abs() < 1e-9);

    let r2 = model.score(&x, &y).unwrap();
    assert!((r2 - 1.0).abs() < 1e-9);
}

#[test]
fn test_nine_feature_recovery() {
    let (x, y, beta) = nine_feature_data(40);

    let mut model = LinearRegression::new();
    model.fit(&x, &y).unwrap();

    let fitted = model.model().unwrap();
    assert_eq!(fitted.n_features(), 9);
    for (j, b) in beta.iter().enumerate() {
        assert!(
            (fitted.coefficients()[j] - b).abs() < 1e-6,
            "coefficient {j}: {} vs {b}",
            fitted.coefficients()[j]
        );
    }
    assert!((fitted.intercept() - 50.0).abs() < 1e-6);
}

#[test]
fn test_identical_columns_are_singular() {
    let (x, y, _) = nine_feature_data(30);
    let mut data = x.as_slice().to_vec();
    for i in 0..30 {
        data[i * 9 + 6] = data[i * 9 + 5]; // gross_sales copies net_sales
    }
    let x = Matrix::from_vec(30, 9, data).unwrap();

    let mut model = LinearRegression::new();
    let result = model.fit(&x, &y);
    assert!(matches!(result, Err(ForecastError::SingularMatrix { .. })));
    assert!(!model.is_fitted());
}

#[test]
fn test_scaled_duplicate_column_is_singular() {
    let (x, y, _) = nine_feature_data(30);
    let mut data = x.as_slice().to_vec();
    for i in 0..30 {
        data[i * 9 + 2] = 1_000.0 * data[i * 9];
    }
    let x = Matrix::from_vec(30, 9, data).unwrap();

    let mut model = LinearRegression::new();
    assert!(matches!(
        model.fit(&x, &y),
        Err(ForecastError::SingularMatrix { .. })
    ));
}

#[test]
fn test_constant_feature_is_singular() {
    let x = Matrix::from_vec(4, 1, vec![0.1, 0.1, 0.1, 0.1]).unwrap();
    let y = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0]);

    let mut model = LinearRegression::new();
    assert!(matches!(
        model.fit(&x, &y),
        Err(ForecastError::SingularMatrix { pivot: 0 })
    ));
}

#[test]
fn test_zero_column_in_multivariate_is_singular() {
    let (x, y, _) = nine_feature_data(20);
    let mut data = x.as_slice().to_vec();
    for i in 0..20 {
        data[i * 9 + 4] = 0.0; // amount_redeem never used
    }
    let x = Matrix::from_vec(20, 9, data).unwrap();

    let mut model = LinearRegression::new();
    assert!(matches!(
        model.fit(&x, &y),
        Err(ForecastError::SingularMatrix { pivot: 4 })
    ));
}

#[test]
fn test_predict_new_data() {
    // y = x + 1
    let x_train = Matrix::from_vec(3, 1, vec![1.0, 2.0, 3.0]).unwrap();
    let y_train = Vector::from_slice(&[2.0, 3.0, 4.0]);

    let mut model = LinearRegression::new();
    model.fit(&x_train, &y_train).unwrap();

    let x_test = Matrix::from_vec(2, 1, vec![4.0, 5.0]).unwrap();
    let predictions = model.predict(&x_test).unwrap();

    assert!((predictions[0] - 5.0).abs() < 1e-10);
    assert!((predictions[1] - 6.0).abs() < 1e-10);
}

#[test]
fn test_predict_one() {
    let x = Matrix::from_vec(3, 1, vec![1.0, 2.0, 3.0]).unwrap();
    let y = Vector::from_slice(&[2.0, 4.0, 6.0]);

    let mut model = LinearRegression::new();
    model.fit(&x, &y).unwrap();
    let fitted = model.into_model().unwrap();

    // Extrapolation at x = 10
    assert!((fitted.predict_one(&[10.0]).unwrap() - 20.0).abs() < 1e-9);
    assert!(matches!(
        fitted.predict_one(&[1.0, 2.0]),
        Err(ForecastError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_predict_dimension_mismatch() {
    let x = Matrix::from_vec(3, 1, vec![1.0, 2.0, 3.0]).unwrap();
    let y = Vector::from_slice(&[2.0, 4.0, 6.0]);

    let mut model = LinearRegression::new();
    model.fit(&x, &y).unwrap();

    let wide = Matrix::from_vec(1, 9, vec![1.0; 9]).unwrap();
    assert!(matches!(
        model.predict(&wide),
        Err(ForecastError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_predict_before_fit() {
    let model = LinearRegression::new();
    let x = Matrix::from_vec(1, 1, vec![1.0]).unwrap();
    assert!(matches!(model.predict(&x), Err(ForecastError::NotFitted)));
    assert!(matches!(model.into_model(), Err(ForecastError::NotFitted)));
}

#[test]
fn test_target_length_mismatch() {
    let x = Matrix::from_vec(3, 2, vec![1.0; 6]).unwrap();
    let y = Vector::from_slice(&[1.0, 2.0]);

    let mut model = LinearRegression::new();
    assert!(matches!(
        model.fit(&x, &y),
        Err(ForecastError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_fewer_than_three_samples() {
    let x = Matrix::from_vec(2, 1, vec![1.0, 2.0]).unwrap();
    let y = Vector::from_slice(&[3.0, 5.0]);

    let mut model = LinearRegression::new();
    let err = model.fit(&x, &y).unwrap_err();
    assert!(matches!(
        err,
        ForecastError::InsufficientData {
            required: 3,
            actual: 2
        }
    ));
}

#[test]
fn test_min_samples_is_configurable() {
    let x = Matrix::from_vec(2, 1, vec![1.0, 2.0]).unwrap();
    let y = Vector::from_slice(&[3.0, 5.0]);

    let mut model = LinearRegression::new().with_min_samples(2);
    model.fit(&x, &y).unwrap();
    assert!((model.model().unwrap().coefficients()[0] - 2.0).abs() < 1e-10);
}

#[test]
fn test_underdetermined_system() {
    // 5 samples, 9 features: 10 parameters needed
    let (x, y, _) = nine_feature_data(5);

    let mut model = LinearRegression::new();
    let err = model.fit(&x, &y).unwrap_err();
    assert!(matches!(err, ForecastError::SingularMatrix { pivot: 4 }));
    assert!(!model.is_fitted());
}

#[test]
fn test_square_system_is_singular() {
    // 9 samples still leave the intercept without a free row.
    let (x, y, _) = nine_feature_data(9);

    let err = LinearRegression::new().fit(&x, &y).unwrap_err();
    assert!(matches!(err, ForecastError::SingularMatrix { pivot: 8 }));

    let (x, y, _) = nine_feature_data(20);
    assert!(LinearRegression::new().fit(&x, &y).is_ok());
}

#[test]
fn test_min_samples_checked_before_rank() {
    let (x, y, _) = nine_feature_data(2);

    let err = LinearRegression::new().fit(&x, &y).unwrap_err();
    assert!(matches!(
        err,
        ForecastError::InsufficientData {
            required: 3,
            actual: 2
        }
    ));

    let err = LinearRegression::new()
        .with_min_samples(2)
        .fit(&x, &y)
        .unwrap_err();
    assert!(matches!(err, ForecastError::SingularMatrix { pivot: 1 }));
}

#[test]
fn test_refit_failure_clears_previous_model() {
    let x = Matrix::from_vec(3, 1, vec![1.0, 2.0, 3.0]).unwrap();
    let y = Vector::from_slice(&[2.0, 4.0, 6.0]);
    let mut model = LinearRegression::new();
    model.fit(&x, &y).unwrap();

    let flat = Matrix::from_vec(3, 1, vec![1.0, 1.0, 1.0]).unwrap();
    assert!(model.fit(&flat, &y).is_err());
    assert!(!model.is_fitted());
}

#[test]
fn test_with_noise() {
    // y ≈ 2x + 1 with some noise
    let x = Matrix::from_vec(5, 1, vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
    let y = Vector::from_slice(&[3.1, 4.9, 7.2, 8.8, 11.1]);

    let mut model = LinearRegression::new();
    model.fit(&x, &y).unwrap();

    let fitted = model.model().unwrap();
    assert!((fitted.coefficients()[0] - 2.0).abs() < 0.2);
    assert!((fitted.intercept() - 1.0).abs() < 0.5);

    let r2 = model.score(&x, &y).unwrap();
    assert!(r2 > 0.95);
    assert!(r2 < 1.0);
}

#[test]
fn test_negative_slope() {
    let x = Matrix::from_vec(4, 1, vec![-2.0, -1.0, 0.0, 1.0]).unwrap();
    let y = Vector::from_slice(&[5.0, 3.0, 1.0, -1.0]); // y = -2x + 1

    let mut model = LinearRegression::new();
    model.fit(&x, &y).unwrap();

    let fitted = model.model().unwrap();
    assert!((fitted.coefficients()[0] + 2.0).abs() < 1e-10);
    assert!((fitted.intercept() - 1.0).abs() < 1e-10);
}

#[test]
fn test_sales_sized_values() {
    // Rupiah-scale revenue: omset = 1.1 * net_sales + 250_000
    let net: Vec<f64> = (0..30).map(|i| 4_000_000.0 + 137_500.0 * f64::from(i)).collect();
    let omset: Vec<f64> = net.iter().map(|v| 1.1 * v + 250_000.0).collect();
    let x = Matrix::from_vec(30, 1, net).unwrap();
    let y = Vector::from_vec(omset);

    let mut model = LinearRegression::new();
    model.fit(&x, &y).unwrap();

    let fitted = model.model().unwrap();
    assert!((fitted.coefficients()[0] - 1.1).abs() < 1e-9);
    assert!((fitted.intercept() - 250_000.0).abs() < 1e-3);
}

#[test]
fn test_constant_target() {
    let x = Matrix::from_vec(3, 1, vec![1.0, 2.0, 3.0]).unwrap();
    let y = Vector::from_slice(&[5.0, 5.0, 5.0]);

    let mut model = LinearRegression::new();
    model.fit(&x, &y).unwrap();

    let fitted = model.model().unwrap();
    assert!(fitted.coefficients()[0].abs() < 1e-12);
    assert!((fitted.intercept() - 5.0).abs() < 1e-12);
    // Zero total variance resolves R² to 0.
    assert_eq!(model.score(&x, &y).unwrap(), 0.0);
}

#[test]
fn test_clone() {
    let x = Matrix::from_vec(3, 1, vec![1.0, 2.0, 3.0]).unwrap();
    let y = Vector::from_slice(&[2.0, 4.0, 6.0]);

    let mut model = LinearRegression::new();
    model.fit(&x, &y).unwrap();

    let cloned = model.clone();
    assert!(cloned.is_fitted());
    assert_eq!(cloned.model(), model.model());
}

#[test]
fn test_model_serializes() {
    let x = Matrix::from_vec(3, 1, vec![1.0, 2.0, 3.0]).unwrap();
    let y = Vector::from_slice(&[3.0, 5.0, 7.0]);

    let mut model = LinearRegression::new();
    model.fit(&x, &y).unwrap();

    let json = serde_json::to_value(model.model().unwrap()).unwrap();
    assert!(json.get("intercept").is_some());
    assert!(json.get("coefficients").is_some());
}
