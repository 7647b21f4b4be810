// =========================================================================
// FALSIFY-MX: Matrix primitives contract
//
// Properties the OLS solver leans on: transpose is an involution, the Gram
// matrix X^T X is symmetric, and a Cholesky solve reproduces b.
//
// References:
//   - Golub & Van Loan (2013) "Matrix Computations", §4.2
// =========================================================================

use super::*;

/// FALSIFY-MX-001: Transpose involution: (A^T)^T = A
#[test]
fn falsify_mx_001_transpose_involution() {
    let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid");
    let att = a.transpose().transpose();

    assert_eq!(att, a, "FALSIFIED MX-001: (A^T)^T != A");
}

/// FALSIFY-MX-002: Gram matrix X^T X is symmetric
#[test]
fn falsify_mx_002_gram_symmetric() {
    let x = Matrix::from_vec(4, 3, vec![
        1.0, 7.0, 2.0, //
        3.0, 1.0, 9.0, //
        4.0, 4.0, 1.0, //
        0.5, 2.0, 6.0,
    ])
    .expect("valid");
    let gram = x.transpose().matmul(&x).expect("compatible dims");

    for i in 0..3 {
        for j in 0..3 {
            assert!(
                (gram.get(i, j) - gram.get(j, i)).abs() < 1e-12,
                "FALSIFIED MX-002: G[{i},{j}]={} != G[{j},{i}]={}",
                gram.get(i, j),
                gram.get(j, i)
            );
        }
    }
}

mod matrix_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        /// FALSIFY-MX-001-prop: Transpose involution for random matrices
        #[test]
        fn falsify_mx_001_prop_transpose_involution(
            rows in 1..=8usize,
            cols in 1..=8usize,
            seed in 0..500u32,
        ) {
            let data: Vec<f64> = (0..rows * cols)
                .map(|i| ((i as f64 + f64::from(seed)) * 0.37).sin() * 10.0)
                .collect();
            let a = Matrix::from_vec(rows, cols, data).expect("valid");
            prop_assert_eq!(a.transpose().transpose(), a);
        }

        /// FALSIFY-MX-003-prop: Cholesky solve of a diagonally dominant
        /// SPD system satisfies A x = b
        #[test]
        fn falsify_mx_003_prop_cholesky_residual(
            n in 1..=9usize,
            seed in 0..500u32,
        ) {
            let mut a = Matrix::zeros(n, n);
            for i in 0..n {
                for j in 0..=i {
                    let v = ((i * n + j) as f64 + f64::from(seed)).cos();
                    a.set(i, j, v);
                    a.set(j, i, v);
                }
                a.set(i, i, n as f64 + 2.0);
            }
            let b = Vector::from_vec((0..n).map(|i| i as f64 - 1.5).collect());
            let x = a.cholesky_solve(&b, 1e-10).expect("diagonally dominant SPD");
            let ax = a.matvec(&x).expect("compatible");

            for i in 0..n {
                prop_assert!(
                    (ax[i] - b[i]).abs() < 1e-9,
                    "FALSIFIED MX-003-prop: (Ax)[{}]={} != b[{}]={}",
                    i, ax[i], i, b[i]
                );
            }
        }
    }
}
