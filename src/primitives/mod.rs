//! Core compute primitives (Vector, Matrix).
//!
//! Row-major `f64` storage backing every regression in the crate.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
