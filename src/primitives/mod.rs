//! Core compute primitives (Vector, Matrix, sparse rows).
//!
//! Dense types back the numeric features and the projected coordinates;
//! the sparse types hold the TF-IDF rows, which are mostly zeros.

mod matrix;
mod sparse;
mod vector;

pub use matrix::Matrix;
pub use sparse::{SparseMatrix, SparseVector};
pub use vector::Vector;
