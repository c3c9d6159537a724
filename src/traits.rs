//! Core traits for fitted transformers and clusterers.
//!
//! Both follow the fit-then-use convention: `fit` learns state from a
//! matrix, later calls read that state without changing it.

use crate::error::Result;
use crate::primitives::Matrix;

/// Trait for data transformers (scalers, projections).
///
/// # Examples
///
/// ```
/// use cocinar::prelude::*;
///
/// let data = Matrix::from_vec(3, 1, vec![1.0, 2.0, 3.0]).expect("valid");
/// let mut scaler = StandardScaler::new();
/// let scaled = scaler.fit_transform(&data).expect("non-empty");
/// assert!(scaled.get(1, 0).abs() < 1e-12);
/// ```
pub trait Transformer {
    /// Learns the transformation parameters from `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if `x` is empty or has an invalid shape.
    fn fit(&mut self, x: &Matrix<f64>) -> Result<()>;

    /// Applies the learned transformation.
    ///
    /// # Errors
    ///
    /// Returns an error if not fitted or the feature count differs.
    fn transform(&self, x: &Matrix<f64>) -> Result<Matrix<f64>>;

    /// Fits and transforms in one step.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting or transforming fails.
    fn fit_transform(&mut self, x: &Matrix<f64>) -> Result<Matrix<f64>> {
        self.fit(x)?;
        self.transform(x)
    }
}

/// Trait for unsupervised learning models.
pub trait UnsupervisedEstimator {
    /// The type of labels/clusters produced.
    type Labels;

    /// Fits the model to data.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting fails (empty data, invalid parameters, etc.).
    fn fit(&mut self, x: &Matrix<f64>) -> Result<()>;

    /// Predicts cluster assignments.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is not fitted or the feature count differs.
    fn predict(&self, x: &Matrix<f64>) -> Result<Self::Labels>;
}
