//! Preprocessing transformers: numeric standardization and PCA.
//!
//! # Example
//!
//! ```
//! use cocinar::prelude::*;
//!
//! // minutes, n_ingredients, n_steps
//! let data = Matrix::from_vec(3, 3, vec![
//!     30.0, 5.0, 4.0,
//!     60.0, 9.0, 8.0,
//!     90.0, 7.0, 6.0,
//! ]).expect("valid matrix dimensions");
//!
//! let mut scaler = StandardScaler::new();
//! let scaled = scaler.fit_transform(&data).expect("fit_transform should succeed");
//! assert!(scaled.get(1, 0).abs() < 1e-12);
//! ```

use crate::error::{CocinarError, Result};
use crate::primitives::Matrix;
use crate::traits::Transformer;
use nalgebra::{DMatrix, DVector, SymmetricEigen};
use serde::{Deserialize, Serialize};

/// Standardizes features by removing the mean and scaling to unit variance.
///
/// The standard score of a sample x is `z = (x - mean) / std`, with the
/// population standard deviation (divide by n). A zero-variance column
/// has no scale to divide by; its standardized value is defined as 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Mean of each feature (computed during fit).
    mean: Option<Vec<f64>>,
    /// Standard deviation of each feature; exactly 0 for constant columns.
    std: Option<Vec<f64>>,
}

impl StandardScaler {
    /// Creates an unfitted scaler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mean of each feature, if fitted.
    #[must_use]
    pub fn mean(&self) -> Option<&[f64]> {
        self.mean.as_deref()
    }

    /// Returns the standard deviation of each feature, if fitted.
    #[must_use]
    pub fn std(&self) -> Option<&[f64]> {
        self.std.as_deref()
    }

    /// Returns true if the scaler has been fitted.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.mean.is_some()
    }
}

impl Transformer for StandardScaler {
    fn fit(&mut self, x: &Matrix<f64>) -> Result<()> {
        let (n_samples, n_features) = x.shape();
        if n_samples == 0 {
            return Err(CocinarError::empty_input("cannot fit scaler with zero samples"));
        }

        let mean = x.column_means();
        let mut std = vec![0.0; n_features];
        for (j, std_j) in std.iter_mut().enumerate() {
            let first = x.get(0, j);
            if (1..n_samples).all(|i| x.get(i, j) == first) {
                continue;
            }
            let sum_sq: f64 = (0..n_samples)
                .map(|i| {
                    let diff = x.get(i, j) - mean[j];
                    diff * diff
                })
                .sum();
            *std_j = (sum_sq / n_samples as f64).sqrt();
        }

        self.mean = Some(mean);
        self.std = Some(std);
        Ok(())
    }

    fn transform(&self, x: &Matrix<f64>) -> Result<Matrix<f64>> {
        let (Some(mean), Some(std)) = (self.mean.as_ref(), self.std.as_ref()) else {
            return Err(CocinarError::construction("scaler not fitted"));
        };

        let (n_samples, n_features) = x.shape();
        if n_features != mean.len() {
            return Err(CocinarError::dimension_mismatch(
                "n_features",
                mean.len(),
                n_features,
            ));
        }

        let mut result = vec![0.0; n_samples * n_features];
        for i in 0..n_samples {
            for j in 0..n_features {
                result[i * n_features + j] = if std[j] > 0.0 {
                    (x.get(i, j) - mean[j]) / std[j]
                } else {
                    0.0
                };
            }
        }

        Matrix::from_vec(n_samples, n_features, result)
    }
}

/// Eigenvalues below this fraction of the largest are treated as zero rank.
const RANK_TOLERANCE: f64 = 1e-10;

/// Principal Component Analysis for dimensionality reduction.
///
/// Exact and deterministic: the eigen-decomposition runs on the smaller of
/// the feature covariance (`d × d`) and the sample Gram matrix (`n × n`),
/// so a wide TF-IDF matrix over a small corpus stays cheap. Each
/// component's sign is fixed so its largest-magnitude loading is positive.
/// Components beyond the rank of the data are all-zero and project to 0.
///
/// # Example
///
/// ```
/// use cocinar::preprocessing::Pca;
/// use cocinar::traits::Transformer;
/// use cocinar::primitives::Matrix;
///
/// let data = Matrix::from_vec(4, 3, vec![
///     1.0, 2.0, 3.0,
///     4.0, 5.0, 6.0,
///     7.0, 8.0, 9.0,
///     10.0, 11.0, 12.0,
/// ]).expect("valid matrix dimensions");
///
/// let mut pca = Pca::new(2);
/// let transformed = pca.fit_transform(&data).expect("fit_transform should succeed");
/// assert_eq!(transformed.shape(), (4, 2));
/// ```
#[derive(Debug, Clone)]
pub struct Pca {
    /// Number of components to keep.
    n_components: usize,
    /// Mean of each feature (computed during fit).
    mean: Option<Vec<f64>>,
    /// Principal axes, one per row (`n_components × n_features`).
    components: Option<Matrix<f64>>,
    /// Variance explained by each component.
    explained_variance: Option<Vec<f64>>,
    /// Ratio of total variance explained by each component.
    explained_variance_ratio: Option<Vec<f64>>,
}

impl Pca {
    /// Creates a new PCA transformer keeping `n_components` axes.
    #[must_use]
    pub fn new(n_components: usize) -> Self {
        Self {
            n_components,
            mean: None,
            components: None,
            explained_variance: None,
            explained_variance_ratio: None,
        }
    }

    /// Returns the variance explained by each component.
    #[must_use]
    pub fn explained_variance(&self) -> Option<&[f64]> {
        self.explained_variance.as_deref()
    }

    /// Returns the ratio of variance explained by each component.
    #[must_use]
    pub fn explained_variance_ratio(&self) -> Option<&[f64]> {
        self.explained_variance_ratio.as_deref()
    }

    /// Returns the principal axes.
    #[must_use]
    pub fn components(&self) -> Option<&Matrix<f64>> {
        self.components.as_ref()
    }
}

/// Indices of `values` sorted descending; ties keep index order.
fn descending_order(values: &DVector<f64>) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[b].total_cmp(&values[a]));
    order
}

impl Transformer for Pca {
    fn fit(&mut self, x: &Matrix<f64>) -> Result<()> {
        let (n_samples, n_features) = x.shape();
        if n_samples == 0 {
            return Err(CocinarError::empty_input("cannot fit PCA with zero samples"));
        }
        if self.n_components == 0 || self.n_components > n_features {
            return Err(CocinarError::invalid_parameter(
                "n_components",
                self.n_components,
                format!("1..={n_features}"),
            ));
        }

        let mean = x.column_means();
        let centered = DMatrix::from_fn(n_samples, n_features, |i, j| x.get(i, j) - mean[j]);
        let dof = n_samples.saturating_sub(1).max(1) as f64;
        let total_variance = centered.iter().map(|v| v * v).sum::<f64>() / dof;

        let k = self.n_components;
        let mut components = Matrix::zeros(k, n_features);
        let mut explained_variance = vec![0.0; k];

        if n_samples > 1 && total_variance > 0.0 {
            if n_features <= n_samples {
                let cov = centered.tr_mul(&centered) / dof;
                let eigen = SymmetricEigen::new(cov);
                let order = descending_order(&eigen.eigenvalues);
                let largest = eigen.eigenvalues[order[0]];
                for (c, &idx) in order.iter().take(k).enumerate() {
                    let lambda = eigen.eigenvalues[idx];
                    if lambda <= RANK_TOLERANCE * largest {
                        continue;
                    }
                    explained_variance[c] = lambda;
                    for j in 0..n_features {
                        components.set(c, j, eigen.eigenvectors[(j, idx)]);
                    }
                }
            } else {
                // Xc = U S Vᵀ: eigenvectors of Xc Xcᵀ are U, and V = Xcᵀ U / s.
                let gram = &centered * centered.transpose();
                let eigen = SymmetricEigen::new(gram);
                let order = descending_order(&eigen.eigenvalues);
                let largest = eigen.eigenvalues[order[0]];
                for (c, &idx) in order.iter().take(k).enumerate() {
                    let lambda = eigen.eigenvalues[idx];
                    if lambda <= RANK_TOLERANCE * largest {
                        continue;
                    }
                    let u = eigen.eigenvectors.column(idx).into_owned();
                    let axis = centered.tr_mul(&u) / lambda.sqrt();
                    explained_variance[c] = lambda / dof;
                    for j in 0..n_features {
                        components.set(c, j, axis[j]);
                    }
                }
            }
        }

        for c in 0..k {
            let row = components.row_slice(c);
            let pivot = row
                .iter()
                .copied()
                .fold(0.0_f64, |best, v| if v.abs() > best.abs() { v } else { best });
            if pivot < 0.0 {
                for j in 0..n_features {
                    let v = components.get(c, j);
                    components.set(c, j, -v);
                }
            }
        }

        let explained_variance_ratio = explained_variance
            .iter()
            .map(|&v| {
                if total_variance > 0.0 {
                    v / total_variance
                } else {
                    0.0
                }
            })
            .collect();

        self.mean = Some(mean);
        self.components = Some(components);
        self.explained_variance = Some(explained_variance);
        self.explained_variance_ratio = Some(explained_variance_ratio);
        Ok(())
    }

    fn transform(&self, x: &Matrix<f64>) -> Result<Matrix<f64>> {
        let (Some(components), Some(mean)) = (self.components.as_ref(), self.mean.as_ref()) else {
            return Err(CocinarError::construction("PCA not fitted"));
        };

        let (n_samples, n_features) = x.shape();
        if n_features != mean.len() {
            return Err(CocinarError::dimension_mismatch(
                "n_features",
                mean.len(),
                n_features,
            ));
        }

        // X_pca = (X - mean) @ componentsᵀ
        let mut result = vec![0.0; n_samples * self.n_components];
        for i in 0..n_samples {
            let row = x.row_slice(i);
            for c in 0..self.n_components {
                let axis = components.row_slice(c);
                result[i * self.n_components + c] = row
                    .iter()
                    .zip(mean)
                    .zip(axis)
                    .map(|((v, m), a)| (v - m) * a)
                    .sum();
            }
        }

        Matrix::from_vec(n_samples, self.n_components, result)
    }
}
