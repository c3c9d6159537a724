//! Sparse row storage for TF-IDF features.

use super::Matrix;
use crate::error::{CocinarError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sparse vector: parallel arrays of strictly increasing column indices and
/// their values.
///
/// # Examples
///
/// ```
/// use cocinar::primitives::SparseVector;
///
/// let a = SparseVector::from_pairs(vec![(0, 1.0), (3, 2.0)]).expect("sorted");
/// let b = SparseVector::from_pairs(vec![(3, 4.0)]).expect("sorted");
/// assert!((a.dot(&b) - 8.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    indices: Vec<usize>,
    values: Vec<f64>,
}

impl SparseVector {
    /// Builds a sparse vector from `(index, value)` pairs.
    ///
    /// Zero values are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if indices are not strictly increasing.
    pub fn from_pairs(pairs: Vec<(usize, f64)>) -> Result<Self> {
        let mut indices = Vec::with_capacity(pairs.len());
        let mut values = Vec::with_capacity(pairs.len());

        for (idx, value) in pairs {
            if let Some(&last) = indices.last() {
                if idx <= last {
                    return Err(CocinarError::DimensionMismatch {
                        expected: format!("index > {last}"),
                        actual: format!("{idx}"),
                    });
                }
            }
            if value != 0.0 {
                indices.push(idx);
                values.push(value);
            }
        }

        Ok(Self { indices, values })
    }

    /// Column indices of the stored entries.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Values of the stored entries.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of stored (non-zero) entries.
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if no entry is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Value at `idx` (0 when not stored).
    #[must_use]
    pub fn get(&self, idx: usize) -> f64 {
        self.indices
            .binary_search(&idx)
            .map_or(0.0, |pos| self.values[pos])
    }

    /// Sparse dot product via a merge over both index lists.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        let mut sum = 0.0;
        let (mut i, mut j) = (0, 0);
        while i < self.indices.len() && j < other.indices.len() {
            match self.indices[i].cmp(&other.indices[j]) {
                Ordering::Equal => {
                    sum += self.values[i] * other.values[j];
                    i += 1;
                    j += 1;
                }
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
            }
        }
        sum
    }

    /// Euclidean (L2) norm.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.values.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// Scales the vector to unit L2 norm. Zero vectors are left untouched.
    pub fn l2_normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            for v in &mut self.values {
                *v /= norm;
            }
        }
    }
}

/// Row-compressed sparse matrix: one [`SparseVector`] per row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparseMatrix {
    rows: Vec<SparseVector>,
    n_cols: usize,
}

impl SparseMatrix {
    /// Builds a matrix from rows whose indices all lie below `n_cols`.
    ///
    /// # Errors
    ///
    /// Returns an error if any stored index is `>= n_cols`.
    pub fn from_rows(rows: Vec<SparseVector>, n_cols: usize) -> Result<Self> {
        for row in &rows {
            if let Some(&max_idx) = row.indices.last() {
                if max_idx >= n_cols {
                    return Err(CocinarError::dimension_mismatch(
                        "n_cols",
                        n_cols,
                        max_idx + 1,
                    ));
                }
            }
        }
        Ok(Self { rows, n_cols })
    }

    /// Number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.n_cols)
    }

    /// Borrows a row.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of bounds.
    #[must_use]
    pub fn row(&self, idx: usize) -> &SparseVector {
        &self.rows[idx]
    }

    /// Iterates over all rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &SparseVector> {
        self.rows.iter()
    }

    /// Total number of stored entries.
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.rows.iter().map(SparseVector::nnz).sum()
    }

    /// Materializes the matrix densely. Memory is `n_rows * n_cols`.
    #[must_use]
    pub fn to_dense(&self) -> Matrix<f64> {
        let mut dense = Matrix::zeros(self.rows.len(), self.n_cols);
        for (i, row) in self.rows.iter().enumerate() {
            for (&j, &value) in row.indices.iter().zip(&row.values) {
                dense.set(i, j, value);
            }
        }
        dense
    }
}

#[cfg(test)]
#[path = "sparse_tests.rs"]
mod tests;
