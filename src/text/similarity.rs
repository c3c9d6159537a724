//! Cosine similarity for dense and sparse vectors.
//!
//! ```text
//! cosine_sim(A, B) = (A · B) / (||A|| * ||B||)
//! ```
//!
//! A zero vector is treated as orthogonal to everything (similarity 0),
//! so recipes whose ingredient document is empty never rank above a
//! recipe that shares a term with the query.

use crate::error::{CocinarError, Result};
use crate::primitives::{SparseMatrix, SparseVector, Vector};

/// Cosine similarity between two dense vectors.
///
/// # Errors
///
/// Returns an error if the lengths differ or the vectors are empty.
///
/// # Examples
///
/// ```
/// use cocinar::primitives::Vector;
/// use cocinar::text::similarity::cosine_similarity;
///
/// let v1 = Vector::from_slice(&[1.0, 2.0, 3.0]);
/// let v2 = Vector::from_slice(&[2.0, 4.0, 6.0]);
/// let sim = cosine_similarity(&v1, &v2).expect("same length");
/// assert!((sim - 1.0).abs() < 1e-12);
/// ```
pub fn cosine_similarity(a: &Vector<f64>, b: &Vector<f64>) -> Result<f64> {
    if a.len() != b.len() {
        return Err(CocinarError::dimension_mismatch("len", a.len(), b.len()));
    }
    if a.is_empty() {
        return Err(CocinarError::DimensionMismatch {
            expected: "non-empty vectors".to_string(),
            actual: "0".to_string(),
        });
    }

    let norm_a = a.norm();
    let norm_b = b.norm();
    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    Ok(a.dot(b) / (norm_a * norm_b))
}

/// Cosine similarity between two sparse vectors.
#[must_use]
pub fn sparse_cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let norm_a = a.norm();
    let norm_b = b.norm();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    a.dot(b) / (norm_a * norm_b)
}

/// Cosine similarity of `query` against every row of `matrix`, in row order.
#[must_use]
pub fn cosine_similarity_to_rows(query: &SparseVector, matrix: &SparseMatrix) -> Vec<f64> {
    matrix
        .rows()
        .map(|row| sparse_cosine_similarity(query, row))
        .collect()
}

#[cfg(test)]
#[path = "similarity_tests.rs"]
mod tests;
