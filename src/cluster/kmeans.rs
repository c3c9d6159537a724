//! K-Means clustering algorithm.
//!
//! Uses Lloyd's algorithm with seeded k-means++ initialization.

use crate::error::{CocinarError, Result};
use crate::primitives::Matrix;
use crate::traits::UnsupervisedEstimator;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// K-Means clustering algorithm.
///
/// # Algorithm
///
/// 1. Initialize centroids using k-means++ (seeded)
/// 2. Assign each sample to nearest centroid
/// 3. Re-seed any empty cluster at the sample farthest from its centroid
/// 4. Update centroids as mean of assigned samples
/// 5. Repeat until centroids move less than `tol` or `max_iter` is reached
///
/// The whole procedure runs `n_init` times with seeds
/// `random_state, random_state + 1, ...`; the run with the lowest inertia
/// wins. Equal seeds and data always give equal labels.
///
/// # Examples
///
/// ```
/// use cocinar::prelude::*;
///
/// let data = Matrix::from_vec(6, 2, vec![
///     1.0, 2.0,
///     1.5, 1.8,
///     1.0, 0.6,
///     8.0, 8.0,
///     9.0, 11.0,
///     8.5, 9.0,
/// ]).expect("Valid matrix dimensions and data length");
///
/// let mut kmeans = KMeans::new(2).with_random_state(7);
/// kmeans.fit(&data).expect("Fit succeeds with valid data");
///
/// let labels = kmeans.predict(&data).expect("fitted");
/// assert_eq!(labels.len(), 6);
/// assert_eq!(labels[0], labels[1]);
/// assert_ne!(labels[0], labels[3]);
/// ```
///
/// # Performance
///
/// - Time complexity: O(n_init · nkdi) where n=samples, k=clusters, d=features, i=iterations
/// - Space complexity: O(nk)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KMeans {
    /// Number of clusters.
    n_clusters: usize,
    /// Maximum iterations per run.
    max_iter: usize,
    /// Convergence tolerance on centroid movement.
    tol: f64,
    /// Number of seeded restarts.
    n_init: usize,
    /// Base random seed.
    random_state: u64,
    /// Cluster centroids after fitting.
    centroids: Option<Matrix<f64>>,
    /// Labels for training data.
    labels: Option<Vec<usize>>,
    /// Sum of squared distances (inertia).
    inertia: f64,
    /// Iterations run by the winning restart.
    n_iter: usize,
}

impl Default for KMeans {
    fn default() -> Self {
        Self::new(8)
    }
}

struct Run {
    centroids: Matrix<f64>,
    labels: Vec<usize>,
    inertia: f64,
    n_iter: usize,
}

impl KMeans {
    /// Creates a new K-Means with the specified number of clusters.
    #[must_use]
    pub fn new(n_clusters: usize) -> Self {
        Self {
            n_clusters,
            max_iter: 300,
            tol: 1e-4,
            n_init: 10,
            random_state: 42,
            centroids: None,
            labels: None,
            inertia: 0.0,
            n_iter: 0,
        }
    }

    /// Sets the maximum number of iterations.
    #[must_use]
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Sets the convergence tolerance.
    #[must_use]
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Sets the number of seeded restarts.
    #[must_use]
    pub fn with_n_init(mut self, n_init: usize) -> Self {
        self.n_init = n_init;
        self
    }

    /// Sets the random seed for reproducibility.
    #[must_use]
    pub fn with_random_state(mut self, seed: u64) -> Self {
        self.random_state = seed;
        self
    }

    /// Returns the cluster centroids, if fitted.
    #[must_use]
    pub fn centroids(&self) -> Option<&Matrix<f64>> {
        self.centroids.as_ref()
    }

    /// Returns the training labels, if fitted.
    #[must_use]
    pub fn labels(&self) -> Option<&[usize]> {
        self.labels.as_deref()
    }

    /// Returns the inertia (within-cluster sum of squares).
    #[must_use]
    pub fn inertia(&self) -> f64 {
        self.inertia
    }

    /// Returns the number of iterations run.
    #[must_use]
    pub fn n_iter(&self) -> usize {
        self.n_iter
    }

    /// Returns true if the model has been fitted.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.centroids.is_some()
    }

    /// Initializes centroids with k-means++: each next centroid is drawn
    /// with probability proportional to its squared distance to the
    /// nearest centroid chosen so far.
    fn kmeans_plusplus_init(&self, x: &Matrix<f64>, rng: &mut StdRng) -> Result<Matrix<f64>> {
        let (n_samples, n_features) = x.shape();
        let mut centroids_data = Vec::with_capacity(self.n_clusters * n_features);

        let first = rng.gen_range(0..n_samples);
        centroids_data.extend_from_slice(x.row_slice(first));

        let mut min_distances: Vec<f64> = (0..n_samples)
            .map(|i| squared_distance(x.row_slice(i), x.row_slice(first)))
            .collect();

        for _ in 1..self.n_clusters {
            let total: f64 = min_distances.iter().sum();
            let next = if total > 0.0 {
                let target = rng.gen::<f64>() * total;
                let mut cumulative = 0.0;
                let mut chosen = None;
                let mut last_positive = 0;
                for (i, &d) in min_distances.iter().enumerate() {
                    if d > 0.0 {
                        last_positive = i;
                    }
                    cumulative += d;
                    if cumulative > target {
                        chosen = Some(i);
                        break;
                    }
                }
                chosen.unwrap_or(last_positive)
            } else {
                // Fewer distinct points than clusters: any sample will do.
                rng.gen_range(0..n_samples)
            };

            let centroid = x.row_slice(next);
            centroids_data.extend_from_slice(centroid);
            for (i, min_dist) in min_distances.iter_mut().enumerate() {
                let d = squared_distance(x.row_slice(i), centroid);
                if d < *min_dist {
                    *min_dist = d;
                }
            }
        }

        Matrix::from_vec(self.n_clusters, n_features, centroids_data)
    }

    /// Assigns each sample to the nearest centroid (lowest index on ties).
    fn assign_labels(&self, x: &Matrix<f64>, centroids: &Matrix<f64>) -> Vec<usize> {
        (0..x.n_rows())
            .map(|i| nearest_centroid(x.row_slice(i), centroids).0)
            .collect()
    }

    /// Moves the farthest sample of a multi-member cluster into each empty
    /// cluster, placing that cluster's centroid on the sample.
    fn repair_empty_clusters(
        &self,
        x: &Matrix<f64>,
        centroids: &mut Matrix<f64>,
        labels: &mut [usize],
    ) {
        let mut counts = vec![0usize; self.n_clusters];
        for &label in labels.iter() {
            counts[label] += 1;
        }

        for empty in 0..self.n_clusters {
            if counts[empty] > 0 {
                continue;
            }

            let mut farthest: Option<(usize, f64)> = None;
            for (i, &label) in labels.iter().enumerate() {
                if counts[label] < 2 {
                    continue;
                }
                let d = squared_distance(x.row_slice(i), centroids.row_slice(label));
                if farthest.map_or(true, |(_, best)| d > best) {
                    farthest = Some((i, d));
                }
            }

            let Some((i, _)) = farthest else {
                break;
            };
            counts[labels[i]] -= 1;
            counts[empty] += 1;
            labels[i] = empty;
            for j in 0..x.n_cols() {
                centroids.set(empty, j, x.get(i, j));
            }
        }
    }

    /// Updates centroids as the mean of assigned samples; a cluster with no
    /// samples keeps its previous centroid.
    fn update_centroids(
        &self,
        x: &Matrix<f64>,
        labels: &[usize],
        previous: &Matrix<f64>,
    ) -> Result<Matrix<f64>> {
        let n_features = x.n_cols();
        let mut sums = vec![0.0; self.n_clusters * n_features];
        let mut counts = vec![0usize; self.n_clusters];

        for (i, &label) in labels.iter().enumerate() {
            counts[label] += 1;
            for (j, &v) in x.row_slice(i).iter().enumerate() {
                sums[label * n_features + j] += v;
            }
        }

        for k in 0..self.n_clusters {
            for j in 0..n_features {
                let idx = k * n_features + j;
                sums[idx] = if counts[k] > 0 {
                    sums[idx] / counts[k] as f64
                } else {
                    previous.get(k, j)
                };
            }
        }

        Matrix::from_vec(self.n_clusters, n_features, sums)
    }

    fn run_once(&self, x: &Matrix<f64>, seed: u64) -> Result<Run> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut centroids = self.kmeans_plusplus_init(x, &mut rng)?;
        let mut n_iter = 0;

        for iter in 0..self.max_iter {
            let mut labels = self.assign_labels(x, &centroids);
            self.repair_empty_clusters(x, &mut centroids, &mut labels);
            let updated = self.update_centroids(x, &labels, &centroids)?;

            let max_shift = (0..self.n_clusters)
                .map(|k| squared_distance(centroids.row_slice(k), updated.row_slice(k)))
                .fold(0.0_f64, f64::max);

            centroids = updated;
            n_iter = iter + 1;
            if max_shift <= self.tol * self.tol {
                break;
            }
        }

        let mut labels = self.assign_labels(x, &centroids);
        self.repair_empty_clusters(x, &mut centroids, &mut labels);
        let inertia = labels
            .iter()
            .enumerate()
            .map(|(i, &label)| squared_distance(x.row_slice(i), centroids.row_slice(label)))
            .sum();

        Ok(Run {
            centroids,
            labels,
            inertia,
            n_iter,
        })
    }

    fn validate(&self, n_samples: usize) -> Result<()> {
        if n_samples == 0 {
            return Err(CocinarError::empty_input("cannot cluster zero samples"));
        }
        if self.n_clusters == 0 || self.n_clusters > n_samples {
            return Err(CocinarError::invalid_parameter(
                "n_clusters",
                self.n_clusters,
                format!("1..={n_samples}"),
            ));
        }
        if self.max_iter == 0 {
            return Err(CocinarError::invalid_parameter("max_iter", 0, ">= 1"));
        }
        if self.n_init == 0 {
            return Err(CocinarError::invalid_parameter("n_init", 0, ">= 1"));
        }
        if !(self.tol.is_finite() && self.tol >= 0.0) {
            return Err(CocinarError::invalid_parameter(
                "tol",
                self.tol,
                "finite and >= 0",
            ));
        }
        Ok(())
    }
}

impl UnsupervisedEstimator for KMeans {
    type Labels = Vec<usize>;

    /// Fits the K-Means model to data.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Data is empty
    /// - `n_clusters` is 0 or exceeds the number of samples
    /// - `max_iter` or `n_init` is 0, or `tol` is negative/non-finite
    fn fit(&mut self, x: &Matrix<f64>) -> Result<()> {
        self.validate(x.n_rows())?;

        let mut best: Option<Run> = None;
        for run in 0..self.n_init {
            let candidate = self.run_once(x, self.random_state.wrapping_add(run as u64))?;
            if best
                .as_ref()
                .map_or(true, |b| candidate.inertia < b.inertia)
            {
                best = Some(candidate);
            }
        }

        let Some(best) = best else {
            return Err(CocinarError::invalid_parameter("n_init", 0, ">= 1"));
        };

        debug!(
            n_clusters = self.n_clusters,
            n_iter = best.n_iter,
            inertia = best.inertia,
            "k-means converged"
        );

        self.inertia = best.inertia;
        self.n_iter = best.n_iter;
        self.labels = Some(best.labels);
        self.centroids = Some(best.centroids);
        Ok(())
    }

    /// Predicts cluster labels for new data.
    fn predict(&self, x: &Matrix<f64>) -> Result<Vec<usize>> {
        let centroids = self
            .centroids
            .as_ref()
            .ok_or_else(|| CocinarError::construction("model not fitted"))?;
        if x.n_cols() != centroids.n_cols() {
            return Err(CocinarError::dimension_mismatch(
                "n_features",
                centroids.n_cols(),
                x.n_cols(),
            ));
        }
        Ok(self.assign_labels(x, centroids))
    }
}

fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

fn nearest_centroid(point: &[f64], centroids: &Matrix<f64>) -> (usize, f64) {
    let mut best = (0, f64::INFINITY);
    for k in 0..centroids.n_rows() {
        let d = squared_distance(point, centroids.row_slice(k));
        if d < best.1 {
            best = (k, d);
        }
    }
    best
}

#[cfg(test)]
#[path = "tests/kmeans.rs"]
mod tests;
