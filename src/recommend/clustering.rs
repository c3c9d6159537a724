//! Clustering of the whole corpus for 2D visualization.

use super::corpus::FittedCorpus;
use crate::cluster::KMeans;
use crate::error::{CocinarError, Result};
use crate::traits::UnsupervisedEstimator;
use serde::Serialize;
use tracing::debug;

/// One recipe placed on the 2D projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterPoint {
    /// Recipe display name.
    pub name: String,
    /// Assigned cluster label in `[0, n_clusters)`.
    pub cluster: usize,
    /// First principal component.
    pub x: f64,
    /// Second principal component.
    pub y: f64,
}

/// Result of one [`ClusterEngine::cluster`] call.
///
/// Labels are only meaningful within one result; calls with a different
/// `n_clusters` may number the same group differently.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterResult {
    /// One point per recipe, in corpus order.
    pub points: Vec<ClusterPoint>,
    /// Share of total variance captured by the x and y axes.
    pub explained_variance_ratio: [f64; 2],
    /// Within-cluster sum of squared distances on the projection.
    pub inertia: f64,
    /// Requested number of clusters.
    pub n_clusters: usize,
}

impl ClusterResult {
    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if there are no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of points per label, indexed by label. Points whose label is
    /// not below `n_clusters` are not counted.
    #[must_use]
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.n_clusters];
        for point in &self.points {
            if let Some(size) = sizes.get_mut(point.cluster) {
                *size += 1;
            }
        }
        sizes
    }
}

/// Projects the combined `[tfidf | scaled numeric]` features to two
/// dimensions with PCA and partitions them with k-means.
///
/// The projection does not depend on `n_clusters` and is computed once per
/// corpus. K-means uses the seed and stopping rules of the corpus
/// [`EngineConfig`](crate::config::EngineConfig).
#[derive(Debug, Clone, Copy)]
pub struct ClusterEngine<'a> {
    corpus: &'a FittedCorpus,
}

impl<'a> ClusterEngine<'a> {
    /// Query engine over a fitted corpus.
    #[must_use]
    pub fn new(corpus: &'a FittedCorpus) -> Self {
        Self { corpus }
    }

    /// Assign every recipe to one of `n_clusters` groups.
    ///
    /// # Errors
    ///
    /// Returns [`CocinarError::InvalidParameter`] unless
    /// `1 <= n_clusters <= len`.
    pub fn cluster(&self, n_clusters: usize) -> Result<ClusterResult> {
        let corpus = self.corpus;
        if n_clusters == 0 || n_clusters > corpus.len() {
            return Err(CocinarError::invalid_parameter(
                "n_clusters",
                n_clusters,
                format!("1..={}", corpus.len()),
            ));
        }

        let projection = corpus.projection()?;
        let config = corpus.config();
        let mut kmeans = KMeans::new(n_clusters)
            .with_max_iter(config.kmeans_max_iter)
            .with_tol(config.kmeans_tol)
            .with_n_init(config.kmeans_n_init)
            .with_random_state(config.random_state);
        kmeans.fit(&projection.points)?;

        let labels = kmeans
            .labels()
            .ok_or_else(|| CocinarError::construction("k-means produced no labels"))?;

        let points = corpus
            .recipes()
            .iter()
            .zip(labels)
            .enumerate()
            .map(|(row, (recipe, &cluster))| ClusterPoint {
                name: recipe.name.clone(),
                cluster,
                x: projection.points.get(row, 0),
                y: projection.points.get(row, 1),
            })
            .collect();

        debug!(n_clusters, inertia = kmeans.inertia(), "clustered corpus");

        Ok(ClusterResult {
            points,
            explained_variance_ratio: projection.explained_variance_ratio,
            inertia: kmeans.inertia(),
            n_clusters,
        })
    }
}

#[cfg(test)]
#[path = "clustering_tests.rs"]
mod tests;
