//! Clustering algorithms.
//!
//! Includes K-Means clustering with seeded k-means++ initialization.

mod kmeans;

pub use kmeans::KMeans;
