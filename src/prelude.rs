//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use cocinar::prelude::*;
//! ```

pub use crate::cluster::KMeans;
pub use crate::config::{EngineConfig, ParseFailurePolicy, StopWords};
pub use crate::error::CocinarError;
pub use crate::preprocessing::{Pca, StandardScaler};
pub use crate::primitives::{Matrix, SparseMatrix, SparseVector, Vector};
pub use crate::recommend::{
    ClusterEngine, ClusterPoint, ClusterResult, FittedCorpus, Recipe, Recommendation,
    SimilarityEngine,
};
pub use crate::text::normalize::RawIngredients;
pub use crate::traits::{Transformer, UnsupervisedEstimator};
