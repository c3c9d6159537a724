//! Recipe recommendation and clustering.
//!
//! A [`FittedCorpus`] is built once from a batch of [`Recipe`]s and then
//! only read. Two query engines run against it:
//!
//! - **Content-based**: [`SimilarityEngine`] ranks recipes by TF-IDF cosine
//!   similarity of their ingredient lists.
//! - **Clustering**: [`ClusterEngine`] projects TF-IDF plus scaled numeric
//!   attributes to 2D with PCA and groups them with k-means.
//!
//! # Quick Start
//!
//! ```
//! use cocinar::config::EngineConfig;
//! use cocinar::recommend::{FittedCorpus, Recipe};
//!
//! let recipes = vec![
//!     Recipe::new(1, "Pizza", "['cheese', 'tomato', 'dough']").with_attributes(25.0, 3.0, 4.0),
//!     Recipe::new(2, "Pasta", "['tomato', 'pasta', 'cheese']").with_attributes(20.0, 3.0, 5.0),
//!     Recipe::new(3, "Soup", "['carrot', 'onion', 'potato']").with_attributes(45.0, 3.0, 6.0),
//! ];
//! let corpus = FittedCorpus::fit(recipes, &EngineConfig::default()).expect("valid corpus");
//!
//! let similar = corpus.recommend(1, 2).expect("known id");
//! assert_eq!(similar[0].name, "Pasta");
//!
//! let clusters = corpus.cluster(2).expect("k within corpus size");
//! assert_eq!(clusters.len(), 3);
//! ```

pub mod clustering;
pub mod content_based;
pub mod corpus;
pub mod recipe;

pub use clustering::{ClusterEngine, ClusterPoint, ClusterResult};
pub use content_based::{Recommendation, SimilarityEngine};
pub use corpus::{FittedCorpus, ParseFailure, NUMERIC_COLUMNS};
pub use recipe::Recipe;
