//! Cocinar: content-based recipe recommendation and clustering in pure Rust.
//!
//! A batch of recipes is fitted once into an immutable [`FittedCorpus`]:
//! ingredient lists become TF-IDF vectors and the numeric attributes
//! (minutes, ingredient count, step count) are standardized. Queries then
//! read the corpus without changing it:
//!
//! - [`FittedCorpus::recommend`] ranks the recipes most similar to a
//!   reference recipe by cosine similarity of ingredients.
//! - [`FittedCorpus::cluster`] projects all features to 2D with PCA and
//!   groups the recipes with seeded k-means.
//!
//! # Quick Start
//!
//! ```
//! use cocinar::prelude::*;
//!
//! let recipes = vec![
//!     Recipe::new(1, "Pizza", &["cheese", "tomato", "dough"][..]).with_attributes(25.0, 3.0, 4.0),
//!     Recipe::new(2, "Pasta", &["tomato", "pasta", "cheese"][..]).with_attributes(20.0, 3.0, 5.0),
//!     Recipe::new(3, "Salad", &["lettuce", "cucumber", "tomato"][..]).with_attributes(10.0, 3.0, 2.0),
//!     Recipe::new(4, "Burger", &["beef", "bun", "lettuce"][..]).with_attributes(30.0, 3.0, 6.0),
//!     Recipe::new(5, "Soup", &["carrot", "onion", "potato"][..]).with_attributes(60.0, 3.0, 8.0),
//! ];
//! let corpus = FittedCorpus::fit(recipes, &EngineConfig::default()).expect("valid corpus");
//!
//! let similar = corpus.recommend(1, 2).expect("known id");
//! assert_eq!(similar[0].name, "Pasta");
//! assert_eq!(similar[1].name, "Salad");
//!
//! let clusters = corpus.cluster(2).expect("k within corpus size");
//! assert_eq!(clusters.len(), 5);
//! assert!(clusters.points.iter().all(|p| p.cluster < 2));
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Dense `Matrix`/`Vector` and sparse TF-IDF rows
//! - [`text`]: Ingredient normalization, tokenization, stop words, TF-IDF, cosine similarity
//! - [`preprocessing`]: Standard scaling and PCA
//! - [`cluster`]: K-Means clustering
//! - [`recommend`]: The fitted corpus and its similarity and clustering engines
//! - [`config`]: Engine configuration
//!
//! # Logging
//!
//! Events are emitted through [`tracing`]; install any subscriber to see them.

pub mod cluster;
pub mod config;
pub mod error;
pub mod prelude;
pub mod preprocessing;
pub mod primitives;
pub mod recommend;
pub mod text;
pub mod traits;

pub use config::EngineConfig;
pub use error::{CocinarError, Result};
pub use primitives::{Matrix, Vector};
pub use recommend::{FittedCorpus, Recipe};
pub use traits::{Transformer, UnsupervisedEstimator};
