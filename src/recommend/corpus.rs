//! The fitted corpus: every derived feature, computed once.

use super::clustering::{ClusterEngine, ClusterResult};
use super::content_based::{Recommendation, SimilarityEngine};
use super::recipe::Recipe;
use crate::config::{EngineConfig, ParseFailurePolicy};
use crate::error::{CocinarError, Result};
use crate::preprocessing::{Pca, StandardScaler};
use crate::primitives::{Matrix, SparseMatrix};
use crate::text::normalize::normalize_corpus;
use crate::text::vectorize::TfidfVectorizer;
use crate::traits::Transformer;
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::{info, warn};

/// Names of the numeric columns, in matrix order.
pub const NUMERIC_COLUMNS: [&str; 3] = ["minutes", "n_ingredients", "n_steps"];

/// A recipe whose ingredient field could not be parsed and was fitted as
/// an empty document.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseFailure {
    /// Id of the affected recipe.
    pub id: i64,
    /// Why parsing failed.
    pub error: CocinarError,
}

/// Two-dimensional PCA projection of the combined feature matrix.
#[derive(Debug, Clone)]
pub(crate) struct Projection {
    pub(crate) points: Matrix<f64>,
    pub(crate) explained_variance_ratio: [f64; 2],
}

/// Immutable corpus with its fitted TF-IDF and numeric features.
///
/// Built only through [`FittedCorpus::fit`] or [`FittedCorpus::from_json`];
/// there is no way to add, remove or edit rows afterwards. Row `i` of
/// [`documents`](Self::documents), [`tfidf_matrix`](Self::tfidf_matrix) and
/// [`numeric_matrix`](Self::numeric_matrix) all describe `recipes()[i]`.
///
/// Queries take `&self`, so one corpus can be shared across threads.
///
/// # Examples
///
/// ```
/// use cocinar::config::EngineConfig;
/// use cocinar::recommend::{FittedCorpus, Recipe};
///
/// let recipes = vec![
///     Recipe::new(1, "Pizza", &["cheese", "tomato", "dough"][..]).with_attributes(25.0, 3.0, 4.0),
///     Recipe::new(2, "Pasta", &["tomato", "pasta", "cheese"][..]).with_attributes(20.0, 3.0, 5.0),
///     Recipe::new(3, "Salad", &["lettuce", "cucumber", "tomato"][..]).with_attributes(10.0, 3.0, 2.0),
/// ];
/// let corpus = FittedCorpus::fit(recipes, &EngineConfig::default()).expect("valid corpus");
///
/// let similar = corpus.recommend(1, 1).expect("known id");
/// assert_eq!(similar[0].name, "Pasta");
/// ```
#[derive(Debug)]
pub struct FittedCorpus {
    recipes: Vec<Recipe>,
    documents: Vec<String>,
    tfidf_matrix: SparseMatrix,
    numeric_matrix: Matrix<f64>,
    index_by_id: HashMap<i64, usize>,
    vectorizer: TfidfVectorizer,
    scaler: StandardScaler,
    parse_failures: Vec<ParseFailure>,
    config: EngineConfig,
    projection: OnceLock<Projection>,
}

impl FittedCorpus {
    /// Normalize, vectorize and scale `recipes`.
    ///
    /// # Errors
    ///
    /// Returns [`CocinarError::Construction`] if the corpus is empty, an id
    /// repeats, a numeric attribute is negative or not finite, the
    /// vocabulary comes out empty, or (under
    /// [`ParseFailurePolicy::Reject`]) any ingredient field is malformed.
    /// Returns [`CocinarError::InvalidParameter`] for an invalid `config`.
    pub fn fit(recipes: Vec<Recipe>, config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        if recipes.is_empty() {
            return Err(CocinarError::empty_input("corpus has no recipes"));
        }

        let mut index_by_id = HashMap::with_capacity(recipes.len());
        for (row, recipe) in recipes.iter().enumerate() {
            if index_by_id.insert(recipe.id, row).is_some() {
                return Err(CocinarError::construction(format!(
                    "duplicate recipe id {}",
                    recipe.id
                )));
            }
            for (column, value) in NUMERIC_COLUMNS.iter().zip(recipe.attributes()) {
                if !(value.is_finite() && value >= 0.0) {
                    return Err(CocinarError::construction(format!(
                        "recipe {}: {column} must be finite and non-negative, got {value}",
                        recipe.id
                    )));
                }
            }
        }

        let normalized = normalize_corpus(recipes.iter().map(|r| &r.ingredients));
        let mut parse_failures = Vec::with_capacity(normalized.failures.len());
        for (row, error) in normalized.failures {
            let id = recipes[row].id;
            if config.parse_failure_policy == ParseFailurePolicy::Reject {
                return Err(CocinarError::construction(format!(
                    "recipe {id}: unparsable ingredients: {error}"
                )));
            }
            warn!(recipe_id = id, %error, "ingredients unparsable, using empty document");
            parse_failures.push(ParseFailure { id, error });
        }
        let documents = normalized.documents;

        let mut vectorizer = config.vectorizer();
        let tfidf_matrix = vectorizer.fit_transform(&documents)?;

        let numeric: Vec<f64> = recipes.iter().flat_map(Recipe::attributes).collect();
        let numeric = Matrix::from_vec(recipes.len(), NUMERIC_COLUMNS.len(), numeric)?;
        let mut scaler = StandardScaler::new();
        let numeric_matrix = scaler.fit_transform(&numeric)?;

        info!(
            documents = documents.len(),
            vocabulary = vectorizer.vocabulary_size(),
            parse_failures = parse_failures.len(),
            "fitted recipe corpus"
        );

        Ok(Self {
            recipes,
            documents,
            tfidf_matrix,
            numeric_matrix,
            index_by_id,
            vectorizer,
            scaler,
            parse_failures,
            config: config.clone(),
            projection: OnceLock::new(),
        })
    }

    /// Fit a corpus from a JSON array of recipe objects.
    ///
    /// # Errors
    ///
    /// Returns [`CocinarError::Construction`] if the document is not an
    /// array of recipes (including a recipe missing a required column), plus
    /// every error of [`fit`](Self::fit).
    pub fn from_json(json: &str, config: &EngineConfig) -> Result<Self> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)
            .map_err(|e| CocinarError::construction(format!("invalid recipe table: {e}")))?;
        Self::fit(recipes, config)
    }

    /// Number of recipes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Always false for a successfully fitted corpus.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Recipes in corpus order.
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Look up a recipe by id.
    #[must_use]
    pub fn recipe(&self, id: i64) -> Option<&Recipe> {
        self.row_of(id).map(|row| &self.recipes[row])
    }

    /// Row position of a recipe id.
    #[must_use]
    pub fn row_of(&self, id: i64) -> Option<usize> {
        self.index_by_id.get(&id).copied()
    }

    /// Normalized ingredient documents.
    #[must_use]
    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    /// TF-IDF rows, unit length (or all zero for an empty document).
    #[must_use]
    pub fn tfidf_matrix(&self) -> &SparseMatrix {
        &self.tfidf_matrix
    }

    /// Standardized numeric attributes, columns as [`NUMERIC_COLUMNS`].
    #[must_use]
    pub fn numeric_matrix(&self) -> &Matrix<f64> {
        &self.numeric_matrix
    }

    /// The fitted vectorizer (vocabulary and idf weights).
    #[must_use]
    pub fn vectorizer(&self) -> &TfidfVectorizer {
        &self.vectorizer
    }

    /// The fitted numeric scaler.
    #[must_use]
    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }

    /// Recipes recovered with an empty document.
    #[must_use]
    pub fn parse_failures(&self) -> &[ParseFailure] {
        &self.parse_failures
    }

    /// Configuration used for fitting and queries.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Top `top_n` recipes most similar to `recipe_id`.
    /// See [`SimilarityEngine::recommend`].
    ///
    /// # Errors
    ///
    /// [`CocinarError::NotFound`] for an unknown id,
    /// [`CocinarError::InvalidParameter`] for `top_n` outside `1..=len-1`.
    pub fn recommend(&self, recipe_id: i64, top_n: usize) -> Result<Vec<Recipe>> {
        SimilarityEngine::new(self).recommend(recipe_id, top_n)
    }

    /// Like [`recommend`](Self::recommend), with similarity scores.
    ///
    /// # Errors
    ///
    /// Same as [`recommend`](Self::recommend).
    pub fn recommend_scored(&self, recipe_id: i64, top_n: usize) -> Result<Vec<Recommendation>> {
        SimilarityEngine::new(self).recommend_scored(recipe_id, top_n)
    }

    /// Partition the corpus into `n_clusters` groups on the 2D projection.
    /// See [`ClusterEngine::cluster`].
    ///
    /// # Errors
    ///
    /// [`CocinarError::InvalidParameter`] for `n_clusters` outside `1..=len`.
    pub fn cluster(&self, n_clusters: usize) -> Result<ClusterResult> {
        ClusterEngine::new(self).cluster(n_clusters)
    }

    /// PCA projection of `[tfidf | numeric]`, computed on first use.
    pub(crate) fn projection(&self) -> Result<&Projection> {
        if let Some(projection) = self.projection.get() {
            return Ok(projection);
        }

        let combined = self.tfidf_matrix.to_dense().hstack(&self.numeric_matrix)?;
        let mut pca = Pca::new(2);
        let points = pca.fit_transform(&combined)?;
        let ratio = pca.explained_variance_ratio().unwrap_or(&[]);
        let explained_variance_ratio = [
            ratio.first().copied().unwrap_or(0.0),
            ratio.get(1).copied().unwrap_or(0.0),
        ];

        // A racing thread may have stored an identical projection first.
        Ok(self.projection.get_or_init(|| Projection {
            points,
            explained_variance_ratio,
        }))
    }
}

#[cfg(test)]
#[path = "corpus_tests.rs"]
mod tests;
