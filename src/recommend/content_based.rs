//! Content-based recommendation by ingredient similarity.

use super::corpus::FittedCorpus;
use super::recipe::Recipe;
use crate::error::{CocinarError, Result};
use crate::text::similarity::cosine_similarity_to_rows;
use serde::Serialize;
use tracing::debug;

/// A recommended recipe with its cosine similarity to the reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// The recommended recipe.
    pub recipe: Recipe,
    /// Cosine similarity of TF-IDF rows, in `[0, 1]`.
    pub score: f64,
}

/// Ranks recipes by TF-IDF cosine similarity to a reference recipe.
///
/// # Algorithm
///
/// 1. Look up the reference row by id
/// 2. Score every row against it (rows are unit length, so cosine is a dot product)
/// 3. Drop the reference row, stable-sort the rest by descending score
/// 4. Take the first `top_n`
///
/// Equal scores keep corpus order, so repeated calls return the same list.
#[derive(Debug, Clone, Copy)]
pub struct SimilarityEngine<'a> {
    corpus: &'a FittedCorpus,
}

impl<'a> SimilarityEngine<'a> {
    /// Query engine over a fitted corpus.
    #[must_use]
    pub fn new(corpus: &'a FittedCorpus) -> Self {
        Self { corpus }
    }

    /// The `top_n` recipes most similar to `recipe_id`, most similar first.
    /// The reference recipe is never part of the result.
    ///
    /// # Errors
    ///
    /// Returns [`CocinarError::NotFound`] if `recipe_id` is not in the corpus
    /// and [`CocinarError::InvalidParameter`] unless `1 <= top_n <= len - 1`.
    pub fn recommend(&self, recipe_id: i64, top_n: usize) -> Result<Vec<Recipe>> {
        Ok(self
            .recommend_scored(recipe_id, top_n)?
            .into_iter()
            .map(|r| r.recipe)
            .collect())
    }

    /// Like [`recommend`](Self::recommend), keeping each similarity score.
    ///
    /// # Errors
    ///
    /// Same as [`recommend`](Self::recommend).
    pub fn recommend_scored(&self, recipe_id: i64, top_n: usize) -> Result<Vec<Recommendation>> {
        let corpus = self.corpus;
        let reference = corpus
            .row_of(recipe_id)
            .ok_or(CocinarError::NotFound { id: recipe_id })?;

        let max_n = corpus.len() - 1;
        if top_n == 0 || top_n > max_n {
            return Err(CocinarError::invalid_parameter(
                "top_n",
                top_n,
                format!("1..={max_n}"),
            ));
        }

        let tfidf = corpus.tfidf_matrix();
        let scores = cosine_similarity_to_rows(tfidf.row(reference), tfidf);

        let mut ranked: Vec<usize> = (0..corpus.len()).filter(|&i| i != reference).collect();
        ranked.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
        ranked.truncate(top_n);

        debug!(recipe_id, top_n, "ranked similar recipes");

        Ok(ranked
            .into_iter()
            .map(|row| Recommendation {
                recipe: corpus.recipes()[row].clone(),
                score: scores[row],
            })
            .collect())
    }
}

#[cfg(test)]
#[path = "content_based_tests.rs"]
mod tests;
