//! Engine configuration.
//!
//! [`EngineConfig`] gathers every knob that influences a fitted corpus:
//! TF-IDF vocabulary selection, how malformed ingredient fields are handled,
//! and the seed and stopping rules of k-means. Seeds are explicit so the
//! same corpus and configuration always cluster the same way.
//!
//! # Examples
//!
//! ```
//! use cocinar::config::{EngineConfig, StopWords};
//!
//! let config = EngineConfig::default()
//!     .with_random_state(7)
//!     .with_stop_words(StopWords::Disabled);
//! assert!(config.validate().is_ok());
//! ```

use crate::error::{CocinarError, Result};
use crate::text::stopwords::StopWordsFilter;
use crate::text::vectorize::TfidfVectorizer;
use serde::{Deserialize, Serialize};

/// Stop-word list applied before TF-IDF fitting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopWords {
    /// Built-in English list.
    #[default]
    English,
    /// Keep every token.
    Disabled,
    /// Caller-supplied list (case-insensitive).
    Custom(Vec<String>),
}

impl StopWords {
    /// Build the matching filter.
    #[must_use]
    pub fn to_filter(&self) -> StopWordsFilter {
        match self {
            Self::English => StopWordsFilter::english(),
            Self::Disabled => StopWordsFilter::disabled(),
            Self::Custom(words) => StopWordsFilter::new(words),
        }
    }
}

/// What to do with a recipe whose ingredient field cannot be parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseFailurePolicy {
    /// Use an empty document for that recipe and record the failure.
    #[default]
    TreatAsEmpty,
    /// Fail construction of the whole corpus.
    Reject,
}

/// Configuration for fitting a corpus and running queries against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seed for k-means initialization.
    pub random_state: u64,
    /// Maximum Lloyd iterations per k-means run.
    pub kmeans_max_iter: usize,
    /// Centroid movement below which k-means stops.
    pub kmeans_tol: f64,
    /// Seeded k-means restarts; the lowest-inertia run wins.
    pub kmeans_n_init: usize,
    /// Stop words removed before vectorization.
    pub stop_words: StopWords,
    /// Use `1 + ln(count)` term frequency.
    pub sublinear_tf: bool,
    /// Minimum number of documents a term must appear in.
    pub min_df: usize,
    /// Maximum fraction of documents a term may appear in.
    pub max_df: f64,
    /// Keep only the most frequent terms.
    pub max_features: Option<usize>,
    /// Handling of malformed ingredient fields.
    pub parse_failure_policy: ParseFailurePolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            random_state: 42,
            kmeans_max_iter: 300,
            kmeans_tol: 1e-4,
            kmeans_n_init: 10,
            stop_words: StopWords::English,
            sublinear_tf: false,
            min_df: 1,
            max_df: 1.0,
            max_features: None,
            parse_failure_policy: ParseFailurePolicy::TreatAsEmpty,
        }
    }
}

impl EngineConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration document. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CocinarError::Serialization`] for malformed JSON and
    /// [`CocinarError::InvalidParameter`] if a value is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use cocinar::config::EngineConfig;
    ///
    /// let config = EngineConfig::from_json(r#"{"random_state": 3, "stop_words": "disabled"}"#)
    ///     .expect("valid config");
    /// assert_eq!(config.random_state, 3);
    /// assert_eq!(config.kmeans_n_init, 10);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the k-means seed.
    #[must_use]
    pub fn with_random_state(mut self, seed: u64) -> Self {
        self.random_state = seed;
        self
    }

    /// Set the k-means iteration cap.
    #[must_use]
    pub fn with_kmeans_max_iter(mut self, max_iter: usize) -> Self {
        self.kmeans_max_iter = max_iter;
        self
    }

    /// Set the k-means convergence tolerance.
    #[must_use]
    pub fn with_kmeans_tol(mut self, tol: f64) -> Self {
        self.kmeans_tol = tol;
        self
    }

    /// Set the number of k-means restarts.
    #[must_use]
    pub fn with_kmeans_n_init(mut self, n_init: usize) -> Self {
        self.kmeans_n_init = n_init;
        self
    }

    /// Set the stop-word list.
    #[must_use]
    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = stop_words;
        self
    }

    /// Toggle sublinear term frequency.
    #[must_use]
    pub fn with_sublinear_tf(mut self, sublinear: bool) -> Self {
        self.sublinear_tf = sublinear;
        self
    }

    /// Set the minimum document frequency.
    #[must_use]
    pub fn with_min_df(mut self, min_df: usize) -> Self {
        self.min_df = min_df;
        self
    }

    /// Set the maximum document frequency fraction.
    #[must_use]
    pub fn with_max_df(mut self, max_df: f64) -> Self {
        self.max_df = max_df;
        self
    }

    /// Cap the vocabulary size.
    #[must_use]
    pub fn with_max_features(mut self, max_features: Option<usize>) -> Self {
        self.max_features = max_features;
        self
    }

    /// Set the malformed-ingredient policy.
    #[must_use]
    pub fn with_parse_failure_policy(mut self, policy: ParseFailurePolicy) -> Self {
        self.parse_failure_policy = policy;
        self
    }

    /// Check every value is in range.
    ///
    /// # Errors
    ///
    /// Returns [`CocinarError::InvalidParameter`] naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        if self.kmeans_max_iter == 0 {
            return Err(CocinarError::invalid_parameter("kmeans_max_iter", 0, ">= 1"));
        }
        if self.kmeans_n_init == 0 {
            return Err(CocinarError::invalid_parameter("kmeans_n_init", 0, ">= 1"));
        }
        if !(self.kmeans_tol.is_finite() && self.kmeans_tol > 0.0) {
            return Err(CocinarError::invalid_parameter(
                "kmeans_tol",
                self.kmeans_tol,
                "finite and > 0",
            ));
        }
        if !(self.max_df > 0.0 && self.max_df <= 1.0) {
            return Err(CocinarError::invalid_parameter(
                "max_df",
                self.max_df,
                "in (0, 1]",
            ));
        }
        if self.max_features == Some(0) {
            return Err(CocinarError::invalid_parameter("max_features", 0, ">= 1"));
        }
        Ok(())
    }

    /// Build an unfitted TF-IDF vectorizer with these settings.
    #[must_use]
    pub fn vectorizer(&self) -> TfidfVectorizer {
        TfidfVectorizer::new()
            .with_stop_words(self.stop_words.to_filter())
            .with_sublinear_tf(self.sublinear_tf)
            .with_min_df(self.min_df)
            .with_max_df(self.max_df)
            .with_max_features(self.max_features)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
