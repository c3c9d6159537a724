//! TF-IDF vectorization of ingredient documents.
//!
//! **Weighting:**
//! ```text
//! tf(t, d)    = count of t in d            (or 1 + ln(count) when sublinear)
//! idf(t)      = ln((1 + n) / (1 + df(t))) + 1
//! tfidf(t, d) = tf(t, d) × idf(t), each row scaled to unit L2 norm
//! ```
//!
//! Rows are unit length, so the cosine similarity of two rows is their dot
//! product. A document with no surviving terms becomes an all-zero row.

use crate::error::{CocinarError, Result};
use crate::primitives::{SparseMatrix, SparseVector};
use crate::text::stopwords::StopWordsFilter;
use crate::text::tokenize::WordTokenizer;
use std::collections::{BTreeMap, HashMap};

/// TF-IDF vectorizer fitted once over a whole corpus.
///
/// Vocabulary columns are assigned in lexicographic term order, so the
/// same corpus always produces the same matrix.
///
/// # Examples
///
/// ```
/// use cocinar::text::vectorize::TfidfVectorizer;
///
/// let docs = vec!["salt and pepper", "salt and sugar"];
/// let mut vectorizer = TfidfVectorizer::new().with_stop_words_english();
/// let matrix = vectorizer.fit_transform(&docs).expect("fit_transform should succeed");
///
/// assert_eq!(matrix.shape(), (2, 3));
/// assert_eq!(vectorizer.feature_names(), &["pepper", "salt", "sugar"]);
/// ```
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    tokenizer: WordTokenizer,
    stop_words: StopWordsFilter,
    sublinear_tf: bool,
    min_df: usize,
    max_df: f64,
    max_features: Option<usize>,
    vocabulary: HashMap<String, usize>,
    feature_names: Vec<String>,
    idf_values: Vec<f64>,
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TfidfVectorizer {
    /// Create an unfitted vectorizer with no stop words.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokenizer: WordTokenizer::new(),
            stop_words: StopWordsFilter::disabled(),
            sublinear_tf: false,
            min_df: 1,
            max_df: 1.0,
            max_features: None,
            vocabulary: HashMap::new(),
            feature_names: Vec::new(),
            idf_values: Vec::new(),
        }
    }

    /// Use English stop words.
    #[must_use]
    pub fn with_stop_words_english(mut self) -> Self {
        self.stop_words = StopWordsFilter::english();
        self
    }

    /// Use a prepared stop words filter.
    #[must_use]
    pub fn with_stop_words(mut self, filter: StopWordsFilter) -> Self {
        self.stop_words = filter;
        self
    }

    /// Use sublinear TF scaling: `tf = 1 + ln(count)`.
    #[must_use]
    pub fn with_sublinear_tf(mut self, sublinear: bool) -> Self {
        self.sublinear_tf = sublinear;
        self
    }

    /// Ignore terms appearing in fewer than `min_df` documents.
    #[must_use]
    pub fn with_min_df(mut self, min_df: usize) -> Self {
        self.min_df = min_df.max(1);
        self
    }

    /// Ignore terms appearing in more than this fraction of documents.
    #[must_use]
    pub fn with_max_df(mut self, max_df: f64) -> Self {
        self.max_df = max_df.clamp(0.0, 1.0);
        self
    }

    /// Keep only the `max_features` most frequent terms.
    #[must_use]
    pub fn with_max_features(mut self, max_features: Option<usize>) -> Self {
        self.max_features = max_features;
        self
    }

    /// Learn vocabulary and idf from `documents` and return their TF-IDF rows.
    ///
    /// # Errors
    ///
    /// Returns [`CocinarError::Construction`] if `documents` is empty or no
    /// term survives tokenization, stop-word removal and df filtering.
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<SparseMatrix> {
        if documents.is_empty() {
            return Err(CocinarError::empty_input("documents"));
        }

        let n_docs = documents.len();
        let term_counts: Vec<BTreeMap<String, usize>> = documents
            .iter()
            .map(|doc| self.count_terms(doc.as_ref()))
            .collect();

        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        let mut total_freq: HashMap<&str, usize> = HashMap::new();
        for counts in &term_counts {
            for (term, &count) in counts {
                *doc_freq.entry(term.as_str()).or_insert(0) += 1;
                *total_freq.entry(term.as_str()).or_insert(0) += count;
            }
        }

        let max_df_count = self.max_df * n_docs as f64;
        let mut kept: Vec<&str> = doc_freq
            .iter()
            .filter(|&(_, &df)| df >= self.min_df && df as f64 <= max_df_count)
            .map(|(&term, _)| term)
            .collect();

        if let Some(max_features) = self.max_features {
            kept.sort_by(|a, b| total_freq[b].cmp(&total_freq[a]).then_with(|| a.cmp(b)));
            kept.truncate(max_features);
        }
        kept.sort_unstable();

        if kept.is_empty() {
            return Err(CocinarError::construction(
                "empty vocabulary: every document normalizes to empty text \
                 after tokenization and stop-word removal",
            ));
        }

        let n = n_docs as f64;
        self.idf_values = kept
            .iter()
            .map(|term| ((1.0 + n) / (1.0 + doc_freq[term] as f64)).ln() + 1.0)
            .collect();
        self.feature_names = kept.iter().map(|t| (*t).to_string()).collect();
        self.vocabulary = self
            .feature_names
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.clone(), idx))
            .collect();

        let rows = term_counts
            .iter()
            .map(|counts| self.weigh(counts))
            .collect::<Result<Vec<_>>>()?;

        SparseMatrix::from_rows(rows, self.feature_names.len())
    }

    fn count_terms(&self, text: &str) -> BTreeMap<String, usize> {
        let tokens = self.stop_words.filter_owned(self.tokenizer.tokenize(text));
        let mut counts = BTreeMap::new();
        for token in tokens {
            *counts.entry(token).or_insert(0) += 1;
        }
        counts
    }

    fn weigh(&self, counts: &BTreeMap<String, usize>) -> Result<SparseVector> {
        let mut pairs: Vec<(usize, f64)> = counts
            .iter()
            .filter_map(|(term, &count)| {
                let idx = *self.vocabulary.get(term)?;
                let tf = if self.sublinear_tf {
                    1.0 + (count as f64).ln()
                } else {
                    count as f64
                };
                Some((idx, tf * self.idf_values[idx]))
            })
            .collect();
        pairs.sort_by_key(|&(idx, _)| idx);

        let mut row = SparseVector::from_pairs(pairs)?;
        row.l2_normalize();
        Ok(row)
    }

    /// Term to column mapping.
    #[must_use]
    pub fn vocabulary(&self) -> &HashMap<String, usize> {
        &self.vocabulary
    }

    /// Number of learned terms.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.feature_names.len()
    }

    /// Learned terms in column order.
    #[must_use]
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Inverse document frequency per column.
    #[must_use]
    pub fn idf_values(&self) -> &[f64] {
        &self.idf_values
    }

    /// Whether [`fit_transform`](Self::fit_transform) has succeeded.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        !self.feature_names.is_empty()
    }
}
