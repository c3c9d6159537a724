//! Stop words filtering for ingredient documents.
//!
//! Stop words are common words ("and", "of", "with") that carry no signal
//! about what a recipe contains. They are removed before TF-IDF weighting.
//!
//! # Examples
//!
//! ```
//! use cocinar::text::stopwords::StopWordsFilter;
//!
//! let filter = StopWordsFilter::english();
//! let kept = filter.filter(&["salt", "and", "pepper"]);
//! assert_eq!(kept, vec!["salt", "pepper"]);
//! ```

use std::collections::HashSet;

/// Case-insensitive stop words filter backed by a `HashSet` for O(1) lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWordsFilter {
    /// Stored lower-cased.
    stop_words: HashSet<String>,
}

impl StopWordsFilter {
    /// Create a filter from custom words (lower-cased on insert).
    ///
    /// # Examples
    ///
    /// ```
    /// use cocinar::text::stopwords::StopWordsFilter;
    ///
    /// let filter = StopWordsFilter::new(["fresh", "chopped"]);
    /// assert!(filter.is_stop_word("Fresh"));
    /// assert!(!filter.is_stop_word("basil"));
    /// ```
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stop_words = words
            .into_iter()
            .map(|s| s.as_ref().to_lowercase())
            .collect();

        Self { stop_words }
    }

    /// Create a filter with the built-in English list.
    #[must_use]
    pub fn english() -> Self {
        Self::new(ENGLISH_STOP_WORDS)
    }

    /// Create a filter that removes nothing.
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Keep the tokens that are not stop words, preserving order and case.
    pub fn filter<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        tokens
            .iter()
            .map(AsRef::as_ref)
            .filter(|t| !self.is_stop_word(t))
            .map(str::to_string)
            .collect()
    }

    /// Owned variant of [`filter`](Self::filter); avoids re-allocating kept tokens.
    #[must_use]
    pub fn filter_owned(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .filter(|t| !self.is_stop_word(t))
            .collect()
    }

    /// Check if a word is a stop word (case-insensitive).
    #[must_use]
    pub fn is_stop_word(&self, word: &str) -> bool {
        if self.stop_words.is_empty() {
            return false;
        }
        self.stop_words.contains(&word.to_lowercase())
    }

    /// Number of stop words in the filter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Returns true if the filter removes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

/// Built-in English stop words: articles, pronouns, prepositions,
/// conjunctions, auxiliary verbs and common function words.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    // articles
    "a", "an", "the",
    // pronouns
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves",
    // questions
    "what", "which", "who", "whom", "whose", "why", "when", "where", "how",
    // prepositions
    "about", "above", "across", "after", "against", "along", "among", "around", "at",
    "before", "behind", "below", "beneath", "beside", "between", "beyond", "by", "down",
    "during", "for", "from", "in", "inside", "into", "near", "of", "off", "on", "onto",
    "out", "outside", "over", "per", "through", "throughout", "to", "toward", "towards",
    "under", "underneath", "until", "up", "upon", "via", "with", "within", "without",
    // conjunctions
    "and", "as", "because", "but", "either", "if", "nor", "or", "since", "so", "than",
    "that", "though", "unless", "whether", "while",
    // auxiliary verbs
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "having", "do", "does", "did", "doing", "would", "should", "could", "can", "may",
    "might", "must", "will", "shall",
    // determiners and adverbs
    "all", "any", "both", "each", "every", "few", "more", "most", "much", "many",
    "neither", "no", "none", "not", "other", "same", "several", "some", "such", "very",
    "too", "only", "own", "then", "there", "these", "this", "those", "just", "now",
    "here", "again", "also", "else", "even", "ever", "further", "once", "otherwise",
    "rather", "thus", "yet", "etc",
];

#[cfg(test)]
#[path = "stopwords_tests.rs"]
mod tests;
