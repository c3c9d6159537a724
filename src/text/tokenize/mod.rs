//! Word tokenization for TF-IDF.
//!
//! Tokens are maximal runs of word characters (alphanumerics and `_`),
//! lower-cased, with single-character runs dropped. This matches the
//! default token pattern of common TF-IDF vectorizers (`\b\w\w+\b`), so
//! `"1/2 cup all-purpose flour"` yields `["cup", "all", "purpose", "flour"]`.

/// Splits text into lower-cased word tokens of at least two characters.
///
/// # Examples
///
/// ```
/// use cocinar::text::tokenize::WordTokenizer;
///
/// let tokenizer = WordTokenizer::new();
/// let tokens = tokenizer.tokenize("Extra-Virgin Olive Oil, 2 tbsp");
/// assert_eq!(tokens, vec!["extra", "virgin", "olive", "oil", "tbsp"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordTokenizer {
    min_token_len: usize,
}

impl WordTokenizer {
    /// Create a tokenizer that keeps tokens of 2+ characters.
    #[must_use]
    pub fn new() -> Self {
        Self { min_token_len: 2 }
    }

    /// Tokenize `text`.
    #[must_use]
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split(|c: char| !is_word_char(c))
            .filter(|t| t.chars().count() >= self.min_token_len)
            .map(str::to_lowercase)
            .collect()
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
