//! Ingredient normalization.
//!
//! Upstream data sources deliver the ingredient field either as a native
//! list of strings or as a string holding an encoded list: JSON
//! (`["salt", "pepper"]`) or the single-quoted list literal common in
//! CSV exports (`['salt', 'pepper']`). Both decode to the same tokens.
//!
//! Decoding is strict: the text is parsed against the list-of-strings
//! grammar and never evaluated. Anything else is a [`CocinarError::Parse`].
//!
//! # Examples
//!
//! ```
//! use cocinar::text::normalize::{normalize_ingredients, RawIngredients};
//!
//! let raw = RawIngredients::Encoded("['Sea Salt', 'Black Pepper']".to_string());
//! let doc = normalize_ingredients(&raw).expect("well-formed list");
//! assert_eq!(doc, "sea salt black pepper");
//! ```

use crate::error::{CocinarError, Result};
use serde::{Deserialize, Serialize};

/// Raw ingredient field as it arrives from the data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawIngredients {
    /// Already a sequence of tokens.
    Tokens(Vec<String>),
    /// A string encoding a list of tokens.
    Encoded(String),
}

impl RawIngredients {
    /// Decode into tokens, preserving order.
    ///
    /// # Errors
    ///
    /// Returns [`CocinarError::Parse`] if an encoded list is malformed.
    pub fn tokens(&self) -> Result<Vec<String>> {
        match self {
            Self::Tokens(tokens) => Ok(tokens.clone()),
            Self::Encoded(encoded) => parse_encoded(encoded),
        }
    }
}

impl From<Vec<String>> for RawIngredients {
    fn from(tokens: Vec<String>) -> Self {
        Self::Tokens(tokens)
    }
}

impl From<&[&str]> for RawIngredients {
    fn from(tokens: &[&str]) -> Self {
        Self::Tokens(tokens.iter().map(|t| (*t).to_string()).collect())
    }
}

impl From<&str> for RawIngredients {
    fn from(encoded: &str) -> Self {
        Self::Encoded(encoded.to_string())
    }
}

/// Normalize a raw ingredient field into one lower-cased, space-joined
/// document. Blank tokens are skipped; token order is preserved.
///
/// # Errors
///
/// Returns [`CocinarError::Parse`] if an encoded list is malformed.
pub fn normalize_ingredients(raw: &RawIngredients) -> Result<String> {
    let tokens = raw.tokens()?;
    Ok(join_tokens(&tokens))
}

/// Documents for a whole corpus, one per input, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedCorpus {
    /// Normalized documents; a field that failed to parse is `""`.
    pub documents: Vec<String>,
    /// Position of each field that failed to parse, with the reason.
    pub failures: Vec<(usize, CocinarError)>,
}

/// Normalize every ingredient field of a corpus.
///
/// A malformed field does not abort the corpus: it becomes an empty
/// document and its position is reported in [`NormalizedCorpus::failures`].
///
/// # Examples
///
/// ```
/// use cocinar::text::normalize::{normalize_corpus, RawIngredients};
///
/// let raws = vec![
///     RawIngredients::from("['egg', 'flour']"),
///     RawIngredients::from("['unterminated"),
/// ];
/// let corpus = normalize_corpus(&raws);
/// assert_eq!(corpus.documents, vec!["egg flour", ""]);
/// assert_eq!(corpus.failures[0].0, 1);
/// ```
pub fn normalize_corpus<'a, I>(raws: I) -> NormalizedCorpus
where
    I: IntoIterator<Item = &'a RawIngredients>,
{
    let mut corpus = NormalizedCorpus::default();
    for (position, raw) in raws.into_iter().enumerate() {
        match normalize_ingredients(raw) {
            Ok(document) => corpus.documents.push(document),
            Err(err) => {
                corpus.documents.push(String::new());
                corpus.failures.push((position, err));
            }
        }
    }
    corpus
}

fn join_tokens(tokens: &[String]) -> String {
    tokens
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decode a string-encoded list of strings.
///
/// Accepts a JSON array of strings, or a bracketed list of single- or
/// double-quoted strings with `\\`, `\'`, `\"`, `\n`, `\t`, `\r` escapes
/// and an optional trailing comma.
///
/// # Errors
///
/// Returns [`CocinarError::Parse`] describing the first offending position.
///
/// # Examples
///
/// ```
/// use cocinar::text::normalize::parse_encoded;
///
/// assert_eq!(
///     parse_encoded("['baker\\'s chocolate', \"milk\"]").expect("valid"),
///     vec!["baker's chocolate", "milk"],
/// );
/// assert!(parse_encoded("__import__('os')").is_err());
/// ```
pub fn parse_encoded(encoded: &str) -> Result<Vec<String>> {
    let trimmed = encoded.trim();
    if let Ok(tokens) = serde_json::from_str::<Vec<String>>(trimmed) {
        return Ok(tokens);
    }
    ListLiteralParser::new(trimmed).parse()
}

struct ListLiteralParser {
    chars: Vec<char>,
    pos: usize,
}

impl ListLiteralParser {
    fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
        }
    }

    fn parse(mut self) -> Result<Vec<String>> {
        self.skip_whitespace();
        self.expect('[')?;

        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(']') => {
                    self.pos += 1;
                    break;
                }
                Some('\'' | '"') => items.push(self.parse_string()?),
                Some(c) => return Err(self.error(&format!("unexpected character {c:?}"))),
                None => return Err(self.error("missing closing ']'")),
            }

            self.skip_whitespace();
            match self.peek() {
                Some(',') => self.pos += 1,
                Some(']') => {
                    self.pos += 1;
                    break;
                }
                Some(c) => return Err(self.error(&format!("expected ',' or ']', found {c:?}"))),
                None => return Err(self.error("missing closing ']'")),
            }
        }

        self.skip_whitespace();
        if self.pos != self.chars.len() {
            return Err(self.error("trailing characters after list"));
        }
        Ok(items)
    }

    fn parse_string(&mut self) -> Result<String> {
        let quote = self.chars[self.pos];
        self.pos += 1;

        let mut out = String::new();
        while let Some(c) = self.peek() {
            self.pos += 1;
            match c {
                '\\' => {
                    let escaped = match self.peek() {
                        Some('\\') => '\\',
                        Some('\'') => '\'',
                        Some('"') => '"',
                        Some('n') => '\n',
                        Some('t') => '\t',
                        Some('r') => '\r',
                        Some(other) => {
                            return Err(self.error(&format!("unsupported escape \\{other}")))
                        }
                        None => return Err(self.error("dangling escape")),
                    };
                    self.pos += 1;
                    out.push(escaped);
                }
                c if c == quote => return Ok(out),
                c => out.push(c),
            }
        }
        Err(self.error("unterminated string"))
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        if self.peek() == Some(expected) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.error(&format!("expected {expected:?}")))
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn error(&self, what: &str) -> CocinarError {
        CocinarError::parse(format!("{what} at position {}", self.pos))
    }
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
