//! Text processing for ingredient lists.
//!
//! The pipeline runs once per corpus at construction time:
//!
//! 1. [`normalize`]: raw ingredient field (encoded list or native tokens)
//!    to one lower-cased, space-joined document.
//! 2. [`tokenize`]: document to word tokens.
//! 3. [`stopwords`]: drop common English words.
//! 4. [`vectorize`]: fit TF-IDF weights over the whole corpus.
//!
//! [`similarity`] provides the cosine measure used to rank recipes.
//!
//! # Quick Start
//!
//! ```
//! use cocinar::text::vectorize::TfidfVectorizer;
//!
//! let docs = vec!["cheese tomato dough", "tomato pasta cheese"];
//! let mut vectorizer = TfidfVectorizer::new();
//! let matrix = vectorizer.fit_transform(&docs).expect("non-empty vocabulary");
//! assert_eq!(matrix.n_rows(), 2);
//! assert_eq!(vectorizer.vocabulary_size(), 4);
//! ```

pub mod normalize;
pub mod similarity;
pub mod stopwords;
pub mod tokenize;
pub mod vectorize;
