//! Error types for Cocinar operations.
//!
//! Every fallible operation in the crate returns [`Result`], whose error side
//! is the single [`CocinarError`] enum. Callers can branch on the variant to
//! tell a broken corpus (`Construction`) from a bad request (`NotFound`,
//! `InvalidParameter`).

use thiserror::Error;

/// Main error type for Cocinar operations.
///
/// # Examples
///
/// ```
/// use cocinar::error::CocinarError;
///
/// let err = CocinarError::NotFound { id: 42 };
/// assert!(err.to_string().contains("42"));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CocinarError {
    /// A single recipe's ingredient field could not be parsed.
    #[error("Parse error: {message}")]
    Parse {
        /// What was wrong with the encoded list
        message: String,
    },

    /// The corpus cannot be fitted (empty corpus, empty vocabulary,
    /// missing column, duplicate id, invalid attribute).
    #[error("Construction error: {message}")]
    Construction {
        /// Why construction failed
        message: String,
    },

    /// A query referenced a recipe id absent from the corpus.
    #[error("Recipe not found: id {id}")]
    NotFound {
        /// The id that was looked up
        id: i64,
    },

    /// A query or configuration parameter is outside its valid range.
    #[error("Invalid parameter: {param} = {value}, expected {constraint}")]
    InvalidParameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Matrix/vector dimensions don't match for the operation.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// JSON (de)serialization failed at the input boundary.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CocinarError {
    /// Create a parse error.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a construction error.
    #[must_use]
    pub fn construction(message: impl Into<String>) -> Self {
        Self::Construction {
            message: message.into(),
        }
    }

    /// Create an invalid parameter error.
    #[must_use]
    pub fn invalid_parameter(
        param: &str,
        value: impl ToString,
        constraint: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            param: param.to_string(),
            value: value.to_string(),
            constraint: constraint.into(),
        }
    }

    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create an empty input error
    #[must_use]
    pub fn empty_input(context: &str) -> Self {
        Self::construction(format!("empty input: {context}"))
    }

    /// Returns true for errors the caller can recover from by changing the
    /// request (unknown id, out-of-range parameter).
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::InvalidParameter { .. })
    }
}

impl From<serde_json::Error> for CocinarError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, CocinarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = CocinarError::NotFound { id: 7 };
        assert_eq!(err.to_string(), "Recipe not found: id 7");
    }

    #[test]
    fn test_invalid_parameter_display() {
        let err = CocinarError::invalid_parameter("top_n", 0, "1..=4");
        let msg = err.to_string();
        assert!(msg.contains("Invalid parameter"));
        assert!(msg.contains("top_n"));
        assert!(msg.contains("1..=4"));
    }

    #[test]
    fn test_construction_display() {
        let err = CocinarError::construction("corpus is empty");
        assert!(err.to_string().contains("corpus is empty"));
    }

    #[test]
    fn test_parse_display() {
        let err = CocinarError::parse("unterminated string");
        assert!(err.to_string().starts_with("Parse error"));
    }

    #[test]
    fn test_dimension_mismatch_helper() {
        let err = CocinarError::dimension_mismatch("rows", 100, 50);
        let msg = err.to_string();
        assert!(msg.contains("rows=100"));
        assert!(msg.contains("50"));
    }

    #[test]
    fn test_empty_input_helper() {
        let err = CocinarError::empty_input("recipes");
        assert!(matches!(err, CocinarError::Construction { .. }));
        assert!(err.to_string().contains("empty input: recipes"));
    }

    #[test]
    fn test_recoverable_classification() {
        assert!(CocinarError::NotFound { id: 1 }.is_recoverable());
        assert!(CocinarError::invalid_parameter("k", 9, "<= 5").is_recoverable());
        assert!(!CocinarError::construction("x").is_recoverable());
        assert!(!CocinarError::parse("x").is_recoverable());
    }

    #[test]
    fn test_from_serde_json() {
        let json_err = serde_json::from_str::<Vec<String>>("[1,").unwrap_err();
        let err: CocinarError = json_err.into();
        assert!(matches!(err, CocinarError::Serialization(_)));
    }

    #[test]
    fn test_error_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CocinarError>();
    }
}
