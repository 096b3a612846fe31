//! Validation error types

use std::fmt;

/// Validation error for bookmark input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field absent, null or blank
    MissingField { field: &'static str },

    /// Rating not an integer in 1..=5
    RatingOutOfRange,

    /// Partial update carried none of the recognized fields
    EmptyUpdate,

    /// Field present with the wrong JSON type
    InvalidField { field: &'static str },

    /// Body was not a JSON object
    MalformedBody,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "Missing '{}' in request body", field),
            Self::RatingOutOfRange => write!(f, "Rating must be an integer between 1 and 5"),
            Self::EmptyUpdate => write!(
                f,
                r#"Request body must contain either "title", "url", "rating" or "description""#
            ),
            Self::InvalidField { field } => write!(f, "'{}' must be a string", field),
            Self::MalformedBody => write!(f, "Request body must be a JSON object"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::MissingField { field: "url" };
        assert_eq!(err.to_string(), "Missing 'url' in request body");

        assert_eq!(
            ValidationError::EmptyUpdate.to_string(),
            r#"Request body must contain either "title", "url", "rating" or "description""#
        );
        assert_eq!(
            ValidationError::RatingOutOfRange.to_string(),
            "Rating must be an integer between 1 and 5"
        );
    }
}
