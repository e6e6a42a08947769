//! Validation errors for request parameters
//!
//! Parameters are validated together so a single response can report
//! every problem at once.

use std::fmt;

/// A single violated request parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Value is not an integer
    NotANumber { field: &'static str },

    /// Value is an integer below zero
    Negative { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber { field } => write!(f, "{} must be a number", field),
            Self::Negative { field } => write!(f, "{} must not be negative", field),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Every violation found while validating one request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Human readable messages, one per violation
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    /// Merge another set of violations into this one.
    pub fn extend(&mut self, other: ValidationErrors) {
        self.0.extend(other.0);
    }

    /// `Ok(value)` when nothing was recorded, otherwise `Err(self)`.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self(vec![error])
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Parse an integer parameter that must be zero or greater.
///
/// Returns `Ok(None)` when the parameter was not supplied.
pub fn parse_optional_id(
    field: &'static str,
    raw: Option<&str>,
) -> Result<Option<i64>, ValidationError> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotANumber { field })?;

    if value < 0 {
        return Err(ValidationError::Negative { field });
    }

    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::NotANumber { field: "offset" };
        assert_eq!(err.to_string(), "offset must be a number");

        let err = ValidationError::Negative { field: "limit" };
        assert_eq!(err.to_string(), "limit must not be negative");
    }

    #[test]
    fn collects_every_violation() {
        let mut errors = ValidationErrors::new();
        errors.push(ValidationError::NotANumber { field: "offset" });
        errors.push(ValidationError::NotANumber { field: "limit" });

        assert_eq!(
            errors.messages(),
            vec!["offset must be a number", "limit must be a number"]
        );
        assert!(errors.into_result(()).is_err());
    }

    #[test]
    fn parses_optional_ids() {
        assert_eq!(parse_optional_id("author_id", None), Ok(None));
        assert_eq!(parse_optional_id("author_id", Some("42")), Ok(Some(42)));
        assert_eq!(
            parse_optional_id("author_id", Some("abc")),
            Err(ValidationError::NotANumber { field: "author_id" })
        );
        assert_eq!(
            parse_optional_id("author_id", Some("-3")),
            Err(ValidationError::Negative { field: "author_id" })
        );
    }
}
