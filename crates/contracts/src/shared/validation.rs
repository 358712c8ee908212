//! Client-side form validation. Errors are keyed by field so that forms can
//! render them inline and block submission.

use crate::shared::i18n::{localize, Lang};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },

    #[error("{field} must not be less than {other}")]
    LessThan {
        field: &'static str,
        other: &'static str,
    },

    #[error("{field} must not be before {other}")]
    DateBefore {
        field: &'static str,
        other: &'static str,
    },
}

impl ValidationError {
    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooShort { field, .. }
            | ValidationError::TooLong { field, .. }
            | ValidationError::NotPositive { field }
            | ValidationError::LessThan { field, .. }
            | ValidationError::DateBefore { field, .. } => *field,
        }
    }

    pub fn message_key(&self) -> &'static str {
        match self {
            ValidationError::Required { .. } => "validation.required",
            ValidationError::TooShort { .. } => "validation.too_short",
            ValidationError::TooLong { .. } => "validation.too_long",
            ValidationError::NotPositive { .. } => "validation.not_positive",
            ValidationError::LessThan { .. } => "validation.less_than",
            ValidationError::DateBefore { .. } => "validation.date_before",
        }
    }

    pub fn message(&self, lang: Lang) -> String {
        localize(self.message_key(), lang)
    }
}

/// Errors collected over a whole form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<ValidationError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    /// Records the error of a single check, if any
    pub fn check(&mut self, result: Result<(), ValidationError>) {
        if let Err(e) = result {
            self.push(e);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// First error for `field`
    pub fn for_field(&self, field: &str) -> Option<&ValidationError> {
        self.0.iter().find(|e| e.field() == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Trimmed text must be present and between `min` and `max` characters
pub fn check_text(
    field: &'static str,
    value: &str,
    min: usize,
    max: Option<usize>,
) -> Result<(), ValidationError> {
    let len = value.trim().chars().count();
    if len == 0 {
        return Err(ValidationError::Required { field });
    }
    if len < min {
        return Err(ValidationError::TooShort { field, min });
    }
    if let Some(max) = max {
        if len > max {
            return Err(ValidationError::TooLong { field, max });
        }
    }
    Ok(())
}

/// Optional text only has an upper bound
pub fn check_optional_text(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<(), ValidationError> {
    match value {
        Some(v) if v.trim().chars().count() > max => Err(ValidationError::TooLong { field, max }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_text() {
        assert_eq!(
            check_text("reason", "   ", 10, None),
            Err(ValidationError::Required { field: "reason" })
        );
        assert_eq!(
            check_text("reason", "short", 10, None),
            Err(ValidationError::TooShort { field: "reason", min: 10 })
        );
        assert!(check_text("reason", "long enough reason", 10, Some(100)).is_ok());
        assert_eq!(
            check_text("name", "abcdef", 1, Some(3)),
            Err(ValidationError::TooLong { field: "name", max: 3 })
        );
    }

    #[test]
    fn test_field_errors_lookup() {
        let mut errors = FieldErrors::new();
        errors.check(Ok(()));
        errors.check(check_text("reason", "", 10, None));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.for_field("reason").unwrap().message_key(), "validation.required");
        assert!(errors.for_field("notes").is_none());
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn test_error_display() {
        let e = ValidationError::LessThan {
            field: "max_hours_per_week",
            other: "hours_per_week",
        };
        assert_eq!(e.to_string(), "max_hours_per_week must not be less than hours_per_week");
        assert_eq!(e.field(), "max_hours_per_week");
    }
}
