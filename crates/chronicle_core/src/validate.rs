//! Field validators for raw wizard input.
//!
//! Every validator is pure and total. Errors carry the label of the field
//! they refer to so the message reads naturally in the status bar.

/// Longest accepted calendar abbreviation, in characters.
pub const MAX_ABBREVIATION_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{field} cannot be empty")]
    EmptyInput { field: &'static str },

    #[error("{field} must be 1-{max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("{field} must be a number")]
    NotANumber { field: &'static str },
}

fn require_non_empty(s: &str, field: &'static str) -> Result<(), FieldError> {
    if s.trim().is_empty() {
        return Err(FieldError::EmptyInput { field });
    }
    Ok(())
}

pub fn validate_name(s: &str) -> Result<(), FieldError> {
    require_non_empty(s, "calendar name")
}

/// Non-empty and at most [`MAX_ABBREVIATION_LEN`] characters. Any charset.
pub fn validate_abbreviation(s: &str) -> Result<(), FieldError> {
    let field = "abbreviation";
    require_non_empty(s, field)?;
    if s.chars().count() > MAX_ABBREVIATION_LEN {
        return Err(FieldError::TooLong {
            field,
            max: MAX_ABBREVIATION_LEN,
        });
    }
    Ok(())
}

/// Parse a signed base-10 year. Zero and negative years are accepted.
pub fn validate_year(s: &str) -> Result<i64, FieldError> {
    parse_year(s, "year")
}

/// Same rules as [`validate_year`], with the error naming `field`.
pub fn parse_year(s: &str, field: &'static str) -> Result<i64, FieldError> {
    if s.is_empty() {
        return Err(FieldError::EmptyInput { field });
    }
    s.parse::<i64>()
        .map_err(|_| FieldError::NotANumber { field })
}

pub fn validate_event_name(s: &str) -> Result<(), FieldError> {
    require_non_empty(s, "event name")
}
