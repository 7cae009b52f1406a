//! Form validation shared by the request adapters.

use super::date_utils::parse_iso_date;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(String),

    #[error("{field} must be a date in YYYY-MM-DD format, got '{value}'")]
    InvalidDate { field: String, value: String },

    #[error("at least one line item is required")]
    NoItems,

    #[error("{0} must be greater than zero")]
    NonPositive(String),

    #[error("{0} must not be negative")]
    Negative(String),
}

/// Name of a field inside line `index`, e.g. `items[2].rate`
pub fn item_field(index: usize, name: &str) -> String {
    format!("items[{}].{}", index, name)
}

/// Trimmed non-blank text.
pub fn required_text(field: &str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Missing(field.to_string()));
    }
    Ok(trimmed.to_string())
}

/// Blank becomes `None`.
pub fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn required_date(field: &str, value: &str) -> Result<String, ValidationError> {
    let text = required_text(field, value)?;
    match parse_iso_date(&text) {
        Some(date) => Ok(date.format("%Y-%m-%d").to_string()),
        None => Err(ValidationError::InvalidDate {
            field: field.to_string(),
            value: text,
        }),
    }
}

pub fn positive(field: &str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::NonPositive(field.to_string()))
    }
}

pub fn non_negative(field: &str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::Negative(field.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert_eq!(required_text("dc_number", "  DC-1 ").unwrap(), "DC-1");
        assert_eq!(
            required_text("dc_number", "   "),
            Err(ValidationError::Missing("dc_number".to_string()))
        );
    }

    #[test]
    fn test_optional_text() {
        assert_eq!(optional_text(""), None);
        assert_eq!(optional_text(" KA01AB1234 "), Some("KA01AB1234".to_string()));
    }

    #[test]
    fn test_required_date() {
        assert_eq!(required_date("dc_date", "2024-03-15").unwrap(), "2024-03-15");
        assert!(matches!(
            required_date("dc_date", "15.03.2024"),
            Err(ValidationError::InvalidDate { .. })
        ));
        assert_eq!(
            required_date("dc_date", ""),
            Err(ValidationError::Missing("dc_date".to_string()))
        );
    }

    #[test]
    fn test_numbers() {
        assert!(positive("qty", 0.5).is_ok());
        assert!(positive("qty", 0.0).is_err());
        assert!(positive("qty", f64::NAN).is_err());
        assert!(non_negative("rate", 0.0).is_ok());
        assert!(non_negative("rate", -1.0).is_err());
    }

    #[test]
    fn test_error_messages_name_the_field() {
        let err = ValidationError::NonPositive(item_field(1, "dispatch_quantity"));
        assert_eq!(err.to_string(), "items[1].dispatch_quantity must be greater than zero");
    }
}
