//! Validation utilities for incoming requests

use thiserror::Error;

/// Rejected request field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{field} must be > 0, got {value}")]
    NotPositive { field: &'static str, value: i64 },

    #[error("{field} is too large: {value}")]
    TooLarge { field: &'static str, value: i64 },
}

/// Trim and reject empty values
pub fn require_text(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(value.to_string())
}

/// Trim an optional value; blank becomes `None`
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Accept a strictly positive capacity
pub fn require_capacity(field: &'static str, value: i64) -> Result<u32, ValidationError> {
    if value <= 0 {
        return Err(ValidationError::NotPositive { field, value });
    }
    u32::try_from(value).map_err(|_| ValidationError::TooLarge { field, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text() {
        assert_eq!(require_text("code", "  CS101 ").unwrap(), "CS101");
        assert_eq!(
            require_text("code", "   "),
            Err(ValidationError::Required("code"))
        );
        assert_eq!(
            require_text("email", "").unwrap_err().to_string(),
            "email is required"
        );
    }

    #[test]
    fn test_optional_text() {
        assert_eq!(optional_text(Some(" ins-1 ")), Some("ins-1".to_string()));
        assert_eq!(optional_text(Some("  ")), None);
        assert_eq!(optional_text(None), None);
    }

    #[test]
    fn test_require_capacity() {
        assert_eq!(require_capacity("capacity", 30), Ok(30));
        assert!(matches!(
            require_capacity("capacity", 0),
            Err(ValidationError::NotPositive { .. })
        ));
        assert!(require_capacity("capacity", -5).is_err());
        assert!(matches!(
            require_capacity("capacity", i64::MAX),
            Err(ValidationError::TooLarge { .. })
        ));
    }
}
