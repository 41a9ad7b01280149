// 🧾 Shared field validation
// Stateless checks reused by every entity constructor.

use crate::error::{BankError, Result};

/// Rejects empty and whitespace-only strings
pub fn validate_string(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BankError::invalid(format!("{} cannot be null or blank", field)));
    }
    Ok(())
}

/// Identifier rule shared by client IDs and account numbers:
/// non-blank and between `min` and `max` characters long.
pub fn validate_identifier(value: &str, field: &str, min: usize, max: usize) -> Result<()> {
    validate_string(value, field)?;

    let length = value.chars().count();
    if length < min || length > max {
        return Err(BankError::invalid(format!(
            "{} must be {} or {} characters",
            field, min, max
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_string_rejects_blank() {
        assert!(validate_string("", "Name").is_err());
        assert!(validate_string("   \t", "Name").is_err());
        assert!(validate_string("x", "Name").is_ok());

        let err = validate_string(" ", "Client ID").unwrap_err();
        assert_eq!(err.message(), "Client ID cannot be null or blank");
    }

    #[test]
    fn test_validate_identifier_bounds() {
        assert!(validate_identifier("abc12", "Account number", 6, 7).is_err());
        assert!(validate_identifier("abc123", "Account number", 6, 7).is_ok());
        assert!(validate_identifier("abc1234", "Account number", 6, 7).is_ok());
        assert!(validate_identifier("abc12345", "Account number", 6, 7).is_err());

        let err = validate_identifier("abc", "Account number", 6, 7).unwrap_err();
        assert_eq!(err.message(), "Account number must be 6 or 7 characters");
    }

    #[test]
    fn test_validate_identifier_blank_checked_first() {
        let err = validate_identifier("      ", "Client ID", 6, 7).unwrap_err();
        assert_eq!(err.message(), "Client ID cannot be null or blank");
    }

    #[test]
    fn test_validate_identifier_counts_characters() {
        // 6 characters, 7 bytes
        assert!(validate_identifier("clié12", "Client ID", 6, 7).is_ok());
    }
}
