// ⚠️ Error model - one kind, one message
//
// Every rule violation in the domain surfaces as InvalidArgument carrying the
// message of the rule that failed.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    /// A constructor argument or operation input broke a validation rule
    #[error("{0}")]
    InvalidArgument(String),
}

impl BankError {
    pub fn invalid(message: impl Into<String>) -> Self {
        BankError::InvalidArgument(message.into())
    }

    /// The human-readable rule message
    pub fn message(&self) -> &str {
        match self {
            BankError::InvalidArgument(message) => message,
        }
    }
}

pub type Result<T> = std::result::Result<T, BankError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_rule_message() {
        let err = BankError::invalid("Insufficient funds");
        assert_eq!(err.to_string(), "Insufficient funds");
        assert_eq!(err.message(), "Insufficient funds");
    }

    #[test]
    fn test_errors_compare_by_message() {
        assert_eq!(BankError::invalid("Invalid PIN"), BankError::InvalidArgument("Invalid PIN".to_string()));
        assert_ne!(BankError::invalid("Invalid PIN"), BankError::invalid("Insufficient funds"));
    }
}
