// Bank Ledger Model - Core Library
// Clients, accounts, names and dates with construction-time validation
// and fixed-format detail lines.

pub mod error;
pub mod validation;
pub mod entities;

// Re-export commonly used types
pub use error::{BankError, Result};
pub use validation::{validate_identifier, validate_string};
pub use entities::{
    Date, Name, BankClient, BankAccount,
    AccountRegistry, SharedAccount,
};

// Balances are rust_decimal values; re-exported so callers need no extra dependency
pub use rust_decimal::Decimal;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
