// Entity Models
//
// Dependency order:
// - Date, Name: standalone values
// - BankClient: Name + Dates
// - BankAccount: shared BankClient + Dates, the only mutable state (balance)

pub mod date;
pub mod name;
pub mod client;
pub mod account;

pub use date::Date;
pub use name::{Name, MAX_NAME_LENGTH, ILLEGAL_SUBSTRING};
pub use client::{BankClient, MIN_CLIENT_ID_LENGTH, MAX_CLIENT_ID_LENGTH};
pub use account::{
    BankAccount, AccountRegistry, SharedAccount,
    MIN_ACCOUNT_NUMBER_LENGTH, MAX_ACCOUNT_NUMBER_LENGTH,
};
