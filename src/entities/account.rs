// 💳 BankAccount Entity - Balance-holding record owned by a BankClient
//
// Problem solved:
// - Account number and opening balance are validated once, at construction
// - Balance only moves through deposit/withdraw and never goes negative
// - Closed accounts reject every balance-changing operation
// - Registry serializes concurrent balance changes per account

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use tracing::{debug, warn};

use crate::entities::client::BankClient;
use crate::entities::date::Date;
use crate::error::{BankError, Result};
use crate::validation::validate_identifier;

pub const MIN_ACCOUNT_NUMBER_LENGTH: usize = 6;
pub const MAX_ACCOUNT_NUMBER_LENGTH: usize = 7;

// ============================================================================
// ACCOUNT ENTITY
// ============================================================================

/// Account Entity
///
/// The client is shared, not owned: one client may hold several accounts.
#[derive(Debug, Clone, Serialize)]
pub struct BankAccount {
    client: Arc<BankClient>,
    account_number: String,
    account_opened: Date,
    account_closed: Option<Date>,
    balance: Decimal,
    #[serde(skip_serializing)]
    pin: i32,
}

impl BankAccount {
    /// Open an account. The PIN is stored as given; only PIN withdrawals look at it.
    pub fn new(
        client: Arc<BankClient>,
        account_number: impl Into<String>,
        account_opened: Date,
        account_closed: Option<Date>,
        initial_balance: Decimal,
        pin: i32,
    ) -> Result<Self> {
        let account_number = account_number.into();
        validate_identifier(
            &account_number,
            "Account number",
            MIN_ACCOUNT_NUMBER_LENGTH,
            MAX_ACCOUNT_NUMBER_LENGTH,
        )?;

        if initial_balance < Decimal::ZERO {
            return Err(BankError::invalid("Initial balance cannot be negative"));
        }

        Ok(BankAccount {
            client,
            account_number,
            account_opened,
            account_closed,
            balance: initial_balance,
            pin,
        })
    }

    pub fn client(&self) -> &Arc<BankClient> {
        &self.client
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn account_opened(&self) -> Date {
        self.account_opened
    }

    pub fn account_closed(&self) -> Option<Date> {
        self.account_closed
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn is_closed(&self) -> bool {
        self.account_closed.is_some()
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(self.reject("deposit", "Deposit amount must be positive"));
        }
        if self.is_closed() {
            return Err(self.reject("deposit", "Cannot deposit to a closed account"));
        }

        let balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| self.reject("deposit", "Deposit would overflow balance"))?;
        self.balance = balance;
        debug!(account = %self.account_number, %amount, balance = %self.balance, "deposit applied");
        Ok(())
    }

    /// Checks run in order: amount, funds, closed status
    pub fn withdraw(&mut self, amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(self.reject("withdraw", "Withdrawal amount must be positive"));
        }
        if amount > self.balance {
            return Err(self.reject("withdraw", "Insufficient funds"));
        }
        if self.is_closed() {
            return Err(self.reject("withdraw", "Cannot withdraw from a closed account"));
        }

        self.balance -= amount;
        debug!(account = %self.account_number, %amount, balance = %self.balance, "withdrawal applied");
        Ok(())
    }

    /// PIN is checked before anything about the amount
    pub fn withdraw_with_pin(&mut self, amount: Decimal, pin: i32) -> Result<()> {
        if pin != self.pin {
            return Err(self.reject("withdraw", "Invalid PIN"));
        }
        self.withdraw(amount)
    }

    /// Example: "Nelson Mandela had $1800 USD in account #654321 which they opened on
    /// Tuesday May 10, 1994 and is still open."
    pub fn details(&self) -> String {
        let balance = self
            .balance
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

        let closed_clause = match self.account_closed {
            Some(closed) => format!("closed {}", closed.long_format()),
            None => "is still open".to_string(),
        };

        format!(
            "{} had ${} USD in account #{} which they opened on {} and {}.",
            self.client.name().full_name(),
            balance,
            self.account_number,
            self.account_opened.long_format(),
            closed_clause
        )
    }

    fn reject(&self, operation: &str, reason: &str) -> BankError {
        warn!(account = %self.account_number, operation, reason, "balance operation rejected");
        BankError::invalid(reason)
    }
}

// ============================================================================
// ACCOUNT REGISTRY
// ============================================================================

/// An account behind its own lock
pub type SharedAccount = Arc<Mutex<BankAccount>>;

/// Registry of open accounts, keyed by account number
///
/// Each account carries its own Mutex, so balance changes on one account
/// never wait on another.
#[derive(Clone)]
pub struct AccountRegistry {
    accounts: Arc<RwLock<BTreeMap<String, SharedAccount>>>,
}

impl AccountRegistry {
    pub fn new() -> Self {
        AccountRegistry {
            accounts: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// Register an account; account numbers are unique
    pub fn open(&self, account: BankAccount) -> Result<SharedAccount> {
        let mut accounts = self
            .accounts
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        if accounts.contains_key(account.account_number()) {
            return Err(BankError::invalid(format!(
                "Account number already registered: {}",
                account.account_number()
            )));
        }

        let number = account.account_number().to_string();
        debug!(account = %number, client = %account.client().client_id(), "account registered");

        let shared = Arc::new(Mutex::new(account));
        accounts.insert(number, Arc::clone(&shared));
        Ok(shared)
    }

    pub fn find_by_account_number(&self, account_number: &str) -> Option<SharedAccount> {
        let accounts = self.accounts.read().unwrap_or_else(PoisonError::into_inner);
        accounts.get(account_number).cloned()
    }

    /// All accounts held by one client, in account-number order
    pub fn accounts_for_client(&self, client_id: &str) -> Vec<SharedAccount> {
        self.all_accounts()
            .into_iter()
            .filter(|account| lock(account).client().client_id() == client_id)
            .collect()
    }

    /// All accounts, in account-number order
    pub fn all_accounts(&self) -> Vec<SharedAccount> {
        let accounts = self.accounts.read().unwrap_or_else(PoisonError::into_inner);
        accounts.values().cloned().collect()
    }

    pub fn count(&self) -> usize {
        self.accounts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Sum of every balance, open and closed
    pub fn total_balance(&self) -> Result<Decimal> {
        self.all_accounts()
            .iter()
            .try_fold(Decimal::ZERO, |total, account| {
                total
                    .checked_add(lock(account).balance())
                    .ok_or_else(|| BankError::invalid("Total balance overflowed"))
            })
    }

    /// Deposit under the account's lock; returns the new balance
    pub fn deposit(&self, account_number: &str, amount: Decimal) -> Result<Decimal> {
        self.with_account(account_number, |account| {
            account.deposit(amount)?;
            Ok(account.balance())
        })
    }

    /// Withdraw under the account's lock; returns the new balance
    pub fn withdraw(&self, account_number: &str, amount: Decimal) -> Result<Decimal> {
        self.with_account(account_number, |account| {
            account.withdraw(amount)?;
            Ok(account.balance())
        })
    }

    pub fn withdraw_with_pin(&self, account_number: &str, amount: Decimal, pin: i32) -> Result<Decimal> {
        self.with_account(account_number, |account| {
            account.withdraw_with_pin(amount, pin)?;
            Ok(account.balance())
        })
    }

    fn with_account<T, F>(&self, account_number: &str, operation: F) -> Result<T>
    where
        F: FnOnce(&mut BankAccount) -> Result<T>,
    {
        let shared = self
            .find_by_account_number(account_number)
            .ok_or_else(|| BankError::invalid(format!("Account not found: {}", account_number)))?;

        let mut account = lock(&shared);
        operation(&mut *account)
    }
}

impl Default for AccountRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// A poisoned lock still holds a consistent account: every mutation is a
/// single assignment made after all checks pass.
fn lock(account: &SharedAccount) -> MutexGuard<'_, BankAccount> {
    account.lock().unwrap_or_else(PoisonError::into_inner)
}

// ============================================================================
// TESTS
// ============================================================================
