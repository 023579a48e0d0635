//! Account-related types for the ATM simulator
//!
//! This module defines the Account structure: a named, append-only ledger of
//! transactions whose balance is always derived from its entries.

use super::error::BankError;
use super::transaction::{format_amount, AccountId, Transaction, UserId};
use rust_decimal::Decimal;

/// Name given to the account every new user receives on signup
pub const DEFAULT_ACCOUNT_NAME: &str = "Savings";

/// A named ledger owned by a single user
///
/// The balance is never stored. Every call to [`Account::balance`] sums the
/// transaction list, so it cannot drift from the ledger. Postings that would
/// push the running total past the range of `Decimal` are refused, so every
/// prefix of the ledger sums without overflow.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Display name, e.g. "Savings" or "Checking"
    name: String,

    /// Bank-scoped unique identifier
    id: AccountId,

    /// The user holding this account
    owner: UserId,

    /// Chronological, append-only list of entries
    transactions: Vec<Transaction>,
}

impl Account {
    /// Create a new account with an empty ledger
    ///
    /// # Arguments
    ///
    /// * `id` - A bank-issued id, see [`crate::core::Bank::new_account_id`]
    /// * `name` - Display name
    /// * `owner` - Id of the user holding the account
    pub fn new(id: AccountId, name: impl Into<String>, owner: UserId) -> Self {
        Account {
            name: name.into(),
            id,
            owner,
            transactions: Vec::new(),
        }
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owner(&self) -> &UserId {
        &self.owner
    }

    /// Entries in the order they were posted
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Current balance: the sum of all transaction amounts
    pub fn balance(&self) -> Decimal {
        self.transactions.iter().map(Transaction::amount).sum()
    }

    /// Append a new immutable transaction
    ///
    /// Sign and magnitude rules are enforced by [`crate::core::Bank`] and the
    /// console prompts before calling. The only check made here is that the
    /// new balance is representable.
    ///
    /// # Errors
    ///
    /// Returns [`BankError::ArithmeticOverflow`] if adding `amount` to the
    /// current balance would overflow. The ledger is left unchanged.
    pub fn add_transaction(
        &mut self,
        amount: Decimal,
        memo: impl Into<String>,
    ) -> Result<(), BankError> {
        self.balance()
            .checked_add(amount)
            .ok_or_else(|| BankError::arithmetic_overflow(&self.id, amount))?;

        let transaction = Transaction::new(amount, memo, self.id.clone());
        self.transactions.push(transaction);
        Ok(())
    }

    /// Every transaction rendered as `<amount> : <memo>`, newest first
    pub fn transaction_history_summary(&self) -> Vec<String> {
        self.transactions
            .iter()
            .rev()
            .map(Transaction::summary_line)
            .collect()
    }

    /// One-line overview: `<id> : <balance> : <name>`
    pub fn summary_line(&self) -> String {
        format!("{} : {} : {}", self.id, format_amount(self.balance()), self.name)
    }
}
