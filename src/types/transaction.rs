//! Transaction-related types for the ATM simulator
//!
//! This module defines the immutable ledger entry posted to an account, the
//! identifier newtypes shared across the crate, and the currency formatting
//! used by every summary line.

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

/// Bank-scoped user identifier
///
/// A fixed-length string of decimal digits issued by the bank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        UserId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Bank-scoped account identifier
///
/// A fixed-length string of decimal digits issued by the bank. Account ids
/// are longer than user ids by default.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        AccountId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single balance-affecting ledger entry
///
/// Transactions are only created through [`crate::types::Account::add_transaction`]
/// and are never mutated afterwards, so all fields are private with read-only
/// accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Signed amount: positive for credits, negative for debits
    amount: Decimal,

    /// Free-form note entered by the user (or generated for transfers)
    memo: String,

    /// The account this entry was posted to
    account: AccountId,
}

impl Transaction {
    pub(crate) fn new(amount: Decimal, memo: impl Into<String>, account: AccountId) -> Self {
        Transaction {
            amount,
            memo: memo.into(),
            account,
        }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn memo(&self) -> &str {
        &self.memo
    }

    pub fn account(&self) -> &AccountId {
        &self.account
    }

    /// Render this entry as `<amount> : <memo>`
    pub fn summary_line(&self) -> String {
        format!("{} : {}", format_amount(self.amount), self.memo)
    }
}

/// Format a currency value with two decimal places
///
/// Negative values are shown in accounting style, e.g. `$(30.00)`.
pub fn format_amount(amount: Decimal) -> String {
    let mut magnitude = amount
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    magnitude.rescale(2);

    if amount.is_sign_negative() && !magnitude.is_zero() {
        format!("$({})", magnitude)
    } else {
        format!("${}", magnitude)
    }
}
