//! Error types for the ATM simulator
//!
//! This module defines all error types that can occur while operating the bank
//! or driving the console session. Errors are designed to be descriptive and
//! user-friendly for console output.
//!
//! # Error Categories
//!
//! - **Lookup Errors**: Unknown user or account, account number out of range
//! - **Ledger Errors**: Negative amounts, insufficient funds, self-transfers,
//!   balance overflow
//! - **Setup Errors**: PIN hashing unavailable or misconfigured (fatal)
//! - **Console Errors**: I/O failures and end of input

use super::transaction::{AccountId, UserId};
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for bank operations
///
/// Every variant except [`BankError::PinHashing`] is recoverable: the
/// operation is rejected and the bank state remains unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankError {
    /// No account with the given id is registered with the bank
    #[error("Account {account} not found")]
    AccountNotFound {
        /// The id that was looked up
        account: AccountId,
    },

    /// No user with the given id is registered with the bank
    #[error("User {user} not found")]
    UserNotFound {
        /// The id that was looked up
        user: UserId,
    },

    /// A zero-based account index outside the user's account list
    #[error("Account index {index} out of range for user {user} ({count} accounts)")]
    AccountIndexOutOfRange {
        /// Owner of the account list
        user: UserId,
        /// The requested index
        index: usize,
        /// Number of accounts the user holds
        count: usize,
    },

    /// Amount is negative
    #[error("Invalid amount {amount} for {operation}: amount must not be negative")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
        /// Operation that was attempted
        operation: String,
    },

    /// Withdrawal or transfer larger than the current balance
    #[error("Insufficient funds in account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Account being debited
        account: AccountId,
        /// Balance at the time of the request
        balance: Decimal,
        /// Requested amount
        requested: Decimal,
    },

    /// Transfer source and destination are the same account
    #[error("Cannot transfer from account {account} to itself")]
    SameAccount {
        /// The account used on both legs
        account: AccountId,
    },

    /// Posting the amount would overflow the account balance
    ///
    /// This is a recoverable error - the posting is rejected and the ledger
    /// is left unchanged.
    #[error("Arithmetic overflow posting {amount} to account {account}")]
    ArithmeticOverflow {
        /// Account whose balance would overflow
        account: AccountId,
        /// The rejected amount
        amount: Decimal,
    },

    /// Account id is already registered with the bank
    #[error("Account {account} is already registered")]
    DuplicateAccount {
        /// The clashing id
        account: AccountId,
    },

    /// PIN hashing primitive unavailable or misconfigured
    ///
    /// This is a fatal error: the bank cannot safely operate without it.
    #[error("PIN hashing failed: {message}")]
    PinHashing {
        /// Description of the hashing failure
        message: String,
    },
}

// Conversion from argon2::Error to BankError
impl From<argon2::Error> for BankError {
    fn from(error: argon2::Error) -> Self {
        BankError::PinHashing {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl BankError {
    /// Create an AccountNotFound error
    pub fn account_not_found(account: &AccountId) -> Self {
        BankError::AccountNotFound {
            account: account.clone(),
        }
    }

    /// Create a UserNotFound error
    pub fn user_not_found(user: &UserId) -> Self {
        BankError::UserNotFound { user: user.clone() }
    }

    /// Create an AccountIndexOutOfRange error
    pub fn account_index_out_of_range(user: &UserId, index: usize, count: usize) -> Self {
        BankError::AccountIndexOutOfRange {
            user: user.clone(),
            index,
            count,
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal, operation: &str) -> Self {
        BankError::InvalidAmount {
            amount,
            operation: operation.to_string(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: &AccountId, balance: Decimal, requested: Decimal) -> Self {
        BankError::InsufficientFunds {
            account: account.clone(),
            balance,
            requested,
        }
    }

    /// Create a SameAccount error
    pub fn same_account(account: &AccountId) -> Self {
        BankError::SameAccount {
            account: account.clone(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(account: &AccountId, amount: Decimal) -> Self {
        BankError::ArithmeticOverflow {
            account: account.clone(),
            amount,
        }
    }

    /// Create a DuplicateAccount error
    pub fn duplicate_account(account: &AccountId) -> Self {
        BankError::DuplicateAccount {
            account: account.clone(),
        }
    }

    /// Whether the process must stop rather than re-prompt
    pub fn is_fatal(&self) -> bool {
        matches!(self, BankError::PinHashing { .. })
    }
}

/// Errors raised while driving a console session
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsoleError {
    /// Reading from or writing to the console failed
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// The input stream reached end of file
    ///
    /// Not a failure: the controller treats it as the end of the session.
    #[error("Input closed")]
    InputClosed,

    /// A bank operation failed in a way the session cannot recover from
    #[error(transparent)]
    Bank(#[from] BankError),
}

// Conversion from io::Error to ConsoleError
impl From<std::io::Error> for ConsoleError {
    fn from(error: std::io::Error) -> Self {
        ConsoleError::IoError {
            message: error.to_string(),
        }
    }
}
