//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account ledger and summaries
//! - `transaction`: Transaction entries, identifiers and amount formatting
//! - `user`: Bank customers
//! - `pin`: Salted PIN hashing
//! - `error`: Error types for the bank and the console

pub mod account;
pub mod error;
pub mod pin;
pub mod transaction;
pub mod user;

pub use account::{Account, DEFAULT_ACCOUNT_NAME};
pub use error::{BankError, ConsoleError};
pub use pin::{PinHash, PinHashConfig};
pub use transaction::{format_amount, AccountId, Transaction, UserId};
pub use user::User;
