//! ATM Simulator Library
//! # Overview
//!
//! This library provides an in-memory bank and an interactive console that
//! drives it like an ATM: log in with a user id and PIN, then view history,
//! withdraw, deposit or transfer between your own accounts.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Transaction, User, PIN hashing, errors)
//! - [`core`] - Business logic components:
//!   - [`core::bank`] - User/account registry, id issuing, login and ledger operations
//!   - [`core::config`] - Id lengths and PIN hashing cost
//!   - [`core::traits`] - Id source abstraction
//! - [`console`] - Login prompt and menu state machine over any reader/writer
//! - [`cli`] - CLI arguments parsing and logging setup
//!
//! # Ledger Rules
//!
//! - **Balance**: always the sum of an account's transactions, never stored
//! - **Deposit**: any non-negative amount
//! - **Withdrawal**: `0 <= amount <= balance`
//! - **Transfer**: same bound as a withdrawal on the source; posts one debit
//!   and one credit
//!
//! # Security
//!
//! PINs are stored only as salted Argon2id digests and are never logged.

// Module declarations
pub mod cli;
pub mod console;
pub mod core;
pub mod types;

pub use console::Console;
pub use self::core::{Bank, BankConfig};
pub use types::{
    Account, AccountId, BankError, ConsoleError, PinHashConfig, Transaction, User, UserId,
};
