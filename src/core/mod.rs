//! Core business logic module
//!
//! This module contains the bank-side components:
//! - `bank` - User/account registry, id issuing, login and ledger operations
//! - `config` - Bank configuration (id lengths, PIN hashing cost)
//! - `traits` - Id source abstraction

pub mod bank;
pub mod config;
pub mod traits;

pub use bank::Bank;
pub use config::BankConfig;
pub use traits::{IdSource, RandomIds};
