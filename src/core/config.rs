//! Bank configuration
//!
//! Id lengths and PIN hashing cost. Out-of-range values fall back to the
//! defaults with a warning instead of failing.

use crate::types::PinHashConfig;

/// Default length of generated user ids
pub const DEFAULT_USER_ID_LEN: usize = 6;

/// Default length of generated account ids
pub const DEFAULT_ACCOUNT_ID_LEN: usize = 10;

/// Shortest accepted id length
///
/// Keeps the id space (10^len) large enough that collision retry terminates
/// quickly.
pub const MIN_ID_LEN: usize = 4;

/// Longest accepted id length
pub const MAX_ID_LEN: usize = 18;

/// Configuration for a [`crate::core::Bank`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BankConfig {
    /// Number of digits in a user id
    pub user_id_len: usize,
    /// Number of digits in an account id
    pub account_id_len: usize,
    /// Argon2 cost parameters for PIN hashing
    pub pin_hash: PinHashConfig,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            user_id_len: DEFAULT_USER_ID_LEN,
            account_id_len: DEFAULT_ACCOUNT_ID_LEN,
            pin_hash: PinHashConfig::default(),
        }
    }
}

impl BankConfig {
    /// Create a new BankConfig with custom id lengths
    pub fn new(user_id_len: usize, account_id_len: usize) -> Self {
        let default = Self::default();

        Self {
            user_id_len: checked_len("user_id_len", user_id_len, default.user_id_len),
            account_id_len: checked_len("account_id_len", account_id_len, default.account_id_len),
            pin_hash: default.pin_hash,
        }
    }

    /// Replace the PIN hashing parameters
    pub fn with_pin_hash(mut self, pin_hash: PinHashConfig) -> Self {
        self.pin_hash = pin_hash;
        self
    }
}

fn checked_len(field: &str, value: usize, default: usize) -> usize {
    if (MIN_ID_LEN..=MAX_ID_LEN).contains(&value) {
        value
    } else {
        tracing::warn!(
            "Invalid {} ({}), using default ({})",
            field,
            value,
            default
        );
        default
    }
}
