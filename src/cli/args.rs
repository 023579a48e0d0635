use crate::core::config::{BankConfig, DEFAULT_ACCOUNT_ID_LEN, DEFAULT_USER_ID_LEN};
use clap::Parser;

/// Default bank name shown on the login screen
pub const DEFAULT_BANK_NAME: &str = "Ferris Community Bank";

/// Terminal ATM simulator with an in-memory bank
#[derive(Parser, Debug)]
#[command(name = "atm")]
#[command(about = "Terminal ATM simulator with an in-memory bank", long_about = None)]
pub struct CliArgs {
    /// Name shown on the login screen
    #[arg(
        long = "bank-name",
        value_name = "NAME",
        default_value = DEFAULT_BANK_NAME,
        help = "Name of the bank shown on the login screen"
    )]
    pub bank_name: String,

    /// Number of digits in generated user ids
    #[arg(
        long = "user-id-length",
        value_name = "DIGITS",
        default_value_t = DEFAULT_USER_ID_LEN,
        help = "Digits in generated user ids (range: 4-18)"
    )]
    pub user_id_len: usize,

    /// Number of digits in generated account ids
    #[arg(
        long = "account-id-length",
        value_name = "DIGITS",
        default_value_t = DEFAULT_ACCOUNT_ID_LEN,
        help = "Digits in generated account ids (range: 4-18)"
    )]
    pub account_id_len: usize,

    /// Log filter directive, overridden by RUST_LOG
    #[arg(
        long = "log-level",
        value_name = "FILTER",
        default_value = "warn",
        help = "Log filter for stderr diagnostics, e.g. 'info' or 'atm_simulator=debug'"
    )]
    pub log_level: String,
}

impl CliArgs {
    /// Create a BankConfig from CLI arguments
    ///
    /// Out-of-range id lengths fall back to the defaults with a warning.
    pub fn to_bank_config(&self) -> BankConfig {
        BankConfig::new(self.user_id_len, self.account_id_len)
    }
}
