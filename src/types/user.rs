//! User-related types for the ATM simulator

use super::error::BankError;
use super::pin::{PinHash, PinHashConfig};
use super::transaction::{AccountId, UserId};

/// A bank customer holding one or more accounts
///
/// The user keeps the ids of its accounts in opening order; the accounts
/// themselves are owned by [`crate::core::Bank`].
#[derive(Debug, Clone)]
pub struct User {
    first_name: String,
    last_name: String,
    id: UserId,
    pin_hash: PinHash,
    accounts: Vec<AccountId>,
}

impl User {
    /// Create a user with no accounts
    ///
    /// The PIN is hashed immediately and dropped.
    ///
    /// # Errors
    ///
    /// Returns [`BankError::PinHashing`] if hashing fails.
    pub fn new(
        id: UserId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        pin: &str,
        pin_config: PinHashConfig,
    ) -> Result<Self, BankError> {
        Ok(User {
            first_name: first_name.into(),
            last_name: last_name.into(),
            id,
            pin_hash: PinHash::new(pin, pin_config)?,
            accounts: Vec::new(),
        })
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// "Last, First", as shown when the user is created
    pub fn full_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }

    /// Check a PIN against the stored hash
    pub fn validate_pin(&self, pin: &str) -> bool {
        self.pin_hash.verify(pin)
    }

    /// Record a newly opened account
    pub fn add_account(&mut self, account: AccountId) {
        self.accounts.push(account);
    }

    pub fn num_accounts(&self) -> usize {
        self.accounts.len()
    }

    /// Account ids in opening order
    pub fn account_ids(&self) -> &[AccountId] {
        &self.accounts
    }

    /// Id of the account at a zero-based position, if any
    pub fn account_id_at(&self, index: usize) -> Option<&AccountId> {
        self.accounts.get(index)
    }

    /// Whether this user holds the given account
    pub fn owns(&self, account: &AccountId) -> bool {
        self.accounts.contains(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User::new(
            UserId::new("123456"),
            "Ann",
            "Lee",
            "4444",
            PinHashConfig::minimal(),
        )
        .unwrap()
    }

    #[test]
    fn test_user_creation() {
        let user = user();
        assert_eq!(user.id().as_str(), "123456");
        assert_eq!(user.first_name(), "Ann");
        assert_eq!(user.last_name(), "Lee");
        assert_eq!(user.full_name(), "Lee, Ann");
        assert_eq!(user.num_accounts(), 0);
    }

    #[test]
    fn test_validate_pin() {
        let user = user();
        assert!(user.validate_pin("4444"));
        assert!(!user.validate_pin("4445"));
    }

    #[test]
    fn test_account_addressing() {
        let mut user = user();
        user.add_account(AccountId::new("0000000001"));
        user.add_account(AccountId::new("0000000002"));

        assert_eq!(user.num_accounts(), 2);
        assert_eq!(user.account_id_at(0), Some(&AccountId::new("0000000001")));
        assert_eq!(user.account_id_at(1), Some(&AccountId::new("0000000002")));
        assert_eq!(user.account_id_at(2), None);
        assert!(user.owns(&AccountId::new("0000000002")));
        assert!(!user.owns(&AccountId::new("0000000003")));
    }

    #[test]
    fn test_debug_hides_pin() {
        let rendered = format!("{:?}", user());
        assert!(!rendered.contains("4444"));
    }
}
