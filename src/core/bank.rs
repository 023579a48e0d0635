//! Bank registry
//!
//! This module provides the `Bank` struct, the root registry that owns every
//! user and every account and issues their ids.
//!
//! The Bank is responsible for:
//! - Creating users (each with a default "Savings" account)
//! - Opening and registering further accounts
//! - Generating bank-scoped unique ids with collision retry
//! - Authenticating users by id and PIN
//! - Posting validated deposits, withdrawals and transfers

use crate::core::config::BankConfig;
use crate::core::traits::{IdSource, RandomIds};
use crate::types::{Account, AccountId, BankError, User, UserId, DEFAULT_ACCOUNT_NAME};
use rust_decimal::Decimal;

/// Root registry of users and accounts
///
/// Accounts live in a single bank-wide list; users refer to theirs by id. All
/// lookups are linear scans, which is plenty for a single-terminal simulator.
pub struct Bank {
    name: String,
    users: Vec<User>,
    accounts: Vec<Account>,
    config: BankConfig,
    ids: Box<dyn IdSource>,
}

impl Bank {
    /// Create an empty bank drawing ids from the thread-local RNG
    pub fn new(name: impl Into<String>, config: BankConfig) -> Self {
        Self::with_id_source(name, config, Box::new(RandomIds))
    }

    /// Create an empty bank with a custom id source
    pub fn with_id_source(
        name: impl Into<String>,
        config: BankConfig,
        ids: Box<dyn IdSource>,
    ) -> Self {
        Bank {
            name: name.into(),
            users: Vec::new(),
            accounts: Vec::new(),
            config,
            ids,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &BankConfig {
        &self.config
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn user(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id() == id)
    }

    pub fn account(&self, id: &AccountId) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id() == id)
    }

    fn user_mut(&mut self, id: &UserId) -> Option<&mut User> {
        self.users.iter_mut().find(|user| user.id() == id)
    }

    fn account_mut(&mut self, id: &AccountId) -> Result<&mut Account, BankError> {
        self.accounts
            .iter_mut()
            .find(|account| account.id() == id)
            .ok_or_else(|| BankError::account_not_found(id))
    }

    /// Generate a user id not yet used by this bank
    ///
    /// Draws random digits of the configured length until one does not
    /// collide with an existing user id.
    pub fn new_user_id(&mut self) -> UserId {
        loop {
            let candidate = UserId::new(self.ids.next_digits(self.config.user_id_len));
            if self.user(&candidate).is_none() {
                return candidate;
            }
            tracing::debug!(id = %candidate, "user id collision, retrying");
        }
    }

    /// Generate an account id not yet used by this bank
    pub fn new_account_id(&mut self) -> AccountId {
        loop {
            let candidate = AccountId::new(self.ids.next_digits(self.config.account_id_len));
            if self.account(&candidate).is_none() {
                return candidate;
            }
            tracing::debug!(id = %candidate, "account id collision, retrying");
        }
    }

    /// Create a user together with a default "Savings" account
    ///
    /// # Returns
    ///
    /// The new user's id
    ///
    /// # Errors
    ///
    /// Returns [`BankError::PinHashing`] if the PIN cannot be hashed. This is
    /// fatal: no user or account is registered.
    pub fn add_user(
        &mut self,
        first_name: &str,
        last_name: &str,
        pin: &str,
    ) -> Result<UserId, BankError> {
        let id = self.new_user_id();
        let user = User::new(id.clone(), first_name, last_name, pin, self.config.pin_hash)?;
        tracing::info!(user_id = %id, name = %user.full_name(), "user created");
        self.users.push(user);

        self.open_account(&id, DEFAULT_ACCOUNT_NAME)?;
        Ok(id)
    }

    /// Open a new account for an existing user
    ///
    /// # Errors
    ///
    /// Returns [`BankError::UserNotFound`] if the owner is not registered.
    pub fn open_account(&mut self, owner: &UserId, name: &str) -> Result<AccountId, BankError> {
        if self.user(owner).is_none() {
            return Err(BankError::user_not_found(owner));
        }

        let id = self.new_account_id();
        self.add_account(Account::new(id.clone(), name, owner.clone()))?;
        Ok(id)
    }

    /// Register an externally constructed account
    ///
    /// Adds the account to the bank-wide list and appends its id to the
    /// owner's own account list.
    ///
    /// # Errors
    ///
    /// - [`BankError::UserNotFound`] if the owner is not registered
    /// - [`BankError::DuplicateAccount`] if the id is already taken
    pub fn add_account(&mut self, account: Account) -> Result<(), BankError> {
        if self.account(account.id()).is_some() {
            return Err(BankError::duplicate_account(account.id()));
        }

        let owner = self
            .user_mut(account.owner())
            .ok_or_else(|| BankError::user_not_found(account.owner()))?;
        owner.add_account(account.id().clone());

        tracing::info!(
            account_id = %account.id(),
            owner = %account.owner(),
            name = account.name(),
            "account opened"
        );
        self.accounts.push(account);
        Ok(())
    }

    /// Authenticate a user
    ///
    /// # Returns
    ///
    /// The user if both the id matches exactly and the PIN matches the stored
    /// hash, `None` on any mismatch.
    pub fn login(&self, user_id: &str, pin: &str) -> Option<&User> {
        let user = self
            .users
            .iter()
            .find(|user| user.id().as_str() == user_id && user.validate_pin(pin));

        match user {
            Some(user) => tracing::info!(user_id = %user.id(), "login succeeded"),
            None => tracing::warn!("login failed"),
        }
        user
    }

    /// The account at a zero-based position in a user's account list
    ///
    /// # Errors
    ///
    /// - [`BankError::UserNotFound`] if the user is not registered
    /// - [`BankError::AccountIndexOutOfRange`] if `index >= num_accounts`
    pub fn account_at(&self, user: &UserId, index: usize) -> Result<&Account, BankError> {
        let owner = self.user(user).ok_or_else(|| BankError::user_not_found(user))?;
        let id = owner.account_id_at(index).ok_or_else(|| {
            BankError::account_index_out_of_range(user, index, owner.num_accounts())
        })?;
        self.account(id).ok_or_else(|| BankError::account_not_found(id))
    }

    /// Current balance of an account
    pub fn balance(&self, account: &AccountId) -> Result<Decimal, BankError> {
        self.account(account)
            .map(Account::balance)
            .ok_or_else(|| BankError::account_not_found(account))
    }

    /// Newest-first transaction history of an account
    pub fn transaction_history(&self, account: &AccountId) -> Result<Vec<String>, BankError> {
        self.account(account)
            .map(Account::transaction_history_summary)
            .ok_or_else(|| BankError::account_not_found(account))
    }

    /// Append a transaction without sign or funds validation
    ///
    /// # Errors
    ///
    /// - [`BankError::AccountNotFound`] if the account is not registered
    /// - [`BankError::ArithmeticOverflow`] if the new balance would overflow
    pub fn post_transaction(
        &mut self,
        account: &AccountId,
        amount: Decimal,
        memo: &str,
    ) -> Result<(), BankError> {
        self.account_mut(account)?.add_transaction(amount, memo)?;
        tracing::debug!(account_id = %account, %amount, "transaction posted");
        Ok(())
    }

    /// Credit an account
    ///
    /// # Errors
    ///
    /// - [`BankError::InvalidAmount`] if `amount` is negative
    /// - [`BankError::AccountNotFound`] if the account is not registered
    /// - [`BankError::ArithmeticOverflow`] if the new balance would overflow
    pub fn deposit(
        &mut self,
        account: &AccountId,
        amount: Decimal,
        memo: &str,
    ) -> Result<(), BankError> {
        if amount < Decimal::ZERO {
            return Err(BankError::invalid_amount(amount, "deposit"));
        }
        self.post_transaction(account, amount, memo)
    }

    /// Debit an account
    ///
    /// Succeeds only if `0 <= amount <= balance`; the new balance is then
    /// exactly `balance - amount`.
    ///
    /// # Errors
    ///
    /// - [`BankError::InvalidAmount`] if `amount` is negative
    /// - [`BankError::InsufficientFunds`] if `amount` exceeds the balance
    /// - [`BankError::AccountNotFound`] if the account is not registered
    pub fn withdraw(
        &mut self,
        account: &AccountId,
        amount: Decimal,
        memo: &str,
    ) -> Result<(), BankError> {
        self.check_debit(account, amount, "withdrawal")?;
        self.post_transaction(account, -amount, memo)
    }

    /// Move funds between two accounts
    ///
    /// Posts exactly two transactions: a debit on `from` naming the
    /// destination and a credit on `to` naming the source. Either both are
    /// posted or neither is.
    ///
    /// # Errors
    ///
    /// - [`BankError::SameAccount`] if `from == to`
    /// - [`BankError::AccountNotFound`] if either account is not registered
    /// - [`BankError::InvalidAmount`] / [`BankError::InsufficientFunds`] as
    ///   for [`Bank::withdraw`]
    /// - [`BankError::ArithmeticOverflow`] if the destination balance would
    ///   overflow
    pub fn transfer(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: Decimal,
    ) -> Result<(), BankError> {
        if from == to {
            return Err(BankError::same_account(from));
        }
        self.check_debit(from, amount, "transfer")?;
        self.check_credit(to, amount)?;

        self.post_transaction(from, -amount, &format!("Transfer to account {}", to))?;
        self.post_transaction(to, amount, &format!("Transfer from account {}", from))?;
        tracing::info!(from = %from, to = %to, %amount, "transfer completed");
        Ok(())
    }

    fn check_debit(
        &self,
        account: &AccountId,
        amount: Decimal,
        operation: &str,
    ) -> Result<(), BankError> {
        let balance = self.balance(account)?;

        if amount < Decimal::ZERO {
            tracing::debug!(account_id = %account, operation, "negative amount rejected");
            return Err(BankError::invalid_amount(amount, operation));
        }
        if amount > balance {
            tracing::debug!(account_id = %account, operation, "insufficient funds");
            return Err(BankError::insufficient_funds(account, balance, amount));
        }
        Ok(())
    }

    fn check_credit(&self, account: &AccountId, amount: Decimal) -> Result<(), BankError> {
        self.balance(account)?
            .checked_add(amount)
            .map(|_| ())
            .ok_or_else(|| BankError::arithmetic_overflow(account, amount))
    }
}
