//! Console session controller
//!
//! Drives the login prompt and the main menu as an explicit state machine:
//!
//! ```text
//! LoggedOut --login--> LoggedIn --action--> LoggedIn
//!     ^                    |
//!     +-------quit---------+
//! ```
//!
//! The loop never exits on its own; it ends when the input reaches end of
//! file or an unrecoverable error occurs.

use crate::console::prompt::Prompter;
use crate::core::Bank;
use crate::types::{format_amount, AccountId, BankError, ConsoleError, UserId};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};

/// Where the session currently is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    LoggedIn(UserId),
}

/// Main menu entries, numbered 1-5 on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    History,
    Withdraw,
    Deposit,
    Transfer,
    Quit,
}

impl MenuChoice {
    pub const COUNT: usize = 5;

    pub fn from_number(n: usize) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::History),
            2 => Some(MenuChoice::Withdraw),
            3 => Some(MenuChoice::Deposit),
            4 => Some(MenuChoice::Transfer),
            5 => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

const MENU: &str = "    1) Show account transaction history
    2) Withdraw
    3) Deposit
    4) Transfer
    5) Quit
";

/// Interactive session bound to one bank
pub struct Console<'b, R, W> {
    bank: &'b mut Bank,
    io: Prompter<R, W>,
}

impl<'b, R: BufRead, W: Write> Console<'b, R, W> {
    pub fn new(bank: &'b mut Bank, input: R, output: W) -> Self {
        Console {
            bank,
            io: Prompter::new(input, output),
        }
    }

    /// Give back the reader and writer, e.g. to inspect scripted output
    pub fn into_inner(self) -> (R, W) {
        self.io.into_inner()
    }

    /// Run login and menu cycles until the input is exhausted
    ///
    /// # Errors
    ///
    /// Returns an error on console I/O failure or a fatal bank error.
    /// End of input is a normal return.
    pub fn run(&mut self) -> Result<(), ConsoleError> {
        let mut state = SessionState::LoggedOut;
        loop {
            match self.step(state) {
                Ok(next) => state = next,
                Err(ConsoleError::InputClosed) => {
                    tracing::info!("input closed, ending session");
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Advance the state machine by one transition
    pub fn step(&mut self, state: SessionState) -> Result<SessionState, ConsoleError> {
        match state {
            SessionState::LoggedOut => self.login().map(SessionState::LoggedIn),
            SessionState::LoggedIn(user) => match self.main_menu(&user)? {
                MenuChoice::Quit => {
                    tracing::info!(user_id = %user, "logged out");
                    Ok(SessionState::LoggedOut)
                }
                _ => Ok(SessionState::LoggedIn(user)),
            },
        }
    }

    /// Prompt for id and PIN until they match a user
    fn login(&mut self) -> Result<UserId, ConsoleError> {
        loop {
            self.io
                .print(&format!("\n\nWelcome to {}\n\n", self.bank.name()))?;
            let user_id = self.io.ask("Enter user ID: ")?;
            let pin = self.io.ask("Enter pin: ")?;

            match self.bank.login(user_id.trim(), &pin) {
                Some(user) => return Ok(user.id().clone()),
                None => self
                    .io
                    .println("Incorrect user ID/pin combination. Please try again.")?,
            }
        }
    }

    /// Show the summary and menu, then carry out one choice
    fn main_menu(&mut self, user: &UserId) -> Result<MenuChoice, ConsoleError> {
        self.print_account_summary(user)?;

        let first_name = self.user_first_name(user)?;
        self.io.print(&format!(
            "Welcome {}, what would you like to do?\n{}\n",
            first_name, MENU
        ))?;
        let rejection = format!("Invalid choice. Please choose 1-{}.", MenuChoice::COUNT);
        let choice = loop {
            let number = self
                .io
                .ask_number("Enter choice: ", 1..=MenuChoice::COUNT, &rejection)?;
            match MenuChoice::from_number(number) {
                Some(choice) => break choice,
                None => self.io.println(&rejection)?,
            }
        };

        match choice {
            MenuChoice::History => self.show_transaction_history(user)?,
            MenuChoice::Withdraw => self.withdraw_funds(user)?,
            MenuChoice::Deposit => self.deposit_funds(user)?,
            MenuChoice::Transfer => self.transfer_funds(user)?,
            MenuChoice::Quit => {}
        }
        Ok(choice)
    }

    fn user_first_name(&self, user: &UserId) -> Result<String, ConsoleError> {
        self.bank
            .user(user)
            .map(|u| u.first_name().to_string())
            .ok_or_else(|| BankError::user_not_found(user).into())
    }

    fn print_account_summary(&mut self, user: &UserId) -> Result<(), ConsoleError> {
        let holder = self
            .bank
            .user(user)
            .ok_or_else(|| BankError::user_not_found(user))?;

        let mut text = format!("\n\n{}'s accounts summary\n", holder.first_name());
        for (n, id) in holder.account_ids().iter().enumerate() {
            if let Some(account) = self.bank.account(id) {
                text.push_str(&format!("  {}) {}\n", n + 1, account.summary_line()));
            }
        }
        text.push('\n');
        self.io.print(&text)
    }

    /// Ask for an account by its 1-based position in the user's list
    fn choose_account(&mut self, user: &UserId, purpose: &str) -> Result<AccountId, ConsoleError> {
        let count = self
            .bank
            .user(user)
            .map(|u| u.num_accounts())
            .ok_or_else(|| BankError::user_not_found(user))?;

        let prompt = format!("Enter the number (1-{}) of the account {}: ", count, purpose);
        let number = self
            .io
            .ask_number(&prompt, 1..=count, "Invalid account. Please try again.")?;
        Ok(self.bank.account_at(user, number - 1)?.id().clone())
    }

    fn ask_memo(&mut self) -> Result<String, ConsoleError> {
        self.io.ask("Enter a memo: ")
    }

    fn show_transaction_history(&mut self, user: &UserId) -> Result<(), ConsoleError> {
        let account = self.choose_account(user, "whose transactions you want to see")?;
        let history = self.bank.transaction_history(&account)?;

        let mut text = format!("\nTransaction history for account {}\n", account);
        for line in history {
            text.push_str(&line);
            text.push('\n');
        }
        text.push('\n');
        self.io.print(&text)
    }

    fn withdraw_funds(&mut self, user: &UserId) -> Result<(), ConsoleError> {
        let account = self.choose_account(user, "to withdraw from")?;
        let Some(balance) = self.available_balance(&account)? else {
            return Ok(());
        };

        let prompt = format!("Enter the amount to withdraw (max {}): $", format_amount(balance));
        let amount = self.io.ask_amount(&prompt, |a| debit_limit(a, balance))?;
        let memo = self.ask_memo()?;

        let result = self.bank.withdraw(&account, amount, &memo);
        self.report(result)
    }

    fn deposit_funds(&mut self, user: &UserId) -> Result<(), ConsoleError> {
        let account = self.choose_account(user, "to deposit in")?;
        let balance = self.bank.balance(&account)?;

        let amount = self
            .io
            .ask_amount("Enter the amount to deposit: $", |a| credit_limit(a, balance))?;
        let memo = self.ask_memo()?;

        let result = self.bank.deposit(&account, amount, &memo);
        self.report(result)
    }

    fn transfer_funds(&mut self, user: &UserId) -> Result<(), ConsoleError> {
        let count = self
            .bank
            .user(user)
            .map(|u| u.num_accounts())
            .ok_or_else(|| BankError::user_not_found(user))?;
        if count < 2 {
            return self.io.println("You need at least two accounts to transfer.");
        }

        let from = self.choose_account(user, "to transfer from")?;
        let Some(balance) = self.available_balance(&from)? else {
            return Ok(());
        };

        let to = loop {
            let to = self.choose_account(user, "to transfer to")?;
            if to != from {
                break to;
            }
            self.io
                .println("Cannot transfer to the same account. Please try again.")?;
        };

        let prompt = format!("Enter the amount to transfer (max {}): $", format_amount(balance));
        let amount = self.io.ask_amount(&prompt, |a| debit_limit(a, balance))?;

        let result = self.bank.transfer(&from, &to, amount);
        self.report(result)
    }

    /// Balance of an account that can be debited, or `None` after telling
    /// the user it is empty
    fn available_balance(&mut self, account: &AccountId) -> Result<Option<Decimal>, ConsoleError> {
        let balance = self.bank.balance(account)?;
        if balance <= Decimal::ZERO {
            self.io.println("No funds available in this account.")?;
            return Ok(None);
        }
        Ok(Some(balance))
    }

    /// Show a rejected operation to the user; only fatal errors propagate
    fn report(&mut self, result: Result<(), BankError>) -> Result<(), ConsoleError> {
        match result {
            Ok(()) => Ok(()),
            Err(e) if e.is_fatal() => Err(e.into()),
            Err(e) => {
                tracing::warn!(error = %e, "operation rejected");
                self.io.println(&e.to_string())
            }
        }
    }
}

fn not_negative(amount: Decimal) -> Result<(), String> {
    if amount < Decimal::ZERO {
        Err("Amount must not be negative.".to_string())
    } else {
        Ok(())
    }
}

fn credit_limit(amount: Decimal, balance: Decimal) -> Result<(), String> {
    not_negative(amount)?;
    if balance.checked_add(amount).is_none() {
        return Err("Amount is too large for this account.".to_string());
    }
    Ok(())
}

fn debit_limit(amount: Decimal, balance: Decimal) -> Result<(), String> {
    not_negative(amount)?;
    if amount > balance {
        return Err(format!(
            "Amount must not be greater than balance of {}.",
            format_amount(balance)
        ));
    }
    Ok(())
}
