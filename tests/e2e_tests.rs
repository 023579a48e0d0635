//! End-to-end integration tests
//!
//! These tests drive the bank through its public API and through a complete
//! scripted console session. Each console test:
//! 1. Builds a bank with a seeded user
//! 2. Feeds a newline-separated script to the console as stdin
//! 3. Runs the session until the script is exhausted
//! 4. Checks the resulting balances and the printed output

#[cfg(test)]
mod tests {
    use atm_simulator::{Bank, BankConfig, BankError, Console, PinHashConfig, UserId};
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::io::Cursor;

    fn bank() -> Bank {
        Bank::new(
            "Test Bank",
            BankConfig::default().with_pin_hash(PinHashConfig::minimal()),
        )
    }

    fn dec(units: i64) -> Decimal {
        Decimal::new(units, 0)
    }

    /// Run a full console session over `script` and return everything printed
    fn run_session(bank: &mut Bank, script: &str) -> String {
        let mut console = Console::new(bank, Cursor::new(script.to_string()), Vec::new());
        console
            .run()
            .unwrap_or_else(|e| panic!("Session failed: {}", e));
        let (_, output) = console.into_inner();
        String::from_utf8(output).expect("Console output is not UTF-8")
    }

    /// Seed a user with Savings and Checking, as the binary does
    fn seeded(bank: &mut Bank) -> UserId {
        let user = bank.add_user("Ivan", "Zelenkov", "1234").unwrap();
        bank.open_account(&user, "Checking").unwrap();
        user
    }

    #[test]
    fn test_deposit_withdraw_scenario() {
        let mut bank = bank();
        let ann = bank.add_user("Ann", "Lee", "4444").unwrap();
        let savings = bank.account_at(&ann, 0).unwrap().id().clone();
        assert_eq!(bank.account(&savings).unwrap().name(), "Savings");

        bank.deposit(&savings, dec(200), "payroll").unwrap();
        assert_eq!(bank.balance(&savings).unwrap(), Decimal::new(20000, 2));

        bank.withdraw(&savings, dec(50), "groceries").unwrap();
        assert_eq!(bank.balance(&savings).unwrap(), Decimal::new(15000, 2));

        let rejected = bank.withdraw(&savings, dec(500), "car");
        assert_eq!(
            rejected,
            Err(BankError::insufficient_funds(&savings, dec(150), dec(500)))
        );
        assert_eq!(bank.balance(&savings).unwrap(), Decimal::new(15000, 2));
        assert_eq!(
            bank.account(&savings).unwrap().summary_line(),
            format!("{} : $150.00 : Savings", savings)
        );
    }

    #[test]
    fn test_same_scenario_through_console() {
        let mut bank = bank();
        let ann = bank.add_user("Ann", "Lee", "4444").unwrap();
        let savings = bank.account_at(&ann, 0).unwrap().id().clone();

        let script = format!(
            "{id}\n4444\n\
             3\n1\n200\npayroll\n\
             2\n1\n50\ngroceries\n\
             2\n1\n500\n",
            id = ann
        );
        let output = run_session(&mut bank, &script);

        // the 500 withdrawal is re-prompted, then the input ends mid-prompt
        assert!(output.contains("Amount must not be greater than balance of $150.00."));
        assert_eq!(bank.balance(&savings).unwrap(), dec(150));
        assert_eq!(
            bank.transaction_history(&savings).unwrap(),
            vec!["$(50.00) : groceries", "$200.00 : payroll"]
        );
    }

    #[test]
    fn test_full_session_with_relogin() {
        let mut bank = bank();
        let user = seeded(&mut bank);
        let savings = bank.account_at(&user, 0).unwrap().id().clone();
        let checking = bank.account_at(&user, 1).unwrap().id().clone();

        let script = format!(
            "{id}\n9999\n\
             {id}\n1234\n\
             3\n1\n100\ninitial\n\
             4\n1\n2\n40\n\
             1\n2\n\
             5\n\
             {id}\n1234\n\
             5\n",
            id = user
        );
        let output = run_session(&mut bank, &script);

        assert_eq!(output.matches("Welcome to Test Bank").count(), 4);
        assert_eq!(
            output
                .matches("Incorrect user ID/pin combination. Please try again.")
                .count(),
            1
        );
        assert!(output.contains(&format!("Transaction history for account {}", checking)));
        assert!(output.contains(&format!("$40.00 : Transfer from account {}", savings)));
        assert!(output.contains(&format!("{} : $60.00 : Savings", savings)));
        assert!(output.contains(&format!("{} : $40.00 : Checking", checking)));

        assert_eq!(bank.balance(&savings).unwrap(), dec(60));
        assert_eq!(bank.balance(&checking).unwrap(), dec(40));
        assert_eq!(
            bank.account(&savings).unwrap().transactions().last().unwrap().memo(),
            format!("Transfer to account {}", checking)
        );
    }

    #[test]
    fn test_other_users_cannot_reach_each_others_accounts() {
        let mut bank = bank();
        let ivan = seeded(&mut bank);
        let ann = bank.add_user("Ann", "Lee", "4444").unwrap();
        let ann_savings = bank.account_at(&ann, 0).unwrap().id().clone();

        // Ann only has one account, so "2" is out of range for her
        let script = format!("{id}\n4444\n3\n2\n1\n10\ngift\n", id = ann);
        let output = run_session(&mut bank, &script);

        assert!(output.contains("Enter the number (1-1) of the account to deposit in: "));
        assert!(output.contains("Invalid account. Please try again."));
        assert_eq!(bank.balance(&ann_savings).unwrap(), dec(10));
        for id in bank.user(&ivan).unwrap().account_ids() {
            assert_eq!(bank.balance(id).unwrap(), Decimal::ZERO);
        }
    }

    #[rstest]
    #[case::empty("")]
    #[case::mid_login("123456\n")]
    #[case::garbage_menu("not a user\nnot a pin\n")]
    fn test_session_ends_cleanly_on_eof(#[case] script: &str) {
        let mut bank = bank();
        seeded(&mut bank);
        let output = run_session(&mut bank, script);
        assert!(output.contains("Welcome to Test Bank"));
    }

    #[rstest]
    #[case::partial(300, 120)]
    #[case::everything(300, 300)]
    #[case::nothing(300, 0)]
    fn test_transfer_conserves_money(#[case] start: i64, #[case] amount: i64) {
        let mut bank = bank();
        let user = seeded(&mut bank);
        let savings = bank.account_at(&user, 0).unwrap().id().clone();
        let checking = bank.account_at(&user, 1).unwrap().id().clone();
        bank.deposit(&savings, dec(start), "initial").unwrap();

        bank.transfer(&savings, &checking, dec(amount)).unwrap();

        assert_eq!(bank.balance(&savings).unwrap(), dec(start - amount));
        assert_eq!(bank.balance(&checking).unwrap(), dec(amount));
        assert_eq!(bank.account(&savings).unwrap().transactions().len(), 2);
        assert_eq!(bank.account(&checking).unwrap().transactions().len(), 1);
    }
}
