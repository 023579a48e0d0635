//! ATM Simulator CLI
//!
//! Interactive terminal ATM backed by an in-memory bank.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --bank-name "Crab Credit Union"
//! RUST_LOG=atm_simulator=debug cargo run
//! ```
//!
//! On start-up one user is seeded with a Savings and a Checking account and
//! the generated user id is printed. The login/menu loop then runs until
//! standard input is closed. Nothing is persisted.
//!
//! # Exit Codes
//!
//! - 0: Input closed
//! - 1: Error (PIN hashing unavailable, console I/O failure)

use atm_simulator::cli;
use atm_simulator::{Bank, BankError, Console, UserId};
use std::io;
use std::process;

const SEED_FIRST_NAME: &str = "Ivan";
const SEED_LAST_NAME: &str = "Zelenkov";
const SEED_PIN: &str = "1234";

fn seed(bank: &mut Bank) -> Result<UserId, BankError> {
    bank.config().pin_hash.validate()?;

    let user = bank.add_user(SEED_FIRST_NAME, SEED_LAST_NAME, SEED_PIN)?;
    bank.open_account(&user, "Checking")?;
    Ok(user)
}

fn main() {
    let args = cli::parse_args();
    cli::init_logging(&args.log_level);

    let mut bank = Bank::new(args.bank_name.clone(), args.to_bank_config());

    let user = match seed(&mut bank) {
        Ok(user) => user,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    println!(
        "New user {}, {} with ID {} created.",
        SEED_LAST_NAME, SEED_FIRST_NAME, user
    );

    let stdin = io::stdin();
    let mut console = Console::new(&mut bank, stdin.lock(), io::stdout());
    if let Err(e) = console.run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
