//! Interactive console adapter
//!
//! Owns all prompting, menu parsing, and rendering. Every amount and PIN is
//! forwarded to the ledger as a raw trimmed string; the core performs all
//! validation and this module only displays the typed results or the error's
//! `Display` text and re-prompts.
//!
//! The loops are generic over reader and writer so they can be exercised
//! with scripted input in tests.

use crate::core::traits::{AccountStore, AuditLog};
use crate::core::Ledger;
use crate::types::Account;
use std::io::{self, BufRead, Write};

/// Run the outer menu loop until the user exits or input ends
///
/// Menu: Register / Login / Exit. Unknown choices re-prompt. End of input is
/// treated as exit so scripted sessions terminate cleanly.
pub fn run<S, A, R, W>(ledger: &Ledger<S, A>, input: &mut R, output: &mut W) -> io::Result<()>
where
    S: AccountStore,
    A: AuditLog,
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(output, "\n--- ATM ---")?;
        writeln!(output, "1. Register")?;
        writeln!(output, "2. Login")?;
        writeln!(output, "3. Exit")?;

        let Some(option) = prompt(input, output, "Select an option: ")? else {
            return Ok(());
        };

        match option.as_str() {
            "1" => register(ledger, input, output)?,
            "2" => login(ledger, input, output)?,
            "3" => {
                writeln!(output, "Thank you for using the ATM!")?;
                return Ok(());
            }
            _ => writeln!(output, "Invalid option. Try again.")?,
        }
    }
}

/// Prompt for registration details and render the outcome
fn register<S, A, R, W>(ledger: &Ledger<S, A>, input: &mut R, output: &mut W) -> io::Result<()>
where
    S: AccountStore,
    A: AuditLog,
    R: BufRead,
    W: Write,
{
    let Some(username) = prompt(input, output, "Enter your username: ")? else {
        return Ok(());
    };
    let Some(pin) = prompt(input, output, "Enter your PIN: ")? else {
        return Ok(());
    };
    let Some(balance) = prompt(input, output, "Enter your initial balance: ")? else {
        return Ok(());
    };

    match ledger.register(&username, &pin, &balance) {
        Ok(_) => writeln!(output, "User registered successfully!"),
        Err(e) => writeln!(output, "{e}"),
    }
}

/// Prompt for credentials and, on success, run the session loop
fn login<S, A, R, W>(ledger: &Ledger<S, A>, input: &mut R, output: &mut W) -> io::Result<()>
where
    S: AccountStore,
    A: AuditLog,
    R: BufRead,
    W: Write,
{
    let Some(username) = prompt(input, output, "Enter your username: ")? else {
        return Ok(());
    };
    let Some(pin) = prompt(input, output, "Enter your PIN: ")? else {
        return Ok(());
    };

    match ledger.authenticate(&username, &pin) {
        Ok(account) => {
            writeln!(
                output,
                "Welcome {}! Your current balance is {} units.",
                account.username, account.balance
            )?;
            session(ledger, account, input, output)
        }
        Err(e) => writeln!(output, "{e}"),
    }
}

/// Run the per-session operations loop until logout or end of input
fn session<S, A, R, W>(
    ledger: &Ledger<S, A>,
    mut account: Account,
    input: &mut R,
    output: &mut W,
) -> io::Result<()>
where
    S: AccountStore,
    A: AuditLog,
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(output, "\n--- ATM Operations ---")?;
        writeln!(output, "1. Check Balance")?;
        writeln!(output, "2. Deposit Money")?;
        writeln!(output, "3. Withdraw Money")?;
        writeln!(output, "4. Change PIN")?;
        writeln!(output, "5. Logout")?;

        let Some(choice) = prompt(input, output, "Select an operation: ")? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => {
                writeln!(
                    output,
                    "Your current balance: {} units.",
                    ledger.check_balance(&account)
                )?;
            }
            "2" => {
                let Some(amount) = prompt(input, output, "Enter the amount to deposit: ")? else {
                    return Ok(());
                };
                match ledger.deposit(&mut account, &amount) {
                    Ok(balance) => writeln!(
                        output,
                        "You successfully deposited {} units. New balance: {}",
                        amount, balance
                    )?,
                    Err(e) => writeln!(output, "{e}")?,
                }
            }
            "3" => {
                let Some(amount) = prompt(input, output, "Enter the amount to withdraw: ")? else {
                    return Ok(());
                };
                match ledger.withdraw(&mut account, &amount) {
                    Ok(balance) => writeln!(
                        output,
                        "You successfully withdrew {} units. Remaining balance: {}",
                        amount, balance
                    )?,
                    Err(e) => writeln!(output, "{e}")?,
                }
            }
            "4" => {
                let Some(current) = prompt(input, output, "Enter your current PIN: ")? else {
                    return Ok(());
                };
                let Some(new_pin) = prompt(input, output, "Enter your new PIN: ")? else {
                    return Ok(());
                };
                let Some(confirm) = prompt(input, output, "Confirm your new PIN: ")? else {
                    return Ok(());
                };
                match ledger.change_pin(&mut account, &current, &new_pin, &confirm) {
                    Ok(_) => writeln!(output, "PIN successfully changed.")?,
                    Err(e) => writeln!(output, "{e}")?,
                }
            }
            "5" => {
                writeln!(output, "Logged out successfully.")?;
                return Ok(());
            }
            _ => writeln!(output, "Invalid choice. Please try again.")?,
        }
    }
}

/// Print a prompt and read one trimmed line
///
/// Returns `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> io::Result<Option<String>> {
    write!(output, "{text}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
