//! Ledger engine
//!
//! This module provides the `Ledger`, the orchestration layer that exposes
//! the boundary operations `register`, `authenticate`, `check_balance`,
//! `deposit`, `withdraw`, and `change_pin` on top of an account store and an
//! audit log.
//!
//! The engine enforces the business rules:
//! - Amount validation precedes any state change
//! - The balance never goes negative; a withdrawal that would do so is
//!   rejected with `InsufficientFunds` and nothing is persisted
//! - Every mutation is persisted whole before the in-memory account is
//!   updated, so a failed save leaves memory and disk consistent
//! - One audit entry per committed mutation; an audit-write failure is
//!   surfaced on the operational log channel but never rolls back a commit

use crate::core::traits::{AccountStore, AuditLog};
use crate::types::{Account, LedgerError};
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::{debug, warn};

/// The account ledger
///
/// Owns an account store for persistence and an audit log for the trail of
/// committed mutations. All validation lives here; callers (the interactive
/// adapter) forward raw input strings and render the typed results.
pub struct Ledger<S: AccountStore, A: AuditLog> {
    store: S,
    audit: A,
}

impl<S: AccountStore, A: AuditLog> Ledger<S, A> {
    /// Create a new ledger over the given store and audit log
    pub fn new(store: S, audit: A) -> Self {
        Ledger { store, audit }
    }

    /// Register a new account
    ///
    /// Validates the PIN is non-empty and the initial balance parses as a
    /// non-negative decimal, then creates the record and writes an audit
    /// entry.
    ///
    /// # Arguments
    ///
    /// * `username` - The unique username for the new account
    /// * `pin` - The PIN credential (must be non-empty)
    /// * `initial_balance` - Raw balance input, parsed as a decimal
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The PIN is empty (`EmptyPin`)
    /// - The balance input is not a decimal or is negative (`InvalidAmount`)
    /// - A record already exists for the username (`DuplicateUsername`)
    pub fn register(
        &self,
        username: &str,
        pin: &str,
        initial_balance: &str,
    ) -> Result<Account, LedgerError> {
        if pin.is_empty() {
            return Err(LedgerError::EmptyPin);
        }

        let balance = parse_amount(initial_balance)?;
        if balance < Decimal::ZERO {
            return Err(LedgerError::invalid_amount(initial_balance));
        }

        let account = self.store.create(username, pin, balance)?;
        debug!(username, %balance, "account registered");

        self.record_audit(&format!(
            "User {} registered with initial balance of {} units.",
            account.username, account.balance
        ));

        Ok(account)
    }

    /// Authenticate a user
    ///
    /// Loads the account and compares the supplied PIN to the stored PIN
    /// using exact, case-sensitive string equality. No retry limiting or
    /// lockout: the caller may attempt as often as it likes.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No record exists (`AccountNotFound`)
    /// - The record cannot be parsed (`MalformedRecord`)
    /// - The PIN does not match (`InvalidCredentials`)
    pub fn authenticate(&self, username: &str, supplied_pin: &str) -> Result<Account, LedgerError> {
        let account = self.store.load(username)?;

        if supplied_pin != account.pin {
            return Err(LedgerError::invalid_credentials(username));
        }

        debug!(username, "authenticated");
        Ok(account)
    }

    /// Return the current balance
    ///
    /// Pure read: no mutation, no persistence, no audit entry.
    pub fn check_balance(&self, account: &Account) -> Decimal {
        account.balance
    }

    /// Deposit funds into an authenticated account
    ///
    /// Validates the amount, computes the new balance with checked
    /// arithmetic, persists the full record, and only then applies the
    /// mutation in memory.
    ///
    /// # Arguments
    ///
    /// * `account` - The authenticated in-memory account
    /// * `amount` - Raw amount input, parsed as a decimal
    ///
    /// # Returns
    ///
    /// The new balance on success.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input is not a decimal or is not strictly positive
    ///   (`InvalidAmount`)
    /// - The checked addition fails (`ArithmeticOverflow`)
    /// - Persistence fails (the in-memory account is left unchanged)
    pub fn deposit(&self, account: &mut Account, amount: &str) -> Result<Decimal, LedgerError> {
        let amount = parse_positive_amount(amount)?;

        let new_balance = account
            .balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("deposit", &account.username))?;

        self.commit_balance(account, new_balance)?;

        self.record_audit(&format!(
            "User {} deposited {} units. New balance: {}",
            account.username, amount, new_balance
        ));

        Ok(new_balance)
    }

    /// Withdraw funds from an authenticated account
    ///
    /// Validates the amount and rejects any withdrawal that would drive the
    /// balance below zero. On rejection nothing is persisted and no audit
    /// entry is written.
    ///
    /// # Returns
    ///
    /// The new balance on success.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input is not a decimal or is not strictly positive
    ///   (`InvalidAmount`)
    /// - The amount exceeds the balance (`InsufficientFunds`)
    /// - Persistence fails (the in-memory account is left unchanged)
    pub fn withdraw(&self, account: &mut Account, amount: &str) -> Result<Decimal, LedgerError> {
        let amount = parse_positive_amount(amount)?;

        if amount > account.balance {
            return Err(LedgerError::insufficient_funds(account.balance, amount));
        }

        let new_balance = account
            .balance
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("withdrawal", &account.username))?;

        self.commit_balance(account, new_balance)?;

        self.record_audit(&format!(
            "User {} withdrew {} units. Remaining balance: {}",
            account.username, amount, new_balance
        ));

        Ok(new_balance)
    }

    /// Change the PIN of an authenticated account
    ///
    /// Validation order: current PIN must match the stored PIN, the new PIN
    /// and confirmation must match, and the new PIN must be non-empty. Any
    /// failure leaves the account untouched. On success the full record
    /// (new PIN plus unchanged balance) is persisted.
    ///
    /// # Returns
    ///
    /// The unchanged balance on success.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The current-PIN input is wrong (`PinMismatch`)
    /// - The confirmation differs from the new PIN
    ///   (`PinConfirmationMismatch`)
    /// - The new PIN is empty (`EmptyPin`)
    /// - Persistence fails (the in-memory account is left unchanged)
    pub fn change_pin(
        &self,
        account: &mut Account,
        current_pin: &str,
        new_pin: &str,
        confirm_pin: &str,
    ) -> Result<Decimal, LedgerError> {
        if current_pin != account.pin {
            return Err(LedgerError::PinMismatch);
        }
        if new_pin != confirm_pin {
            return Err(LedgerError::PinConfirmationMismatch);
        }
        if new_pin.is_empty() {
            return Err(LedgerError::EmptyPin);
        }

        // Persist the candidate record first; apply in memory only on success.
        let candidate = Account {
            pin: new_pin.to_string(),
            ..account.clone()
        };
        self.store.save(&candidate)?;
        account.pin = candidate.pin;
        debug!(username = %account.username, "pin changed");

        self.record_audit(&format!("User {} changed their PIN.", account.username));

        Ok(account.balance)
    }

    /// Persist a balance change, then apply it to the in-memory account
    ///
    /// The candidate record is saved before the in-memory account is touched:
    /// if the save fails, the caller still holds the pre-operation state and
    /// memory and disk have not diverged.
    fn commit_balance(
        &self,
        account: &mut Account,
        new_balance: Decimal,
    ) -> Result<(), LedgerError> {
        let candidate = Account {
            balance: new_balance,
            ..account.clone()
        };
        self.store.save(&candidate)?;
        account.balance = new_balance;
        debug!(username = %account.username, balance = %new_balance, "balance committed");
        Ok(())
    }

    /// Append an audit entry for an already-committed mutation
    ///
    /// Non-fatal by contract: the mutation is durable before this runs, so a
    /// write failure is surfaced on the operational channel and swallowed.
    fn record_audit(&self, message: &str) {
        if let Err(e) = self.audit.append(message) {
            warn!(error = %e, "audit trail write failed; mutation remains committed");
        }
    }
}

/// Parse an amount input as a decimal
fn parse_amount(input: &str) -> Result<Decimal, LedgerError> {
    Decimal::from_str(input.trim()).map_err(|_| LedgerError::invalid_amount(input))
}

/// Parse an amount input and require it to be strictly positive
fn parse_positive_amount(input: &str) -> Result<Decimal, LedgerError> {
    let amount = parse_amount(input)?;
    if amount <= Decimal::ZERO {
        return Err(LedgerError::invalid_amount(input));
    }
    Ok(amount)
}
