//! Error types for the ATM ledger
//!
//! This module defines all error kinds that can occur while operating on the
//! ledger. Errors are designed to be descriptive and user-friendly for CLI
//! output: the interactive adapter renders their `Display` text and re-prompts.
//!
//! # Error Categories
//!
//! - **Storage Errors**: missing or unparseable account records, I/O failures
//! - **Credential Errors**: wrong PIN at login or during a PIN change
//! - **Transaction Errors**: invalid amounts, insufficient funds, overflow
//! - **Audit Errors**: audit-trail write failures (non-fatal by design)

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the ATM ledger
///
/// This enum represents all failure modes of the account store, the
/// authentication gate, the transaction engine, and the audit log. Each
/// variant carries the context needed to diagnose the failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// A registration targeted a username that already has a record
    ///
    /// The existing record is left untouched.
    #[error("Username '{username}' already exists")]
    DuplicateUsername {
        /// The username that is already taken
        username: String,
    },

    /// No account record exists for the requested username
    #[error("Account '{username}' not found")]
    AccountNotFound {
        /// The username that was looked up
        username: String,
    },

    /// A stored account record could not be parsed
    ///
    /// The record must contain exactly three lines (username, PIN, balance)
    /// with a valid decimal balance. Anything else is reported as malformed
    /// rather than silently repaired.
    #[error("Malformed record for '{username}': {reason}")]
    MalformedRecord {
        /// The username whose record failed to parse
        username: String,
        /// What was wrong with the record
        reason: String,
    },

    /// The supplied PIN did not match the stored PIN at login
    ///
    /// Unlimited retries are permitted; this error never locks the account.
    #[error("Incorrect PIN for '{username}'")]
    InvalidCredentials {
        /// The username that failed authentication
        username: String,
    },

    /// An amount input failed validation
    ///
    /// Amounts must parse as decimals; deposits and withdrawals additionally
    /// require a strictly positive value, registration a non-negative one.
    #[error("Invalid amount '{input}'")]
    InvalidAmount {
        /// The raw input that was rejected
        input: String,
    },

    /// A withdrawal requested more than the available balance
    ///
    /// The balance is unchanged, nothing is persisted, and no audit entry
    /// is written.
    #[error("Insufficient funds: available {available}, requested {requested}")]
    InsufficientFunds {
        /// Current balance
        available: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// The current-PIN input of a PIN change did not match the stored PIN
    #[error("Incorrect current PIN")]
    PinMismatch,

    /// The new PIN and its confirmation did not match
    #[error("New PINs do not match")]
    PinConfirmationMismatch,

    /// An empty PIN was supplied at registration or as a new PIN
    ///
    /// The account invariant requires a non-empty PIN at all times.
    #[error("PIN must not be empty")]
    EmptyPin,

    /// Checked decimal arithmetic failed
    ///
    /// The operation is rejected and the account is left unchanged.
    #[error("Arithmetic overflow in {operation} for '{username}'")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Username of the affected account
        username: String,
    },

    /// The audit trail could not be written
    ///
    /// This is the one non-fatal error kind: the account mutation has already
    /// been committed by the time the audit append runs, so the failure is
    /// surfaced on the operational log channel instead of rolling anything
    /// back.
    #[error("Audit write failed: {message}")]
    AuditWriteFailed {
        /// Description of the audit I/O failure
        message: String,
    },

    /// I/O error while reading or writing an account record
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::Io {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create a DuplicateUsername error
    pub fn duplicate_username(username: &str) -> Self {
        LedgerError::DuplicateUsername {
            username: username.to_string(),
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(username: &str) -> Self {
        LedgerError::AccountNotFound {
            username: username.to_string(),
        }
    }

    /// Create a MalformedRecord error
    pub fn malformed_record(username: &str, reason: &str) -> Self {
        LedgerError::MalformedRecord {
            username: username.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an InvalidCredentials error
    pub fn invalid_credentials(username: &str) -> Self {
        LedgerError::InvalidCredentials {
            username: username.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(input: &str) -> Self {
        LedgerError::InvalidAmount {
            input: input.to_string(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(available: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientFunds {
            available,
            requested,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, username: &str) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            username: username.to_string(),
        }
    }

    /// Create an AuditWriteFailed error
    pub fn audit_write_failed(message: &str) -> Self {
        LedgerError::AuditWriteFailed {
            message: message.to_string(),
        }
    }
}
