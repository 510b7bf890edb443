//! Core traits for account persistence and audit logging
//!
//! This module defines the trait abstractions that decouple the ledger from
//! its storage backends. The engine is generic over both, which keeps the
//! business rules testable against in-memory or failing doubles without
//! touching the filesystem.

use crate::types::{Account, LedgerError};
use rust_decimal::Decimal;

/// Trait for the account store
///
/// One record per username, flat identifier space. A record is always written
/// whole; there are no partial-field updates.
pub trait AccountStore {
    /// Create a new account record
    ///
    /// Fails with `DuplicateUsername` if a record already exists for the
    /// username.
    fn create(&self, username: &str, pin: &str, balance: Decimal)
        -> Result<Account, LedgerError>;

    /// Load the account record for a username
    ///
    /// Fails with `AccountNotFound` if no record exists, or with
    /// `MalformedRecord` if the stored record cannot be parsed.
    fn load(&self, username: &str) -> Result<Account, LedgerError>;

    /// Persist the full current state of an account
    ///
    /// Overwrites any prior record for the username.
    fn save(&self, account: &Account) -> Result<(), LedgerError>;
}

/// Trait for the append-only audit trail
///
/// One entry per committed mutation. Nothing in the system reads the audit
/// trail back; it exists for operators.
pub trait AuditLog {
    /// Append one timestamped message to the current day's log
    fn append(&self, message: &str) -> Result<(), LedgerError>;
}
