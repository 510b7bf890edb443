//! Account types for the ATM ledger
//!
//! This module defines the Account structure that is loaded into memory for
//! the duration of one authenticated session and persisted by the account
//! store after every committed mutation.

use rust_decimal::Decimal;

/// A persisted account record
///
/// Represents one user of the ledger: a unique username (also the storage
/// identifier), the PIN shared secret, and the current balance.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Unique username, immutable once the account is created
    ///
    /// Doubles as the storage identifier: the record lives in a file named
    /// after the username. The identifier space is flat, one record per
    /// username.
    pub username: String,

    /// The PIN credential, compared by exact case-sensitive string match
    ///
    /// Never empty after any committed operation.
    pub pin: String,

    /// Current balance
    ///
    /// Non-negative after any committed operation. Withdrawals that would
    /// drive it below zero are rejected before any state changes.
    pub balance: Decimal,
}

impl Account {
    /// Create a new in-memory account
    pub fn new(username: impl Into<String>, pin: impl Into<String>, balance: Decimal) -> Self {
        Account {
            username: username.into(),
            pin: pin.into(),
            balance,
        }
    }
}
