//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: the persisted account record
//! - `error`: error kinds for the ledger

pub mod account;
pub mod error;

pub use account::Account;
pub use error::LedgerError;
