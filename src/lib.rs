//! ATM Ledger Library
//! # Overview
//!
//! This library provides a file-backed account ledger: per-username account
//! records (username, PIN, decimal balance), PIN authentication, and
//! balance-mutating operations under correctness invariants, with an
//! append-only daily audit trail.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, LedgerError)
//! - [`cli`] - Argument parsing and the interactive console adapter
//! - [`core`] - Business logic components:
//!   - [`core::engine`] - The `Ledger` orchestration layer with the boundary
//!     operations (register, authenticate, check balance, deposit, withdraw,
//!     change PIN)
//!   - [`core::traits`] - Storage and audit trait seams
//! - [`io`] - File-backed implementations:
//!   - [`io::file_store`] - One three-line text record per username
//!   - [`io::audit_log`] - One append-only log file per calendar day
//!
//! # Invariants
//!
//! - The balance never goes negative after a committed operation
//! - The PIN is never empty after a committed operation
//! - Every mutation is persisted whole before the in-memory account changes,
//!   so a failed save never leaves memory and disk diverged
//! - Each committed mutation appends exactly one audit entry; an audit-write
//!   failure is surfaced operationally but never rolls back the commit

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use self::core::{AccountStore, AuditLog, Ledger};
pub use io::{FileAccountStore, FileAuditLog};
pub use types::{Account, LedgerError};
