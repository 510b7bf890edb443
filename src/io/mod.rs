//! I/O module
//!
//! File-backed implementations of the core storage traits.
//!
//! # Components
//!
//! - `file_store` - Per-username account record files
//! - `audit_log` - Daily append-only audit trail files

pub mod audit_log;
pub mod file_store;

pub use audit_log::FileAuditLog;
pub use file_store::FileAccountStore;
