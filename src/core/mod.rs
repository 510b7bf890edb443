//! Core business logic module
//!
//! This module contains the ledger's core components:
//! - `traits` - Trait abstractions for the storage and audit backends
//! - `engine` - The `Ledger` orchestration layer with the boundary operations

pub mod engine;
pub mod traits;

pub use engine::Ledger;
pub use traits::{AccountStore, AuditLog};
