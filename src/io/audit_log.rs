//! File-backed audit trail
//!
//! Append-only record of committed mutations, grouped by calendar day: one
//! `YYYY-MM-DD.txt` file per day under a configured logs directory, one
//! timestamped line per entry:
//!
//! ```text
//! 2026-08-25 14:03:07: User alice deposited 50.00 units. New balance: 150.00
//! ```
//!
//! The day's file is created on first write. Nothing in the system reads the
//! trail back, and a failed append never rolls back the mutation that
//! triggered it; the engine surfaces the failure on the operational log
//! channel instead.

use crate::core::traits::AuditLog;
use crate::types::LedgerError;
use chrono::{DateTime, Local};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Audit log over daily append-only text files
#[derive(Debug, Clone)]
pub struct FileAuditLog {
    dir: PathBuf,
}

impl FileAuditLog {
    /// Create an audit log rooted at the given logs directory
    ///
    /// The directory is created lazily on the first append.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileAuditLog { dir: dir.into() }
    }

    /// Append one line for the given instant
    ///
    /// Split out from [`AuditLog::append`] so tests can pin the clock.
    fn append_at(&self, now: DateTime<Local>, message: &str) -> Result<(), LedgerError> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| LedgerError::audit_write_failed(&e.to_string()))?;

        let path = self.dir.join(format!("{}.txt", now.format("%Y-%m-%d")));
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| LedgerError::audit_write_failed(&e.to_string()))?;

        writeln!(file, "{}: {}", now.format("%Y-%m-%d %H:%M:%S"), message)
            .map_err(|e| LedgerError::audit_write_failed(&e.to_string()))?;

        Ok(())
    }
}

impl AuditLog for FileAuditLog {
    /// Append one timestamped line to the current day's log file
    ///
    /// # Errors
    ///
    /// Returns `AuditWriteFailed` if the directory or file cannot be created
    /// or the line cannot be written.
    fn append(&self, message: &str) -> Result<(), LedgerError> {
        self.append_at(Local::now(), message)
    }
}
