//! File-backed account store
//!
//! One UTF-8 text file per username under a configured accounts directory.
//! A record is three ordered lines:
//!
//! ```text
//! username
//! pin
//! balance
//! ```
//!
//! The balance is a decimal rendered as a string. Records are always written
//! whole; `save` rewrites the entire file via a sibling temp file followed by
//! a rename, so a crash mid-save leaves either the old record or the new one,
//! never a truncated mix.
//!
//! # Identifier space
//!
//! The storage location is derived directly from the username
//! (`<dir>/<username>.txt`), flat, one record per username. Usernames are not
//! sanitized here; exotic characters are left to the platform's path rules.

use crate::core::traits::AccountStore;
use crate::types::{Account, LedgerError};
use rust_decimal::Decimal;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Account store over per-username text files
///
/// # Examples
///
/// ```no_run
/// use atm_ledger::core::traits::AccountStore;
/// use atm_ledger::io::FileAccountStore;
/// use rust_decimal::Decimal;
///
/// let store = FileAccountStore::new("users");
/// let account = store.create("alice", "1234", Decimal::new(10000, 2)).unwrap();
/// assert_eq!(store.load("alice").unwrap(), account);
/// ```
#[derive(Debug, Clone)]
pub struct FileAccountStore {
    dir: PathBuf,
}

impl FileAccountStore {
    /// Create a store rooted at the given accounts directory
    ///
    /// The directory is created lazily on the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileAccountStore { dir: dir.into() }
    }

    /// Path of the record file for a username
    fn record_path(&self, username: &str) -> PathBuf {
        self.dir.join(format!("{username}.txt"))
    }

    /// Render an account as its three-line record text
    fn render(account: &Account) -> String {
        format!("{}\n{}\n{}", account.username, account.pin, account.balance)
    }

    /// Parse a record file's contents into an Account
    ///
    /// Requires exactly three lines with a decimal balance on the third.
    fn parse(username: &str, contents: &str) -> Result<Account, LedgerError> {
        let lines: Vec<&str> = contents.lines().collect();
        if lines.len() != 3 {
            return Err(LedgerError::malformed_record(
                username,
                &format!("expected 3 lines, found {}", lines.len()),
            ));
        }

        let balance = Decimal::from_str(lines[2]).map_err(|_| {
            LedgerError::malformed_record(username, &format!("invalid balance '{}'", lines[2]))
        })?;

        Ok(Account {
            username: lines[0].to_string(),
            pin: lines[1].to_string(),
            balance,
        })
    }

    /// Write a full record atomically
    ///
    /// Writes to a sibling `.tmp` file and renames it over the record path.
    fn write_record(&self, path: &Path, contents: &str) -> Result<(), LedgerError> {
        fs::create_dir_all(&self.dir)?;

        let tmp_path = path.with_extension("txt.tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(&tmp_path, path)?;
        Ok(())
    }
}

impl AccountStore for FileAccountStore {
    /// Create a new account record
    ///
    /// # Errors
    ///
    /// Returns `DuplicateUsername` if a record file already exists for the
    /// username, or `Io` if the write fails.
    fn create(
        &self,
        username: &str,
        pin: &str,
        balance: Decimal,
    ) -> Result<Account, LedgerError> {
        let path = self.record_path(username);
        if path.exists() {
            return Err(LedgerError::duplicate_username(username));
        }

        let account = Account::new(username, pin, balance);
        self.write_record(&path, &Self::render(&account))?;
        debug!(username, path = %path.display(), "account record created");

        Ok(account)
    }

    /// Load the account record for a username
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if no record file exists, `MalformedRecord`
    /// if the file does not parse into exactly username/pin/balance, or `Io`
    /// for other read failures.
    fn load(&self, username: &str) -> Result<Account, LedgerError> {
        let path = self.record_path(username);

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(LedgerError::account_not_found(username));
            }
            Err(e) => return Err(e.into()),
        };

        Self::parse(username, &contents)
    }

    /// Persist the full current state of an account
    ///
    /// Overwrites any prior record for the username. No partial-field
    /// updates: the entire three-line record is rewritten each time.
    fn save(&self, account: &Account) -> Result<(), LedgerError> {
        let path = self.record_path(&account.username);
        self.write_record(&path, &Self::render(account))?;
        debug!(username = %account.username, "account record saved");
        Ok(())
    }
}
