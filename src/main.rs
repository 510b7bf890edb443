//! ATM Ledger CLI
//!
//! Interactive console front end for the file-backed account ledger.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --data-dir /var/atm
//! ```
//!
//! Account records are kept under `<data-dir>/users` and the daily audit
//! trail under `<data-dir>/logs`; both default to the current directory.
//! Operational logging is controlled via `RUST_LOG` (e.g. `RUST_LOG=debug`).
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (terminal I/O failure)

use atm_ledger::cli;
use atm_ledger::{FileAccountStore, FileAuditLog, Ledger};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Operational log channel; the audit trail is a separate domain artifact
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();

    let ledger = Ledger::new(
        FileAccountStore::new(args.accounts_dir()),
        FileAuditLog::new(args.logs_dir()),
    );

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();

    if let Err(e) = cli::menu::run(&ledger, &mut input, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
