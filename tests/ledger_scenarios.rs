//! End-to-end ledger scenarios
//!
//! These tests exercise the full stack — `Ledger` over the real
//! `FileAccountStore` and `FileAuditLog` in a temp directory — through
//! complete register/authenticate/transact flows, and verify both the
//! returned values and the durable state (record files, audit trail).

use atm_ledger::core::traits::AccountStore;
use atm_ledger::{FileAccountStore, FileAuditLog, Ledger, LedgerError};
use rstest::rstest;
use rust_decimal::Decimal;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tempfile::TempDir;

fn ledger_in(dir: &TempDir) -> Ledger<FileAccountStore, FileAuditLog> {
    Ledger::new(
        FileAccountStore::new(dir.path().join("users")),
        FileAuditLog::new(dir.path().join("logs")),
    )
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Total number of lines across all audit log files
fn audit_line_count(dir: &TempDir) -> usize {
    let logs = dir.path().join("logs");
    if !logs.exists() {
        return 0;
    }
    fs::read_dir(logs)
        .unwrap()
        .map(|entry| {
            fs::read_to_string(entry.unwrap().path())
                .unwrap()
                .lines()
                .count()
        })
        .sum()
}

#[test]
fn scenario_register_then_load() {
    let dir = TempDir::new().unwrap();
    let ledger = ledger_in(&dir);

    ledger.register("alice", "1234", "100.00").unwrap();

    let store = FileAccountStore::new(dir.path().join("users"));
    let account = store.load("alice").unwrap();
    assert_eq!(account.username, "alice");
    assert_eq!(account.pin, "1234");
    assert_eq!(account.balance, dec("100.00"));
}

#[test]
fn scenario_deposit_grows_balance_and_audit_trail() {
    let dir = TempDir::new().unwrap();
    let ledger = ledger_in(&dir);

    let mut account = ledger.register("alice", "1234", "100.00").unwrap();
    let entries_before = audit_line_count(&dir);

    let balance = ledger.deposit(&mut account, "50.00").unwrap();

    assert_eq!(balance, dec("150.00"));
    assert_eq!(audit_line_count(&dir), entries_before + 1);
}

#[test]
fn scenario_overdraft_rejected_without_side_effects() {
    let dir = TempDir::new().unwrap();
    let ledger = ledger_in(&dir);

    let mut account = ledger.register("alice", "1234", "100.00").unwrap();
    ledger.deposit(&mut account, "50.00").unwrap();
    let entries_before = audit_line_count(&dir);

    let result = ledger.withdraw(&mut account, "500.00");

    assert_eq!(
        result,
        Err(LedgerError::insufficient_funds(dec("150.00"), dec("500.00")))
    );
    assert_eq!(account.balance, dec("150.00"));
    assert_eq!(audit_line_count(&dir), entries_before);

    // Durable state also unchanged
    let reloaded = ledger.authenticate("alice", "1234").unwrap();
    assert_eq!(reloaded.balance, dec("150.00"));
}

#[test]
fn scenario_pin_change_preserves_balance() {
    let dir = TempDir::new().unwrap();
    let ledger = ledger_in(&dir);

    let mut account = ledger.register("alice", "1234", "100.00").unwrap();
    ledger.deposit(&mut account, "50.00").unwrap();

    let balance = ledger
        .change_pin(&mut account, "1234", "9999", "9999")
        .unwrap();

    assert_eq!(balance, dec("150.00"));
    let reloaded = ledger.authenticate("alice", "9999").unwrap();
    assert_eq!(reloaded.pin, "9999");
    assert_eq!(reloaded.balance, dec("150.00"));
}

#[test]
fn scenario_duplicate_registration_rejected() {
    let dir = TempDir::new().unwrap();
    let ledger = ledger_in(&dir);

    ledger.register("alice", "1234", "100.00").unwrap();
    let result = ledger.register("alice", "0000", "1.00");

    assert!(matches!(result, Err(LedgerError::DuplicateUsername { .. })));

    // Original record untouched on disk
    let contents =
        fs::read_to_string(dir.path().join("users").join("alice.txt")).unwrap();
    assert_eq!(contents, "alice\n1234\n100.00");
}

#[rstest]
#[case::exact_balance("150.00", "150.00", "0")]
#[case::partial("150.00", "149.99", "0.01")]
#[case::small_account("0.01", "0.01", "0.00")]
fn withdrawals_never_drive_balance_negative(
    #[case] start: &str,
    #[case] withdraw: &str,
    #[case] remaining: &str,
) {
    let dir = TempDir::new().unwrap();
    let ledger = ledger_in(&dir);

    let mut account = ledger.register("alice", "1234", start).unwrap();
    let balance = ledger.withdraw(&mut account, withdraw).unwrap();

    assert_eq!(balance, dec(remaining));
    assert!(balance >= Decimal::ZERO);
}

#[rstest]
#[case::whole("100.00", "25.00")]
#[case::fractional("10.50", "0.05")]
#[case::large("100.00", "99999.99")]
fn deposit_then_withdraw_round_trip(#[case] start: &str, #[case] amount: &str) {
    let dir = TempDir::new().unwrap();
    let ledger = ledger_in(&dir);

    let mut account = ledger.register("alice", "1234", start).unwrap();
    ledger.deposit(&mut account, amount).unwrap();
    ledger.withdraw(&mut account, amount).unwrap();

    assert_eq!(account.balance, dec(start));
}

#[test]
fn multiple_sessions_share_durable_state() {
    let dir = TempDir::new().unwrap();

    // Session one registers and deposits
    {
        let ledger = ledger_in(&dir);
        let mut account = ledger.register("alice", "1234", "100.00").unwrap();
        ledger.deposit(&mut account, "25.00").unwrap();
    }

    // Session two sees the committed balance
    let ledger = ledger_in(&dir);
    let account = ledger.authenticate("alice", "1234").unwrap();
    assert_eq!(account.balance, dec("125.00"));
}

#[test]
fn audit_entries_are_timestamped_and_ordered() {
    let dir = TempDir::new().unwrap();
    let ledger = ledger_in(&dir);

    let mut account = ledger.register("alice", "1234", "100.00").unwrap();
    ledger.deposit(&mut account, "50.00").unwrap();
    ledger.withdraw(&mut account, "20.00").unwrap();

    let logs = dir.path().join("logs");
    let day_files: Vec<_> = fs::read_dir(&logs).unwrap().collect();
    assert_eq!(day_files.len(), 1, "all entries fall in one calendar day");

    let contents = fs::read_to_string(day_files[0].as_ref().unwrap().path()).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("registered with initial balance of 100.00 units."));
    assert!(lines[1].contains("deposited 50.00 units. New balance: 150.00"));
    assert!(lines[2].contains("withdrew 20.00 units. Remaining balance: 130.00"));

    // Each line is `<timestamp>: <message>`
    for line in lines {
        let (timestamp, _) = line.split_once(": ").unwrap();
        assert_eq!(timestamp.len(), "2026-08-25 14:03:07".len());
    }
}

#[test]
fn tampered_record_is_reported_as_malformed() {
    let dir = TempDir::new().unwrap();
    let ledger = ledger_in(&dir);

    ledger.register("alice", "1234", "100.00").unwrap();
    fs::write(
        dir.path().join("users").join("alice.txt"),
        "alice\n1234\nnot-a-number",
    )
    .unwrap();

    let result = ledger.authenticate("alice", "1234");
    assert!(matches!(result, Err(LedgerError::MalformedRecord { .. })));
}

#[test]
fn storage_layout_matches_contract() {
    let dir = TempDir::new().unwrap();
    let ledger = ledger_in(&dir);

    let mut account = ledger.register("alice", "1234", "100.00").unwrap();
    ledger.deposit(&mut account, "0.50").unwrap();

    assert!(Path::new(&dir.path().join("users").join("alice.txt")).exists());

    let contents =
        fs::read_to_string(dir.path().join("users").join("alice.txt")).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines, vec!["alice", "1234", "100.50"]);
}
