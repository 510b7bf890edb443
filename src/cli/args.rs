use clap::Parser;
use std::path::PathBuf;

/// Interactive ATM over a file-backed account ledger
#[derive(Parser, Debug)]
#[command(name = "atm-ledger")]
#[command(about = "Interactive ATM over a file-backed account ledger", long_about = None)]
pub struct CliArgs {
    /// Storage root for account records and audit logs
    ///
    /// Account records live under `<data-dir>/users`, audit logs under
    /// `<data-dir>/logs`. Both directories are created on first write.
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        default_value = ".",
        help = "Storage root; accounts go to <DIR>/users, audit logs to <DIR>/logs"
    )]
    pub data_dir: PathBuf,
}

impl CliArgs {
    /// Directory holding the per-username account records
    pub fn accounts_dir(&self) -> PathBuf {
        self.data_dir.join("users")
    }

    /// Directory holding the daily audit log files
    pub fn logs_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::default(&["program"], ".")]
    #[case::explicit(&["program", "--data-dir", "/var/atm"], "/var/atm")]
    fn test_data_dir_parsing(#[case] args: &[&str], #[case] expected: &str) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.data_dir, PathBuf::from(expected));
    }

    #[test]
    fn test_derived_directories() {
        let parsed = CliArgs::try_parse_from(["program", "--data-dir", "/var/atm"]).unwrap();

        assert_eq!(parsed.accounts_dir(), PathBuf::from("/var/atm/users"));
        assert_eq!(parsed.logs_dir(), PathBuf::from("/var/atm/logs"));
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let result = CliArgs::try_parse_from(["program", "--strategy", "sync"]);
        assert!(result.is_err());
    }
}
