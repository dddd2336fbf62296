//! Platform scan pipelines.
//!
//! A pipeline knows which utility to run and how to read its output. The
//! [`Scanner`] trait puts both halves behind one interface so the rest of
//! the crate picks a pipeline once, through [`dispatch`], and never branches
//! on the platform again.
//!
//! # Available Scanners
//!
//! | Scanner | Utility | Platform |
//! |---------|---------|----------|
//! | [`AirportScanner`] | `airport -s` | macOS (`darwin`) |
//! | [`NetshScanner`] | `netsh wlan show networks mode=Bssid` | Windows |
//!
//! # Example
//!
//! ```
//! use wifiscan::{scanner::{dispatch, Scanner}, Config};
//!
//! let scanner = dispatch("windows", &Config::default()).unwrap();
//! assert_eq!(scanner.program(), "netsh");
//!
//! assert!(dispatch("linux", &Config::default()).is_err());
//! ```

mod airport;
mod netsh;

pub use airport::{parse_airport_output, AirportScanner};
pub use netsh::{parse_netsh_output, percent_to_dbm, NetshScanner};

use async_trait::async_trait;

use crate::config::Config;
use crate::error::ScanError;
use crate::model::{NetworkRecord, Platform};
use crate::runner::CommandRunner;

/// One platform's way of listing nearby access points.
#[async_trait]
pub trait Scanner: Send + Sync {
    /// Returns the human-readable name of this scanner.
    fn name(&self) -> &'static str;

    fn platform(&self) -> Platform;

    /// Program to run: an absolute path, or a bare name looked up on `PATH`.
    fn program(&self) -> &str;

    fn args(&self) -> &[&'static str];

    /// Converts the utility's stdout into records, in output order.
    ///
    /// Lines or blocks that cannot be read are logged and skipped, so this
    /// never fails. Output with no usable entries gives an empty list.
    fn parse(&self, output: &str) -> Vec<NetworkRecord>;

    /// Runs the utility once and parses what it printed.
    ///
    /// # Errors
    ///
    /// Returns whatever the runner reports: a missing executable, a spawn
    /// failure, or a non-zero exit status.
    async fn scan(&self, runner: &dyn CommandRunner) -> Result<Vec<NetworkRecord>, ScanError> {
        let output = runner.run(self.program(), self.args()).await?;
        Ok(self.parse(&output.stdout))
    }
}

/// Selects the scan pipeline for a platform identifier.
///
/// Accepts `darwin` and `windows` in any letter case. Nothing is executed
/// here, so an unknown identifier fails before any process is started.
///
/// # Errors
///
/// Returns [`ScanError::UnsupportedPlatform`] for any other identifier.
pub fn dispatch(platform_id: &str, config: &Config) -> Result<Box<dyn Scanner>, ScanError> {
    let scanner: Box<dyn Scanner> = match Platform::from_id(platform_id)? {
        Platform::Darwin => Box::new(AirportScanner::with_path(&config.airport_path)),
        Platform::Windows => Box::new(NetshScanner),
    };
    Ok(scanner)
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::runner::CommandOutput;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Runner that answers every call with a canned result and records
    /// what it was asked to run.
    pub struct RecordingRunner {
        reply: Mutex<Option<Result<CommandOutput, ScanError>>>,
        pub calls: AtomicUsize,
        pub last_command: Mutex<Option<(String, Vec<String>)>>,
    }

    impl RecordingRunner {
        pub fn with_stdout(stdout: &str) -> Self {
            Self::with_reply(Ok(CommandOutput {
                stdout: stdout.to_string(),
                stderr: String::new(),
                exit_code: 0,
            }))
        }

        pub fn with_reply(reply: Result<CommandOutput, ScanError>) -> Self {
            Self {
                reply: Mutex::new(Some(reply)),
                calls: AtomicUsize::new(0),
                last_command: Mutex::new(None),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CommandRunner for RecordingRunner {
        async fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, ScanError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_command.lock().unwrap() = Some((
                program.to_string(),
                args.iter().map(|a| a.to_string()).collect(),
            ));
            self.reply
                .lock()
                .unwrap()
                .take()
                .expect("RecordingRunner called more than once")
        }
    }
}
