//! Failures that can end a scan.
//!
//! Unparsable lines inside a tool's output are not errors: the parsers log
//! and skip them. Everything here aborts the whole scan and reaches the
//! [`ScanService`](crate::service::ScanService) boundary, where it becomes
//! the `error` string of a [`ScanResult`](crate::model::ScanResult).

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// The scan utility is missing, either at its fixed path or on `PATH`.
    #[error("{} not found. Please ensure it is installed and you have the correct permissions.", path.display())]
    ExecutableNotFound { path: PathBuf },

    /// The process could not be started for a reason other than a missing binary.
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The utility ran but reported failure.
    #[error("{program} command failed with exit code {code}: {stderr}")]
    NonZeroExit {
        program: String,
        code: i32,
        stderr: String,
    },

    #[error("Unsupported operating system: {0}")]
    UnsupportedPlatform(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_context() {
        let err = ScanError::NonZeroExit {
            program: "netsh".to_string(),
            code: 1,
            stderr: "The Wireless AutoConfig Service (wlansvc) is not running.".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "netsh command failed with exit code 1: The Wireless AutoConfig Service (wlansvc) is not running."
        );

        let err = ScanError::UnsupportedPlatform("linux".to_string());
        assert_eq!(err.to_string(), "Unsupported operating system: linux");

        let err = ScanError::ExecutableNotFound {
            path: PathBuf::from("/no/such/airport"),
        };
        assert!(err.to_string().starts_with("/no/such/airport not found"));
    }
}
