//! Scan service facade.
//!
//! [`ScanService`] ties the pieces together: dispatch on the platform,
//! run the tool, parse its output. Callers get a [`ScanResult`] back in
//! every case; failures travel in its `error` field.

use std::sync::Arc;
use tracing::{error, info};

use crate::config::Config;
use crate::error::ScanError;
use crate::model::{NetworkRecord, ScanResult};
use crate::platform::host_platform_id;
use crate::runner::{CommandRunner, SystemRunner};
use crate::scanner::dispatch;

pub struct ScanService {
    runner: Arc<dyn CommandRunner>,
    platform_id: String,
    config: Config,
}

impl ScanService {
    /// Service for the host platform, running real processes.
    pub fn new(config: Config) -> Self {
        Self::with_runner(Arc::new(SystemRunner), host_platform_id(), config)
    }

    pub fn with_runner(
        runner: Arc<dyn CommandRunner>,
        platform_id: impl Into<String>,
        config: Config,
    ) -> Self {
        Self {
            runner,
            platform_id: platform_id.into(),
            config,
        }
    }

    pub fn platform_id(&self) -> &str {
        &self.platform_id
    }

    /// Runs one scan. Never fails: any error ends up in
    /// [`ScanResult::error`] with an empty network list.
    pub async fn scan(&self) -> ScanResult {
        match self.try_scan().await {
            Ok(networks) => {
                info!(count = networks.len(), "found WiFi networks");
                ScanResult::ok(networks)
            }
            Err(e) => {
                error!(platform = %self.platform_id, error = %e, "WiFi scan failed");
                ScanResult::failed(e.to_string())
            }
        }
    }

    /// Runs one scan, returning the underlying error on failure.
    ///
    /// # Errors
    ///
    /// [`ScanError::UnsupportedPlatform`] before anything is executed, or
    /// any error from running the platform's utility.
    pub async fn try_scan(&self) -> Result<Vec<NetworkRecord>, ScanError> {
        let scanner = dispatch(&self.platform_id, &self.config)?;
        info!(scanner = scanner.name(), platform = %scanner.platform(), "starting WiFi scan");
        scanner.scan(self.runner.as_ref()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::testing::RecordingRunner;

    #[tokio::test]
    async fn test_darwin_scan_end_to_end() {
        let runner = Arc::new(RecordingRunner::with_stdout(
            "Header\nMyNet 00:11:22:33:44:55 -50 6(w) WPA2\n",
        ));
        let service = ScanService::with_runner(runner.clone(), "darwin", Config::default());

        let result = service.scan().await;

        assert_eq!(
            result,
            ScanResult::ok(vec![NetworkRecord::new("00:11:22:33:44:55", -50).with_channel(Some(6))])
        );
        assert_eq!(runner.call_count(), 1);
    }

    #[tokio::test]
    async fn test_windows_scan_end_to_end() {
        let runner = Arc::new(RecordingRunner::with_stdout(
            "SSID 1 : Net\n    BSSID 1 : aa-bb-cc-dd-ee-ff\n    Signal : 80%\n    Channel : 11\n\n",
        ));
        let service = ScanService::with_runner(runner, "Windows", Config::default());

        let result = service.scan().await;

        assert_eq!(
            result.networks,
            vec![NetworkRecord::new("aa-bb-cc-dd-ee-ff", -44).with_channel(Some(11))]
        );
        assert!(result.error.is_none());
    }

    #[tokio::test]
    async fn test_unsupported_platform_never_runs_a_process() {
        let runner = Arc::new(RecordingRunner::with_stdout(""));
        let service = ScanService::with_runner(runner.clone(), "linux", Config::default());

        let err = service.try_scan().await.unwrap_err();
        assert!(matches!(err, ScanError::UnsupportedPlatform(_)));

        let result = service.scan().await;
        assert!(result.networks.is_empty());
        assert_eq!(result.error.as_deref(), Some("Unsupported operating system: linux"));
        assert_eq!(runner.call_count(), 0);
    }

    #[tokio::test]
    async fn test_runner_failure_becomes_error_string() {
        let runner = Arc::new(RecordingRunner::with_reply(Err(ScanError::NonZeroExit {
            program: "airport".to_string(),
            code: 1,
            stderr: "permission denied".to_string(),
        })));
        let service = ScanService::with_runner(runner, "darwin", Config::default());

        let result = service.scan().await;

        assert!(result.networks.is_empty());
        assert_eq!(
            result.error.as_deref(),
            Some("airport command failed with exit code 1: permission denied")
        );
    }

    #[tokio::test]
    async fn test_missing_airport_with_real_runner() {
        let config = Config {
            airport_path: "/nonexistent/Resources/airport".into(),
            ..Config::default()
        };
        let service = ScanService::with_runner(Arc::new(SystemRunner), "darwin", config);

        let result = service.scan().await;

        assert!(result.networks.is_empty());
        assert!(result.error.unwrap().contains("/nonexistent/Resources/airport not found"));
    }
}
