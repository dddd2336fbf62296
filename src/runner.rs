//! External process invocation.
//!
//! The [`CommandRunner`] trait is the seam between the scan pipelines and
//! the operating system. [`SystemRunner`] spawns a real child process;
//! tests substitute their own implementation.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::Path;
use tokio::process::Command;
use tracing::{debug, error, info};

use crate::error::ScanError;

/// Captured result of a process that exited with status zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// Runs an external program to completion and captures its output.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Runs `program` with `args` once.
    ///
    /// # Errors
    ///
    /// - [`ScanError::ExecutableNotFound`] if the program does not exist.
    /// - [`ScanError::Spawn`] if it exists but cannot be started.
    /// - [`ScanError::NonZeroExit`] if it exits with a non-zero status.
    async fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, ScanError>;
}

/// Runs commands as child processes of the current process.
///
/// There is no timeout: a tool that hangs blocks the caller until it exits.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, ScanError> {
        // Tools at a fixed location are checked up front. Bare names are
        // left to the PATH lookup done by spawn.
        let path = Path::new(program);
        if path.components().count() > 1 && !path.exists() {
            error!(program, "executable not found");
            return Err(ScanError::ExecutableNotFound {
                path: path.to_path_buf(),
            });
        }

        info!(command = %format!("{} {}", program, args.join(" ")), "running command");

        // `output` drains both pipes and waits for exit. `kill_on_drop`
        // reaps the child if the request future is dropped first.
        let output = Command::new(program)
            .args(args)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => ScanError::ExecutableNotFound {
                    path: path.to_path_buf(),
                },
                _ => ScanError::Spawn {
                    program: program.to_string(),
                    source: e,
                },
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        // Killed by a signal: no exit code.
        let exit_code = output.status.code().unwrap_or(-1);

        if !output.status.success() {
            error!(program, exit_code, stderr = %stderr.trim(), "command failed");
            return Err(ScanError::NonZeroExit {
                program: program_name(program),
                code: exit_code,
                stderr: stderr.trim().to_string(),
            });
        }

        debug!(program, %stdout, "command output");

        Ok(CommandOutput {
            stdout,
            stderr,
            exit_code,
        })
    }
}

/// Final path component, so error messages read `airport` rather than the
/// whole framework path.
fn program_name(program: &str) -> String {
    Path::new(program)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| program.to_string())
}
