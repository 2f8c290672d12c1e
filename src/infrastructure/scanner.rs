//! Subprocess scanner
//!
//! Runs the configured scan script out of process, optionally through
//! `sudo`, and captures stdout, stderr, and the exit status. The child is
//! killed if it outlives the configured timeout so a hanging scan cannot
//! stall a serving worker.

use std::process::Stdio;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::config::ScannerConfig;
use crate::domain::{ScanError, ScanReport, Scanner};

/// Scanner backed by the real external scan command
pub struct CommandScanner {
    command: String,
    use_sudo: bool,
    timeout: Duration,
}

impl CommandScanner {
    pub fn new(command: impl Into<String>, use_sudo: bool, timeout: Duration) -> Self {
        Self {
            command: command.into(),
            use_sudo,
            timeout,
        }
    }

    pub fn from_config(config: &ScannerConfig) -> Self {
        Self::new(
            config.command.clone(),
            config.use_sudo,
            Duration::from_secs(config.timeout_seconds),
        )
    }

    fn build_command(&self) -> Command {
        if self.use_sudo {
            let mut command = Command::new("sudo");
            command.arg(&self.command);
            command
        } else {
            Command::new(&self.command)
        }
    }
}

#[async_trait]
impl Scanner for CommandScanner {
    async fn run(&self) -> Result<ScanReport, ScanError> {
        debug!(command = %self.command, sudo = self.use_sudo, "Spawning scan process");
        let start = Instant::now();

        let child = self
            .build_command()
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ScanError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| {
                warn!(command = %self.command, timeout = ?self.timeout, "Scan timed out, killing process");
                ScanError::Timeout(self.timeout)
            })??;

        let report = ScanReport {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        };

        let elapsed = start.elapsed();
        if report.succeeded() {
            info!(
                command = %self.command,
                elapsed_ms = elapsed.as_millis() as u64,
                stdout_bytes = report.stdout.len(),
                "Scan completed"
            );
        } else {
            warn!(
                command = %self.command,
                elapsed_ms = elapsed.as_millis() as u64,
                exit_code = ?report.exit_code,
                stderr_bytes = report.stderr.len(),
                "Scan exited unsuccessfully"
            );
        }

        Ok(report)
    }
}
