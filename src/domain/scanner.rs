//! Scanner capability trait and result types
//!
//! The privileged subprocess sits behind this seam so the web gating logic
//! can be exercised against fakes, fully decoupled from the real scan
//! script.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Captured output of one scan invocation
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub stdout: String,
    pub stderr: String,
    /// Process exit code; `None` when terminated by a signal
    pub exit_code: Option<i32>,
}

impl ScanReport {
    pub fn succeeded(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Errors that can occur while running the scan process
#[derive(Debug, Error)]
pub enum ScanError {
    /// The command could not be spawned (missing executable, permissions)
    #[error("failed to spawn scan command `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The scan ran longer than the configured limit and was killed
    #[error("scan timed out after {0:?}")]
    Timeout(Duration),

    /// I/O failure while collecting output
    #[error("I/O error while running scan: {0}")]
    Io(#[from] std::io::Error),
}

/// Capability interface over the external scan process
#[async_trait]
pub trait Scanner: Send + Sync {
    /// Run one scan to completion and capture its output
    async fn run(&self) -> Result<ScanReport, ScanError>;
}
