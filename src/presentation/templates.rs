//! Server-rendered pages

use askama::Template;

use crate::domain::{ScanError, ScanReport};

/// Login form, with an inline error after a failed attempt
#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginPage {
    pub error: Option<String>,
}

impl LoginPage {
    pub fn new() -> Self {
        Self { error: None }
    }

    pub fn with_error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
        }
    }
}

impl Default for LoginPage {
    fn default() -> Self {
        Self::new()
    }
}

/// Scan output page
///
/// Stdout renders verbatim; a non-zero exit status, stderr content, or a
/// failure to run the scan at all each get their own diagnostics block.
#[derive(Template)]
#[template(path = "index.html")]
pub struct HomePage {
    pub stdout: String,
    pub stderr: String,
    pub succeeded: bool,
    pub exit_label: String,
    pub error: Option<String>,
}

impl HomePage {
    pub fn from_scan(result: Result<ScanReport, ScanError>) -> Self {
        match result {
            Ok(report) => {
                let exit_label = match report.exit_code {
                    Some(code) => code.to_string(),
                    None => "killed by signal".to_string(),
                };
                Self {
                    succeeded: report.succeeded(),
                    stdout: report.stdout,
                    stderr: report.stderr,
                    exit_label,
                    error: None,
                }
            }
            Err(e) => Self {
                stdout: String::new(),
                stderr: String::new(),
                succeeded: false,
                exit_label: String::new(),
                error: Some(e.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn login_page_renders_error_inline() {
        let page = LoginPage::with_error("Invalid password");
        let html = page.render().unwrap();
        assert!(html.contains("Invalid password"));
    }

    #[test]
    fn login_page_without_error_omits_error_block() {
        let html = LoginPage::new().render().unwrap();
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn home_page_shows_stdout() {
        let page = HomePage::from_scan(Ok(ScanReport {
            stdout: "DEVICE_LIST".to_string(),
            stderr: String::new(),
            exit_code: Some(0),
        }));
        let html = page.render().unwrap();
        assert!(html.contains("DEVICE_LIST"));
        assert!(!html.contains("diagnostics"));
    }

    #[test]
    fn home_page_surfaces_exit_status_and_stderr() {
        let page = HomePage::from_scan(Ok(ScanReport {
            stdout: String::new(),
            stderr: "arp-scan: permission denied".to_string(),
            exit_code: Some(1),
        }));
        let html = page.render().unwrap();
        assert!(html.contains("Scan exited with status 1"));
        assert!(html.contains("permission denied"));
    }

    #[test]
    fn home_page_surfaces_scan_errors() {
        let page = HomePage::from_scan(Err(ScanError::Timeout(Duration::from_secs(300))));
        let html = page.render().unwrap();
        assert!(html.contains("Scan failed:"));
        assert!(html.contains("timed out"));
    }

    #[test]
    fn home_page_escapes_output() {
        let page = HomePage::from_scan(Ok(ScanReport {
            stdout: "<script>alert(1)</script>".to_string(),
            stderr: String::new(),
            exit_code: Some(0),
        }));
        let html = page.render().unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
    }
}
