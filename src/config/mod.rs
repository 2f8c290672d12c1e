//! Configuration management
//!
//! Configuration is layered: `config/default.toml`, an optional
//! `config/{ENV}.toml`, `config/local.toml`, then `SCANGATE__`-prefixed
//! environment variables with `__` separators (e.g.
//! `SCANGATE__AUTH__PASSWORD`). The login password and cookie-signing
//! secret are deliberately configuration values, never compiled-in
//! constants.

use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub scanner: ScannerConfig,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            auth: AuthConfig::default(),
            scanner: ScannerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_seconds: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            request_timeout_seconds: 120,
        }
    }
}

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// The login password the gate compares submissions against
    pub password: String,
    /// Secret used to sign the session cookie (minimum 32 bytes)
    pub cookie_secret: String,
    /// Name of the session cookie
    pub cookie_name: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            password: String::new(),
            cookie_secret: String::new(),
            cookie_name: "scangate_session".to_string(),
        }
    }
}

/// External scan command configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Path to the scan script, invoked with no arguments
    pub command: String,
    /// Run the command through `sudo`
    pub use_sudo: bool,
    /// Kill the scan if it runs longer than this
    pub timeout_seconds: u64,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            command: "./network-map.sh".to_string(),
            use_sudo: true,
            timeout_seconds: 300,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "scangate=info,tower_http=info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from files and environment
    pub fn load() -> Result<Self, ConfigLoadError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false));

        // Add environment-specific config if ENV is set
        if let Ok(env) = std::env::var("ENV") {
            builder = builder
                .add_source(config::File::with_name(&format!("config/{}", env)).required(false));
        }

        // Local config and environment variables last (highest priority)
        builder = builder
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("SCANGATE").separator("__"));

        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Validate the loaded configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.server.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if self.auth.password.is_empty() {
            return Err(ValidationError::MissingPassword);
        }
        // Key derivation requires at least 32 bytes of signing material
        if self.auth.cookie_secret.len() < 32 {
            return Err(ValidationError::WeakCookieSecret {
                length: self.auth.cookie_secret.len(),
            });
        }
        if self.auth.cookie_name.is_empty() {
            return Err(ValidationError::MissingCookieName);
        }
        if self.scanner.command.is_empty() {
            return Err(ValidationError::MissingScanCommand);
        }
        if self.scanner.timeout_seconds == 0 {
            return Err(ValidationError::InvalidScanTimeout);
        }
        Ok(())
    }
}

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("Configuration file error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Configuration validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Errors raised by startup validation
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("server.port must be non-zero")]
    InvalidPort,

    #[error("auth.password must be set (SCANGATE__AUTH__PASSWORD)")]
    MissingPassword,

    #[error(
        "auth.cookie_secret must be at least 32 bytes, got {length} (SCANGATE__AUTH__COOKIE_SECRET)"
    )]
    WeakCookieSecret { length: usize },

    #[error("auth.cookie_name must be set")]
    MissingCookieName,

    #[error("scanner.command must be set")]
    MissingScanCommand,

    #[error("scanner.timeout_seconds must be non-zero")]
    InvalidScanTimeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        let mut config = Config::default();
        config.auth.password = "hunter2".to_string();
        config.auth.cookie_secret = "0123456789abcdef0123456789abcdef".to_string();
        config
    }

    #[test]
    fn default_config_fails_validation_without_secrets() {
        let config = Config::default();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingPassword)
        ));
    }

    #[test]
    fn valid_config_passes_validation() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn short_cookie_secret_is_rejected() {
        let mut config = valid_config();
        config.auth.cookie_secret = "too-short".to_string();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::WeakCookieSecret { length: 9 })
        ));
    }

    #[test]
    fn zero_scan_timeout_is_rejected() {
        let mut config = valid_config();
        config.scanner.timeout_seconds = 0;
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidScanTimeout)
        ));
    }
}
