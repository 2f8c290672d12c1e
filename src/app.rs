//! Application setup and wiring

use std::sync::Arc;

use axum::Router;
use axum_extra::extract::cookie::Key;

use crate::application::PasswordGate;
use crate::config::Config;
use crate::domain::Scanner;
use crate::infrastructure::CommandScanner;
use crate::presentation::{AppState, create_router};

/// Create the application router from validated configuration
pub fn create_app(config: Config) -> Router {
    let scanner: Arc<dyn Scanner> = Arc::new(CommandScanner::from_config(&config.scanner));
    create_app_with_scanner(config, scanner)
}

/// Create the application router with an explicit scanner implementation
///
/// Seam for wiring in fakes when the real subprocess is undesirable.
pub fn create_app_with_scanner(config: Config, scanner: Arc<dyn Scanner>) -> Router {
    let config = Arc::new(config);
    let state = AppState {
        gate: PasswordGate::new(&config.auth.password),
        key: Key::derive_from(config.auth.cookie_secret.as_bytes()),
        scanner,
        config: config.clone(),
    };
    create_router(state, &config)
}
