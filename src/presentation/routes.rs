//! Route definitions and middleware stack

use std::time::Duration;

use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::Config;
use crate::presentation::handlers::{AppState, home, login_form, logout, submit_login};

/// Build the application router
pub fn create_router(state: AppState, config: &Config) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/login", get(login_form).post(submit_login))
        .route("/logout", get(logout))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.server.request_timeout_seconds,
                ))),
        )
}
