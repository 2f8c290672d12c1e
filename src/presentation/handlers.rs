//! HTTP handlers for the gateway
//!
//! Four operations: render the login form, check a submitted password, show
//! the scan output behind the session gate, and log out. Redirects use 302
//! Found throughout.

use std::sync::Arc;

use askama::Template;
use axum::{
    Form,
    extract::{FromRef, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::{SignedCookieJar, cookie::Key};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::application::PasswordGate;
use crate::config::Config;
use crate::domain::{Scanner, Session};
use crate::infrastructure::CookieSession;
use crate::presentation::templates::{HomePage, LoginPage};

/// Shared state for all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub gate: PasswordGate,
    pub scanner: Arc<dyn Scanner>,
    pub key: Key,
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Key {
        state.key.clone()
    }
}

/// Login form body
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub password: String,
}

/// GET /login
pub async fn login_form() -> Response {
    render(LoginPage::new())
}

/// POST /login
pub async fn submit_login(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    if state.gate.verify(&form.password) {
        info!("Login succeeded");
        let session = CookieSession::new(jar, &state.config.auth.cookie_name).login();
        (session.into_jar(), found("/")).into_response()
    } else {
        warn!("Login rejected: invalid password");
        render(LoginPage::with_error("Invalid password"))
    }
}

/// GET /
pub async fn home(State(state): State<AppState>, jar: SignedCookieJar) -> Response {
    let session = CookieSession::new(jar, &state.config.auth.cookie_name);
    if !session.logged_in() {
        return found("/login");
    }

    // Scanner failures render inline; this route never 500s on a bad scan.
    let result = state.scanner.run().await;
    render(HomePage::from_scan(result))
}

/// GET /logout
pub async fn logout(State(state): State<AppState>, jar: SignedCookieJar) -> Response {
    let session = CookieSession::new(jar, &state.config.auth.cookie_name).logout();
    (session.into_jar(), found("/login")).into_response()
}

/// 302 Found, matching the original redirect status exactly
fn found(location: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

fn render<T: Template>(page: T) -> Response {
    match page.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Template rendering failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
