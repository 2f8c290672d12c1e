//! scangate - password-gated web front-end for a network scan script
//!
//! A single "Gateway Service" component: one login check, a signed-cookie
//! session flag, one subprocess invocation, and one template render. The
//! scan script itself is an opaque external executable.

mod app;

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

pub use app::{create_app, create_app_with_scanner};
pub use config::Config;
pub use logging::init_tracing;
