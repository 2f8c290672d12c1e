//! HTTP presentation layer

pub mod handlers;
pub mod routes;
pub mod templates;


pub use handlers::AppState;
pub use routes::create_router;
