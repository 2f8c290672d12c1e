//! Infrastructure: real subprocess scanner and cookie-backed sessions

pub mod scanner;
pub mod session;

pub use scanner::CommandScanner;
pub use session::CookieSession;
