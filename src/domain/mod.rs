//! Core domain seams: the session flag and the scanner capability

pub mod scanner;
pub mod session;

pub use scanner::{ScanError, ScanReport, Scanner};
pub use session::Session;
