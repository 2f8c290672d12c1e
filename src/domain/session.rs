//! Session flag abstraction
//!
//! The only per-client state is a single boolean: authenticated or not.
//! Sessions are value-semantic; `login`/`logout` return the updated session
//! so cookie-backed implementations compose with response building.

/// Per-client authentication flag
pub trait Session: Sized {
    /// Whether this session has passed the password gate
    fn logged_in(&self) -> bool;

    /// Mark the session authenticated
    #[must_use]
    fn login(self) -> Self;

    /// Clear the session back to anonymous
    #[must_use]
    fn logout(self) -> Self;
}

#[cfg(test)]
pub mod fake {
    use super::Session;

    /// In-memory session for exercising gate logic without HTTP
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
    pub struct FakeSession {
        pub logged_in: bool,
    }

    impl Session for FakeSession {
        fn logged_in(&self) -> bool {
            self.logged_in
        }

        fn login(mut self) -> Self {
            self.logged_in = true;
            self
        }

        fn logout(mut self) -> Self {
            self.logged_in = false;
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::FakeSession;
    use super::*;

    #[test]
    fn session_starts_anonymous() {
        assert!(!FakeSession::default().logged_in());
    }

    #[test]
    fn login_then_logout_round_trip() {
        let session = FakeSession::default().login();
        assert!(session.logged_in());
        assert!(!session.logout().logged_in());
    }
}
