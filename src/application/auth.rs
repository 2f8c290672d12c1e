//! Password gate
//!
//! Single-secret authentication: the submitted password either matches the
//! configured secret or it does not. Both sides are hashed and the digests
//! compared in constant time to avoid timing side channels.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Verifies submitted passwords against the configured secret
#[derive(Clone)]
pub struct PasswordGate {
    secret_digest: [u8; 32],
}

impl PasswordGate {
    pub fn new(secret: &str) -> Self {
        Self {
            secret_digest: Self::digest(secret),
        }
    }

    /// Compare a submitted password against the secret in constant time
    pub fn verify(&self, candidate: &str) -> bool {
        let candidate_digest = Self::digest(candidate);
        candidate_digest.ct_eq(&self.secret_digest).into()
    }

    fn digest(input: &str) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(input.as_bytes());
        hasher.finalize().into()
    }
}

impl std::fmt::Debug for PasswordGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the digest
        f.debug_struct("PasswordGate").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_password_verifies() {
        let gate = PasswordGate::new("hunter2");
        assert!(gate.verify("hunter2"));
    }

    #[test]
    fn wrong_password_is_rejected() {
        let gate = PasswordGate::new("hunter2");
        assert!(!gate.verify("hunter3"));
        assert!(!gate.verify(""));
        assert!(!gate.verify("hunter2 "));
    }

    #[test]
    fn debug_does_not_leak_digest() {
        let gate = PasswordGate::new("hunter2");
        let rendered = format!("{:?}", gate);
        assert!(!rendered.contains("hunter2"));
        assert_eq!(rendered, "PasswordGate { .. }");
    }
}
