//! Shared-secret credential verifier.
//!
//! Accepts any non-blank identity presenting the configured secret. The
//! comparison is constant-time so response timing does not leak how much
//! of the secret matched.

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use subtle::ConstantTimeEq;

use crate::ports::CredentialVerifier;

/// Verifier backed by a single configured secret.
pub struct SharedSecretVerifier {
    secret: Secret<String>,
}

impl SharedSecretVerifier {
    pub fn new(secret: Secret<String>) -> Self {
        Self { secret }
    }
}

#[async_trait]
impl CredentialVerifier for SharedSecretVerifier {
    async fn verify(&self, identity: &str, secret: &Secret<String>) -> bool {
        if identity.trim().is_empty() {
            return false;
        }
        let expected = self.secret.expose_secret().as_bytes();
        let presented = secret.expose_secret().as_bytes();
        bool::from(expected.ct_eq(presented))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verifier() -> SharedSecretVerifier {
        SharedSecretVerifier::new(Secret::new("maison-2026".to_string()))
    }

    fn secret(s: &str) -> Secret<String> {
        Secret::new(s.to_string())
    }

    #[tokio::test]
    async fn accepts_matching_secret() {
        assert!(verifier().verify("yannick.v@maison.com", &secret("maison-2026")).await);
    }

    #[tokio::test]
    async fn rejects_wrong_secret() {
        assert!(!verifier().verify("yannick.v@maison.com", &secret("maison-2025")).await);
        assert!(!verifier().verify("yannick.v@maison.com", &secret("maison")).await);
        assert!(!verifier().verify("yannick.v@maison.com", &secret("")).await);
    }

    #[tokio::test]
    async fn rejects_blank_identity() {
        assert!(!verifier().verify("  ", &secret("maison-2026")).await);
    }
}
