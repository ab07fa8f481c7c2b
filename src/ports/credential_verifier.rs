//! Credential verifier port.
//!
//! Login asks this port whether an identity/secret pair is acceptable.
//! How credentials are stored or checked is entirely up to the adapter.
//!
//! # Example
//!
//! ```ignore
//! let accepted = verifier.verify("yannick.v@maison.com", &secret).await;
//! if !accepted {
//!     return Err(WorkflowError::AuthenticationFailed);
//! }
//! ```

use async_trait::async_trait;
use secrecy::Secret;

/// Checks login credentials.
///
/// # Contract
///
/// Implementations must:
/// - Return `true` only for an accepted identity/secret pair
/// - Return `false` (never panic) for anything else, including unreachable
///   backends
/// - Never log the secret
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Returns true if the secret is valid for the identity.
    async fn verify(&self, identity: &str, secret: &Secret<String>) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    struct AcceptAll;

    #[async_trait]
    impl CredentialVerifier for AcceptAll {
        async fn verify(&self, _identity: &str, secret: &Secret<String>) -> bool {
            !secret.expose_secret().is_empty()
        }
    }

    #[tokio::test]
    async fn verifier_is_usable_through_trait_object() {
        let verifier: Box<dyn CredentialVerifier> = Box::new(AcceptAll);
        assert!(verifier.verify("a@b.c", &Secret::new("x".to_string())).await);
        assert!(!verifier.verify("a@b.c", &Secret::new(String::new())).await);
    }

    #[test]
    fn credential_verifier_is_object_safe_and_send_sync() {
        fn _assert_trait_object(_: &dyn CredentialVerifier) {}
        fn _assert_arc_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_arc_send_sync::<std::sync::Arc<dyn CredentialVerifier>>();
    }
}
