//! Login credential configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Minimum shared-secret length outside development.
const MIN_PRODUCTION_SECRET_LEN: usize = 12;

/// Login configuration for the shared-secret verifier
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Secret every identity must present
    pub shared_secret: Secret<String>,
}

impl AuthConfig {
    /// Validate login configuration
    ///
    /// In production the secret must not be trivially short.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let secret = self.shared_secret.expose_secret();
        if secret.trim().is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__SHARED_SECRET"));
        }
        if *environment == Environment::Production
            && secret.chars().count() < MIN_PRODUCTION_SECRET_LEN
        {
            return Err(ValidationError::WeakSharedSecret);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secret: &str) -> AuthConfig {
        AuthConfig {
            shared_secret: Secret::new(secret.to_string()),
        }
    }

    #[test]
    fn test_empty_secret_is_missing() {
        assert_eq!(
            config("  ").validate(&Environment::Development),
            Err(ValidationError::MissingRequired("AUTH__SHARED_SECRET"))
        );
    }

    #[test]
    fn test_short_secret_allowed_in_development() {
        assert!(config("maison").validate(&Environment::Development).is_ok());
    }

    #[test]
    fn test_short_secret_rejected_in_production() {
        assert_eq!(
            config("maison").validate(&Environment::Production),
            Err(ValidationError::WeakSharedSecret)
        );
        assert!(config("maison-vendome-2026")
            .validate(&Environment::Production)
            .is_ok());
    }
}
