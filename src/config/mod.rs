//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `ELVIA` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use elvia_concierge::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod ai;
mod auth;
mod commit;
mod error;
mod server;

pub use ai::AiConfig;
pub use auth::AuthConfig;
pub use commit::CommitConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Login configuration (shared secret)
    pub auth: AuthConfig,

    /// Assistant configuration (Mistral)
    #[serde(default)]
    pub ai: AiConfig,

    /// Simulated ledger-write latency
    #[serde(default)]
    pub commit: CommitConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `ELVIA` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `ELVIA__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `ELVIA__AUTH__SHARED_SECRET=...` -> `auth.shared_secret = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ELVIA")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.auth.validate(&self.server.environment)?;
        self.ai.validate()?;
        self.commit.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn set_minimal_env() {
        env::set_var("ELVIA__AUTH__SHARED_SECRET", "maison-vendome-2026");
    }

    fn clear_env() {
        env::remove_var("ELVIA__AUTH__SHARED_SECRET");
        env::remove_var("ELVIA__AI__API_KEY");
        env::remove_var("ELVIA__SERVER__PORT");
        env::remove_var("ELVIA__SERVER__ENVIRONMENT");
        env::remove_var("ELVIA__COMMIT__LATENCY_MS");
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.auth.shared_secret.expose_secret(),
            "maison-vendome-2026"
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_apply() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.ai.model, "mistral-small-latest");
        assert_eq!(config.commit.latency_ms, 2000);
        assert!(!config.ai.has_api_key());
    }

    #[test]
    fn test_nested_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("ELVIA__SERVER__PORT", "3000");
        env::set_var("ELVIA__SERVER__ENVIRONMENT", "production");
        env::set_var("ELVIA__AI__API_KEY", "sk-live");
        env::set_var("ELVIA__COMMIT__LATENCY_MS", "250");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.is_production());
        assert!(config.ai.has_api_key());
        assert_eq!(config.commit.latency_ms, 250);
    }

    #[test]
    fn test_missing_shared_secret_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        assert!(AppConfig::load().is_err());
    }
}
