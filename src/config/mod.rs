//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `VENTURE_JOURNAL` prefix and nested values use double underscores as separators.
//!
//! Every section has defaults, so an empty environment yields a working
//! development setup (file storage under `./data/admin`, password `admin123`).
//!
//! # Example
//!
//! ```no_run
//! use venture_journal::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Mirroring state into {}", config.storage.data_dir.display());
//! ```

mod admin;
mod analytics;
mod environment;
mod error;
mod logging;
mod storage;

pub use admin::{AdminConfig, DEFAULT_ADMIN_PASSWORD};
pub use analytics::AnalyticsConfig;
pub use environment::Environment;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

use crate::application::StoreOptions;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Deployment environment
    #[serde(default)]
    pub environment: Environment,

    /// Durable storage backend
    #[serde(default)]
    pub storage: StorageConfig,

    /// Admin gate (password, session TTL)
    #[serde(default)]
    pub admin: AdminConfig,

    /// Dashboard analytics
    #[serde(default)]
    pub analytics: AnalyticsConfig,

    /// Tracing output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `VENTURE_JOURNAL` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `VENTURE_JOURNAL__STORAGE__DATA_DIR=/var/lib/vj` -> `storage.data_dir`
    /// - `VENTURE_JOURNAL__ADMIN__SESSION_TTL_SECS=3600` -> `admin.session_ttl_secs`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("VENTURE_JOURNAL")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
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
        self.storage.validate()?;
        self.admin.validate(&self.environment)?;
        self.analytics.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Store behaviour derived from the admin and analytics sections
    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            session_ttl: self.admin.session_ttl(),
            top_n: self.analytics.top_n,
        }
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;
    use std::time::Duration;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 6] = [
        "VENTURE_JOURNAL__ENVIRONMENT",
        "VENTURE_JOURNAL__STORAGE__BACKEND",
        "VENTURE_JOURNAL__STORAGE__DATA_DIR",
        "VENTURE_JOURNAL__ADMIN__PASSWORD",
        "VENTURE_JOURNAL__ADMIN__SESSION_TTL_SECS",
        "VENTURE_JOURNAL__ANALYTICS__TOP_N",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.admin.password, DEFAULT_ADMIN_PASSWORD);
        assert_eq!(config.analytics.top_n, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_overrides_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("VENTURE_JOURNAL__STORAGE__BACKEND", "memory");
        env::set_var("VENTURE_JOURNAL__ADMIN__SESSION_TTL_SECS", "3600");
        env::set_var("VENTURE_JOURNAL__ANALYTICS__TOP_N", "3");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.admin.session_ttl(), Some(Duration::from_secs(3600)));
        assert_eq!(config.analytics.top_n, 3);

        let options = config.store_options();
        assert_eq!(options.top_n, 3);
        assert_eq!(options.session_ttl, Some(Duration::from_secs(3600)));
    }

    #[test]
    fn test_production_with_default_password_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("VENTURE_JOURNAL__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
        assert_eq!(
            config.validate(),
            Err(ValidationError::DefaultPasswordInProduction)
        );
    }

    #[test]
    fn test_production_with_custom_password_validates() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("VENTURE_JOURNAL__ENVIRONMENT", "production");
        env::set_var("VENTURE_JOURNAL__ADMIN__PASSWORD", "a-long-admin-passphrase");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().validate().is_ok());
    }
}
