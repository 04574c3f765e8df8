//! Admin gate configuration

use serde::Deserialize;
use std::time::Duration;

use super::environment::Environment;
use super::error::ValidationError;
use crate::adapters::auth::SharedSecretVerifier;

/// Password used when none is configured.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Admin authentication configuration
#[derive(Clone, Deserialize)]
pub struct AdminConfig {
    /// Shared admin password
    #[serde(default = "default_password")]
    pub password: String,

    /// Maximum age of a persisted login, in seconds. Unset trusts a
    /// persisted login indefinitely.
    pub session_ttl_secs: Option<u64>,
}

impl AdminConfig {
    /// Session TTL as Duration
    pub fn session_ttl(&self) -> Option<Duration> {
        self.session_ttl_secs.map(Duration::from_secs)
    }

    /// Build the credential verifier for the configured password
    pub fn verifier(&self) -> SharedSecretVerifier {
        SharedSecretVerifier::new(self.password.clone())
    }

    /// Validate admin configuration
    ///
    /// Production deployments must not run with the default password.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.password.is_empty() {
            return Err(ValidationError::MissingRequired("ADMIN__PASSWORD"));
        }
        if environment.is_production() && self.password == DEFAULT_ADMIN_PASSWORD {
            return Err(ValidationError::DefaultPasswordInProduction);
        }
        if self.session_ttl_secs == Some(0) {
            return Err(ValidationError::InvalidSessionTtl);
        }
        Ok(())
    }
}

impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("password", &"[REDACTED]")
            .field("session_ttl_secs", &self.session_ttl_secs)
            .finish()
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            password: default_password(),
            session_ttl_secs: None,
        }
    }
}

fn default_password() -> String {
    DEFAULT_ADMIN_PASSWORD.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::CredentialVerifier;

    #[test]
    fn test_admin_config_defaults() {
        let config = AdminConfig::default();
        assert_eq!(config.password, "admin123");
        assert_eq!(config.session_ttl(), None);
        assert!(config.validate(&Environment::Development).is_ok());
    }

    #[test]
    fn test_session_ttl_duration() {
        let config = AdminConfig {
            session_ttl_secs: Some(7200),
            ..Default::default()
        };
        assert_eq!(config.session_ttl(), Some(Duration::from_secs(7200)));
    }

    #[test]
    fn test_validation_empty_password() {
        let config = AdminConfig {
            password: String::new(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::MissingRequired("ADMIN__PASSWORD"))
        );
    }

    #[test]
    fn test_validation_production_rejects_default_password() {
        let config = AdminConfig::default();
        assert_eq!(
            config.validate(&Environment::Production),
            Err(ValidationError::DefaultPasswordInProduction)
        );

        let config = AdminConfig {
            password: "correct horse battery staple".to_string(),
            ..Default::default()
        };
        assert!(config.validate(&Environment::Production).is_ok());
    }

    #[test]
    fn test_validation_zero_ttl() {
        let config = AdminConfig {
            session_ttl_secs: Some(0),
            ..Default::default()
        };
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::InvalidSessionTtl)
        );
    }

    #[test]
    fn test_debug_redacts_password() {
        let rendered = format!("{:?}", AdminConfig::default());
        assert!(!rendered.contains("admin123"));
    }

    #[tokio::test]
    async fn test_verifier_uses_configured_password() {
        let config = AdminConfig {
            password: "s3cret".to_string(),
            ..Default::default()
        };
        let verifier = config.verifier();
        assert!(verifier.verify("s3cret").await);
        assert!(!verifier.verify("admin123").await);
    }
}
