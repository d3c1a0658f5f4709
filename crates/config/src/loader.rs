//! Configuration loader for environment variables.
//!
//! Responsibilities:
//! - Load configuration from `.env` files and `DIRECTUS_*` environment variables.
//! - Provide a builder-pattern `ConfigLoader` for explicit overrides.
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - HTTP client construction (see the client crate).
//! - Credential storage beyond the process environment.
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over values set earlier on the loader.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::SecretString;
use std::time::Duration;
use thiserror::Error;

use crate::constants::MAX_TIMEOUT_SECS;
use crate::types::{AuthConfig, AuthStrategy, Config, ConnectionConfig};
use crate::types::connection::{default_namespace, default_scheme, default_timeout};

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Directus host is required")]
    MissingHost,

    #[error("Authentication configuration is required (either a static token or email/password)")]
    MissingAuth,
}

/// Configuration loader that builds config from environment variables.
pub struct ConfigLoader {
    scheme: Option<String>,
    host: Option<String>,
    namespace: Option<String>,
    email: Option<String>,
    password: Option<SecretString>,
    token: Option<SecretString>,
    skip_verify: Option<bool>,
    timeout: Option<Duration>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self {
            scheme: None,
            host: None,
            namespace: None,
            email: None,
            password: None,
            token: None,
            skip_verify: None,
            timeout: None,
        }
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        let disabled = matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        );
        if !disabled && let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded environment from .env file");
        }
        Ok(self)
    }

    /// Read an environment variable, returning None if unset, empty, or whitespace-only.
    pub fn env_var_or_none(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.trim().is_empty())
    }

    /// Read configuration from environment variables.
    ///
    /// Environment variables take precedence over values set earlier.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        if let Some(scheme) = Self::env_var_or_none("DIRECTUS_SCHEME") {
            self.scheme = Some(scheme);
        }
        if let Some(host) = Self::env_var_or_none("DIRECTUS_HOST") {
            self.host = Some(host);
        }
        if let Some(namespace) = Self::env_var_or_none("DIRECTUS_NAMESPACE") {
            self.namespace = Some(namespace);
        }
        if let Some(email) = Self::env_var_or_none("DIRECTUS_EMAIL") {
            self.email = Some(email);
        }
        if let Some(password) = Self::env_var_or_none("DIRECTUS_PASSWORD") {
            self.password = Some(SecretString::new(password.into()));
        }
        if let Some(token) = Self::env_var_or_none("DIRECTUS_TOKEN") {
            self.token = Some(SecretString::new(token.into()));
        }
        if let Some(skip) = Self::env_var_or_none("DIRECTUS_SKIP_VERIFY") {
            self.skip_verify =
                Some(skip.trim().parse().map_err(|_| ConfigError::InvalidValue {
                    var: "DIRECTUS_SKIP_VERIFY".to_string(),
                    message: "must be true or false".to_string(),
                })?);
        }
        if let Some(timeout) = Self::env_var_or_none("DIRECTUS_TIMEOUT") {
            let secs: u64 = timeout
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    var: "DIRECTUS_TIMEOUT".to_string(),
                    message: "must be a number of seconds".to_string(),
                })?;
            self.timeout = Some(Duration::from_secs(secs));
        }
        Ok(self)
    }

    /// Set the URL scheme.
    pub fn with_scheme(mut self, scheme: String) -> Self {
        self.scheme = Some(scheme);
        self
    }

    /// Set the host (and optional port).
    pub fn with_host(mut self, host: String) -> Self {
        self.host = Some(host);
        self
    }

    /// Set the namespace (project key).
    pub fn with_namespace(mut self, namespace: String) -> Self {
        self.namespace = Some(namespace);
        self
    }

    /// Set the account email.
    pub fn with_email(mut self, email: String) -> Self {
        self.email = Some(email);
        self
    }

    /// Set the account password.
    pub fn with_password(mut self, password: String) -> Self {
        self.password = Some(SecretString::new(password.into()));
        self
    }

    /// Set the static bearer token.
    pub fn with_token(mut self, token: String) -> Self {
        self.token = Some(SecretString::new(token.into()));
        self
    }

    /// Set whether to skip TLS verification.
    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    /// Set the connection timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let host = self.host.ok_or(ConfigError::MissingHost)?;

        // Determine auth strategy - static token takes precedence
        let strategy = if let Some(token) = self.token {
            AuthStrategy::StaticToken { token }
        } else if let (Some(email), Some(password)) = (self.email, self.password) {
            AuthStrategy::Credentials { email, password }
        } else {
            return Err(ConfigError::MissingAuth);
        };

        let timeout = self.timeout.unwrap_or_else(default_timeout);
        if timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                var: "DIRECTUS_TIMEOUT".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if timeout.as_secs() > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidValue {
                var: "DIRECTUS_TIMEOUT".to_string(),
                message: format!("must be at most {MAX_TIMEOUT_SECS} seconds"),
            });
        }

        Ok(Config {
            connection: ConnectionConfig {
                scheme: self.scheme.unwrap_or_else(default_scheme),
                host,
                namespace: self.namespace.unwrap_or_else(default_namespace),
                skip_verify: self.skip_verify.unwrap_or(false),
                timeout,
            },
            auth: AuthConfig { strategy },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::sync::Mutex;

    fn env_lock() -> &'static Mutex<()> {
        crate::test_util::global_test_lock()
    }

    fn cleanup_directus_env() {
        unsafe {
            std::env::remove_var("DIRECTUS_SCHEME");
            std::env::remove_var("DIRECTUS_HOST");
            std::env::remove_var("DIRECTUS_NAMESPACE");
            std::env::remove_var("DIRECTUS_EMAIL");
            std::env::remove_var("DIRECTUS_PASSWORD");
            std::env::remove_var("DIRECTUS_TOKEN");
            std::env::remove_var("DIRECTUS_SKIP_VERIFY");
            std::env::remove_var("DIRECTUS_TIMEOUT");
        }
    }

    /// Serializes process-global env-var mutations for this test module.
    struct EnvVarGuard {
        _lock: std::sync::MutexGuard<'static, ()>,
    }

    impl EnvVarGuard {
        fn new() -> Self {
            let lock = env_lock()
                .lock()
                .expect("Failed to acquire DIRECTUS_* env var lock");
            cleanup_directus_env();
            Self { _lock: lock }
        }
    }

    impl Drop for EnvVarGuard {
        fn drop(&mut self) {
            cleanup_directus_env();
        }
    }

    #[test]
    fn test_loader_with_static_token() {
        let loader = ConfigLoader::new()
            .with_host("cms.example.com".to_string())
            .with_token("test-token".to_string());

        let config = loader.build().unwrap();
        assert!(matches!(
            config.auth.strategy,
            AuthStrategy::StaticToken { .. }
        ));
    }

    #[test]
    fn test_loader_with_credentials() {
        let loader = ConfigLoader::new()
            .with_host("cms.example.com".to_string())
            .with_email("admin@example.com".to_string())
            .with_password("password".to_string());

        let config = loader.build().unwrap();
        assert!(matches!(
            config.auth.strategy,
            AuthStrategy::Credentials { .. }
        ));
    }

    #[test]
    fn test_loader_missing_host() {
        let loader = ConfigLoader::new().with_token("test-token".to_string());
        let result = loader.build();
        assert!(matches!(result, Err(ConfigError::MissingHost)));
    }

    #[test]
    fn test_loader_missing_auth() {
        let loader = ConfigLoader::new().with_host("cms.example.com".to_string());
        let result = loader.build();
        assert!(matches!(result, Err(ConfigError::MissingAuth)));
    }

    #[test]
    fn test_static_token_takes_precedence() {
        let loader = ConfigLoader::new()
            .with_host("cms.example.com".to_string())
            .with_email("admin@example.com".to_string())
            .with_password("password".to_string())
            .with_token("api-token".to_string());

        let config = loader.build().unwrap();
        assert!(matches!(
            config.auth.strategy,
            AuthStrategy::StaticToken { .. }
        ));
    }

    #[test]
    fn test_loader_defaults() {
        let config = ConfigLoader::new()
            .with_host("cms.example.com".to_string())
            .with_token("test-token".to_string())
            .build()
            .unwrap();

        assert_eq!(config.connection.scheme, "https");
        assert_eq!(config.connection.namespace, "_");
        assert!(!config.connection.skip_verify);
        assert_eq!(config.connection.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = ConfigLoader::new()
            .with_host("cms.example.com".to_string())
            .with_token("test-token".to_string())
            .with_timeout(Duration::ZERO)
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { var, .. }) if var == "DIRECTUS_TIMEOUT"
        ));
    }

    #[test]
    fn test_excessive_timeout_rejected() {
        let result = ConfigLoader::new()
            .with_host("cms.example.com".to_string())
            .with_token("test-token".to_string())
            .with_timeout(Duration::from_secs(MAX_TIMEOUT_SECS + 1))
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { var, .. }) if var == "DIRECTUS_TIMEOUT"
        ));
    }

    #[test]
    #[serial]
    fn test_from_env_reads_all_vars() {
        let _env = EnvVarGuard::new();

        unsafe {
            std::env::set_var("DIRECTUS_SCHEME", "http");
            std::env::set_var("DIRECTUS_HOST", "cms.internal:8055");
            std::env::set_var("DIRECTUS_NAMESPACE", "content");
            std::env::set_var("DIRECTUS_TOKEN", "env-token");
            std::env::set_var("DIRECTUS_SKIP_VERIFY", "true");
            std::env::set_var("DIRECTUS_TIMEOUT", "60");
        }

        let config = ConfigLoader::new().from_env().unwrap().build().unwrap();

        assert_eq!(config.connection.scheme, "http");
        assert_eq!(config.connection.host, "cms.internal:8055");
        assert_eq!(config.connection.namespace, "content");
        assert!(config.connection.skip_verify);
        assert_eq!(config.connection.timeout, Duration::from_secs(60));
        assert!(matches!(
            config.auth.strategy,
            AuthStrategy::StaticToken { .. }
        ));
    }

    #[test]
    #[serial]
    fn test_env_overrides_builder_values() {
        let _env = EnvVarGuard::new();

        unsafe {
            std::env::set_var("DIRECTUS_HOST", "override.example.com");
        }

        let config = ConfigLoader::new()
            .with_host("original.example.com".to_string())
            .with_token("test-token".to_string())
            .from_env()
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(config.connection.host, "override.example.com");
    }

    #[test]
    #[serial]
    fn test_empty_env_vars_ignored() {
        let _env = EnvVarGuard::new();

        // Set empty env vars - they should be treated as None
        unsafe {
            std::env::set_var("DIRECTUS_TOKEN", "");
            std::env::set_var("DIRECTUS_EMAIL", "");
            std::env::set_var("DIRECTUS_PASSWORD", "");
        }

        let loader = ConfigLoader::new()
            .with_host("cms.example.com".to_string())
            .with_email("admin@example.com".to_string()) // Set via builder
            .with_password("password".to_string())
            .from_env()
            .unwrap();

        let config = loader.build().unwrap();
        // Should use credentials since the token env var is empty
        assert!(matches!(
            config.auth.strategy,
            AuthStrategy::Credentials { .. }
        ));
    }

    #[test]
    #[serial]
    fn test_whitespace_token_treated_as_unset() {
        let _env = EnvVarGuard::new();

        unsafe {
            std::env::set_var("DIRECTUS_TOKEN", "   ");
            std::env::set_var("DIRECTUS_HOST", "cms.example.com");
            std::env::set_var("DIRECTUS_EMAIL", "admin@example.com");
            std::env::set_var("DIRECTUS_PASSWORD", "password");
        }

        let config = ConfigLoader::new().from_env().unwrap().build().unwrap();

        // Whitespace token should be ignored, falling back to credentials
        assert!(matches!(
            config.auth.strategy,
            AuthStrategy::Credentials { .. }
        ));
    }

    #[test]
    #[serial]
    fn test_env_var_or_none_filters_empty_and_whitespace_strings() {
        let _env = EnvVarGuard::new();

        let key = "_DIRECTUS_TEST_LOADER_VAR";
        assert!(ConfigLoader::env_var_or_none(key).is_none());

        unsafe {
            std::env::set_var(key, "");
        }
        assert!(ConfigLoader::env_var_or_none(key).is_none());

        unsafe {
            std::env::set_var(key, "   ");
        }
        assert!(ConfigLoader::env_var_or_none(key).is_none());

        unsafe {
            std::env::set_var(key, " value ");
        }
        // The value itself is not trimmed, only the emptiness check is
        assert_eq!(
            ConfigLoader::env_var_or_none(key),
            Some(" value ".to_string())
        );

        unsafe {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_empty_env_vars_ignored_for_non_string_fields() {
        let _env = EnvVarGuard::new();

        unsafe {
            std::env::set_var("DIRECTUS_HOST", "cms.example.com");
            std::env::set_var("DIRECTUS_TOKEN", "token");
            std::env::set_var("DIRECTUS_SKIP_VERIFY", "   ");
            std::env::set_var("DIRECTUS_TIMEOUT", "");
        }

        let config = ConfigLoader::new().from_env().unwrap().build().unwrap();

        // Should use defaults for bool/number fields instead of erroring on parse
        assert!(!config.connection.skip_verify);
        assert_eq!(config.connection.timeout, Duration::from_secs(30));
    }

    #[test]
    #[serial]
    fn test_invalid_skip_verify_env_var() {
        let _env = EnvVarGuard::new();

        unsafe {
            std::env::set_var("DIRECTUS_SKIP_VERIFY", "maybe");
        }

        let result = ConfigLoader::new().from_env();

        match result {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "DIRECTUS_SKIP_VERIFY");
            }
            Ok(_) => panic!("Expected an error for invalid DIRECTUS_SKIP_VERIFY"),
            Err(_) => panic!("Expected InvalidValue error for DIRECTUS_SKIP_VERIFY"),
        }
    }

    #[test]
    #[serial]
    fn test_invalid_timeout_env_var() {
        let _env = EnvVarGuard::new();

        unsafe {
            std::env::set_var("DIRECTUS_TIMEOUT", "not-a-number");
        }

        let result = ConfigLoader::new().from_env();

        match result {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "DIRECTUS_TIMEOUT");
            }
            Ok(_) => panic!("Expected an error for invalid DIRECTUS_TIMEOUT"),
            Err(_) => panic!("Expected InvalidValue error for DIRECTUS_TIMEOUT"),
        }
    }
}
