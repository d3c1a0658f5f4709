//! Connection configuration types for the Directus client.
//!
//! Responsibilities:
//! - Define connection settings (scheme, host, namespace, TLS verification, timeout).
//! - Define the main `Config` structure combining connection and auth.
//! - Provide serialization helpers for `Duration`.
//! - Provide convenience constructors for common config patterns.
//!
//! Does NOT handle:
//! - Configuration loading from env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).
//! - Default values are provided via `Default` impl, not magic numbers.
//! - `Config::default()` provides development defaults (localhost:8055).

use crate::constants::{DEFAULT_HOST, DEFAULT_NAMESPACE, DEFAULT_SCHEME, DEFAULT_TIMEOUT_SECS};
use crate::types::auth::{AuthConfig, AuthStrategy};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection configuration for a Directus server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// URL scheme (`http` or `https`)
    #[serde(default = "default_scheme")]
    pub scheme: String,
    /// Host (and optional port) of the Directus server, e.g. `cms.example.com`
    pub host: String,
    /// Namespace prefix for all API paths (the project key; `_` by default)
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    #[serde(default)]
    pub skip_verify: bool,
    /// Connection timeout (serialized as seconds)
    #[serde(with = "duration_seconds", default = "default_timeout")]
    pub timeout: Duration,
}

pub(crate) fn default_scheme() -> String {
    DEFAULT_SCHEME.to_string()
}

pub(crate) fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

pub(crate) fn default_timeout() -> Duration {
    Duration::from_secs(DEFAULT_TIMEOUT_SECS)
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
}

impl Default for Config {
    /// Creates a default configuration with development-only credentials.
    ///
    /// # Security Warning
    ///
    /// The default configuration uses the Directus demo credentials
    /// (admin@example.com/password) targeting localhost:8055. These are
    /// **ONLY** appropriate for local development environments and MUST be
    /// changed before any production use.
    fn default() -> Self {
        Self {
            connection: ConnectionConfig {
                scheme: default_scheme(),
                host: DEFAULT_HOST.to_string(),
                namespace: default_namespace(),
                skip_verify: false,
                timeout: default_timeout(),
            },
            auth: AuthConfig {
                strategy: AuthStrategy::Credentials {
                    email: "admin@example.com".to_string(),
                    password: SecretString::new("password".to_string().into()),
                },
            },
        }
    }
}

impl Config {
    /// Checks if this configuration is using the default development
    /// credentials (admin@example.com/password). Useful for flagging unsafe
    /// configurations before they reach a production server.
    pub fn is_using_default_credentials(&self) -> bool {
        use secrecy::ExposeSecret;

        matches!(
            &self.auth.strategy,
            AuthStrategy::Credentials { email, password }
                if email == "admin@example.com"
                    && password.expose_secret() == "password"
        )
    }

    /// Create a new config for the given host with a static bearer token.
    pub fn with_static_token(host: String, token: SecretString) -> Self {
        Self {
            connection: ConnectionConfig {
                scheme: default_scheme(),
                host,
                namespace: default_namespace(),
                skip_verify: false,
                timeout: default_timeout(),
            },
            auth: AuthConfig {
                strategy: AuthStrategy::StaticToken { token },
            },
        }
    }

    /// Create a new config for the given host with email/password credentials.
    pub fn with_credentials(host: String, email: String, password: SecretString) -> Self {
        Self {
            connection: ConnectionConfig {
                scheme: default_scheme(),
                host,
                namespace: default_namespace(),
                skip_verify: false,
                timeout: default_timeout(),
            },
            auth: AuthConfig {
                strategy: AuthStrategy::Credentials { email, password },
            },
        }
    }
}
