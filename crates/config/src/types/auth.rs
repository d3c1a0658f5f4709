//! Authentication types for Directus client configuration.
//!
//! Responsibilities:
//! - Define authentication strategies (static token, email/password).
//! - Handle serialization of secret values.
//!
//! Does NOT handle:
//! - The actual token exchange (see the client crate's `create_token`).
//! - Secret storage beyond process memory.
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.
//! - Serialization includes secrets; secrecy guards runtime output, not persistence.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Strategy for authenticating with Directus.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AuthStrategy {
    /// A pre-issued bearer token, sent unchanged on every request.
    #[serde(rename = "token")]
    StaticToken {
        #[serde(with = "secret_string")]
        token: SecretString,
    },
    /// Email and password, exchanged for a temporary token via the
    /// authentication endpoint.
    #[serde(rename = "credentials")]
    Credentials {
        email: String,
        #[serde(with = "secret_string")]
        password: SecretString,
    },
}

/// Authentication configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// The authentication strategy to use.
    #[serde(flatten)]
    pub strategy: AuthStrategy,
}
