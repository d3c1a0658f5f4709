//! Configuration type definitions for the Directus client.
//!
//! Responsibilities:
//! - Define configuration types for connections and authentication.
//! - Provide serialization helpers for sensitive types (secrets, durations).
//! - Ensure consistent defaults across the configuration system.
//!
//! Does NOT handle:
//! - Configuration loading from environment variables (see `loader` module).
//! - Actual network connections or token exchange (see client crate).
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.
//! - Serialization helpers (`secret_string`, `duration_seconds`) are private modules.

mod auth;
pub(crate) mod connection;

pub use auth::{AuthConfig, AuthStrategy};
pub use connection::{Config, ConnectionConfig};
