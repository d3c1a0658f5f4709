//! Centralized constants for the Directus client workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default URL scheme for Directus servers.
pub const DEFAULT_SCHEME: &str = "https";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed connection timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Directus Defaults
// =============================================================================

/// Default host for a local Directus instance.
pub const DEFAULT_HOST: &str = "localhost:8055";

/// Default namespace (the project key; `_` is the Directus default project).
pub const DEFAULT_NAMESPACE: &str = "_";
