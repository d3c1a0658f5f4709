//! Wire-level types shared across operations.
//!
//! Every successful Directus response except delete wraps its payload in a
//! `{"data": ...}` envelope; error responses carry one of two body shapes
//! depending on the API generation. The types here model exactly those
//! frames — collection models themselves are supplied by the caller.

use serde::{Deserialize, Serialize};

/// Free-form body for partial create/update operations.
pub type Partials = serde_json::Map<String, serde_json::Value>;

/// The standard `{"data": ...}` response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct Data<T> {
    pub data: T,
}

/// Body of the token-creation request.
#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Payload of a successful token-creation response.
#[derive(Debug, Deserialize)]
pub(crate) struct LoginData {
    pub token: String,
}

/// Error body of the legacy (v8) generation: `{"error": {"code", "message"}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct LegacyErrorBody {
    pub error: LegacyError,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LegacyError {
    #[serde(default)]
    pub code: Option<i64>,
    pub message: String,
}

/// Error body of the modern (v9+) generation: `{"errors": [{"message"}]}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ModernErrorBody {
    pub errors: Vec<ModernError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ModernError {
    pub message: String,
}
