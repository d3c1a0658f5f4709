//! Error types for the Directus client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors raised while deriving field paths from a model schema.
///
/// These indicate a mismatch between a declared model shape and the shapes
/// the deriver supports. They are raised when the client is built, before
/// any request is attempted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A field was declared as a reference/indirection type.
    #[error(
        "field '{field}' ({ty}) is declared as a reference; references are not supported, declare the field with Optional instead"
    )]
    UnsupportedReference { field: String, ty: &'static str },
}

/// Errors that can occur during Directus client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never produced a usable HTTP response.
    #[error("{operation}: transport error: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a status other than the one the operation expects.
    #[error("{operation}: unexpected status {status} (expected {expected}) from {url}: {message}")]
    UnexpectedStatus {
        operation: &'static str,
        status: u16,
        expected: u16,
        url: String,
        message: String,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("{operation}: failed to decode response body: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The read model declares a shape the field-path deriver cannot handle.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The client was configured with invalid or missing settings.
    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl ClientError {
    /// The HTTP status the server answered with, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this error indicates a rejected or missing credential.
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }

    /// Check if this error indicates the requested item does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unexpected(status: u16) -> ClientError {
        ClientError::UnexpectedStatus {
            operation: "get by id",
            status,
            expected: 200,
            url: "https://localhost:8055/_/items/articles/1".to_string(),
            message: "test".to_string(),
        }
    }

    #[test]
    fn test_status_accessor() {
        assert_eq!(unexpected(404).status(), Some(404));

        let err = ClientError::InvalidConfig("host is required".to_string());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_is_auth_error() {
        assert!(unexpected(401).is_auth_error());
        assert!(unexpected(403).is_auth_error());
        assert!(!unexpected(404).is_auth_error());
        assert!(!unexpected(500).is_auth_error());
    }

    #[test]
    fn test_is_not_found() {
        assert!(unexpected(404).is_not_found());
        assert!(!unexpected(401).is_not_found());
    }

    #[test]
    fn test_schema_error_converts_to_client_error() {
        let schema_err = SchemaError::UnsupportedReference {
            field: "author".to_string(),
            ty: "&Author",
        };
        let err: ClientError = schema_err.clone().into();
        assert!(matches!(err, ClientError::Schema(e) if e == schema_err));
    }

    #[test]
    fn test_unexpected_status_display_names_operation() {
        let message = unexpected(500).to_string();
        assert!(message.contains("get by id"));
        assert!(message.contains("500"));
        assert!(message.contains("200"));
    }

    #[test]
    fn test_unsupported_reference_display_points_to_optional() {
        let err = SchemaError::UnsupportedReference {
            field: "author.avatar".to_string(),
            ty: "&Image",
        };
        let message = err.to_string();
        assert!(message.contains("author.avatar"));
        assert!(message.contains("Optional"));
    }
}
