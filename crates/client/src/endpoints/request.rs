//! Request execution and envelope decoding.
//!
//! Every operation funnels through here: send one request, require the
//! status that operation expects, and decode the `{"data": ...}` envelope
//! when the operation has a body. There is no retry logic; callers decide
//! what a failed operation means for them.

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::{Data, LegacyErrorBody, ModernErrorBody};

/// Send a request and require the status the operation expects.
///
/// Any other status consumes the response body and surfaces it as an
/// [`ClientError::UnexpectedStatus`] with the extracted server message.
pub(crate) async fn send_expecting(
    builder: RequestBuilder,
    expected: StatusCode,
    operation: &'static str,
) -> Result<Response> {
    let response = builder
        .send()
        .await
        .map_err(|source| ClientError::Transport { operation, source })?;

    let status = response.status();
    if status != expected {
        debug!(operation, %status, %expected, "unexpected response status");
        let url = response.url().to_string();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "could not read error response body".to_string());

        return Err(ClientError::UnexpectedStatus {
            operation,
            status: status.as_u16(),
            expected: expected.as_u16(),
            url,
            message: error_message(&body),
        });
    }

    Ok(response)
}

/// Execute a request and decode the enveloped payload of its response.
pub(crate) async fn execute<T: DeserializeOwned>(
    builder: RequestBuilder,
    expected: StatusCode,
    operation: &'static str,
) -> Result<T> {
    let response = send_expecting(builder, expected, operation).await?;
    let bytes = response
        .bytes()
        .await
        .map_err(|source| ClientError::Transport { operation, source })?;
    let envelope: Data<T> = serde_json::from_slice(&bytes)
        .map_err(|source| ClientError::Decode { operation, source })?;
    Ok(envelope.data)
}

/// Execute a request whose success response carries no body.
pub(crate) async fn execute_empty(
    builder: RequestBuilder,
    expected: StatusCode,
    operation: &'static str,
) -> Result<()> {
    send_expecting(builder, expected, operation).await?;
    Ok(())
}

/// Pull a human-readable message out of a Directus error body.
///
/// Accepts both generations' error shapes and falls back to the raw body
/// when neither matches.
fn error_message(body: &str) -> String {
    if let Ok(modern) = serde_json::from_str::<ModernErrorBody>(body)
        && !modern.errors.is_empty()
    {
        return modern
            .errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
    }

    if let Ok(legacy) = serde_json::from_str::<LegacyErrorBody>(body) {
        return match legacy.error.code {
            Some(code) => format!("{} (code {})", legacy.error.message, code),
            None => legacy.error.message,
        };
    }

    body.to_string()
}
