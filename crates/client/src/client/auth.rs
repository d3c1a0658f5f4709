//! Authentication operations.
//!
//! This module is responsible for:
//! - Exchanging email/password credentials for a bearer token
//! - Attaching a token to an existing client
//! - The combined construct-and-login flow driven by configuration
//!
//! # What this module does NOT handle:
//! - Token refresh or expiry (callers re-authenticate when a request
//!   starts failing with an auth error)
//! - Persisting tokens between runs

use reqwest::{Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use directus_config::{AuthStrategy, Config};

use crate::client::DirectusClient;
use crate::endpoints::execute;
use crate::error::Result;
use crate::models::{LoginData, LoginRequest};
use crate::schema::Model;

impl<R, W, K> DirectusClient<R, W, K> {
    /// Exchange email/password credentials for a bearer token.
    ///
    /// The token is returned, not stored; attach it with
    /// [`with_token`](Self::with_token) to authenticate subsequent
    /// requests. Any token already held by this client is not sent.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::UnexpectedStatus`](crate::ClientError::UnexpectedStatus)
    /// when the credentials are rejected (typically a 401 response).
    pub async fn create_token(&self, email: &str, password: &str) -> Result<SecretString> {
        debug!(email, url = %self.auth_url(), "requesting auth token");

        let builder = self
            .http
            .request(Method::POST, self.auth_url())
            .json(&LoginRequest { email, password });

        let data: LoginData = execute(builder, StatusCode::OK, "create token").await?;
        Ok(SecretString::new(data.token.into()))
    }

    /// Return this client with `token` attached as the bearer token for
    /// all subsequent requests, replacing any previous token.
    pub fn with_token(mut self, token: SecretString) -> Self {
        self.token = Some(token);
        self
    }
}

impl<R, W, K> DirectusClient<R, W, K>
where
    R: Model,
{
    /// Construct a client for `collection` from configuration and
    /// authenticate it.
    ///
    /// A static-token configuration attaches the token directly without
    /// any network traffic. A credentials configuration logs in first and
    /// attaches the returned token.
    ///
    /// # Errors
    ///
    /// Returns an error when the configuration is incomplete, the read
    /// model declares an unsupported field shape, or the login request
    /// fails.
    pub async fn connect(config: &Config, collection: impl Into<String>) -> Result<Self> {
        let client = Self::builder()
            .from_config(config)
            .collection(collection)
            .build()?;

        match &config.auth.strategy {
            AuthStrategy::StaticToken { .. } => Ok(client),
            AuthStrategy::Credentials { email, password } => {
                let token = client.create_token(email, password.expose_secret()).await?;
                Ok(client.with_token(token))
            }
        }
    }
}
