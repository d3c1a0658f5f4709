//! Client builder for constructing [`DirectusClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (host, collection, scheme)
//! - Deriving the read model's field paths once, up front
//! - Configuring the underlying HTTP client (timeout, TLS verification)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`DirectusClient`] methods)
//! - Reading configuration sources (see the `directus-config` crate)
//!
//! # Invariants
//! - `host` and `collection` are required; `build()` fails without them
//! - Schema problems in the read model surface here as errors, before any
//!   request is attempted
//! - `skip_verify` only affects `https`; for `http` a warning is logged

use std::marker::PhantomData;
use std::time::Duration;

use secrecy::SecretString;

use directus_config::constants::{
    DEFAULT_MAX_REDIRECTS, DEFAULT_NAMESPACE, DEFAULT_SCHEME, DEFAULT_TIMEOUT_SECS,
};
use directus_config::{AuthStrategy, Config};

use crate::client::DirectusClient;
use crate::error::{ClientError, Result};
use crate::query::Version;
use crate::schema::{Model, field_paths};

/// Builder for creating a new [`DirectusClient`].
///
/// All options have defaults except `host` and `collection`. The read
/// model's field paths are derived when [`build`](Self::build) runs, so a
/// model declaring an unsupported shape fails construction instead of the
/// first request.
///
/// # Example
///
/// ```rust,ignore
/// use directus_client::{DirectusClient, Version};
///
/// let client = DirectusClient::<Article, ArticleDraft, i64>::builder()
///     .host("cms.example.com".to_string())
///     .collection("articles".to_string())
///     .version(Version::V9)
///     .timeout(Duration::from_secs(60))
///     .build()?;
/// ```
pub struct DirectusClientBuilder<R, W, K> {
    scheme: String,
    host: Option<String>,
    namespace: String,
    collection: Option<String>,
    token: Option<SecretString>,
    version: Version,
    skip_verify: bool,
    timeout: Duration,
    http_client: Option<reqwest::Client>,
    _models: PhantomData<fn() -> (R, W, K)>,
}

impl<R, W, K> Default for DirectusClientBuilder<R, W, K> {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            host: None,
            namespace: DEFAULT_NAMESPACE.to_string(),
            collection: None,
            token: None,
            version: Version::default(),
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            http_client: None,
            _models: PhantomData,
        }
    }
}

impl<R, W, K> DirectusClientBuilder<R, W, K> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the URL scheme (`http` or `https`). Defaults to `https`.
    pub fn scheme(mut self, scheme: String) -> Self {
        self.scheme = scheme;
        self
    }

    /// Set the host (and optional port) of the Directus server,
    /// e.g. `cms.example.com` or `localhost:8055`.
    pub fn host(mut self, host: String) -> Self {
        self.host = Some(host);
        self
    }

    /// Set the namespace (project key) prefixing all API paths.
    /// Defaults to `_`, the Directus default project.
    pub fn namespace(mut self, namespace: String) -> Self {
        self.namespace = namespace;
        self
    }

    /// Set the collection this client operates on.
    pub fn collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = Some(collection.into());
        self
    }

    /// Set the bearer token sent on every request.
    ///
    /// Optional: a token-less client can still call
    /// [`create_token`](DirectusClient::create_token).
    pub fn token(mut self, token: SecretString) -> Self {
        self.token = Some(token);
        self
    }

    /// Set the query dialect of the target server. Defaults to the legacy
    /// v8 dialect.
    pub fn version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this in development or testing environments. Disabling TLS
    /// verification makes the connection vulnerable to man-in-the-middle
    /// attacks.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Supply a pre-built HTTP client, e.g. to share one connection pool
    /// across several collection clients. When set, `skip_verify` and
    /// `timeout` are ignored.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Copy connection settings (and a static token, when configured) from
    /// loaded configuration.
    ///
    /// Credentials-based configurations leave the token unset; use
    /// [`DirectusClient::connect`] for the full construct-and-login flow.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.scheme = config.connection.scheme.clone();
        self.host = Some(config.connection.host.clone());
        self.namespace = config.connection.namespace.clone();
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        if let AuthStrategy::StaticToken { token } = &config.auth.strategy {
            self.token = Some(token.clone());
        }
        self
    }

    /// Build the [`DirectusClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidConfig`] if `host` or `collection` is
    /// missing, or the scheme is not `http`/`https`.
    /// Returns [`ClientError::Schema`] if deriving field paths from the
    /// read model fails.
    pub fn build(self) -> Result<DirectusClient<R, W, K>>
    where
        R: Model,
    {
        let host = self
            .host
            .ok_or_else(|| ClientError::InvalidConfig("host is required".to_string()))?;
        let collection = self
            .collection
            .ok_or_else(|| ClientError::InvalidConfig("collection is required".to_string()))?;
        if self.scheme != "http" && self.scheme != "https" {
            return Err(ClientError::InvalidConfig(format!(
                "unsupported scheme '{}'",
                self.scheme
            )));
        }

        let field_paths = field_paths::<R>()?;
        let fields_param = field_paths.join(",");

        let http = match self.http_client {
            Some(client) => client,
            None => {
                let mut http_builder = reqwest::Client::builder()
                    .timeout(self.timeout)
                    .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

                if self.skip_verify {
                    if self.scheme == "https" {
                        http_builder = http_builder.danger_accept_invalid_certs(true);
                    } else {
                        // skip_verify only affects TLS certificate verification.
                        // It has no effect on plain HTTP connections.
                        tracing::warn!(
                            "skip_verify=true has no effect on http URLs. TLS verification only applies to https connections."
                        );
                    }
                }

                http_builder
                    .build()
                    .map_err(|source| ClientError::Transport {
                        operation: "build http client",
                        source,
                    })?
            }
        };

        let base_url = format!(
            "{}://{}/{}",
            self.scheme,
            host.trim_matches('/'),
            self.namespace.trim_matches('/')
        );

        Ok(DirectusClient {
            http,
            base_url,
            collection,
            token: self.token,
            version: self.version,
            field_paths,
            fields_param,
            _models: PhantomData,
        })
    }
}
