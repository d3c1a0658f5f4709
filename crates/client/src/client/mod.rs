//! Generic Directus collection client.
//!
//! This module provides the primary [`DirectusClient`], a typed client for
//! one collection, parameterized over its read model, write model, and
//! primary-key type.
//!
//! # Submodules
//! - [`builder`]: Client construction, validation, and field-path derivation
//! - `auth`: Token creation and replacement
//! - `items`: CRUD and list operations on collection items
//!
//! # What this module does NOT handle:
//! - Request execution and decoding (delegated to [`crate::endpoints`])
//! - Field-path derivation itself (delegated to [`crate::schema`])
//!
//! # Invariants
//! - A built client is immutable; the only way to change its token is the
//!   consuming [`with_token`](DirectusClient::with_token).
//! - The derived field paths are computed exactly once, when the client is
//!   built, and reused for every request.

pub mod builder;

mod auth;
mod items;

use std::fmt;
use std::marker::PhantomData;

use reqwest::{Method, RequestBuilder};
use secrecy::{ExposeSecret, SecretString};

use crate::endpoints::encode_path_segment;
use crate::query::Version;

/// Typed client for one Directus collection.
///
/// `R` is the read model (decoded from responses and driving field-path
/// derivation), `W` the write model (encoded into request bodies), and `K`
/// the primary-key type.
///
/// # Creating a client
///
/// Use [`DirectusClient::builder()`]:
///
/// ```rust,ignore
/// use directus_client::DirectusClient;
/// use secrecy::SecretString;
///
/// let articles = DirectusClient::<Article, ArticleDraft, i64>::builder()
///     .host("cms.example.com".to_string())
///     .namespace("content".to_string())
///     .collection("articles".to_string())
///     .token(SecretString::new("my-token".to_string().into()))
///     .build()?;
/// ```
///
/// A client without a token can still call
/// [`create_token`](DirectusClient::create_token) and adopt the result via
/// [`with_token`](DirectusClient::with_token).
pub struct DirectusClient<R, W, K> {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) collection: String,
    pub(crate) token: Option<SecretString>,
    pub(crate) version: Version,
    pub(crate) field_paths: Vec<String>,
    pub(crate) fields_param: String,
    pub(crate) _models: PhantomData<fn() -> (R, W, K)>,
}

impl<R, W, K> DirectusClient<R, W, K> {
    /// Create a new client builder.
    pub fn builder() -> builder::DirectusClientBuilder<R, W, K> {
        builder::DirectusClientBuilder::new()
    }

    /// The base URL every request path is built on (`scheme://host/namespace`).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The collection this client operates on.
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// The query dialect this client speaks.
    pub fn version(&self) -> Version {
        self.version
    }

    /// The field paths derived from the read model, requested on every
    /// operation that returns items.
    pub fn field_paths(&self) -> &[String] {
        &self.field_paths
    }

    /// Whether a bearer token is configured.
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Start a request, attaching the bearer token when one is configured.
    pub(crate) fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self.http.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token.expose_secret()),
            None => builder,
        }
    }

    pub(crate) fn collection_url(&self) -> String {
        format!(
            "{}/items/{}",
            self.base_url,
            encode_path_segment(&self.collection)
        )
    }

    pub(crate) fn item_url(&self, id: impl fmt::Display) -> String {
        format!(
            "{}/{}",
            self.collection_url(),
            encode_path_segment(&id.to_string())
        )
    }

    pub(crate) fn auth_url(&self) -> String {
        format!("{}/auth/authenticate", self.base_url)
    }
}

impl<R, W, K> fmt::Debug for DirectusClient<R, W, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectusClient")
            .field("base_url", &self.base_url)
            .field("collection", &self.collection)
            .field("version", &self.version)
            .field("token", &self.token)
            .field("field_paths", &self.field_paths)
            .finish_non_exhaustive()
    }
}
