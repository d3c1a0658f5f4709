//! Common test utilities for integration tests.
//!
//! Provides the shared article model used across the suite, a helper for
//! building clients pointed at a mock server, and fixture loading.
//!
//! # Invariants
//! - Fixtures are loaded from `tests/fixtures/` relative to the crate root
//! - All fixture files must be valid JSON
//! - `ARTICLE_FIELDS` must stay in sync with `Article::fields()`

use std::path::Path;

use serde::{Deserialize, Serialize};

use directus_client::schema::{Field, Model};
use directus_client::{Datetime, DirectusClient, DirectusClientBuilder};

#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// The `fields` parameter every item-returning request must carry for
/// [`Article`].
#[allow(dead_code)]
pub const ARTICLE_FIELDS: &str = "id,title,status,published_at,author.id,author.name";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: i64,
    pub name: String,
}

impl Model for Author {
    fn fields() -> Vec<Field> {
        vec![Field::scalar("id"), Field::scalar("name")]
    }
}

/// Read model used by most tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub status: String,
    pub published_at: Datetime,
    pub author: Author,
}

impl Model for Article {
    fn fields() -> Vec<Field> {
        vec![
            Field::scalar("id"),
            Field::scalar("title"),
            Field::scalar("status"),
            Field::time("published_at"),
            Field::nested::<Author>("author"),
        ]
    }
}

/// Write model: everything the server does not assign itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleDraft {
    pub title: String,
    pub status: String,
}

#[allow(dead_code)]
pub type ArticleClient = DirectusClient<Article, ArticleDraft, i64>;

/// Host (with port) of a running mock server, as the builder expects it.
pub fn mock_host(server: &MockServer) -> String {
    server
        .uri()
        .trim_start_matches("http://")
        .trim_start_matches("https://")
        .to_string()
}

/// Builder preconfigured for a mock server: plain http, the `content`
/// namespace, the `articles` collection, and a static test token.
#[allow(dead_code)]
pub fn mock_builder(server: &MockServer) -> DirectusClientBuilder<Article, ArticleDraft, i64> {
    ArticleClient::builder()
        .scheme("http".to_string())
        .host(mock_host(server))
        .namespace("content".to_string())
        .collection("articles".to_string())
        .token(secrecy::SecretString::new("test-token".to_string().into()))
}

/// Client preconfigured for a mock server.
#[allow(dead_code)]
pub fn mock_client(server: &MockServer) -> ArticleClient {
    mock_builder(server)
        .build()
        .expect("failed to build test client")
}

/// Load a JSON fixture file from the `tests/fixtures/` directory.
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
#[allow(dead_code)]
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let full_path = manifest_dir.join("tests").join("fixtures").join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}
