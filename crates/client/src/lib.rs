//! Directus REST API client.
//!
//! This crate provides a typed client for the Directus items API,
//! generic over a read model, a write model, and a primary-key type.
//! It supports both static token and email/password authentication,
//! and speaks the query dialects of the legacy v8 and modern v9 APIs.

pub mod client;
pub mod datetime;
pub mod endpoints;
pub mod error;
mod models;
pub mod query;
pub mod schema;

pub use client::DirectusClient;
pub use client::builder::DirectusClientBuilder;
pub use datetime::Datetime;
pub use error::{ClientError, Result, SchemaError};
pub use models::Partials;
pub use query::{Comparison, Filter, FilterValue, Query, Sort, Version};
pub use schema::{
    Field, FieldKind, Model, Optional, OptionalValue, Presence, SequenceKind, field_paths,
};
