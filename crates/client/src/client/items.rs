//! Item operations: create, read, update, delete, and list.
//!
//! Every operation that returns items asks the server for exactly the
//! columns the read model declares, via the `fields` query parameter
//! derived at construction time. Responses arrive wrapped in a `data`
//! envelope which is unwrapped before decoding into `R`.

use std::fmt;

use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::client::DirectusClient;
use crate::endpoints::{execute, execute_empty};
use crate::error::Result;
use crate::models::Partials;
use crate::query::Query;
use crate::schema::Model;

impl<R, W, K> DirectusClient<R, W, K>
where
    R: Model + DeserializeOwned,
    W: Serialize,
    K: fmt::Display,
{
    /// Insert a complete item into the collection.
    ///
    /// Returns the stored item as the server sees it, including
    /// server-assigned columns such as the primary key.
    pub async fn insert(&self, item: &W) -> Result<R> {
        debug!(collection = %self.collection, "inserting item");

        let builder = self
            .request(Method::POST, &self.collection_url())
            .query(&[("fields", self.fields_param.as_str())])
            .json(item);
        execute(builder, StatusCode::OK, "insert").await
    }

    /// Create an item from a partial set of columns.
    ///
    /// Columns absent from `partials` take their server-side defaults.
    pub async fn create(&self, partials: &Partials) -> Result<R> {
        debug!(collection = %self.collection, columns = partials.len(), "creating item");

        let builder = self
            .request(Method::POST, &self.collection_url())
            .query(&[("fields", self.fields_param.as_str())])
            .json(partials);
        execute(builder, StatusCode::OK, "create").await
    }

    /// Fetch a single item by primary key.
    pub async fn get_by_id(&self, id: &K) -> Result<R> {
        debug!(collection = %self.collection, id = %id, "fetching item");

        let builder = self
            .request(Method::GET, &self.item_url(id))
            .query(&[("fields", self.fields_param.as_str())]);
        execute(builder, StatusCode::OK, "get by id").await
    }

    /// Update a subset of an item's columns.
    ///
    /// Columns absent from `partials` keep their current values.
    pub async fn update(&self, id: &K, partials: &Partials) -> Result<R> {
        debug!(collection = %self.collection, id = %id, columns = partials.len(), "updating item");

        let builder = self
            .request(Method::PATCH, &self.item_url(id))
            .query(&[("fields", self.fields_param.as_str())])
            .json(partials);
        execute(builder, StatusCode::OK, "update").await
    }

    /// Replace an item wholesale with a complete write model.
    pub async fn set(&self, id: &K, item: &W) -> Result<R> {
        debug!(collection = %self.collection, id = %id, "replacing item");

        let builder = self
            .request(Method::PATCH, &self.item_url(id))
            .query(&[("fields", self.fields_param.as_str())])
            .json(item);
        execute(builder, StatusCode::OK, "set").await
    }

    /// Delete an item by primary key.
    ///
    /// The server responds with `204 No Content` on success; any other
    /// status is an error.
    pub async fn delete(&self, id: &K) -> Result<()> {
        debug!(collection = %self.collection, id = %id, "deleting item");

        let builder = self.request(Method::DELETE, &self.item_url(id));
        execute_empty(builder, StatusCode::NO_CONTENT, "delete").await
    }

    /// List items matching `query`.
    ///
    /// The query is rendered in the dialect of the configured server
    /// version, with the derived `fields` parameter appended last.
    pub async fn items(&self, query: &Query) -> Result<Vec<R>> {
        debug!(collection = %self.collection, version = ?self.version, "listing items");

        let mut params = query.to_params(self.version);
        params.push(("fields".to_string(), self.fields_param.clone()));

        let builder = self
            .request(Method::GET, &self.collection_url())
            .query(&params);
        execute(builder, StatusCode::OK, "items").await
    }
}
