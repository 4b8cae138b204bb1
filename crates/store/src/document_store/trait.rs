use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use thiserror::Error;

/// Field map of a single document (a JSON object).
pub type Fields = serde_json::Map<String, JsonValue>;

/// Document store operation error.
///
/// These are **infrastructure errors** (transport, backend rejections,
/// decoding) as opposed to domain errors (validation of submitted entries).
#[derive(Debug, Error)]
pub enum StoreError {
    /// The service could not be reached (DNS, connect, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("store error ({status}): {message}")]
    Api { status: u16, message: String },

    /// A response body could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// A local store lock was poisoned.
    #[error("store lock poisoned")]
    Lock,
}

/// Keyed JSON documents grouped into named collections.
///
/// This is the persistence boundary of the inventory. Implementations must
/// uphold:
///
/// - `get` of an absent key returns `Ok(None)`, never an error.
/// - `set` with `merge` folds the given fields into any existing document
///   (an absent document is created); without `merge` it replaces the
///   document wholesale.
/// - `delete` of an absent key succeeds (removal is idempotent).
/// - `list` enumerates a whole collection in the service's own order; the
///   hosted backend returns key order.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Enumerate every document in `collection` as `(key, fields)` pairs.
    async fn list(&self, collection: &str) -> Result<Vec<(String, Fields)>, StoreError>;

    /// Fetch a single document.
    async fn get(&self, collection: &str, key: &str) -> Result<Option<Fields>, StoreError>;

    /// Write a single document (see the merge semantics above).
    async fn set(
        &self,
        collection: &str,
        key: &str,
        fields: Fields,
        merge: bool,
    ) -> Result<(), StoreError>;

    /// Remove a single document.
    async fn delete(&self, collection: &str, key: &str) -> Result<(), StoreError>;
}

#[async_trait]
impl<S> DocumentStore for Arc<S>
where
    S: DocumentStore + ?Sized,
{
    async fn list(&self, collection: &str) -> Result<Vec<(String, Fields)>, StoreError> {
        (**self).list(collection).await
    }

    async fn get(&self, collection: &str, key: &str) -> Result<Option<Fields>, StoreError> {
        (**self).get(collection, key).await
    }

    async fn set(
        &self,
        collection: &str,
        key: &str,
        fields: Fields,
        merge: bool,
    ) -> Result<(), StoreError> {
        (**self).set(collection, key, fields, merge).await
    }

    async fn delete(&self, collection: &str, key: &str) -> Result<(), StoreError> {
        (**self).delete(collection, key).await
    }
}
