//! Document-store gateway.
//!
//! [`DocumentStore`] is the only seam between the repositories and the
//! concrete database. Two backends are provided: [`PgDocumentStore`] (JSONB
//! documents in PostgreSQL) and [`MemoryDocumentStore`].

mod memory;
mod postgres;

use adora_core::types::ObjectId;
use async_trait::async_trait;
use futures::stream::BoxStream;
use serde_json::Value;

use crate::error::{StoreError, StoreResult};
use crate::filter::Filter;

pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;

/// A stored document: a JSON object keyed by field name.
pub type Document = serde_json::Map<String, Value>;

/// Field holding the document's [`ObjectId`] in hex form.
pub const ID_FIELD: &str = "id";

/// Capability set every document-store backend provides.
///
/// Implementations must be safe to share across concurrently running
/// requests; callers hold them behind an `Arc` and never lock around calls.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a new document. The document must carry a valid `id` field.
    async fn insert(&self, collection: &str, document: Document) -> StoreResult<ObjectId>;

    /// Return the first document matching `filter`, or `None`.
    async fn find_one(&self, collection: &str, filter: &Filter) -> StoreResult<Option<Document>>;

    /// Stream every document matching `filter` in store order. Nothing is
    /// read until the stream is polled.
    fn find_many<'a>(
        &'a self,
        collection: &'a str,
        filter: &'a Filter,
    ) -> BoxStream<'a, StoreResult<Document>>;

    /// Overwrite the top-level fields of the first matching document with
    /// those in `replacement`. The stored `id` is never changed.
    ///
    /// Returns the number of matched documents (0 or 1).
    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        replacement: Document,
    ) -> StoreResult<u64>;

    /// Remove the first matching document. Returns the number deleted (0 or 1).
    async fn delete_one(&self, collection: &str, filter: &Filter) -> StoreResult<u64>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> StoreResult<()>;
}

/// Extract and parse the `id` field of a document.
pub fn document_id(document: &Document) -> StoreResult<ObjectId> {
    let raw = document
        .get(ID_FIELD)
        .and_then(Value::as_str)
        .ok_or(StoreError::MissingId)?;
    ObjectId::parse_str(raw).map_err(|_| StoreError::InvalidId(raw.to_string()))
}
