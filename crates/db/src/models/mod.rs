//! Entity records and their write payloads.

pub mod collection;
pub mod track;

use adora_core::types::{ObjectId, Timestamp};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Wire/storage name of the last-modified timestamp.
pub const UPDATED_AT_FIELD: &str = "updatedAt";

/// A document-backed entity managed by a [`Repository`](crate::repositories::Repository).
pub trait Entity: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Name of the document collection holding this entity.
    const COLLECTION: &'static str;

    /// Human-readable entity name used in errors and logs.
    const NAME: &'static str;

    /// Caller-writable fields. Never carries `id` or timestamps.
    type Input: Serialize + Send + Sync;

    fn from_input(
        id: ObjectId,
        input: Self::Input,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self;

    fn id(&self) -> ObjectId;
}
