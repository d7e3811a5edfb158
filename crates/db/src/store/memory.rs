use std::collections::HashMap;

use adora_core::types::ObjectId;
use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};
use tokio::sync::RwLock;

use super::{document_id, Document, DocumentStore, ID_FIELD};
use crate::error::{StoreError, StoreResult};
use crate::filter::Filter;

/// In-process document store. Each collection keeps insertion order.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently held in `collection`.
    pub async fn len(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, Vec::len)
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn insert(&self, collection: &str, document: Document) -> StoreResult<ObjectId> {
        let id = document_id(&document)?;
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.to_string()).or_default();

        if docs
            .iter()
            .any(|existing| document_id(existing).ok() == Some(id))
        {
            return Err(StoreError::Duplicate {
                collection: collection.to_string(),
                id: id.to_hex(),
            });
        }

        docs.push(document);
        Ok(id)
    }

    async fn find_one(&self, collection: &str, filter: &Filter) -> StoreResult<Option<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| filter.matches(doc)))
            .cloned())
    }

    fn find_many<'a>(
        &'a self,
        collection: &'a str,
        filter: &'a Filter,
    ) -> BoxStream<'a, StoreResult<Document>> {
        stream::once(async move {
            let collections = self.collections.read().await;
            collections
                .get(collection)
                .map(|docs| {
                    docs.iter()
                        .filter(|doc| filter.matches(doc))
                        .cloned()
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
        .flat_map(|docs| stream::iter(docs.into_iter().map(Ok::<Document, StoreError>)))
        .boxed()
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        replacement: Document,
    ) -> StoreResult<u64> {
        let mut collections = self.collections.write().await;
        let Some(doc) = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|doc| filter.matches(doc)))
        else {
            return Ok(0);
        };

        for (field, value) in replacement {
            if field != ID_FIELD {
                doc.insert(field, value);
            }
        }
        Ok(1)
    }

    async fn delete_one(&self, collection: &str, filter: &Filter) -> StoreResult<u64> {
        let mut collections = self.collections.write().await;
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(0);
        };

        match docs.iter().position(|doc| filter.matches(doc)) {
            Some(index) => {
                docs.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }
}
