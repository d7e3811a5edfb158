//! Generic document-backed repository shared by tracks and collections.

use std::marker::PhantomData;
use std::sync::Arc;

use adora_core::error::CoreError;
use adora_core::types::ObjectId;
use chrono::Utc;
use futures::TryStreamExt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{RepoResult, StoreError};
use crate::filter::Filter;
use crate::models::{Entity, UPDATED_AT_FIELD};
use crate::store::{Document, DocumentStore};

/// How update and delete treat an id that matches no document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MutationPolicy {
    /// Report success anyway. Update echoes the input back as if applied.
    #[default]
    Lenient,
    /// Report [`CoreError::NotFound`].
    Strict,
}

impl MutationPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            MutationPolicy::Strict
        } else {
            MutationPolicy::Lenient
        }
    }
}

/// CRUD operations for one [`Entity`] kind.
///
/// The repository is the only writer of `id`, `createdAt` and `updatedAt`.
/// Updates replace every caller-writable field and refresh `updatedAt`;
/// `id` and `createdAt` survive the replace. Concurrent updates to the same
/// id are last-writer-wins.
pub struct Repository<E> {
    store: Arc<dyn DocumentStore>,
    policy: MutationPolicy,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for Repository<E> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            policy: self.policy,
            _entity: PhantomData,
        }
    }
}

impl<E: Entity> Repository<E> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self::with_policy(store, MutationPolicy::default())
    }

    pub fn with_policy(store: Arc<dyn DocumentStore>, policy: MutationPolicy) -> Self {
        Self {
            store,
            policy,
            _entity: PhantomData,
        }
    }

    /// Insert a new entity with a fresh id and `createdAt == updatedAt == now`.
    pub async fn create(&self, input: E::Input) -> RepoResult<E> {
        let now = Utc::now();
        let entity = E::from_input(ObjectId::new(), input, now, now);

        let id = self
            .store
            .insert(E::COLLECTION, to_document(&entity)?)
            .await?;
        debug_assert_eq!(id, entity.id());

        tracing::debug!(entity = E::NAME, %id, "Document inserted");
        Ok(entity)
    }

    /// All stored entities in store order. Documents that no longer decode
    /// are skipped with a warning.
    pub async fn list(&self) -> RepoResult<Vec<E>> {
        let filter = Filter::all();
        let mut docs = self.store.find_many(E::COLLECTION, &filter);

        let mut entities = Vec::new();
        while let Some(doc) = docs.try_next().await? {
            match from_document::<E>(doc) {
                Ok(entity) => entities.push(entity),
                Err(e) => {
                    tracing::warn!(entity = E::NAME, error = %e, "Skipping undecodable document");
                }
            }
        }
        Ok(entities)
    }

    /// Fetch by the textual id. A malformed id is [`CoreError::InvalidId`],
    /// an unknown one [`CoreError::NotFound`].
    pub async fn get(&self, id: &str) -> RepoResult<E> {
        let id = CoreError::parse_id(id)?;
        match self.find_by_id(id).await? {
            Some(entity) => Ok(entity),
            None => Err(not_found::<E>(id).into()),
        }
    }

    pub async fn find_by_id(&self, id: ObjectId) -> RepoResult<Option<E>> {
        let doc = self
            .store
            .find_one(E::COLLECTION, &Filter::by_id(id))
            .await?;
        Ok(doc.map(from_document::<E>).transpose()?)
    }

    /// Replace every caller-writable field of `id` and refresh `updatedAt`.
    ///
    /// Under [`MutationPolicy::Lenient`] an unknown id is not an error: the
    /// input is returned as if applied, with `createdAt == updatedAt == now`.
    pub async fn update(&self, id: &str, input: E::Input) -> RepoResult<E> {
        let id = CoreError::parse_id(id)?;
        let now = Utc::now();

        let mut replacement = to_document(&input)?;
        replacement.insert(UPDATED_AT_FIELD.to_string(), serde_json::to_value(now)?);

        let matched = self
            .store
            .update_one(E::COLLECTION, &Filter::by_id(id), replacement)
            .await?;

        if matched == 0 {
            return match self.policy {
                MutationPolicy::Strict => Err(not_found::<E>(id).into()),
                MutationPolicy::Lenient => {
                    tracing::warn!(entity = E::NAME, %id, "Update matched no document");
                    Ok(E::from_input(id, input, now, now))
                }
            };
        }

        tracing::debug!(entity = E::NAME, %id, "Document updated");

        // The document can vanish between the update and the re-read.
        match self.find_by_id(id).await? {
            Some(entity) => Ok(entity),
            None => Ok(E::from_input(id, input, now, now)),
        }
    }

    /// Delete by the textual id. Under [`MutationPolicy::Lenient`] deleting
    /// an unknown id succeeds.
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let id = CoreError::parse_id(id)?;

        let deleted = self
            .store
            .delete_one(E::COLLECTION, &Filter::by_id(id))
            .await?;

        if deleted == 0 {
            if self.policy == MutationPolicy::Strict {
                return Err(not_found::<E>(id).into());
            }
            tracing::debug!(entity = E::NAME, %id, "Delete matched no document");
        }
        Ok(())
    }
}

fn not_found<E: Entity>(id: ObjectId) -> CoreError {
    CoreError::NotFound {
        entity: E::NAME,
        id,
    }
}

fn to_document<T: Serialize>(value: &T) -> RepoResult<Document> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::InvalidDocument(format!(
            "expected a JSON object, got {other}"
        ))
        .into()),
    }
}

fn from_document<T: DeserializeOwned>(doc: Document) -> Result<T, serde_json::Error> {
    serde_json::from_value(Value::Object(doc))
}
