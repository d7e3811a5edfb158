//! PostgreSQL backend: every document is a JSONB row in the `documents`
//! table, keyed by `(collection, id)`.

use adora_core::types::ObjectId;
use async_trait::async_trait;
use futures::future;
use futures::stream::{BoxStream, StreamExt, TryStreamExt};
use sqlx::types::Json;
use sqlx::PgPool;

use super::{document_id, Document, DocumentStore, ID_FIELD};
use crate::error::{StoreError, StoreResult};
use crate::filter::Filter;

const INSERT_SQL: &str = "\
    INSERT INTO documents (collection, id, body) VALUES ($1, $2, $3)";

const FIND_MANY_SQL: &str = "\
    SELECT body FROM documents \
    WHERE collection = $1 AND body @> $2 \
    ORDER BY seq";

const UPDATE_BY_ID_SQL: &str = "\
    UPDATE documents SET body = body || $3 \
    WHERE collection = $1 AND id = $2";

const DELETE_BY_ID_SQL: &str = "\
    DELETE FROM documents \
    WHERE collection = $1 AND id = $2";

/// Document store backed by a pooled PostgreSQL connection.
#[derive(Debug, Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn insert(&self, collection: &str, document: Document) -> StoreResult<ObjectId> {
        let id = document_id(&document)?;

        let result = sqlx::query(INSERT_SQL)
            .bind(collection)
            .bind(id.to_hex())
            .bind(Json(&document))
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(id),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(StoreError::Duplicate {
                    collection: collection.to_string(),
                    id: id.to_hex(),
                })
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn find_one(&self, collection: &str, filter: &Filter) -> StoreResult<Option<Document>> {
        self.find_many(collection, filter).try_next().await
    }

    fn find_many<'a>(
        &'a self,
        collection: &'a str,
        filter: &'a Filter,
    ) -> BoxStream<'a, StoreResult<Document>> {
        sqlx::query_scalar::<_, Json<Document>>(FIND_MANY_SQL)
            .bind(collection)
            .bind(Json(filter.to_document()))
            .fetch(&self.pool)
            .map_ok(|Json(doc)| doc)
            .map_err(StoreError::from)
            // `@>` also matches an array field containing the scalar.
            .try_filter(move |doc| future::ready(filter.matches(doc)))
            .boxed()
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        mut replacement: Document,
    ) -> StoreResult<u64> {
        replacement.remove(ID_FIELD);

        let Some(target) = self.find_one(collection, filter).await? else {
            return Ok(0);
        };

        let result = sqlx::query(UPDATE_BY_ID_SQL)
            .bind(collection)
            .bind(document_id(&target)?.to_hex())
            .bind(Json(&replacement))
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete_one(&self, collection: &str, filter: &Filter) -> StoreResult<u64> {
        let Some(target) = self.find_one(collection, filter).await? else {
            return Ok(0);
        };

        let result = sqlx::query(DELETE_BY_ID_SQL)
            .bind(collection)
            .bind(document_id(&target)?.to_hex())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn health_check(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}
