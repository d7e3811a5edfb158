//! Integration tests for the PostgreSQL document store.
//!
//! Need a reachable `DATABASE_URL`; run with `cargo test -- --ignored`.

use std::sync::Arc;

use adora_core::types::ObjectId;
use adora_db::error::StoreError;
use adora_db::filter::Filter;
use adora_db::models::track::TrackInput;
use adora_db::repositories::TrackRepo;
use adora_db::store::{Document, DocumentStore, PgDocumentStore};
use assert_matches::assert_matches;
use futures::TryStreamExt;
use serde_json::{json, Value};
use sqlx::PgPool;

fn doc(value: Value) -> Document {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn insert_find_update_delete(pool: PgPool) {
    let store = PgDocumentStore::new(pool);
    let id = ObjectId::new();

    store
        .insert("tracks", doc(json!({"id": id.to_hex(), "title": "a", "tags": ["x"]})))
        .await
        .unwrap();

    let found = store
        .find_one("tracks", &Filter::by_id(id))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found["title"], "a");

    let matched = store
        .update_one(
            "tracks",
            &Filter::by_id(id),
            doc(json!({"id": ObjectId::new().to_hex(), "title": "b"})),
        )
        .await
        .unwrap();
    assert_eq!(matched, 1);

    let found = store
        .find_one("tracks", &Filter::by_id(id))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found["id"], json!(id.to_hex()));
    assert_eq!(found["title"], "b");
    assert_eq!(found["tags"], json!(["x"]));

    assert_eq!(store.delete_one("tracks", &Filter::by_id(id)).await.unwrap(), 1);
    assert_eq!(store.delete_one("tracks", &Filter::by_id(id)).await.unwrap(), 0);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn duplicate_insert_is_rejected(pool: PgPool) {
    let store = PgDocumentStore::new(pool);
    let id = ObjectId::new();
    let document = doc(json!({"id": id.to_hex()}));

    store.insert("tracks", document.clone()).await.unwrap();
    let err = store.insert("tracks", document).await.unwrap_err();

    assert_matches!(err, StoreError::Duplicate { .. });
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn find_many_uses_insertion_order_and_exact_equality(pool: PgPool) {
    let store = PgDocumentStore::new(pool);
    for (title, tags) in [("one", json!(["hymn"])), ("two", json!("hymn")), ("three", json!([]))] {
        store
            .insert(
                "tracks",
                doc(json!({"id": ObjectId::new().to_hex(), "title": title, "tags": tags})),
            )
            .await
            .unwrap();
    }

    let all = Filter::all();
    let titles: Vec<Value> = store
        .find_many("tracks", &all)
        .map_ok(|d| d["title"].clone())
        .try_collect()
        .await
        .unwrap();
    assert_eq!(titles, vec![json!("one"), json!("two"), json!("three")]);

    let scalar = Filter::eq("tags", "hymn");
    let matched: Vec<Document> = store
        .find_many("tracks", &scalar)
        .try_collect()
        .await
        .unwrap();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0]["title"], "two");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn repository_round_trip_over_postgres(pool: PgPool) {
    let repo = TrackRepo::new(Arc::new(PgDocumentStore::new(pool)));

    let created = repo
        .create(TrackInput {
            title: "Be Thou My Vision".to_string(),
            ..TrackInput::default()
        })
        .await
        .unwrap();
    let fetched = repo.get(&created.id.to_string()).await.unwrap();

    assert_eq!(fetched, created);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn single_document_operations_skip_array_containment_matches(pool: PgPool) {
    let store = PgDocumentStore::new(pool);
    let array_id = ObjectId::new();
    let scalar_id = ObjectId::new();
    store
        .insert("tracks", doc(json!({"id": array_id.to_hex(), "tags": ["hymn"]})))
        .await
        .unwrap();
    store
        .insert("tracks", doc(json!({"id": scalar_id.to_hex(), "tags": "hymn"})))
        .await
        .unwrap();
    let scalar = Filter::eq("tags", "hymn");

    let found = store.find_one("tracks", &scalar).await.unwrap().unwrap();
    assert_eq!(found["id"], json!(scalar_id.to_hex()));

    let matched = store
        .update_one("tracks", &scalar, doc(json!({"title": "scalar"})))
        .await
        .unwrap();
    assert_eq!(matched, 1);
    let untouched = store
        .find_one("tracks", &Filter::by_id(array_id))
        .await
        .unwrap()
        .unwrap();
    assert!(untouched.get("title").is_none());

    assert_eq!(store.delete_one("tracks", &scalar).await.unwrap(), 1);
    assert_eq!(store.delete_one("tracks", &scalar).await.unwrap(), 0);
    assert!(store
        .find_one("tracks", &Filter::by_id(array_id))
        .await
        .unwrap()
        .is_some());
}
