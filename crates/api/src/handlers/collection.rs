//! Handlers for the `/collections` resource.
//!
//! `trackRefs` are passed through untouched: creating a collection that
//! references unknown tracks succeeds.

use adora_db::models::collection::{Collection, CollectionInput};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::state::AppState;

/// POST /collections
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CollectionInput>,
) -> AppResult<(StatusCode, Json<Collection>)> {
    let collection = state.collections.create(input).await?;
    tracing::info!(
        collection_id = %collection.id,
        track_count = collection.track_refs.len(),
        "Collection created"
    );
    Ok((StatusCode::CREATED, Json(collection)))
}

/// GET /collections
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Collection>>> {
    let collections = state.collections.list().await?;
    Ok(Json(collections))
}

/// GET /collections/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Collection>> {
    let collection = state.collections.get(&id).await?;
    Ok(Json(collection))
}

/// PUT /collections/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<CollectionInput>,
) -> AppResult<Json<Collection>> {
    let collection = state.collections.update(&id, input).await?;
    tracing::info!(collection_id = %collection.id, "Collection updated");
    Ok(Json(collection))
}

/// DELETE /collections/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    state.collections.delete(&id).await?;
    tracing::info!(collection_id = %id, "Collection deleted");
    Ok(StatusCode::NO_CONTENT)
}
