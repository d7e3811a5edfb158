//! Handlers for the `/tracks` resource.

use adora_db::models::track::{Track, TrackInput};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::state::AppState;

/// POST /tracks
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<TrackInput>,
) -> AppResult<(StatusCode, Json<Track>)> {
    let track = state.tracks.create(input).await?;
    tracing::info!(track_id = %track.id, "Track created");
    Ok((StatusCode::CREATED, Json(track)))
}

/// GET /tracks
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Track>>> {
    let tracks = state.tracks.list().await?;
    Ok(Json(tracks))
}

/// GET /tracks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Track>> {
    let track = state.tracks.get(&id).await?;
    Ok(Json(track))
}

/// PUT /tracks/{id}
///
/// Full replace of the writable fields. The response `id` is always the path id.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<TrackInput>,
) -> AppResult<Json<Track>> {
    let track = state.tracks.update(&id, input).await?;
    tracing::info!(track_id = %track.id, "Track updated");
    Ok(Json(track))
}

/// DELETE /tracks/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    state.tracks.delete(&id).await?;
    tracing::info!(track_id = %id, "Track deleted");
    Ok(StatusCode::NO_CONTENT)
}
