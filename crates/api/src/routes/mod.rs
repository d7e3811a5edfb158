pub mod collection;
pub mod health;
pub mod track;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree, mounted at the root.
///
/// ```text
/// /tracks                 list, create
/// /tracks/{id}            get, update, delete
///
/// /collections            list, create
/// /collections/{id}       get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/tracks", track::router())
        .nest("/collections", collection::router())
}
