use std::sync::Arc;

use adora_db::repositories::{CollectionRepo, MutationPolicy, TrackRepo};
use adora_db::store::DocumentStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything inside is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Document store, constructed once at startup and shared by both repositories.
    pub store: Arc<dyn DocumentStore>,
    pub config: Arc<ServerConfig>,
    pub tracks: TrackRepo,
    pub collections: CollectionRepo,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, config: ServerConfig) -> Self {
        let policy = MutationPolicy::from_strict(config.strict_mutations);
        Self {
            tracks: TrackRepo::with_policy(Arc::clone(&store), policy),
            collections: CollectionRepo::with_policy(Arc::clone(&store), policy),
            store,
            config: Arc::new(config),
        }
    }
}
