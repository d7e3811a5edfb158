//! Repository for the `tracks` collection.

use crate::models::track::Track;

use super::entity_repo::Repository;

/// Provides CRUD operations for tracks.
pub type TrackRepo = Repository<Track>;
