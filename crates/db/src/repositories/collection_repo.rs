//! Repository for the `collections` collection.
//!
//! `trackRefs` are stored exactly as given. Nothing checks that the tracks
//! exist, and deleting a track leaves collections that reference it intact.

use crate::models::collection::Collection;

use super::entity_repo::Repository;

/// Provides CRUD operations for collections.
pub type CollectionRepo = Repository<Collection>;
