//! Repository layer.
//!
//! Each repository owns one entity kind's lifecycle on top of an injected
//! [`DocumentStore`](crate::store::DocumentStore): id generation, timestamp
//! management and the update/delete policy.

pub mod collection_repo;
pub mod entity_repo;
pub mod track_repo;

pub use collection_repo::CollectionRepo;
pub use entity_repo::{MutationPolicy, Repository};
pub use track_repo::TrackRepo;
