use adora_core::error::CoreError;

/// Failures raised by a [`DocumentStore`](crate::store::DocumentStore) backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Document has no string `id` field")]
    MissingId,

    #[error("Document id '{0}' is not a valid object id")]
    InvalidId(String),

    #[error("Document {id} already exists in '{collection}'")]
    Duplicate { collection: String, id: String },

    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Error type returned by the repositories.
///
/// Domain failures (bad id, missing entity) stay distinguishable from
/// storage failures so the HTTP layer can classify them.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<serde_json::Error> for RepoError {
    fn from(err: serde_json::Error) -> Self {
        RepoError::Store(StoreError::Serialization(err))
    }
}

pub type RepoResult<T> = Result<T, RepoError>;
