use crate::object_id::ParseObjectIdError;
use crate::types::ObjectId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: ObjectId },

    #[error("Invalid id '{value}': {source}")]
    InvalidId {
        value: String,
        #[source]
        source: ParseObjectIdError,
    },
}

impl CoreError {
    /// Parse a path-supplied identifier, mapping failure to [`CoreError::InvalidId`].
    pub fn parse_id(value: &str) -> Result<ObjectId, CoreError> {
        ObjectId::parse_str(value).map_err(|source| CoreError::InvalidId {
            value: value.to_string(),
            source,
        })
    }
}
