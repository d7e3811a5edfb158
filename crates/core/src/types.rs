pub use crate::object_id::ObjectId;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
