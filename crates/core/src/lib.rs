//! Domain primitives shared by the storage and HTTP layers.

pub mod error;
pub mod object_id;
pub mod types;
