//! Track model and DTOs.

use adora_core::types::{ObjectId, Timestamp};
use serde::{Deserialize, Serialize};

use super::Entity;

/// How a track is rendered when projected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectionStyle {
    pub font_size: i32,
    /// Hex (`#FFFFFF`) or named color.
    pub text_color: String,
    pub background_color: String,
}

/// A document from the `tracks` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: ObjectId,
    pub title: String,
    pub author: String,
    pub lyrics: String,
    pub category: String,
    pub tags: Vec<String>,
    pub projection_style: ProjectionStyle,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or replacing a track. Missing fields default to empty;
/// any `id` or timestamp in the payload is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrackInput {
    pub title: String,
    pub author: String,
    pub lyrics: String,
    pub category: String,
    pub tags: Vec<String>,
    pub projection_style: ProjectionStyle,
}

impl Entity for Track {
    const COLLECTION: &'static str = "tracks";
    const NAME: &'static str = "Track";

    type Input = TrackInput;

    fn from_input(
        id: ObjectId,
        input: TrackInput,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            title: input.title,
            author: input.author,
            lyrics: input.lyrics,
            category: input.category,
            tags: input.tags,
            projection_style: input.projection_style,
            created_at,
            updated_at,
        }
    }

    fn id(&self) -> ObjectId {
        self.id
    }
}
