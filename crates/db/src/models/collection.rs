//! Collection model and DTOs.

use adora_core::types::{ObjectId, Timestamp};
use serde::{Deserialize, Serialize};

use super::Entity;

/// A document from the `collections` collection.
///
/// `track_refs` is an ordered list of track ids. Duplicates are allowed and
/// the references are never resolved: a referenced track may not exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: ObjectId,
    pub title: String,
    pub description: String,
    pub author: String,
    pub track_refs: Vec<ObjectId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or replacing a collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CollectionInput {
    pub title: String,
    pub description: String,
    pub author: String,
    pub track_refs: Vec<ObjectId>,
}

impl Entity for Collection {
    const COLLECTION: &'static str = "collections";
    const NAME: &'static str = "Collection";

    type Input = CollectionInput;

    fn from_input(
        id: ObjectId,
        input: CollectionInput,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            title: input.title,
            description: input.description,
            author: input.author,
            track_refs: input.track_refs,
            created_at,
            updated_at,
        }
    }

    fn id(&self) -> ObjectId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn track_refs_keep_order_and_duplicates() {
        let a = ObjectId::new();
        let b = ObjectId::new();
        let input: CollectionInput = serde_json::from_value(json!({
            "title": "Sunday Set",
            "trackRefs": [b.to_hex(), a.to_hex(), b.to_hex()]
        }))
        .unwrap();

        assert_eq!(input.track_refs, vec![b, a, b]);
    }

    #[test]
    fn malformed_track_ref_is_a_decode_error() {
        let result = serde_json::from_value::<CollectionInput>(json!({
            "trackRefs": ["not-an-id"]
        }));
        assert!(result.is_err());
    }
}
