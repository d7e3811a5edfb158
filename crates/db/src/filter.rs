//! Typed equality filters passed across the document-store gateway.
//!
//! A [`Filter`] is a conjunction of `field == value` predicates over the
//! top-level fields of a document. Values are restricted to scalars.
//!
//! PostgreSQL narrows candidates with `@>` containment, which also accepts an
//! array field holding the scalar; every backend then applies
//! [`Filter::matches`], so a filter means exact equality everywhere.

use adora_core::types::ObjectId;
use serde_json::Value;

use crate::store::{Document, ID_FIELD};

/// A scalar value a document field can be compared against.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Id(ObjectId),
    Text(String),
    Integer(i64),
    Bool(bool),
}

impl FieldValue {
    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Id(id) => Value::String(id.to_hex()),
            FieldValue::Text(s) => Value::String(s.clone()),
            FieldValue::Integer(n) => Value::from(*n),
            FieldValue::Bool(b) => Value::Bool(*b),
        }
    }
}

impl From<ObjectId> for FieldValue {
    fn from(id: ObjectId) -> Self {
        FieldValue::Id(id)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Integer(n)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

/// Conjunction of field-equality predicates. An empty filter matches every
/// document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    conditions: Vec<(String, FieldValue)>,
}

impl Filter {
    /// Match every document in a collection.
    pub fn all() -> Self {
        Self::default()
    }

    /// Match the document whose `id` field equals `id`.
    pub fn by_id(id: ObjectId) -> Self {
        Self::eq(ID_FIELD, id)
    }

    pub fn eq(field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self::all().and(field, value)
    }

    pub fn and(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.conditions.push((field.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Whether `document` satisfies every predicate.
    pub fn matches(&self, document: &Document) -> bool {
        self.conditions
            .iter()
            .all(|(field, value)| document.get(field) == Some(&value.to_json()))
    }

    /// Render as a JSON object, e.g. `{"id": "65f0..."}`.
    pub fn to_document(&self) -> Document {
        self.conditions
            .iter()
            .map(|(field, value)| (field.clone(), value.to_json()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = Filter::all();
        assert!(filter.is_empty());
        assert!(filter.matches(&Document::new()));
        assert!(filter.matches(&doc(json!({"title": "x"}))));
    }

    #[test]
    fn by_id_matches_hex_id_field() {
        let id = ObjectId::new();
        let filter = Filter::by_id(id);

        assert!(filter.matches(&doc(json!({"id": id.to_hex(), "title": "a"}))));
        assert!(!filter.matches(&doc(json!({"id": ObjectId::new().to_hex()}))));
        assert!(!filter.matches(&doc(json!({"title": "a"}))));
    }

    #[test]
    fn conditions_are_conjunctive() {
        let filter = Filter::eq("category", "hymn").and("fontSize", 32_i64);

        assert!(filter.matches(&doc(json!({"category": "hymn", "fontSize": 32}))));
        assert!(!filter.matches(&doc(json!({"category": "hymn", "fontSize": 30}))));
        assert!(!filter.matches(&doc(json!({"category": "psalm", "fontSize": 32}))));
    }

    #[test]
    fn scalar_does_not_match_array_field() {
        let filter = Filter::eq("tags", "worship");
        assert!(!filter.matches(&doc(json!({"tags": ["worship"]}))));
    }

    #[test]
    fn to_document_renders_json_object() {
        let id = ObjectId::new();
        let rendered = Filter::by_id(id).and("draft", false).to_document();
        assert_eq!(
            Value::Object(rendered),
            json!({"id": id.to_hex(), "draft": false})
        );
    }
}
