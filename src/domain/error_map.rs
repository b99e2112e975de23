//! Aggregated validation errors keyed by field label.
//!
//! Every validation pass (structural checks and business rules alike)
//! produces an [`ErrorMap`]: field label to ordered list of human-readable
//! violation messages. Keys keep first-seen order and messages keep the
//! order in which they were appended, so merging rule outputs yields a
//! deterministic payload for the conflict response.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Field label → ordered violation messages.
///
/// # Examples
///
/// ```
/// use ordenes::domain::ErrorMap;
///
/// let mut errors = ErrorMap::new();
/// errors.push("numeroOrden", "La orden con número 7 ya existe.");
/// errors.push("numeroOrden", "otro mensaje");
/// assert_eq!(errors.messages("numeroOrden").unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap(IndexMap<String, Vec<String>>);

impl ErrorMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message under the given field, creating the field entry on
    /// first use.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Appends every message of `other` into this map, concatenating lists
    /// for fields already present.
    pub fn merge(&mut self, other: ErrorMap) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_default().extend(messages);
        }
    }

    /// Returns `true` when no field has any message.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields carrying at least one message.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Messages recorded for a field, if any.
    pub fn messages(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Iterates fields in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Field labels in first-seen order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_preserves_message_order() {
        let mut errors = ErrorMap::new();
        errors.push("campo", "primero");
        errors.push("campo", "segundo");
        assert_eq!(
            errors.messages("campo").unwrap(),
            &["primero".to_string(), "segundo".to_string()]
        );
    }

    #[test]
    fn merge_concatenates_existing_keys() {
        let mut left = ErrorMap::new();
        left.push("a", "uno");
        let mut right = ErrorMap::new();
        right.push("a", "dos");
        right.push("b", "tres");

        left.merge(right);

        assert_eq!(left.messages("a").unwrap().len(), 2);
        assert_eq!(left.messages("b").unwrap().len(), 1);
    }

    #[test]
    fn fields_keep_first_seen_order() {
        let mut errors = ErrorMap::new();
        errors.push("zeta", "m");
        errors.push("alfa", "m");
        errors.push("zeta", "m");
        let fields: Vec<&str> = errors.fields().collect();
        assert_eq!(fields, vec!["zeta", "alfa"]);
    }

    #[test]
    fn serializes_as_plain_object() {
        let mut errors = ErrorMap::new();
        errors.push("numeroItem", "mensaje");
        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"numeroItem":["mensaje"]}"#);
    }
}
