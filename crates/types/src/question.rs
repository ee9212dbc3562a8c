//! Question identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a quiz question.
///
/// The server assigns these (UUIDs in practice), but nothing here depends on
/// the exact shape, only on non-emptiness. A blank value in
/// the question selector means "no question selected" and never becomes a
/// `QuestionId`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    /// Build an identifier from a raw form value.
    ///
    /// Returns `None` for the empty string, the only invalid input.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_value_is_rejected() {
        assert!(QuestionId::new("").is_none());
    }

    #[test]
    fn test_any_non_empty_value_is_accepted() {
        let id = QuestionId::new("42").unwrap();
        assert_eq!(id.as_str(), "42");

        // Identifiers are opaque; a UUID is just as valid as "42".
        assert!(QuestionId::new("0be0bd0e-9b5f-4e43-9f7d-6a1c8a9f0a11").is_some());
    }

    #[test]
    fn test_serde_is_transparent() {
        let id = QuestionId::new("42").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"42\"");

        let back: QuestionId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
