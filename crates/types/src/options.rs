//! Answer option sets returned by the question lookup endpoint

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A single selectable answer option.
///
/// `key` is the underlying form value, `label` is the human-readable text
/// shown in the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOption {
    pub key: String,
    pub label: String,
}

impl AnswerOption {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Ordered set of answer options for one question.
///
/// The wire form is a flat JSON object mapping option key to label. The
/// target selector shows entries in the order the server sent them, so this
/// type preserves arrival order instead of using an unordered map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSet {
    entries: Vec<AnswerOption>,
}

impl OptionSet {
    /// Create an empty option set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an option, keeping arrival order.
    pub fn push(&mut self, key: impl Into<String>, label: impl Into<String>) {
        self.entries.push(AnswerOption::new(key, label));
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a label by option key.
    pub fn label(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.label.as_str())
    }

    /// Whether an option with this key exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|entry| entry.key == key)
    }

    /// First option in server order, if any.
    pub fn first(&self) -> Option<&AnswerOption> {
        self.entries.first()
    }

    /// Iterate options in server order.
    pub fn iter(&self) -> std::slice::Iter<'_, AnswerOption> {
        self.entries.iter()
    }
}

impl FromIterator<(String, String)> for OptionSet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, label)| AnswerOption { key, label })
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a OptionSet {
    type Item = &'a AnswerOption;
    type IntoIter = std::slice::Iter<'a, AnswerOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for OptionSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.key, &entry.label)?;
        }
        map.end()
    }
}

/// Deserializes the endpoint's flat JSON object while preserving entry order.
/// A generic map type would lose the order the server chose.
struct OptionSetVisitor;

impl<'de> Visitor<'de> for OptionSetVisitor {
    type Value = OptionSet;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a flat map of option key to option label")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, label)) = access.next_entry::<String, String>()? {
            entries.push(AnswerOption { key, label });
        }
        Ok(OptionSet { entries })
    }
}

impl<'de> Deserialize<'de> for OptionSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OptionSetVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_order_is_preserved() {
        // Deliberately non-alphabetical so an ordered map would not hide a bug.
        let json = r#"{"C":"Paris","A":"London","B":"Berlin"}"#;
        let options: OptionSet = serde_json::from_str(json).unwrap();

        let keys: Vec<&str> = options.iter().map(|o| o.key.as_str()).collect();
        assert_eq!(keys, ["C", "A", "B"]);
        assert_eq!(options.label("A"), Some("London"));
    }

    #[test]
    fn test_empty_object_is_a_valid_empty_set() {
        let options: OptionSet = serde_json::from_str("{}").unwrap();
        assert!(options.is_empty());
    }

    #[test]
    fn test_non_string_label_is_rejected() {
        assert!(serde_json::from_str::<OptionSet>(r#"{"A":1}"#).is_err());
    }

    #[test]
    fn test_non_object_payload_is_rejected() {
        assert!(serde_json::from_str::<OptionSet>(r#"["A","B"]"#).is_err());
        assert!(serde_json::from_str::<OptionSet>("null").is_err());
    }

    #[test]
    fn test_serialization_round_trips_in_order() {
        let mut options = OptionSet::new();
        options.push("2", "No");
        options.push("1", "Yes");

        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(json, r#"{"2":"No","1":"Yes"}"#);

        let back: OptionSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, options);
    }
}
