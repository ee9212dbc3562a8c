//! In-memory options lookup
//!
//! A fixture table standing in for the endpoint where no live backend
//! exists: the demo's offline mode and host-side tests.

use async_trait::async_trait;
use optsync_core::{LookupError, OptionsProvider};
use optsync_types::{OptionSet, QuestionId};
use std::collections::HashMap;

/// Answers lookups from a fixed question table.
///
/// Unknown questions answer `Status(404)`, mirroring the real endpoint.
#[derive(Debug, Clone, Default)]
pub struct FixedOptionsProvider {
    table: HashMap<QuestionId, OptionSet>,
}

impl FixedOptionsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a question and its options; replaces any previous entry.
    pub fn with_question(mut self, question: QuestionId, options: OptionSet) -> Self {
        self.table.insert(question, options);
        self
    }

    /// Question ids known to this table, in no particular order.
    pub fn question_ids(&self) -> Vec<&QuestionId> {
        self.table.keys().collect()
    }
}

#[async_trait]
impl OptionsProvider for FixedOptionsProvider {
    async fn fetch_options(&self, question: &QuestionId) -> Result<OptionSet, LookupError> {
        self.table
            .get(question)
            .cloned()
            .ok_or(LookupError::Status(404))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_question_replaces_previous_entry() {
        let id = QuestionId::new("q1").unwrap();
        let mut first = OptionSet::new();
        first.push("A", "Old");
        let mut second = OptionSet::new();
        second.push("A", "New");

        let provider = FixedOptionsProvider::new()
            .with_question(id.clone(), first)
            .with_question(id.clone(), second);

        assert_eq!(provider.question_ids(), vec![&id]);
    }

    #[tokio::test]
    async fn test_unknown_question_mirrors_endpoint_404() {
        let provider = FixedOptionsProvider::new();
        let err = provider
            .fetch_options(&QuestionId::new("missing").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, LookupError::Status(404)));
    }
}
