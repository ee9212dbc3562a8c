//! In-memory select-element handles
//!
//! `QuestionSelect` plays the source role (current value plus a change
//! stream), `AnswerSelect` plays the dependent role (option list plus
//! selection). Hosts with real UI controls implement the same traits.

use arc_swap::ArcSwapOption;
use optsync_core::{OptionsTarget, SourceElement};
use optsync_types::{OptionSet, QuestionId};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Source control: the "question" selector.
///
/// Holds the currently selected question and publishes every change on an
/// unbounded channel, one event per `select` call, like a DOM change event.
pub struct QuestionSelect {
    current: ArcSwapOption<QuestionId>,
    changes: mpsc::UnboundedSender<Option<QuestionId>>,
}

impl QuestionSelect {
    /// Create the control with an initial value (edit forms arrive
    /// pre-filled) and the change stream to hand to the controller.
    pub fn new(
        initial: Option<QuestionId>,
    ) -> (Self, mpsc::UnboundedReceiver<Option<QuestionId>>) {
        let (changes, changes_rx) = mpsc::unbounded_channel();
        let select = Self {
            current: ArcSwapOption::from(initial.map(Arc::new)),
            changes,
        };
        (select, changes_rx)
    }

    /// Change the selection; `None` is the blank row.
    ///
    /// Publishes the change even when the value is unchanged, matching the
    /// DOM, where re-picking the same entry still fires the handler.
    pub fn select(&self, value: Option<QuestionId>) {
        self.current.store(value.clone().map(Arc::new));
        let _ = self.changes.send(value);
    }
}

impl SourceElement for QuestionSelect {
    fn value(&self) -> Option<QuestionId> {
        self.current.load_full().map(|id| (*id).clone())
    }
}

/// Dependent control: the "selected option" selector.
#[derive(Debug, Clone, Default)]
pub struct AnswerSelect {
    options: OptionSet,
    selected: Option<String>,
}

impl AnswerSelect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current option list, in the order last applied.
    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    /// Key of the currently selected option.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Select an option by key; ignored when the key is not present.
    pub fn select(&mut self, key: &str) {
        if self.options.contains_key(key) {
            self.selected = Some(key.to_string());
        }
    }
}

impl OptionsTarget for AnswerSelect {
    /// Replace the entries wholesale. The previous selection survives when
    /// its key is still present; otherwise the first entry becomes selected,
    /// which is what a browser does after an empty-and-append.
    fn replace_options(&mut self, options: &OptionSet) {
        self.options = options.clone();
        self.selected = match self.selected.take() {
            Some(key) if self.options.contains_key(&key) => Some(key),
            _ => self.options.first().map(|entry| entry.key.clone()),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(pairs: &[(&str, &str)]) -> OptionSet {
        let mut set = OptionSet::new();
        for (key, label) in pairs {
            set.push(*key, *label);
        }
        set
    }

    #[test]
    fn test_question_select_publishes_changes() {
        let (select, mut changes) = QuestionSelect::new(None);
        assert!(select.value().is_none());

        let id = QuestionId::new("42").unwrap();
        select.select(Some(id.clone()));
        assert_eq!(select.value(), Some(id.clone()));
        assert_eq!(changes.try_recv().unwrap(), Some(id));

        select.select(None);
        assert!(select.value().is_none());
        assert_eq!(changes.try_recv().unwrap(), None);
    }

    #[test]
    fn test_replacement_keeps_surviving_selection() {
        let mut select = AnswerSelect::new();
        select.replace_options(&options(&[("A", "Alpha"), ("B", "Beta")]));
        select.select("B");

        select.replace_options(&options(&[("B", "Beta"), ("C", "Gamma")]));
        assert_eq!(select.selected(), Some("B"));
    }

    #[test]
    fn test_replacement_falls_back_to_first_entry() {
        let mut select = AnswerSelect::new();
        select.replace_options(&options(&[("A", "Alpha"), ("B", "Beta")]));
        select.select("A");

        select.replace_options(&options(&[("C", "Gamma"), ("D", "Delta")]));
        assert_eq!(select.selected(), Some("C"));
    }

    #[test]
    fn test_empty_replacement_clears_selection() {
        let mut select = AnswerSelect::new();
        select.replace_options(&options(&[("A", "Alpha")]));
        assert_eq!(select.selected(), Some("A"));

        select.replace_options(&OptionSet::new());
        assert!(select.selected().is_none());
        assert!(select.options().is_empty());
    }

    #[test]
    fn test_selecting_unknown_key_is_ignored() {
        let mut select = AnswerSelect::new();
        select.replace_options(&options(&[("A", "Alpha")]));
        select.select("Z");
        assert_eq!(select.selected(), Some("A"));
    }
}
