//! Immutable response store.
//!
//! Maps question ids to raw answer strings. Every update operation
//! returns a new store, leaving any store shared with another reader
//! untouched: copy-on-write instead of in-place mutation.

use crate::core::ids::QuestionId;
use crate::question::taxonomy::QuestionType;
use crate::response::codec::{self, ResponseValue};
use std::collections::BTreeMap;

/// Immutable map from question id to raw answer string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseStore {
    entries: BTreeMap<QuestionId, String>,
}

impl ResponseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from previously persisted answers.
    pub fn from_saved(entries: impl IntoIterator<Item = (QuestionId, String)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// The raw stored value for a question, if any.
    pub fn get(&self, question: &QuestionId) -> Option<&str> {
        self.entries.get(question).map(String::as_str)
    }

    /// Decode the stored value for a question according to its type.
    pub fn decoded(&self, question: &QuestionId, question_type: &QuestionType) -> ResponseValue {
        codec::decode(question_type, self.get(question))
    }

    /// Unconditionally overwrite a scalar answer.
    pub fn set_scalar(&self, question: &QuestionId, value: impl Into<String>) -> Self {
        let mut entries = self.entries.clone();
        entries.insert(question.clone(), value.into());
        Self { entries }
    }

    /// Add or remove one member of a checkbox-set answer.
    ///
    /// Decodes the current raw value as a set, inserts `option_value` when
    /// `checked` and not already present, removes it when unchecked, and
    /// re-encodes. Toggling the same member on then off restores the prior
    /// encoded value exactly. A toggle that produces an empty selection
    /// where no entry existed leaves the store untouched instead of
    /// recording an explicit empty string.
    pub fn toggle_set_member(
        &self,
        question: &QuestionId,
        option_value: &str,
        checked: bool,
    ) -> Self {
        let question_type = QuestionType::Checkboxes;
        let mut selected = self.decoded(question, &question_type).into_values();
        if checked {
            if !selected.iter().any(|v| v == option_value) {
                selected.push(option_value.to_string());
            }
        } else {
            selected.retain(|v| v != option_value);
        }
        let raw = codec::encode(&question_type, &ResponseValue::Multi(selected));
        if raw.is_empty() && !self.entries.contains_key(question) {
            return self.clone();
        }
        let mut entries = self.entries.clone();
        entries.insert(question.clone(), raw);
        Self { entries }
    }

    /// Replace a multi-select answer with the exact ordered sequence the
    /// selection widget reported. No deduplication.
    pub fn replace_ordered_selection(
        &self,
        question: &QuestionId,
        values: Vec<String>,
    ) -> Self {
        let raw = codec::encode(
            &QuestionType::MultiSelectPicklist,
            &ResponseValue::Multi(values),
        );
        let mut entries = self.entries.clone();
        entries.insert(question.clone(), raw);
        Self { entries }
    }

    /// Iterate over (question id, raw value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &str)> {
        self.entries.iter().map(|(id, raw)| (id, raw.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qid(s: &str) -> QuestionId {
        QuestionId::new(s)
    }

    #[test]
    fn test_set_scalar_overwrites() {
        let store = ResponseStore::new()
            .set_scalar(&qid("Q1"), "first")
            .set_scalar(&qid("Q1"), "second");
        assert_eq!(store.get(&qid("Q1")), Some("second"));
    }

    #[test]
    fn test_updates_do_not_mutate_shared_store() {
        let before = ResponseStore::new().set_scalar(&qid("Q1"), "kept");
        let after = before.set_scalar(&qid("Q1"), "changed");
        assert_eq!(before.get(&qid("Q1")), Some("kept"));
        assert_eq!(after.get(&qid("Q1")), Some("changed"));
    }

    #[test]
    fn test_toggle_adds_in_click_order() {
        let store = ResponseStore::new()
            .toggle_set_member(&qid("Q1"), "A", true)
            .toggle_set_member(&qid("Q1"), "C", true);
        assert_eq!(store.get(&qid("Q1")), Some("A;C"));
    }

    #[test]
    fn test_toggle_on_is_idempotent() {
        let once = ResponseStore::new().toggle_set_member(&qid("Q1"), "A", true);
        let twice = once.toggle_set_member(&qid("Q1"), "A", true);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_double_toggle_restores_encoded_value() {
        let start = ResponseStore::from_saved([(qid("Q1"), "A;B".to_string())]);
        let round_trip = start
            .toggle_set_member(&qid("Q1"), "C", true)
            .toggle_set_member(&qid("Q1"), "C", false);
        assert_eq!(round_trip.get(&qid("Q1")), start.get(&qid("Q1")));
    }

    #[test]
    fn test_toggle_off_absent_member_is_noop_on_value() {
        let start = ResponseStore::from_saved([(qid("Q1"), "A;B".to_string())]);
        let after = start.toggle_set_member(&qid("Q1"), "Z", false);
        assert_eq!(after.get(&qid("Q1")), Some("A;B"));
    }

    #[test]
    fn test_toggle_off_with_no_entry_does_not_create_one() {
        let store = ResponseStore::new().toggle_set_member(&qid("Q1"), "A", false);
        assert_eq!(store.get(&qid("Q1")), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_replace_ordered_selection_keeps_order_and_duplicates() {
        let store =
            ResponseStore::new().replace_ordered_selection(&qid("Q1"), vec![
                "C".to_string(),
                "A".to_string(),
                "C".to_string(),
            ]);
        assert_eq!(store.get(&qid("Q1")), Some("C;A;C"));
    }

    #[test]
    fn test_from_saved_merges_prior_answers() {
        let store = ResponseStore::from_saved([
            (qid("Q1"), "Hello".to_string()),
            (qid("Q2"), "A;C".to_string()),
        ]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(&qid("Q2")), Some("A;C"));
        assert_eq!(store.get(&qid("Q3")), None);
    }
}
