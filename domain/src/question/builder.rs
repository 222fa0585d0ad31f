//! Question editing session - the authoring tool's working copy.
//!
//! One session owns one working copy of a question-plus-options
//! aggregate, cloned from either a fresh template ("new question") or an
//! existing aggregate ("edit question"). Every mutation targets the
//! working copy; the original is untouched until the caller persists the
//! finished aggregate.

use crate::core::error::DomainError;
use crate::core::ids::{QuestionId, TemplateId};
use crate::question::entities::{OptionDefinition, OptionIdentity, QuestionDefinition};
use crate::question::taxonomy::QuestionType;

/// The editable working copy of a question aggregate.
///
/// Unlike [`QuestionDefinition`], the type is optional: a brand-new
/// question has no type until the author picks one, and save is blocked
/// until they do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub id: Option<QuestionId>,
    pub template: TemplateId,
    pub text: String,
    pub question_type: Option<QuestionType>,
    pub required: bool,
    pub sequence: u32,
    pub options: Vec<OptionDefinition>,
}

impl From<QuestionDefinition> for QuestionDraft {
    fn from(question: QuestionDefinition) -> Self {
        Self {
            id: question.id,
            template: question.template,
            text: question.text,
            question_type: Some(question.question_type),
            required: question.required,
            sequence: question.sequence,
            options: question.options,
        }
    }
}

/// One edit session over one working copy.
///
/// Owns the monotonic draft-identity counter: every option added during
/// this session gets a number never reused within the session.
#[derive(Debug, Clone)]
pub struct QuestionEditSession {
    draft: QuestionDraft,
    next_draft_id: u64,
}

impl QuestionEditSession {
    /// Start editing a brand-new, unsaved question at the given position.
    pub fn new_question(template: TemplateId, sequence: u32) -> Self {
        Self {
            draft: QuestionDraft {
                id: None,
                template,
                text: String::new(),
                question_type: None,
                required: false,
                sequence,
                options: Vec::new(),
            },
            next_draft_id: 0,
        }
    }

    /// Start editing a clone of an existing aggregate.
    pub fn edit_of(question: &QuestionDefinition) -> Self {
        Self {
            draft: question.clone().into(),
            next_draft_id: 0,
        }
    }

    /// The current working copy.
    pub fn draft(&self) -> &QuestionDraft {
        &self.draft
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.draft.text = text.into();
    }

    pub fn set_required(&mut self, required: bool) {
        self.draft.required = required;
    }

    /// Change the question type. Moving to a type that does not carry
    /// options clears the option list (and with it any default); moving
    /// between two option-bearing types is lossless.
    pub fn change_type(&mut self, question_type: QuestionType) {
        if !question_type.carries_options() {
            self.draft.options.clear();
        }
        self.draft.question_type = Some(question_type);
    }

    /// Append a fresh draft option: active, not default, sequence =
    /// current option count + 1.
    pub fn add_option(&mut self) -> OptionIdentity {
        let draft_id = self.next_draft_id;
        self.next_draft_id += 1;
        let sequence = self.draft.options.len() as u32 + 1;
        let option = OptionDefinition::draft(draft_id, sequence);
        let identity = option.identity.clone();
        self.draft.options.push(option);
        identity
    }

    /// Remove the option with the given identity.
    ///
    /// Remaining sequence numbers are left as-is; renumbering is a
    /// property of reordering, not deletion, so gaps persist until the
    /// next rebuild. If the removed option was the default, no
    /// replacement default is chosen.
    pub fn delete_option(&mut self, identity: &OptionIdentity) {
        self.draft.options.retain(|opt| &opt.identity != identity);
    }

    pub fn set_option_value(&mut self, identity: &OptionIdentity, value: impl Into<String>) {
        if let Some(option) = self.option_mut(identity) {
            option.value = value.into();
        }
    }

    pub fn set_option_active(&mut self, identity: &OptionIdentity, active: bool) {
        if let Some(option) = self.option_mut(identity) {
            option.active = active;
        }
    }

    /// Make the matching option the single default.
    ///
    /// Scans every option: the match becomes default, every other option
    /// loses it. An unmatched identity therefore clears all defaults.
    pub fn set_default(&mut self, identity: &OptionIdentity) {
        for option in &mut self.draft.options {
            option.default = &option.identity == identity;
        }
    }

    /// Validate the working copy and produce the aggregate to persist.
    ///
    /// Text and type must both be present; otherwise the corresponding
    /// validation error is returned and the working copy stays intact so
    /// the author can fix and retry.
    pub fn try_finish(&self) -> Result<QuestionDefinition, DomainError> {
        if self.draft.text.trim().is_empty() {
            return Err(DomainError::MissingQuestionText);
        }
        let question_type = self
            .draft
            .question_type
            .clone()
            .ok_or(DomainError::MissingQuestionType)?;
        Ok(QuestionDefinition {
            id: self.draft.id.clone(),
            template: self.draft.template.clone(),
            text: self.draft.text.clone(),
            question_type,
            required: self.draft.required,
            sequence: self.draft.sequence,
            options: self.draft.options.clone(),
        })
    }

    fn option_mut(&mut self, identity: &OptionIdentity) -> Option<&mut OptionDefinition> {
        self.draft
            .options
            .iter_mut()
            .find(|opt| &opt.identity == identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ids::OptionId;

    fn session_with_type(question_type: QuestionType) -> QuestionEditSession {
        let mut session = QuestionEditSession::new_question(TemplateId::new("T-1"), 1);
        session.set_text("Pick some");
        session.change_type(question_type);
        session
    }

    #[test]
    fn test_add_option_assigns_contiguous_sequence_and_fresh_identity() {
        let mut session = session_with_type(QuestionType::Checkboxes);
        let first = session.add_option();
        let second = session.add_option();
        assert_ne!(first, second);
        let sequences: Vec<_> = session.draft().options.iter().map(|o| o.sequence).collect();
        assert_eq!(sequences, vec![1, 2]);
    }

    #[test]
    fn test_draft_identities_never_reused_after_delete() {
        let mut session = session_with_type(QuestionType::Checkboxes);
        let first = session.add_option();
        session.delete_option(&first);
        let second = session.add_option();
        assert_ne!(first, second);
    }

    #[test]
    fn test_delete_option_keeps_sequence_gaps() {
        let mut session = session_with_type(QuestionType::Checkboxes);
        let first = session.add_option();
        session.add_option();
        session.add_option();
        session.delete_option(&first);
        let sequences: Vec<_> = session.draft().options.iter().map(|o| o.sequence).collect();
        assert_eq!(sequences, vec![2, 3]);
    }

    #[test]
    fn test_deleting_default_leaves_no_default() {
        let mut session = session_with_type(QuestionType::RadioButtons);
        let first = session.add_option();
        session.add_option();
        session.set_default(&first);
        session.delete_option(&first);
        assert!(session.draft().options.iter().all(|o| !o.default));
    }

    #[test]
    fn test_set_default_is_exclusive() {
        let mut session = session_with_type(QuestionType::RadioButtons);
        let first = session.add_option();
        let second = session.add_option();
        session.set_default(&first);
        session.set_default(&second);
        let defaults: Vec<_> = session
            .draft()
            .options
            .iter()
            .map(|o| (o.identity.clone(), o.default))
            .collect();
        assert_eq!(defaults, vec![(first, false), (second, true)]);
    }

    #[test]
    fn test_set_default_unmatched_identity_clears_all() {
        let mut session = session_with_type(QuestionType::RadioButtons);
        let first = session.add_option();
        session.add_option();
        session.set_default(&first);
        session.set_default(&OptionIdentity::Persisted(OptionId::new("missing")));
        assert!(session.draft().options.iter().all(|o| !o.default));
    }

    #[test]
    fn test_change_type_away_from_options_clears_them() {
        let mut session = session_with_type(QuestionType::Checkboxes);
        let first = session.add_option();
        session.add_option();
        session.set_default(&first);
        session.change_type(QuestionType::SingleLineText);
        let draft = session.draft();
        assert!(draft.options.is_empty());
        assert_eq!(draft.question_type, Some(QuestionType::SingleLineText));
    }

    #[test]
    fn test_change_type_between_option_bearing_types_is_lossless() {
        let mut session = session_with_type(QuestionType::Checkboxes);
        let first = session.add_option();
        session.set_option_value(&first, "A");
        session.change_type(QuestionType::RadioButtons);
        assert_eq!(session.draft().options.len(), 1);
        assert_eq!(session.draft().options[0].value, "A");
    }

    #[test]
    fn test_try_finish_requires_text_and_type() {
        let mut session = QuestionEditSession::new_question(TemplateId::new("T-1"), 1);
        assert_eq!(session.try_finish(), Err(DomainError::MissingQuestionText));

        session.set_text("   ");
        assert_eq!(session.try_finish(), Err(DomainError::MissingQuestionText));

        session.set_text("How many?");
        assert_eq!(session.try_finish(), Err(DomainError::MissingQuestionType));

        session.change_type(QuestionType::Number);
        let question = session.try_finish().unwrap();
        assert_eq!(question.text, "How many?");
        assert_eq!(question.question_type, QuestionType::Number);
        assert!(question.id.is_none());
    }

    #[test]
    fn test_edit_of_never_mutates_the_original() {
        let original = QuestionDefinition {
            id: Some(QuestionId::new("Q-1")),
            template: TemplateId::new("T-1"),
            text: "Original".to_string(),
            question_type: QuestionType::Checkboxes,
            required: false,
            sequence: 1,
            options: Vec::new(),
        };
        let mut session = QuestionEditSession::edit_of(&original);
        session.set_text("Changed");
        session.add_option();
        assert_eq!(original.text, "Original");
        assert!(original.options.is_empty());
    }
}
