//! Question domain entities

use crate::core::ids::{InstanceId, OptionId, QuestionId, RecordId, TemplateId};
use crate::question::taxonomy::QuestionType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity of an option within an edit session.
///
/// A persisted option keeps its durable id. An option created during the
/// current edit session gets a draft number from a monotonic counter owned
/// by the session, never derived from wall-clock time, so rapid
/// successive creation cannot collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionIdentity {
    Persisted(OptionId),
    Draft(u64),
}

impl std::fmt::Display for OptionIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionIdentity::Persisted(id) => write!(f, "{id}"),
            OptionIdentity::Draft(n) => write!(f, "draft-{n}"),
        }
    }
}

/// One selectable option of an option-bearing question (Entity).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDefinition {
    pub identity: OptionIdentity,
    /// The option text; doubles as the stored answer value. Must not
    /// contain `;` (documented precondition for multi-valued encoding).
    pub value: String,
    pub active: bool,
    pub default: bool,
    /// 1-based position within the question's option list.
    pub sequence: u32,
}

impl OptionDefinition {
    /// A fresh draft option appended at the given position.
    pub fn draft(draft_id: u64, sequence: u32) -> Self {
        Self {
            identity: OptionIdentity::Draft(draft_id),
            value: String::new(),
            active: true,
            default: false,
            sequence,
        }
    }
}

/// A reusable typed question within a template (Entity).
///
/// `id` is absent until the question has been persisted. Mutation goes
/// through [`QuestionEditSession`](crate::question::builder::QuestionEditSession);
/// deletion cascades to the options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDefinition {
    pub id: Option<QuestionId>,
    pub template: TemplateId,
    pub text: String,
    pub question_type: QuestionType,
    pub required: bool,
    /// 1-based position within the template.
    pub sequence: u32,
    #[serde(default)]
    pub options: Vec<OptionDefinition>,
}

impl QuestionDefinition {
    /// The single default option, if the question has one.
    pub fn default_option(&self) -> Option<&OptionDefinition> {
        self.options.iter().find(|opt| opt.default)
    }

    /// Options offered to a respondent: active ones, in sequence order.
    pub fn active_options(&self) -> impl Iterator<Item = &OptionDefinition> {
        self.options.iter().filter(|opt| opt.active)
    }
}

/// One answering session of a template against one record (Entity).
///
/// Created by an external action; selecting it loads its questions and
/// previously saved answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentInstance {
    pub id: InstanceId,
    pub record: RecordId,
    pub object_api_name: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(value: &str, default: bool, sequence: u32) -> OptionDefinition {
        OptionDefinition {
            identity: OptionIdentity::Persisted(OptionId::new(format!("O-{sequence}"))),
            value: value.to_string(),
            active: true,
            default,
            sequence,
        }
    }

    #[test]
    fn test_default_option_lookup() {
        let question = QuestionDefinition {
            id: Some(QuestionId::new("Q-1")),
            template: TemplateId::new("T-1"),
            text: "Pick one".to_string(),
            question_type: QuestionType::RadioButtons,
            required: false,
            sequence: 1,
            options: vec![option("A", false, 1), option("B", true, 2)],
        };
        assert_eq!(question.default_option().unwrap().value, "B");
    }

    #[test]
    fn test_active_options_filters_inactive() {
        let mut retired = option("Old", false, 2);
        retired.active = false;
        let question = QuestionDefinition {
            id: None,
            template: TemplateId::new("T-1"),
            text: "Pick".to_string(),
            question_type: QuestionType::Checkboxes,
            required: false,
            sequence: 1,
            options: vec![option("A", false, 1), retired],
        };
        let values: Vec<_> = question.active_options().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["A"]);
    }

    #[test]
    fn test_draft_option_defaults() {
        let opt = OptionDefinition::draft(3, 4);
        assert_eq!(opt.identity, OptionIdentity::Draft(3));
        assert!(opt.active);
        assert!(!opt.default);
        assert_eq!(opt.sequence, 4);
        assert!(opt.value.is_empty());
    }
}
