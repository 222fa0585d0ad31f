//! Rendered-form projection.
//!
//! Pure function of (questions, store) producing everything a renderer
//! needs: the classification of each question, its decoded value, and its
//! active options with selection state already resolved.

use crate::question::entities::QuestionDefinition;
use crate::question::taxonomy::InputKind;
use crate::response::codec::ResponseValue;
use crate::response::store::ResponseStore;
use serde::Serialize;

/// One option as presented to a respondent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormOption {
    pub value: String,
    pub selected: bool,
    pub default: bool,
}

/// One question as presented to a respondent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormQuestion {
    pub definition: QuestionDefinition,
    pub input_kind: InputKind,
    pub carries_options: bool,
    pub is_multi_valued: bool,
    pub value: ResponseValue,
    /// Active options only, in sequence order, with selection resolved
    /// against the decoded value.
    pub options: Vec<FormOption>,
}

/// Project the question list and current answers into render-ready form.
pub fn render_form(questions: &[QuestionDefinition], store: &ResponseStore) -> Vec<FormQuestion> {
    questions
        .iter()
        .map(|question| {
            let question_type = &question.question_type;
            let value = match &question.id {
                Some(id) => store.decoded(id, question_type),
                None => crate::response::codec::decode(question_type, None),
            };
            let options = question
                .active_options()
                .map(|opt| FormOption {
                    selected: is_selected(&value, &opt.value),
                    default: opt.default,
                    value: opt.value.clone(),
                })
                .collect();
            FormQuestion {
                input_kind: question_type.input_kind(),
                carries_options: question_type.carries_options(),
                is_multi_valued: question_type.is_multi_valued(),
                definition: question.clone(),
                value,
                options,
            }
        })
        .collect()
}

fn is_selected(value: &ResponseValue, option_value: &str) -> bool {
    match value {
        ResponseValue::Scalar(scalar) => scalar.as_deref() == Some(option_value),
        ResponseValue::Multi(values) => values.iter().any(|v| v == option_value),
    }
}
