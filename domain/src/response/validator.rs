//! Submission validation.
//!
//! A single gate: every required question must have a non-empty decoded
//! answer. Field-level validity display is a presentation concern; this
//! returns only the boolean the engine uses to refuse persistence.

use crate::question::entities::QuestionDefinition;
use crate::response::store::ResponseStore;

/// True only if every question with `required == true` has a non-empty
/// decoded answer. Questions without a persisted id cannot hold answers
/// in the store, so they are skipped rather than treated as unanswered.
pub fn all_required_answered(questions: &[QuestionDefinition], store: &ResponseStore) -> bool {
    questions
        .iter()
        .filter(|question| question.required)
        .all(|question| {
            question.id.as_ref().is_none_or(|id| {
                !store.decoded(id, &question.question_type).is_empty()
            })
        })
}
