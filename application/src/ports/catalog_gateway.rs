//! Catalog gateway port
//!
//! Persistence contract for the question-authoring tool: loading a
//! template's questions, saving a question-plus-options aggregate,
//! persisting a reordered sequence, and deleting a question (which
//! cascades to its options on the backend).

use crate::ports::fault::RemoteFault;
use async_trait::async_trait;
use quillform_domain::{OptionDefinition, QuestionDefinition, QuestionId, TemplateId};

/// Gateway for authoring-tool persistence.
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    /// Ordered questions of a template, with nested options.
    async fn questions(&self, template: &TemplateId) -> Result<Vec<QuestionDefinition>, RemoteFault>;

    /// Persist one question aggregate. `options` is `None` for types
    /// that carry no options; passing `Some` replaces the stored option
    /// set. Returns the question's persisted id.
    async fn save_question(
        &self,
        question: &QuestionDefinition,
        options: Option<&[OptionDefinition]>,
    ) -> Result<QuestionId, RemoteFault>;

    /// Persist the sequence numbers of the full renumbered list.
    async fn update_sequences(&self, questions: &[QuestionDefinition]) -> Result<(), RemoteFault>;

    /// Delete a question and its options.
    async fn delete_question(&self, question: &QuestionId) -> Result<(), RemoteFault>;
}
