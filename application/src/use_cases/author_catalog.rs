//! Catalog authoring use case.
//!
//! [`CatalogEditor`] drives the question-authoring tool for one template:
//! loading the question list, opening edit sessions, saving aggregates,
//! reordering, and deleting with confirmation.
//!
//! Save and delete carry an in-flight guard: while one persistence call
//! for the catalog is pending, a second one is refused instead of raced.

use crate::ports::catalog_gateway::CatalogGateway;
use crate::ports::confirmation::ConfirmationPort;
use crate::ports::notifier::{Notifier, Severity};
use quillform_domain::{
    QuestionDefinition, QuestionEditSession, QuestionId, TemplateId, renumber, reorder,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Outcome of a save or delete attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Persisted and the list reloaded.
    Saved,
    /// Domain validation failed; no persistence call was made.
    ValidationBlocked,
    /// Another save or delete is still pending; call refused.
    Pending,
    /// The user declined the confirmation prompt.
    Declined,
    /// The backend rejected the call; the working copy is intact.
    Failed(String),
}

/// Clears the in-flight flag when dropped, including when the owning
/// future is cancelled at an await point; a cancelled call must not
/// leave the editor refusing every later save and delete.
struct PendingGuard<'a>(&'a mut bool);

impl<'a> PendingGuard<'a> {
    fn arm(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

/// Authoring-tool session for one template's question catalog.
pub struct CatalogEditor {
    gateway: Arc<dyn CatalogGateway>,
    notifier: Arc<dyn Notifier>,
    confirmation: Arc<dyn ConfirmationPort>,
    template: TemplateId,
    questions: Vec<QuestionDefinition>,
    pending: bool,
}

impl CatalogEditor {
    pub fn new(
        gateway: Arc<dyn CatalogGateway>,
        notifier: Arc<dyn Notifier>,
        confirmation: Arc<dyn ConfirmationPort>,
        template: TemplateId,
    ) -> Self {
        Self {
            gateway,
            notifier,
            confirmation,
            template,
            questions: Vec::new(),
            pending: false,
        }
    }

    /// The loaded question list, in sequence order.
    pub fn questions(&self) -> &[QuestionDefinition] {
        &self.questions
    }

    /// Load the template's questions, renumbering sequences 1..N.
    pub async fn load(&mut self) -> Result<(), String> {
        debug!(template = %self.template, "loading catalog questions");
        match self.gateway.questions(&self.template).await {
            Ok(questions) => {
                self.questions = renumber(questions);
                Ok(())
            }
            Err(fault) => {
                let message = fault.human_message();
                self.notifier
                    .notify("Error loading questions", &message, Severity::Error);
                Err(message)
            }
        }
    }

    /// Open an edit session for a brand-new question appended at the end.
    pub fn new_question(&self) -> QuestionEditSession {
        QuestionEditSession::new_question(
            self.template.clone(),
            self.questions.len() as u32 + 1,
        )
    }

    /// Open an edit session over a clone of an existing question.
    pub fn edit_question(&self, question: &QuestionId) -> Option<QuestionEditSession> {
        self.questions
            .iter()
            .find(|q| q.id.as_ref() == Some(question))
            .map(QuestionEditSession::edit_of)
    }

    /// Validate the working copy and persist it.
    ///
    /// Options are passed to the gateway only for option-bearing types
    /// with at least one option; otherwise `None`. On success the list is
    /// reloaded; on a fault the edit session stays usable for retry.
    pub async fn save(&mut self, session: &QuestionEditSession) -> EditOutcome {
        let question = match session.try_finish() {
            Ok(question) => question,
            Err(error) => {
                warn!("question save blocked: {error}");
                self.notifier.notify(
                    "Error",
                    "Please complete all required fields.",
                    Severity::Error,
                );
                return EditOutcome::ValidationBlocked;
            }
        };

        if self.pending {
            debug!("save refused: another catalog call is pending");
            return EditOutcome::Pending;
        }
        let guard = PendingGuard::arm(&mut self.pending);

        let options = if question.question_type.carries_options() && !question.options.is_empty() {
            Some(question.options.as_slice())
        } else {
            None
        };
        let result = self.gateway.save_question(&question, options).await;
        drop(guard);

        match result {
            Ok(id) => {
                info!(%id, "question saved");
                self.notifier
                    .notify("Success", "Question saved successfully.", Severity::Success);
                let _ = self.load().await;
                EditOutcome::Saved
            }
            Err(fault) => {
                let message = fault.human_message();
                self.notifier
                    .notify("Error saving question", &message, Severity::Error);
                EditOutcome::Failed(message)
            }
        }
    }

    /// Apply a drag move and persist the full renumbered list.
    pub async fn move_question(&mut self, from: usize, to: usize) -> EditOutcome {
        let reordered = match reorder(self.questions.clone(), from, to) {
            Ok(reordered) => reordered,
            Err(error) => {
                warn!("reorder rejected: {error}");
                return EditOutcome::ValidationBlocked;
            }
        };
        let previous = std::mem::replace(&mut self.questions, reordered);

        match self.gateway.update_sequences(&self.questions).await {
            Ok(()) => {
                self.notifier
                    .notify("Success", "Question order updated.", Severity::Success);
                EditOutcome::Saved
            }
            Err(fault) => {
                // The backend kept the old order; fall back to it locally too.
                self.questions = previous;
                let message = fault.human_message();
                self.notifier
                    .notify("Error updating question order", &message, Severity::Error);
                EditOutcome::Failed(message)
            }
        }
    }

    /// Confirm, then delete a question and reload the list.
    pub async fn delete(&mut self, question: &QuestionId) -> EditOutcome {
        if !self
            .confirmation
            .confirm("Are you sure you want to delete this question?")
            .await
        {
            debug!(%question, "delete declined");
            return EditOutcome::Declined;
        }

        if self.pending {
            debug!("delete refused: another catalog call is pending");
            return EditOutcome::Pending;
        }
        let guard = PendingGuard::arm(&mut self.pending);
        let result = self.gateway.delete_question(question).await;
        drop(guard);

        match result {
            Ok(()) => {
                info!(%question, "question deleted");
                self.notifier.notify(
                    "Success",
                    "Question deleted successfully.",
                    Severity::Success,
                );
                let _ = self.load().await;
                EditOutcome::Saved
            }
            Err(fault) => {
                let message = fault.human_message();
                self.notifier
                    .notify("Error deleting question", &message, Severity::Error);
                EditOutcome::Failed(message)
            }
        }
    }
}
