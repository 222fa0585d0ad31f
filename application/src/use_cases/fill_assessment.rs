//! Assessment filling use case.
//!
//! One [`AssessmentSession`] covers one record: listing and creating
//! answering instances, loading an instance's questions and saved
//! answers, collecting edits into the immutable [`ResponseStore`], and
//! submitting.
//!
//! Loads carry a generation token. Selecting another instance bumps the
//! generation, so a load that completes after the user has moved on is
//! discarded instead of overwriting the newer instance's state.

use crate::ports::notifier::{Notifier, Severity};
use crate::ports::response_gateway::{InstanceForm, ResponseGateway, ResponseRecord};
use quillform_domain::{
    AssessmentInstance, FormQuestion, InstanceId, QuestionDefinition, QuestionId, RecordId,
    ResponseStore, TemplateId, all_required_answered, render_form, renumber,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All answers persisted; the instance was reloaded.
    Saved,
    /// A required question is unanswered. No persistence call was made.
    ValidationBlocked,
    /// The backend rejected the save; answers are kept for retry.
    Failed(String),
}

/// Token identifying one load; stale completions are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadGeneration(u64);

/// One respondent session against one record.
pub struct AssessmentSession {
    gateway: Arc<dyn ResponseGateway>,
    notifier: Arc<dyn Notifier>,
    record: RecordId,
    object_api_name: String,
    instance: Option<InstanceId>,
    questions: Vec<QuestionDefinition>,
    store: ResponseStore,
    busy: bool,
    last_error: Option<String>,
    generation: u64,
}

impl AssessmentSession {
    pub fn new(
        gateway: Arc<dyn ResponseGateway>,
        notifier: Arc<dyn Notifier>,
        record: RecordId,
        object_api_name: impl Into<String>,
    ) -> Self {
        Self {
            gateway,
            notifier,
            record,
            object_api_name: object_api_name.into(),
            instance: None,
            questions: Vec::new(),
            store: ResponseStore::new(),
            busy: false,
            last_error: None,
            generation: 0,
        }
    }

    pub fn record(&self) -> &RecordId {
        &self.record
    }

    pub fn instance(&self) -> Option<&InstanceId> {
        self.instance.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn store(&self) -> &ResponseStore {
        &self.store
    }

    /// The questions of the selected instance, in sequence order.
    pub fn questions(&self) -> &[QuestionDefinition] {
        &self.questions
    }

    /// Render-ready projection of the current state.
    pub fn form(&self) -> Vec<FormQuestion> {
        render_form(&self.questions, &self.store)
    }

    /// Resolve the template configured for this record.
    ///
    /// An absent template is fatal for the session: the form cannot
    /// render, and the condition is surfaced once as a blocking
    /// notification.
    pub async fn resolve_template(&mut self, field_api_name: &str) -> Option<TemplateId> {
        match self
            .gateway
            .template_for_record(&self.record, &self.object_api_name, field_api_name)
            .await
        {
            Ok(Some(template)) => Some(template),
            Ok(None) => {
                warn!(record = %self.record, "no assessment template associated with record");
                self.notifier.notify(
                    "Error",
                    "No assessment template is associated with this record.",
                    Severity::Error,
                );
                None
            }
            Err(fault) => {
                self.fail("Error", &fault.human_message());
                None
            }
        }
    }

    /// Existing answering instances for this record.
    pub async fn instances(&mut self) -> Vec<AssessmentInstance> {
        match self
            .gateway
            .instances_for_record(&self.record, &self.object_api_name)
            .await
        {
            Ok(instances) => instances,
            Err(fault) => {
                self.fail("Error loading instances", &fault.human_message());
                Vec::new()
            }
        }
    }

    /// Create a new answering instance for this record.
    pub async fn create_instance(&mut self) -> Option<AssessmentInstance> {
        match self
            .gateway
            .create_instance(&self.record, &self.object_api_name)
            .await
        {
            Ok(instance) => {
                self.notifier.notify(
                    "Success",
                    "New assessment instance created.",
                    Severity::Success,
                );
                Some(instance)
            }
            Err(fault) => {
                self.fail("Error creating assessment instance", &fault.human_message());
                None
            }
        }
    }

    /// Select an instance and load its questions and saved answers.
    pub async fn select_instance(&mut self, instance: InstanceId) {
        let ticket = self.begin_load(instance.clone());
        info!(%instance, "loading questions and responses");
        self.busy = true;
        let result = self.gateway.instance_form(&instance).await;
        self.busy = false;
        match result {
            Ok(form) => {
                self.finish_load(ticket, form);
            }
            Err(fault) => {
                self.fail("Error", &fault.human_message());
            }
        }
    }

    /// Mark a new load as current and return its token.
    pub fn begin_load(&mut self, instance: InstanceId) -> LoadGeneration {
        self.generation += 1;
        self.instance = Some(instance);
        LoadGeneration(self.generation)
    }

    /// Apply a completed load if it is still the current one. Returns
    /// false when the completion was stale and discarded.
    pub fn finish_load(&mut self, ticket: LoadGeneration, form: InstanceForm) -> bool {
        if ticket.0 != self.generation {
            debug!(
                stale = ticket.0,
                current = self.generation,
                "discarding stale instance load"
            );
            return false;
        }
        self.questions = renumber(form.questions);
        self.store = ResponseStore::from_saved(form.responses);
        self.last_error = None;
        true
    }

    /// Overwrite a scalar answer.
    pub fn set_scalar(&mut self, question: &QuestionId, value: impl Into<String>) {
        self.store = self.store.set_scalar(question, value);
    }

    /// Toggle one member of a checkbox-set answer.
    pub fn toggle_option(&mut self, question: &QuestionId, option_value: &str, checked: bool) {
        self.store = self.store.toggle_set_member(question, option_value, checked);
    }

    /// Replace a multi-select answer with the widget's ordered selection.
    pub fn replace_selection(&mut self, question: &QuestionId, values: Vec<String>) {
        self.store = self.store.replace_ordered_selection(question, values);
    }

    /// Validate and persist the current answers, then reload.
    ///
    /// When a required question is unanswered no persistence call is
    /// issued and nothing is lost. On a backend fault the store is kept
    /// for retry. The busy flag clears on every path.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let Some(instance) = self.instance.clone() else {
            warn!("submit with no instance selected");
            return SubmitOutcome::ValidationBlocked;
        };

        if !all_required_answered(&self.questions, &self.store) {
            self.notifier.notify(
                "Error",
                "Please complete all required fields.",
                Severity::Error,
            );
            return SubmitOutcome::ValidationBlocked;
        }

        let records = self.response_records();
        debug!(count = records.len(), %instance, "saving responses");

        self.busy = true;
        let result = self.gateway.save_responses(&instance, &records).await;
        self.busy = false;

        match result {
            Ok(()) => {
                info!(%instance, "responses saved");
                self.notifier.notify(
                    "Success",
                    "Assessment submitted successfully.",
                    Severity::Success,
                );
                self.store = ResponseStore::new();
                self.select_instance(instance).await;
                SubmitOutcome::Saved
            }
            Err(fault) => {
                let message = fault.human_message();
                self.fail("Error", &message);
                SubmitOutcome::Failed(message)
            }
        }
    }

    /// Answer rows for persistence. Questions with no stored value or an
    /// empty raw string are skipped.
    fn response_records(&self) -> Vec<ResponseRecord> {
        self.questions
            .iter()
            .filter_map(|question| {
                let id = question.id.as_ref()?;
                let raw = self.store.get(id)?;
                if raw.is_empty() {
                    return None;
                }
                Some(ResponseRecord {
                    question: id.clone(),
                    raw_value: raw.to_string(),
                    record: self.record.clone(),
                    object_api_name: self.object_api_name.clone(),
                })
            })
            .collect()
    }

    fn fail(&mut self, title: &str, message: &str) {
        warn!("{title}: {message}");
        self.last_error = Some(message.to_string());
        self.notifier.notify(title, message, Severity::Error);
    }
}
