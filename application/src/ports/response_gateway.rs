//! Response gateway port
//!
//! Persistence contract for the assessment runtime: template lookup,
//! question/answer loading, instance management, and answer submission.
//! Adapters live in the infrastructure layer.

use crate::ports::fault::RemoteFault;
use async_trait::async_trait;
use quillform_domain::{
    AssessmentInstance, InstanceId, QuestionDefinition, QuestionId, RecordId, TemplateId,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Questions and previously saved answers of one instance, as loaded.
#[derive(Debug, Clone, Default)]
pub struct InstanceForm {
    pub questions: Vec<QuestionDefinition>,
    /// Raw answer strings keyed by question id.
    pub responses: HashMap<QuestionId, String>,
}

/// One answer row handed to persistence on submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub question: QuestionId,
    pub raw_value: String,
    pub record: RecordId,
    pub object_api_name: String,
}

/// Gateway for assessment-runtime persistence.
#[async_trait]
pub trait ResponseGateway: Send + Sync {
    /// Resolve the template configured for a record, if any. `None` means
    /// the record has no associated template and the form cannot render.
    async fn template_for_record(
        &self,
        record: &RecordId,
        object_api_name: &str,
        field_api_name: &str,
    ) -> Result<Option<TemplateId>, RemoteFault>;

    /// Ordered questions of a template, with nested options.
    async fn questions(&self, template: &TemplateId) -> Result<Vec<QuestionDefinition>, RemoteFault>;

    /// Existing answering sessions for a record.
    async fn instances_for_record(
        &self,
        record: &RecordId,
        object_api_name: &str,
    ) -> Result<Vec<AssessmentInstance>, RemoteFault>;

    /// Create a new answering session for a record.
    async fn create_instance(
        &self,
        record: &RecordId,
        object_api_name: &str,
    ) -> Result<AssessmentInstance, RemoteFault>;

    /// Questions and previously saved answers of an instance.
    async fn instance_form(&self, instance: &InstanceId) -> Result<InstanceForm, RemoteFault>;

    /// Persist the full set of current answers for an instance.
    async fn save_responses(
        &self,
        instance: &InstanceId,
        responses: &[ResponseRecord],
    ) -> Result<(), RemoteFault>;
}
