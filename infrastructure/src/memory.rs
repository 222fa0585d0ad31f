//! In-memory backend adapter.
//!
//! Implements both persistence gateways over a `tokio::sync::RwLock`
//! state. Serves as the demo backend for the CLI and as the integration
//! test double. Persisted identifiers are allocated from a counter;
//! option identities in saved questions are rewritten from draft to
//! persisted form, as a real backend would on insert.

use async_trait::async_trait;
use chrono::Utc;
use quillform_application::ports::fault::RemoteFault;
use quillform_application::{CatalogGateway, InstanceForm, ResponseGateway, ResponseRecord};
use quillform_domain::{
    AssessmentInstance, InstanceId, OptionDefinition, OptionId, OptionIdentity,
    QuestionDefinition, QuestionId, RecordId, TemplateId,
};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::catalog_file::CatalogSeed;

#[derive(Debug, Default)]
struct BackendState {
    /// Template bound to each record, keyed by record id.
    bindings: HashMap<RecordId, TemplateId>,
    questions: Vec<QuestionDefinition>,
    instances: Vec<AssessmentInstance>,
    /// Saved raw answers per instance.
    responses: HashMap<InstanceId, HashMap<QuestionId, String>>,
    next_id: u64,
}

impl BackendState {
    fn allocate(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{:04}", self.next_id)
    }

    fn template_questions(&self, template: &TemplateId) -> Vec<QuestionDefinition> {
        let mut questions: Vec<_> = self
            .questions
            .iter()
            .filter(|q| &q.template == template)
            .cloned()
            .collect();
        questions.sort_by_key(|q| q.sequence);
        questions
    }
}

/// In-memory implementation of both persistence gateways.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    state: RwLock<BackendState>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a backend pre-populated from a catalog seed.
    pub fn from_seed(seed: CatalogSeed) -> Self {
        let max_seeded = seed.max_numeric_id_suffix();
        Self {
            state: RwLock::new(BackendState {
                bindings: seed.bindings,
                questions: seed.questions,
                instances: seed.instances,
                responses: seed.responses,
                next_id: max_seeded,
            }),
        }
    }

    /// Snapshot the current state as a seed (for saving back to disk).
    pub async fn snapshot(&self) -> CatalogSeed {
        let state = self.state.read().await;
        CatalogSeed {
            bindings: state.bindings.clone(),
            questions: state.questions.clone(),
            instances: state.instances.clone(),
            responses: state.responses.clone(),
        }
    }

    /// Bind a record to a template.
    pub async fn bind_record(&self, record: RecordId, template: TemplateId) {
        self.state.write().await.bindings.insert(record, template);
    }
}

#[async_trait]
impl ResponseGateway for InMemoryBackend {
    async fn template_for_record(
        &self,
        record: &RecordId,
        _object_api_name: &str,
        _field_api_name: &str,
    ) -> Result<Option<TemplateId>, RemoteFault> {
        Ok(self.state.read().await.bindings.get(record).cloned())
    }

    async fn questions(&self, template: &TemplateId) -> Result<Vec<QuestionDefinition>, RemoteFault> {
        Ok(self.state.read().await.template_questions(template))
    }

    async fn instances_for_record(
        &self,
        record: &RecordId,
        _object_api_name: &str,
    ) -> Result<Vec<AssessmentInstance>, RemoteFault> {
        Ok(self
            .state
            .read()
            .await
            .instances
            .iter()
            .filter(|instance| &instance.record == record)
            .cloned()
            .collect())
    }

    async fn create_instance(
        &self,
        record: &RecordId,
        object_api_name: &str,
    ) -> Result<AssessmentInstance, RemoteFault> {
        let mut state = self.state.write().await;
        if !state.bindings.contains_key(record) {
            return Err(RemoteFault::body(format!(
                "No template bound to record {record}"
            )));
        }
        let id = InstanceId::new(state.allocate("I"));
        let instance = AssessmentInstance {
            id: id.clone(),
            record: record.clone(),
            object_api_name: object_api_name.to_string(),
            name: format!("Assessment {id}"),
            created_at: Utc::now(),
        };
        state.instances.push(instance.clone());
        debug!(%id, %record, "created assessment instance");
        Ok(instance)
    }

    async fn instance_form(&self, instance: &InstanceId) -> Result<InstanceForm, RemoteFault> {
        let state = self.state.read().await;
        let found = state
            .instances
            .iter()
            .find(|i| &i.id == instance)
            .ok_or_else(|| RemoteFault::body(format!("Unknown instance {instance}")))?;
        let template = state
            .bindings
            .get(&found.record)
            .ok_or_else(|| RemoteFault::body(format!("No template bound to record {}", found.record)))?;
        Ok(InstanceForm {
            questions: state.template_questions(template),
            responses: state.responses.get(instance).cloned().unwrap_or_default(),
        })
    }

    async fn save_responses(
        &self,
        instance: &InstanceId,
        responses: &[ResponseRecord],
    ) -> Result<(), RemoteFault> {
        let mut state = self.state.write().await;
        if !state.instances.iter().any(|i| &i.id == instance) {
            return Err(RemoteFault::body(format!("Unknown instance {instance}")));
        }
        let saved = state.responses.entry(instance.clone()).or_default();
        for response in responses {
            saved.insert(response.question.clone(), response.raw_value.clone());
        }
        debug!(count = responses.len(), %instance, "responses persisted");
        Ok(())
    }
}

#[async_trait]
impl CatalogGateway for InMemoryBackend {
    async fn questions(&self, template: &TemplateId) -> Result<Vec<QuestionDefinition>, RemoteFault> {
        Ok(self.state.read().await.template_questions(template))
    }

    async fn save_question(
        &self,
        question: &QuestionDefinition,
        options: Option<&[OptionDefinition]>,
    ) -> Result<QuestionId, RemoteFault> {
        let mut state = self.state.write().await;

        let mut stored = question.clone();
        stored.options = options.map(<[OptionDefinition]>::to_vec).unwrap_or_default();
        // Draft options get durable ids on insert.
        for option in &mut stored.options {
            if matches!(option.identity, OptionIdentity::Draft(_)) {
                let id = state.allocate("O");
                option.identity = OptionIdentity::Persisted(OptionId::new(id));
            }
        }

        let id = match &stored.id {
            Some(id) => {
                let id = id.clone();
                let slot = state
                    .questions
                    .iter_mut()
                    .find(|q| q.id.as_ref() == Some(&id))
                    .ok_or_else(|| RemoteFault::body(format!("Unknown question {id}")))?;
                *slot = stored;
                id
            }
            None => {
                let id = QuestionId::new(state.allocate("Q"));
                stored.id = Some(id.clone());
                state.questions.push(stored);
                id
            }
        };
        debug!(%id, "question saved");
        Ok(id)
    }

    async fn update_sequences(&self, questions: &[QuestionDefinition]) -> Result<(), RemoteFault> {
        let mut state = self.state.write().await;
        for incoming in questions {
            let Some(id) = &incoming.id else { continue };
            if let Some(stored) = state
                .questions
                .iter_mut()
                .find(|q| q.id.as_ref() == Some(id))
            {
                stored.sequence = incoming.sequence;
            }
        }
        Ok(())
    }

    async fn delete_question(&self, question: &QuestionId) -> Result<(), RemoteFault> {
        let mut state = self.state.write().await;
        let before = state.questions.len();
        // Options live inside the aggregate, so removal cascades.
        state.questions.retain(|q| q.id.as_ref() != Some(question));
        if state.questions.len() == before {
            return Err(RemoteFault::body(format!("Unknown question {question}")));
        }
        for saved in state.responses.values_mut() {
            saved.remove(question);
        }
        debug!(%question, "question deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quillform_domain::QuestionType;

    fn draft_question(template: &str, text: &str) -> QuestionDefinition {
        QuestionDefinition {
            id: None,
            template: TemplateId::new(template),
            text: text.to_string(),
            question_type: QuestionType::Checkboxes,
            required: false,
            sequence: 1,
            options: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_save_question_assigns_ids_to_drafts() {
        let backend = InMemoryBackend::new();
        let question = draft_question("T-1", "Pick some");
        let options = vec![
            OptionDefinition {
                identity: OptionIdentity::Draft(0),
                value: "A".to_string(),
                active: true,
                default: false,
                sequence: 1,
            },
            OptionDefinition {
                identity: OptionIdentity::Draft(1),
                value: "B".to_string(),
                active: true,
                default: true,
                sequence: 2,
            },
        ];

        let id = CatalogGateway::save_question(&backend, &question, Some(&options))
            .await
            .unwrap();

        let stored = CatalogGateway::questions(&backend, &TemplateId::new("T-1"))
            .await
            .unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, Some(id));
        assert!(stored[0]
            .options
            .iter()
            .all(|o| matches!(o.identity, OptionIdentity::Persisted(_))));
        assert_eq!(stored[0].default_option().unwrap().value, "B");
    }

    #[tokio::test]
    async fn test_delete_cascades_and_clears_saved_answers() {
        let backend = InMemoryBackend::new();
        backend
            .bind_record(RecordId::new("R-1"), TemplateId::new("T-1"))
            .await;
        let id = CatalogGateway::save_question(&backend, &draft_question("T-1", "Q"), None)
            .await
            .unwrap();
        let instance = backend
            .create_instance(&RecordId::new("R-1"), "Account")
            .await
            .unwrap();
        backend
            .save_responses(
                &instance.id,
                &[ResponseRecord {
                    question: id.clone(),
                    raw_value: "x".to_string(),
                    record: RecordId::new("R-1"),
                    object_api_name: "Account".to_string(),
                }],
            )
            .await
            .unwrap();

        backend.delete_question(&id).await.unwrap();

        let form = backend.instance_form(&instance.id).await.unwrap();
        assert!(form.questions.is_empty());
        assert!(form.responses.is_empty());
    }

    #[tokio::test]
    async fn test_instance_form_round_trip() {
        let backend = InMemoryBackend::new();
        backend
            .bind_record(RecordId::new("R-1"), TemplateId::new("T-1"))
            .await;
        let id = CatalogGateway::save_question(&backend, &draft_question("T-1", "Q"), None)
            .await
            .unwrap();
        let instance = backend
            .create_instance(&RecordId::new("R-1"), "Account")
            .await
            .unwrap();

        backend
            .save_responses(
                &instance.id,
                &[ResponseRecord {
                    question: id.clone(),
                    raw_value: "A;C".to_string(),
                    record: RecordId::new("R-1"),
                    object_api_name: "Account".to_string(),
                }],
            )
            .await
            .unwrap();

        let form = backend.instance_form(&instance.id).await.unwrap();
        assert_eq!(form.responses.get(&id).map(String::as_str), Some("A;C"));
    }

    #[tokio::test]
    async fn test_update_sequences_applies_by_id() {
        let backend = InMemoryBackend::new();
        let first = CatalogGateway::save_question(&backend, &draft_question("T-1", "First"), None)
            .await
            .unwrap();
        let second =
            CatalogGateway::save_question(&backend, &draft_question("T-1", "Second"), None)
                .await
                .unwrap();

        let mut questions = CatalogGateway::questions(&backend, &TemplateId::new("T-1"))
            .await
            .unwrap();
        questions[0].sequence = 2;
        questions[1].sequence = 1;
        backend.update_sequences(&questions).await.unwrap();

        let stored = CatalogGateway::questions(&backend, &TemplateId::new("T-1"))
            .await
            .unwrap();
        assert_eq!(stored[0].id, Some(second));
        assert_eq!(stored[1].id, Some(first));
    }

    #[tokio::test]
    async fn test_create_instance_requires_binding() {
        let backend = InMemoryBackend::new();
        let fault = backend
            .create_instance(&RecordId::new("R-unbound"), "Account")
            .await
            .unwrap_err();
        assert!(fault.human_message().contains("R-unbound"));
    }
}
