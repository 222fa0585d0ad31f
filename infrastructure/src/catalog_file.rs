//! JSON catalog seed files.
//!
//! A seed file carries everything the in-memory backend needs: record to
//! template bindings, question aggregates, answering instances, and
//! previously saved raw answers. The CLI loads one at startup and can
//! write the state back after mutations.

use quillform_domain::{
    AssessmentInstance, InstanceId, OptionIdentity, QuestionDefinition, QuestionId, RecordId,
    TemplateId,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors reading or writing a catalog seed file.
#[derive(Error, Debug)]
pub enum CatalogFileError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Serialized backend state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSeed {
    #[serde(default)]
    pub bindings: HashMap<RecordId, TemplateId>,
    #[serde(default)]
    pub questions: Vec<QuestionDefinition>,
    #[serde(default)]
    pub instances: Vec<AssessmentInstance>,
    #[serde(default)]
    pub responses: HashMap<InstanceId, HashMap<QuestionId, String>>,
}

impl CatalogSeed {
    /// Load a seed from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogFileError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let seed: CatalogSeed = serde_json::from_slice(&bytes)?;
        info!(
            path = %path.display(),
            questions = seed.questions.len(),
            instances = seed.instances.len(),
            "catalog seed loaded"
        );
        Ok(seed)
    }

    /// Write the seed to a JSON file, pretty-printed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), CatalogFileError> {
        let json = serde_json::to_vec_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        Ok(())
    }

    /// Highest numeric suffix among seeded ids, so the backend's id
    /// counter continues past them instead of colliding.
    pub fn max_numeric_id_suffix(&self) -> u64 {
        let question_ids = self
            .questions
            .iter()
            .filter_map(|q| q.id.as_ref())
            .map(|id| numeric_suffix(id.as_str()));
        let option_ids = self.questions.iter().flat_map(|q| {
            q.options.iter().map(|o| match &o.identity {
                OptionIdentity::Persisted(id) => numeric_suffix(id.as_str()),
                OptionIdentity::Draft(_) => 0,
            })
        });
        let instance_ids = self
            .instances
            .iter()
            .map(|i| numeric_suffix(i.id.as_str()));
        question_ids
            .chain(option_ids)
            .chain(instance_ids)
            .max()
            .unwrap_or(0)
    }
}

fn numeric_suffix(id: &str) -> u64 {
    id.rsplit('-')
        .next()
        .and_then(|tail| tail.parse().ok())
        .unwrap_or(0)
}
