//! Configuration file schema.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings read from `quillform.toml`.
///
/// Everything has a default so a missing file is never an error; CLI
/// flags override whatever the file provides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Path of the JSON catalog seed the in-memory backend loads.
    pub catalog: PathBuf,
    /// Record the assessment session is attached to.
    pub record_id: String,
    /// Object API name of that record.
    pub object_api_name: String,
    /// API name of the field holding the template binding.
    pub template_field: String,
    /// Write mutated state back to the catalog file on exit.
    pub persist_changes: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from("catalog.json"),
            record_id: String::new(),
            object_api_name: "Account".to_string(),
            template_field: "Assessment_Template__c".to_string(),
            persist_changes: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.catalog, PathBuf::from("catalog.json"));
        assert_eq!(config.template_field, "Assessment_Template__c");
        assert!(config.persist_changes);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: FileConfig = toml::from_str("record_id = \"R-1\"").unwrap();
        assert_eq!(config.record_id, "R-1");
        assert_eq!(config.object_api_name, "Account");
    }
}
