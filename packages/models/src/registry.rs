// ABOUTME: Model registry service
// ABOUTME: Loads the embedded JSON configuration once and answers list/describe queries

use std::collections::HashSet;

use crate::error::{ModelNotFound, RegistryError};
use crate::types::{ModelEntry, ModelRecord, ModelsConfig};

/// Registry data compiled into the binary
const BUILTIN_MODELS_JSON: &str = include_str!("../config/models.json");

/// Ordered, immutable set of supported models.
///
/// Iteration order is the declaration order of the entries, which is also the
/// order ids appear in list responses and in [`ModelNotFound`] messages.
#[derive(Debug, Clone)]
pub struct ModelRegistry {
    entries: Vec<ModelEntry>,
}

impl ModelRegistry {
    /// Build a registry, rejecting empty ids, owners, language lists and duplicate ids
    pub fn new(entries: Vec<ModelEntry>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            if entry.id.is_empty() {
                return Err(RegistryError::EmptyId { index });
            }
            if entry.metadata.owned_by.is_empty() {
                return Err(RegistryError::EmptyOwner {
                    id: entry.id.clone(),
                });
            }
            if entry.metadata.language.is_empty() {
                return Err(RegistryError::EmptyLanguage {
                    id: entry.id.clone(),
                });
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(RegistryError::DuplicateId(entry.id.clone()));
            }
        }

        Ok(Self { entries })
    }

    /// Parse a registry from a `{"models": [...]}` JSON document
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let config: ModelsConfig = serde_json::from_str(json)?;
        Self::new(config.models)
    }

    /// The registry shipped with the server (config/models.json)
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::from_json(BUILTIN_MODELS_JSON)
    }

    /// List all models in registry order
    pub fn list_models(&self) -> Vec<ModelRecord> {
        self.entries.iter().map(ModelRecord::from).collect()
    }

    /// Describe a single model by its exact id
    pub fn get_model(&self, model_name: &str) -> Result<ModelRecord, ModelNotFound> {
        self.entries
            .iter()
            .find(|entry| entry.id == model_name)
            .map(ModelRecord::from)
            .ok_or_else(|| ModelNotFound {
                requested: model_name.to_string(),
                supported: self.ids().map(str::to_string).collect(),
            })
    }

    /// Registered ids in registry order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
