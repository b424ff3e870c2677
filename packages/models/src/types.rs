// ABOUTME: Type definitions for registry entries and the records served over HTTP
// ABOUTME: Mirrors config/models.json on the way in and the OpenAI-style model objects on the way out

use serde::{Deserialize, Serialize};

/// Metadata attached to a registered model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub owned_by: String,
    /// Language codes in declaration order, e.g. `["en"]` or `["multilingual"]`
    pub language: Vec<String>,
}

/// One entry of config/models.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelEntry {
    pub id: String,
    #[serde(flatten)]
    pub metadata: ModelMetadata,
}

impl ModelEntry {
    pub fn new(id: impl Into<String>, owned_by: impl Into<String>, language: &[&str]) -> Self {
        Self {
            id: id.into(),
            metadata: ModelMetadata {
                owned_by: owned_by.into(),
                language: language.iter().map(|l| l.to_string()).collect(),
            },
        }
    }
}

/// Top-level shape of config/models.json
#[derive(Debug, Deserialize)]
pub(crate) struct ModelsConfig {
    pub models: Vec<ModelEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelObject {
    Model,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListObject {
    List,
}

/// Model as returned to API callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelRecord {
    pub id: String,
    /// Always 0; models carry no registration time
    pub created: i64,
    pub object: ModelObject,
    pub owned_by: String,
    pub language: Vec<String>,
}

impl From<&ModelEntry> for ModelRecord {
    fn from(entry: &ModelEntry) -> Self {
        ModelRecord {
            id: entry.id.clone(),
            created: 0,
            object: ModelObject::Model,
            owned_by: entry.metadata.owned_by.clone(),
            language: entry.metadata.language.clone(),
        }
    }
}

/// Response body of the list endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelList {
    pub object: ListObject,
    pub data: Vec<ModelRecord>,
}

impl ModelList {
    pub fn new(data: Vec<ModelRecord>) -> Self {
        Self {
            object: ListObject::List,
            data,
        }
    }
}
