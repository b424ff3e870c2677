// ABOUTME: Error types for registry construction and model lookup
// ABOUTME: Lookup failures carry the attempted id and the supported ids for caller diagnostics

use thiserror::Error;

/// Raised when registry data violates its invariants
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Failed to parse model configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Model entry #{index} has an empty id")]
    EmptyId { index: usize },

    #[error("Model '{id}' has an empty owned_by")]
    EmptyOwner { id: String },

    #[error("Model '{id}' declares no languages")]
    EmptyLanguage { id: String },

    #[error("Model '{0}' is registered more than once")]
    DuplicateId(String),
}

/// The requested model id is not a registry key
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Model '{requested}' not supported. Supported models: {}",
    .supported.join(", ")
)]
pub struct ModelNotFound {
    pub requested: String,
    /// Registered ids in registry order
    pub supported: Vec<String>,
}
