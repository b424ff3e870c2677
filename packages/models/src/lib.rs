// ABOUTME: Speech-transcription model registry
// ABOUTME: JSON-backed, ordered, read-only lookup of supported models and their metadata

pub mod error;
pub mod registry;
pub mod types;

pub use error::{ModelNotFound, RegistryError};
pub use registry::ModelRegistry;
pub use types::{ListObject, ModelEntry, ModelList, ModelMetadata, ModelObject, ModelRecord};
