//! Error types for content operations

use thiserror::Error;

/// Errors that can occur during content operations
#[derive(Error, Debug)]
pub enum ContentError {
    /// An entry or manifest failed validation at the loader boundary
    #[error("Content validation failed: {0}")]
    ValidationError(String),

    /// A source was asked for a collection it does not have
    #[error("Collection not found: {0}")]
    CollectionNotFound(String),

    /// Error during content transformation
    #[error("Content transformation failed: {0}")]
    TransformationError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    YamlParsing(#[from] serde_yaml::Error),
}
