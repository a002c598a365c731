//! Error types for locale configuration

use thiserror::Error;

pub type Result<T> = std::result::Result<T, I18nError>;

/// Errors that can occur while loading or validating locale configuration
#[derive(Error, Debug)]
pub enum I18nError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    YamlParsing(#[from] serde_yaml::Error),

    #[error("Locale configuration validation failed: {0}")]
    Validation(String),
}
