//! Error types for factory registration and generator creation.

use crate::schema::ValueType;
use std::path::PathBuf;

/// Error type for registry and factory operations.
///
/// Every variant aborts the whole creation request; no partially configured
/// generator is ever returned alongside an error.
#[derive(Debug, thiserror::Error)]
pub enum FactoryError {
    /// Factory declared an empty or whitespace type name
    #[error("Invalid factory configuration: {0}")]
    Configuration(String),

    /// Type name already present in the registry
    #[error("Generator type already registered: '{0}'")]
    DuplicateType(String),

    /// Type name empty or not registered
    #[error("Unknown generator type: '{0}'")]
    UnknownType(String),

    /// Caller passed an absent argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Parameter key not declared by the factory's schema
    #[error("Unknown parameter '{key}' for generator type '{type_name}'")]
    UnknownParameter { type_name: String, key: String },

    /// Required parameters that were never supplied
    #[error(
        "Missing required parameter(s) for generator type '{type_name}': {}",
        .missing.join(", ")
    )]
    MissingParameter {
        type_name: String,
        missing: Vec<String>,
    },

    /// Raw value could not be parsed as the slot's declared type
    #[error(
        "Parameter '{key}' of generator type '{type_name}' expects {expected}, got '{value}': {reason}"
    )]
    Type {
        type_name: String,
        key: String,
        expected: ValueType,
        value: String,
        reason: String,
    },

    /// Internal consistency failure in a factory's schema
    #[error("Schema error: {0}")]
    Schema(String),

    /// Factory rejected the bound settings
    #[error("Invalid settings for generator type '{type_name}': {reason}")]
    InvalidSetting { type_name: String, reason: String },

    /// Source file of a generator could not be read
    #[error("Failed to read '{}': {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FactoryError {
    /// Shorthand for [`FactoryError::InvalidSetting`].
    pub fn invalid_setting(type_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSetting {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }
}
