//! YAML generation documents.
//!
//! A document lists the columns of the generated output, each naming a
//! generator type and its parameters:
//!
//! ```yaml
//! count: 3
//! separator: ";"
//! header: true
//! columns:
//!   - name: id
//!     type: int
//!     params:
//!       min: 1
//!       max: 1000
//!   - name: greeting
//!     type: text
//!     params:
//!       value: hello
//! ```
//!
//! Scalar parameter values (numbers, booleans) are turned into their textual
//! form so the registry always receives string parameters.

use datagen_core::ParameterBag;
use serde::{Deserialize, Serialize};
use serde_yaml::Value as YamlValue;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

/// Error type for generation document operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading the document
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Document declares no columns
    #[error("Config declares no columns")]
    NoColumns,

    /// Two columns share a name
    #[error("Column '{0}' declared more than once")]
    DuplicateColumn(String),

    /// Parameter value is not a scalar
    #[error("Parameter '{key}' of column '{column}' must be a scalar value")]
    InvalidParameter { column: String, key: String },
}

fn default_count() -> u64 {
    10
}

fn default_separator() -> String {
    ",".to_string()
}

/// Root of a generation document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationDocument {
    /// Number of rows to generate
    #[serde(default = "default_count")]
    pub count: u64,

    /// Text placed between column values
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Whether to print the column names first
    #[serde(default)]
    pub header: bool,

    /// Output columns, in order
    pub columns: Vec<ColumnConfig>,
}

/// One output column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnConfig {
    /// Column name, used in the header and in error messages
    pub name: String,

    /// Registered generator type
    #[serde(rename = "type")]
    pub generator_type: String,

    /// Generator parameters
    #[serde(default)]
    pub params: BTreeMap<String, YamlValue>,
}

impl ColumnConfig {
    /// Convert the column's parameters into a string parameter bag.
    pub fn parameter_bag(&self) -> Result<ParameterBag, ConfigError> {
        self.params
            .iter()
            .map(|(key, value)| {
                let raw = match value {
                    YamlValue::String(s) => s.clone(),
                    YamlValue::Number(n) => n.to_string(),
                    YamlValue::Bool(b) => b.to_string(),
                    YamlValue::Null => String::new(),
                    YamlValue::Tagged(tagged) => match &tagged.value {
                        YamlValue::String(s) => s.clone(),
                        _ => return Err(self.invalid_parameter(key)),
                    },
                    YamlValue::Sequence(_) | YamlValue::Mapping(_) => {
                        return Err(self.invalid_parameter(key))
                    }
                };
                Ok((key.clone(), raw))
            })
            .collect()
    }

    fn invalid_parameter(&self, key: &str) -> ConfigError {
        ConfigError::InvalidParameter {
            column: self.name.clone(),
            key: key.to_string(),
        }
    }
}

impl GenerationDocument {
    /// Load a document from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse and validate a document from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let document: Self = serde_yaml::from_str(yaml)?;
        document.validate()?;
        Ok(document)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.columns.is_empty() {
            return Err(ConfigError::NoColumns);
        }
        let mut seen = HashSet::new();
        for column in &self.columns {
            if !seen.insert(column.name.as_str()) {
                return Err(ConfigError::DuplicateColumn(column.name.clone()));
            }
        }
        Ok(())
    }
}
