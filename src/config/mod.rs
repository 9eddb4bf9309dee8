//! Configuration sources: command-line parameters and YAML documents.

mod document;
mod param;

pub use document::{ColumnConfig, ConfigError, GenerationDocument};
pub use param::{parse_param, parse_params};
