//! textdatagen library
//!
//! Generates text data from typed generator definitions. Generators are
//! created through the [`datagen_factory::FactoryRegistry`] from a type name
//! and string parameters, supplied either on the command line or in a YAML
//! generation document.
//!
//! # CLI Usage
//!
//! ```bash
//! # List generator types and their parameters
//! textdatagen list
//!
//! # Print five random integers between 1 and 6
//! textdatagen generate int -p min=1 -p max=6 --count 5
//!
//! # Render rows described by a YAML document
//! textdatagen run --config people.yaml --count 100
//! ```

pub mod config;
pub mod list;
pub mod render;

pub use config::{ColumnConfig, ConfigError, GenerationDocument};
pub use render::RowRenderer;
