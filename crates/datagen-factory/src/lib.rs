//! Factory registry and built-in data generators for textdatagen.
//!
//! This crate turns a generator type name plus a bag of string parameters
//! into a ready-to-use [`DataGenerator`]. Every factory declares a schema of
//! typed slots; the [`FactoryRegistry`] validates and coerces the caller's
//! parameters against it before asking the factory for an instance.
//!
//! # Architecture
//!
//! ```text
//! (type name, ParameterBag)
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │   FactoryRegistry    │   lookup by type name
//! └──────────┬───────────┘
//!            ▼
//! ┌──────────────────────┐
//! │  RegisteredFactory   │   fresh Settings::default()
//! │  + ParameterSchema   │   bind + coerce each parameter
//! └──────────┬───────────┘   check required parameters
//!            ▼
//!   Box<dyn DataGenerator>
//! ```
//!
//! # Example
//!
//! ```rust
//! use datagen_core::ParameterBag;
//! use datagen_factory::FactoryRegistry;
//!
//! let registry = FactoryRegistry::with_builtins().unwrap();
//!
//! let mut parameters = ParameterBag::new();
//! parameters.insert("min".to_string(), "1".to_string());
//! parameters.insert("max".to_string(), "6".to_string());
//!
//! let mut dice = registry.create("int", &parameters).unwrap();
//! let roll = dice.next_value().as_i64().unwrap();
//! assert!((1..=6).contains(&roll));
//! ```
//!
//! # Generators
//!
//! The following generator types are built in:
//!
//! - `int` - Random integers in a range
//! - `double` - Random floats in a range, rounded
//! - `datetime` - Random date/times in a range, formatted
//! - `repeat` - Text repeated a number of times
//! - `fileline` - Lines from a text file, random or sequential
//! - `text` - Literal text

pub mod factory;
pub mod generators;
pub mod registry;
pub mod text_file;

// Re-exports for convenience
pub use factory::{bind_parameters, DynFactory, Factory, RegisteredFactory};
pub use generators::DataGenerator;
pub use registry::{FactoryDescriptor, FactoryRegistry};
