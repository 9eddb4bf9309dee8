//! Core types for the textdatagen generator registry.
//!
//! This crate provides the foundational types used by the factory registry:
//!
//! - [`ValueType`] - The primitive types a generator parameter can declare
//! - [`Slot`] - A single bindable parameter of a factory's settings
//! - [`ParameterSchema`] - The required/optional partition of a factory's slots
//! - [`coerce`] - Raw string to typed value conversion
//! - [`GeneratedValue`] - Values produced by data generators
//! - [`FactoryError`] - Every failure the registry can report
//!
//! # Architecture
//!
//! ```text
//! datagen-core (this crate)
//!    │
//!    └─── datagen-factory  (registry, factories and built-in generators)
//!            │
//!            └─── textdatagen  (CLI and YAML generation documents)
//! ```
//!
//! # Example
//!
//! ```rust
//! use datagen_core::{ParameterSchema, Slot};
//!
//! #[derive(Default)]
//! struct Settings {
//!     value: String,
//!     count: i64,
//! }
//!
//! let schema = ParameterSchema::discover(
//!     "repeat",
//!     vec![
//!         Slot::string("value", |s: &mut Settings, v| s.value = v).required(),
//!         Slot::integer("count", |s: &mut Settings, v| s.count = v),
//!     ],
//! )
//! .unwrap();
//!
//! assert_eq!(schema.required_names(), vec!["value"]);
//! ```

pub mod coerce;
pub mod error;
pub mod schema;
pub mod values;

// Re-exports for convenience
pub use coerce::{coerce_and_assign, parse_datetime};
pub use error::FactoryError;
pub use schema::{ParameterBag, ParameterInfo, ParameterSchema, Setter, Slot, ValueType};
pub use values::GeneratedValue;
