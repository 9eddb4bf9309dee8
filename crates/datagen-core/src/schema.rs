//! Parameter schemas for generator factories.
//!
//! A factory declares its bindable surface as a list of [`Slot`]s. Each slot
//! names a field of the factory's settings type, its external parameter name,
//! whether it must be supplied, and a typed setter. The value type of a slot
//! is derived from its setter, so a slot can only ever receive a value of the
//! type it declares.
//!
//! [`ParameterSchema::discover`] partitions the slots into required and
//! optional sets. It runs once per factory, when the factory is registered.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::FactoryError;

/// Caller-supplied parameters: name to raw string value.
pub type ParameterBag = HashMap<String, String>;

// ============================================================================
// Value Types
// ============================================================================

/// Primitive types a generator parameter can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// Text, passed through unchanged
    String,
    /// 64-bit signed integer
    Integer,
    /// 64-bit floating point
    Float,
    /// Calendar date and time without timezone
    DateTime,
}

impl ValueType {
    /// Canonical lowercase tag of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Integer => "integer",
            ValueType::Float => "float",
            ValueType::DateTime => "datetime",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ValueType {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "string" | "text" => Ok(ValueType::String),
            "integer" | "int" => Ok(ValueType::Integer),
            "float" | "double" => Ok(ValueType::Float),
            "datetime" | "date_time" => Ok(ValueType::DateTime),
            other => Err(FactoryError::Schema(format!(
                "unsupported value type '{other}'"
            ))),
        }
    }
}

// ============================================================================
// Slots
// ============================================================================

/// Typed setter writing a coerced value into a settings field.
pub enum Setter<S> {
    String(fn(&mut S, String)),
    Integer(fn(&mut S, i64)),
    Float(fn(&mut S, f64)),
    DateTime(fn(&mut S, NaiveDateTime)),
}

impl<S> Setter<S> {
    /// The value type this setter accepts.
    pub fn value_type(&self) -> ValueType {
        match self {
            Setter::String(_) => ValueType::String,
            Setter::Integer(_) => ValueType::Integer,
            Setter::Float(_) => ValueType::Float,
            Setter::DateTime(_) => ValueType::DateTime,
        }
    }
}

impl<S> Clone for Setter<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Setter<S> {}

/// A single bindable parameter of a factory's settings type `S`.
pub struct Slot<S> {
    field: &'static str,
    name: Option<&'static str>,
    required: bool,
    help: &'static str,
    setter: Setter<S>,
}

impl<S> Slot<S> {
    fn new(field: &'static str, setter: Setter<S>) -> Self {
        Self {
            field,
            name: None,
            required: false,
            help: "",
            setter,
        }
    }

    /// Declare a text slot.
    pub fn string(field: &'static str, set: fn(&mut S, String)) -> Self {
        Self::new(field, Setter::String(set))
    }

    /// Declare an integer slot.
    pub fn integer(field: &'static str, set: fn(&mut S, i64)) -> Self {
        Self::new(field, Setter::Integer(set))
    }

    /// Declare a floating-point slot.
    pub fn float(field: &'static str, set: fn(&mut S, f64)) -> Self {
        Self::new(field, Setter::Float(set))
    }

    /// Declare a date/time slot.
    pub fn datetime(field: &'static str, set: fn(&mut S, NaiveDateTime)) -> Self {
        Self::new(field, Setter::DateTime(set))
    }

    /// Mark this slot as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Expose this slot under a parameter name other than its field name.
    pub fn renamed(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    /// Attach a one-line description shown by `list`.
    pub fn help(mut self, help: &'static str) -> Self {
        self.help = help;
        self
    }

    /// Internal field name.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// External parameter name; defaults to the field name.
    pub fn name(&self) -> &'static str {
        self.name.unwrap_or(self.field)
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn value_type(&self) -> ValueType {
        self.setter.value_type()
    }

    pub fn setter(&self) -> Setter<S> {
        self.setter
    }

    pub fn help_text(&self) -> &'static str {
        self.help
    }

    /// Describe this slot without its setter.
    pub fn info(&self) -> ParameterInfo {
        ParameterInfo {
            name: self.name().to_string(),
            required: self.required,
            value_type: self.value_type(),
            help: self.help.to_string(),
        }
    }
}

impl<S> fmt::Debug for Slot<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("field", &self.field)
            .field("name", &self.name())
            .field("required", &self.required)
            .field("value_type", &self.value_type())
            .finish()
    }
}

/// Serializable description of one parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterInfo {
    pub name: String,
    pub required: bool,
    #[serde(rename = "type")]
    pub value_type: ValueType,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub help: String,
}

// ============================================================================
// Schema
// ============================================================================

/// Required/optional partition of a factory's slots, keyed by external name.
pub struct ParameterSchema<S> {
    type_name: String,
    required: HashMap<String, Slot<S>>,
    optional: HashMap<String, Slot<S>>,
}

impl<S> ParameterSchema<S> {
    /// Partition `slots` into required and optional mappings.
    ///
    /// Fails with [`FactoryError::Schema`] when a slot has an empty name or
    /// when two slots share an external name, whatever their required flag.
    /// An empty slot list is valid.
    pub fn discover(type_name: &str, slots: Vec<Slot<S>>) -> Result<Self, FactoryError> {
        let mut required = HashMap::new();
        let mut optional = HashMap::new();

        for slot in slots {
            let name = slot.name();
            if name.trim().is_empty() {
                return Err(FactoryError::Schema(format!(
                    "generator type '{type_name}' declares a parameter with an empty name (field '{}')",
                    slot.field()
                )));
            }
            if required.contains_key(name) || optional.contains_key(name) {
                return Err(FactoryError::Schema(format!(
                    "generator type '{type_name}' declares parameter '{name}' more than once"
                )));
            }

            if slot.is_required() {
                required.insert(name.to_string(), slot);
            } else {
                optional.insert(name.to_string(), slot);
            }
        }

        Ok(Self {
            type_name: type_name.to_string(),
            required,
            optional,
        })
    }

    /// Type name of the owning factory.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Required slots, keyed by external name.
    pub fn required(&self) -> &HashMap<String, Slot<S>> {
        &self.required
    }

    /// Optional slots, keyed by external name.
    pub fn optional(&self) -> &HashMap<String, Slot<S>> {
        &self.optional
    }

    /// Find the slot bound to `name` in either partition.
    pub fn get(&self, name: &str) -> Option<&Slot<S>> {
        self.optional.get(name).or_else(|| self.required.get(name))
    }

    /// Sorted names of the required parameters.
    pub fn required_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.required.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Sorted names of the optional parameters.
    pub fn optional_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.optional.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.required.len() + self.optional.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Describe every parameter, required ones first, then by name.
    pub fn parameters(&self) -> Vec<ParameterInfo> {
        let mut infos: Vec<ParameterInfo> = self
            .required
            .values()
            .chain(self.optional.values())
            .map(Slot::info)
            .collect();
        infos.sort_by(|a, b| b.required.cmp(&a.required).then_with(|| a.name.cmp(&b.name)));
        infos
    }
}

impl<S> fmt::Debug for ParameterSchema<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterSchema")
            .field("type_name", &self.type_name)
            .field("required", &self.required_names())
            .field("optional", &self.optional_names())
            .finish()
    }
}
