//! Values produced by data generators.

use chrono::NaiveDateTime;
use std::fmt;

/// Value produced by a data generator.
///
/// `GeneratedValue` keeps the native type of the value so downstream
/// consumers can inspect it; its `Display` implementation renders the text
/// written to generated output.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedValue {
    /// 64-bit signed integer
    Int64(i64),

    /// 64-bit floating point
    Float64(f64),

    /// Text value
    Text(String),

    /// Date/time with the strftime layout used to render it
    DateTime {
        value: NaiveDateTime,
        format: String,
    },
}

impl GeneratedValue {
    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int64(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float64(f) => Some(*f),
            Self::Int64(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a date/time.
    pub fn as_datetime(&self) -> Option<&NaiveDateTime> {
        match self {
            Self::DateTime { value, .. } => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for GeneratedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int64(i) => write!(f, "{i}"),
            Self::Float64(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
            Self::DateTime { value, format } => write!(f, "{}", value.format(format)),
        }
    }
}
