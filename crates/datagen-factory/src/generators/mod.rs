//! Built-in data generators and their factories.
//!
//! Each module pairs a `Factory` (settings type plus slot declarations) with
//! the generator it builds. Random generators draw from a `StdRng` seeded by
//! their `seed` parameter, so identical parameters produce identical output.

pub mod file_line;
pub mod numeric;
pub mod repeat;
pub mod text;
pub mod timestamp;

use datagen_core::GeneratedValue;
use std::fmt;

/// Registry key of [`numeric::IntegerFactory`].
pub const INTEGER_TYPE: &str = "int";
/// Registry key of [`numeric::DoubleFactory`].
pub const DOUBLE_TYPE: &str = "double";
/// Registry key of [`timestamp::DateTimeFactory`].
pub const DATETIME_TYPE: &str = "datetime";
/// Registry key of [`repeat::RepeatFactory`].
pub const REPEAT_TYPE: &str = "repeat";
/// Registry key of [`file_line::FileLineFactory`].
pub const FILE_LINE_TYPE: &str = "fileline";
/// Registry key of [`text::TextFactory`].
pub const TEXT_TYPE: &str = "text";

/// Capability of producing values on demand.
pub trait DataGenerator: Send + fmt::Debug {
    /// Produce the next value.
    fn next_value(&mut self) -> GeneratedValue;
}
