//! Repeated text generator.

use datagen_core::{FactoryError, GeneratedValue, Slot};

use super::{DataGenerator, REPEAT_TYPE};
use crate::factory::Factory;

/// Settings of the `repeat` generator.
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatSettings {
    pub value: String,
    pub count: i64,
    pub separator: String,
}

impl Default for RepeatSettings {
    fn default() -> Self {
        Self {
            value: String::new(),
            count: 1,
            separator: String::new(),
        }
    }
}

/// Factory for a text value repeated a fixed number of times.
pub struct RepeatFactory;

impl Factory for RepeatFactory {
    type Settings = RepeatSettings;

    fn type_name(&self) -> &str {
        REPEAT_TYPE
    }

    fn slots(&self) -> Vec<Slot<RepeatSettings>> {
        vec![
            Slot::string("value", |s: &mut RepeatSettings, v| s.value = v)
                .required()
                .help("Text to repeat"),
            Slot::integer("count", |s: &mut RepeatSettings, v| s.count = v)
                .help("Number of repetitions, default 1"),
            Slot::string("separator", |s: &mut RepeatSettings, v| s.separator = v)
                .help("Text placed between repetitions"),
        ]
    }

    fn create(&self, settings: RepeatSettings) -> Result<Box<dyn DataGenerator>, FactoryError> {
        let count = usize::try_from(settings.count).map_err(|_| {
            FactoryError::invalid_setting(
                REPEAT_TYPE,
                format!("count must not be negative, got {}", settings.count),
            )
        })?;
        Ok(Box::new(RepeatGenerator::new(
            &settings.value,
            count,
            &settings.separator,
        )))
    }
}

/// Produces the same repeated text on every call.
#[derive(Debug)]
pub struct RepeatGenerator {
    rendered: String,
}

impl RepeatGenerator {
    pub fn new(value: &str, count: usize, separator: &str) -> Self {
        Self {
            rendered: vec![value; count].join(separator),
        }
    }
}

impl DataGenerator for RepeatGenerator {
    fn next_value(&mut self) -> GeneratedValue {
        GeneratedValue::Text(self.rendered.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat_with_separator() {
        let mut generator = RepeatGenerator::new("ab", 3, "-");
        assert_eq!(generator.next_value().to_string(), "ab-ab-ab");
        assert_eq!(generator.next_value().to_string(), "ab-ab-ab");
    }

    #[test]
    fn test_repeat_zero_times() {
        let mut generator = RepeatGenerator::new("ab", 0, ",");
        assert_eq!(generator.next_value().to_string(), "");
    }

    #[test]
    fn test_factory_rejects_negative_count() {
        let result = RepeatFactory.create(RepeatSettings {
            value: "x".to_string(),
            count: -1,
            separator: String::new(),
        });
        assert!(matches!(result, Err(FactoryError::InvalidSetting { .. })));
    }
}
