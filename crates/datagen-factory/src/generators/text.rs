//! Literal text generator.

use datagen_core::{FactoryError, GeneratedValue, Slot};

use super::{DataGenerator, TEXT_TYPE};
use crate::factory::Factory;

/// Settings of the `text` generator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextSettings {
    pub value: String,
}

/// Factory for a constant text value.
pub struct TextFactory;

impl Factory for TextFactory {
    type Settings = TextSettings;

    fn type_name(&self) -> &str {
        TEXT_TYPE
    }

    fn slots(&self) -> Vec<Slot<TextSettings>> {
        vec![Slot::string("value", |s: &mut TextSettings, v| s.value = v)
            .required()
            .help("Literal text to emit")]
    }

    fn create(&self, settings: TextSettings) -> Result<Box<dyn DataGenerator>, FactoryError> {
        Ok(Box::new(TextGenerator::new(settings.value)))
    }
}

/// Produces the same text on every call.
#[derive(Debug)]
pub struct TextGenerator {
    value: String,
}

impl TextGenerator {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl DataGenerator for TextGenerator {
    fn next_value(&mut self) -> GeneratedValue {
        GeneratedValue::Text(self.value.clone())
    }
}
