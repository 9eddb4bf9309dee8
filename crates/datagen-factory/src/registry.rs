//! Registry mapping generator type names to factories.

use datagen_core::{FactoryError, ParameterBag, ParameterInfo};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, info};

use crate::factory::{DynFactory, Factory, RegisteredFactory};
use crate::generators::{
    file_line::FileLineFactory, numeric::DoubleFactory, numeric::IntegerFactory,
    repeat::RepeatFactory, text::TextFactory, timestamp::DateTimeFactory, DataGenerator,
};

/// Type name and parameter schema of a registered factory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactoryDescriptor {
    #[serde(rename = "type")]
    pub type_name: String,
    pub parameters: Vec<ParameterInfo>,
}

/// Single entry point for generator creation.
///
/// The registry is built once (usually through [`FactoryRegistry::with_builtins`])
/// and shared by reference afterwards. Factories keep no per-request state,
/// so `create` takes `&self` and may be called from several threads.
#[derive(Default)]
pub struct FactoryRegistry {
    factories: HashMap<String, Box<dyn DynFactory>>,
}

impl FactoryRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in generator type.
    pub fn with_builtins() -> Result<Self, FactoryError> {
        let mut registry = Self::new();
        registry.register(IntegerFactory)?;
        registry.register(DoubleFactory)?;
        registry.register(DateTimeFactory)?;
        registry.register(RepeatFactory)?;
        registry.register(FileLineFactory)?;
        registry.register(TextFactory)?;
        info!(
            "Registered {} built-in generator types",
            registry.factories.len()
        );
        Ok(registry)
    }

    /// Add a factory under its type name.
    ///
    /// Fails with [`FactoryError::Configuration`] for an empty or whitespace
    /// name, [`FactoryError::DuplicateType`] when the name is taken, and
    /// [`FactoryError::Schema`] when the factory's slots are inconsistent.
    pub fn register<F: Factory>(&mut self, factory: F) -> Result<(), FactoryError> {
        let type_name = factory.type_name().to_string();
        if type_name.trim().is_empty() {
            return Err(FactoryError::Configuration(
                "factory type name must not be empty".to_string(),
            ));
        }
        if self.factories.contains_key(&type_name) {
            return Err(FactoryError::DuplicateType(type_name));
        }

        let registered = RegisteredFactory::new(factory)?;
        debug!(
            "Registered generator type '{}' ({} required, {} optional parameters)",
            type_name,
            registered.schema().required().len(),
            registered.schema().optional().len()
        );
        self.factories.insert(type_name, Box::new(registered));
        Ok(())
    }

    /// Create a generator of `type_name` configured from `parameters`.
    ///
    /// `parameters` accepts `&ParameterBag` or `Option<&ParameterBag>`; an
    /// absent bag fails with [`FactoryError::InvalidArgument`] while an empty
    /// one is valid.
    pub fn create<'a>(
        &self,
        type_name: &str,
        parameters: impl Into<Option<&'a ParameterBag>>,
    ) -> Result<Box<dyn DataGenerator>, FactoryError> {
        if type_name.is_empty() {
            return Err(FactoryError::UnknownType(type_name.to_string()));
        }
        let parameters = parameters.into().ok_or_else(|| {
            FactoryError::InvalidArgument(format!(
                "parameters for generator type '{type_name}' must be provided"
            ))
        })?;
        let factory = self
            .factories
            .get(type_name)
            .ok_or_else(|| FactoryError::UnknownType(type_name.to_string()))?;

        debug!(
            "Creating '{}' generator from {} parameter(s)",
            type_name,
            parameters.len()
        );
        factory.create(parameters)
    }

    /// Check whether `type_name` is registered.
    pub fn contains(&self, type_name: &str) -> bool {
        self.factories.contains_key(type_name)
    }

    /// Sorted names of every registered type.
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.values().map(|f| f.type_name()).collect();
        names.sort_unstable();
        names
    }

    /// Parameters accepted by `type_name`, required ones first.
    pub fn describe(&self, type_name: &str) -> Option<Vec<ParameterInfo>> {
        self.factories.get(type_name).map(|f| f.parameters())
    }

    /// Descriptors of every registered type, sorted by name.
    pub fn descriptors(&self) -> Vec<FactoryDescriptor> {
        let mut descriptors: Vec<FactoryDescriptor> = self
            .factories
            .values()
            .map(|f| FactoryDescriptor {
                type_name: f.type_name().to_string(),
                parameters: f.parameters(),
            })
            .collect();
        descriptors.sort_unstable_by(|a, b| a.type_name.cmp(&b.type_name));
        descriptors
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl std::fmt::Debug for FactoryRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FactoryRegistry")
            .field("types", &self.type_names())
            .finish()
    }
}
