//! Generator factories.
//!
//! A [`Factory`] is a stateless template for one generator type: it declares
//! the slots of its settings type and turns a fully bound settings value into
//! a generator. Binding state lives in a fresh `Settings` value per creation
//! request, so a factory can serve concurrent requests without locking.
//!
//! The registry stores factories behind the object-safe [`DynFactory`] trait,
//! implemented by [`RegisteredFactory`], which pairs a factory with the
//! schema discovered from its slots at registration time.

use datagen_core::{
    coerce_and_assign, FactoryError, ParameterBag, ParameterInfo, ParameterSchema, Slot,
};
use tracing::debug;

use crate::generators::DataGenerator;

/// Template for one generator type.
pub trait Factory: Send + Sync + 'static {
    /// Binding state; `Default` provides every optional slot's default value.
    type Settings: Default;

    /// Registry key of this generator type.
    fn type_name(&self) -> &str;

    /// Bindable slots of [`Self::Settings`].
    fn slots(&self) -> Vec<Slot<Self::Settings>>;

    /// Build a generator from bound settings.
    ///
    /// Required slots have already been checked by the caller.
    fn create(&self, settings: Self::Settings) -> Result<Box<dyn DataGenerator>, FactoryError>;
}

/// Object-safe view of a registered factory.
pub trait DynFactory: Send + Sync {
    /// Registry key, identical to the wrapped factory's name.
    fn type_name(&self) -> &str;

    /// Describe the accepted parameters, required ones first.
    fn parameters(&self) -> Vec<ParameterInfo>;

    /// Bind `parameters` onto fresh settings and build a generator.
    fn create(&self, parameters: &ParameterBag) -> Result<Box<dyn DataGenerator>, FactoryError>;
}

/// A factory together with the schema discovered from its slots.
pub struct RegisteredFactory<F: Factory> {
    factory: F,
    schema: ParameterSchema<F::Settings>,
}

impl<F: Factory> RegisteredFactory<F> {
    /// Discover the factory's schema.
    pub fn new(factory: F) -> Result<Self, FactoryError> {
        let schema = ParameterSchema::discover(factory.type_name(), factory.slots())?;
        Ok(Self { factory, schema })
    }

    pub fn schema(&self) -> &ParameterSchema<F::Settings> {
        &self.schema
    }

    /// Bind `parameters` onto default settings.
    pub fn bind(&self, parameters: &ParameterBag) -> Result<F::Settings, FactoryError> {
        bind_parameters(&self.schema, parameters)
    }
}

impl<F: Factory> DynFactory for RegisteredFactory<F> {
    fn type_name(&self) -> &str {
        self.factory.type_name()
    }

    fn parameters(&self) -> Vec<ParameterInfo> {
        self.schema.parameters()
    }

    fn create(&self, parameters: &ParameterBag) -> Result<Box<dyn DataGenerator>, FactoryError> {
        let settings = self.bind(parameters)?;
        self.factory.create(settings)
    }
}

/// Bind a parameter bag onto a default settings value.
///
/// Keys are visited in lexicographic order. A key matching neither partition
/// aborts with [`FactoryError::UnknownParameter`]; once every key is bound,
/// any required parameter left unset yields [`FactoryError::MissingParameter`].
pub fn bind_parameters<S: Default>(
    schema: &ParameterSchema<S>,
    parameters: &ParameterBag,
) -> Result<S, FactoryError> {
    let type_name = schema.type_name();

    let mut entries: Vec<(&String, &String)> = parameters.iter().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

    let mut settings = S::default();
    let mut required_set = 0usize;

    for (key, raw) in entries {
        if let Some(slot) = schema.optional().get(key.as_str()) {
            coerce_and_assign(&mut settings, type_name, slot, raw)?;
            continue;
        }
        if let Some(slot) = schema.required().get(key.as_str()) {
            coerce_and_assign(&mut settings, type_name, slot, raw)?;
            required_set += 1;
            continue;
        }
        return Err(FactoryError::UnknownParameter {
            type_name: type_name.to_string(),
            key: key.clone(),
        });
    }

    if required_set < schema.required().len() {
        let missing: Vec<String> = schema
            .required_names()
            .into_iter()
            .filter(|name| !parameters.contains_key(*name))
            .map(str::to_string)
            .collect();
        return Err(FactoryError::MissingParameter {
            type_name: type_name.to_string(),
            missing,
        });
    }

    debug!(
        "Bound {} parameter(s) for generator type '{}'",
        parameters.len(),
        type_name
    );
    Ok(settings)
}
