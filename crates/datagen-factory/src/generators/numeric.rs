//! Numeric value generators.

use datagen_core::{FactoryError, GeneratedValue, Slot};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{DataGenerator, DOUBLE_TYPE, INTEGER_TYPE};
use crate::factory::Factory;

/// Largest number of decimals a double generator rounds to.
pub const MAX_DECIMALS: i64 = 15;

// ============================================================================
// Integer
// ============================================================================

/// Settings of the `int` generator.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerSettings {
    pub min: i64,
    pub max: i64,
    pub seed: i64,
}

impl Default for IntegerSettings {
    fn default() -> Self {
        Self {
            min: 0,
            max: 100,
            seed: 0,
        }
    }
}

/// Factory for random integers in an inclusive range.
pub struct IntegerFactory;

impl Factory for IntegerFactory {
    type Settings = IntegerSettings;

    fn type_name(&self) -> &str {
        INTEGER_TYPE
    }

    fn slots(&self) -> Vec<Slot<IntegerSettings>> {
        vec![
            Slot::integer("min", |s: &mut IntegerSettings, v| s.min = v)
                .help("Smallest value (inclusive), default 0"),
            Slot::integer("max", |s: &mut IntegerSettings, v| s.max = v)
                .help("Largest value (inclusive), default 100"),
            Slot::integer("seed", |s: &mut IntegerSettings, v| s.seed = v)
                .help("Random seed, default 0"),
        ]
    }

    fn create(&self, settings: IntegerSettings) -> Result<Box<dyn DataGenerator>, FactoryError> {
        if settings.min > settings.max {
            return Err(FactoryError::invalid_setting(
                INTEGER_TYPE,
                format!("min ({}) is greater than max ({})", settings.min, settings.max),
            ));
        }
        Ok(Box::new(IntegerGenerator::new(settings)))
    }
}

/// Random integers in `[min, max]`.
#[derive(Debug)]
pub struct IntegerGenerator {
    settings: IntegerSettings,
    rng: StdRng,
}

impl IntegerGenerator {
    pub fn new(settings: IntegerSettings) -> Self {
        let rng = StdRng::seed_from_u64(settings.seed as u64);
        Self { settings, rng }
    }
}

impl DataGenerator for IntegerGenerator {
    fn next_value(&mut self) -> GeneratedValue {
        GeneratedValue::Int64(self.rng.gen_range(self.settings.min..=self.settings.max))
    }
}

// ============================================================================
// Double
// ============================================================================

/// Settings of the `double` generator.
#[derive(Debug, Clone, PartialEq)]
pub struct DoubleSettings {
    pub min: f64,
    pub max: f64,
    pub decimals: i64,
    pub seed: i64,
}

impl Default for DoubleSettings {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            decimals: 2,
            seed: 0,
        }
    }
}

/// Factory for random floats rounded to a number of decimals.
pub struct DoubleFactory;

impl Factory for DoubleFactory {
    type Settings = DoubleSettings;

    fn type_name(&self) -> &str {
        DOUBLE_TYPE
    }

    fn slots(&self) -> Vec<Slot<DoubleSettings>> {
        vec![
            Slot::float("min", |s: &mut DoubleSettings, v| s.min = v)
                .help("Smallest value (inclusive), default 0"),
            Slot::float("max", |s: &mut DoubleSettings, v| s.max = v)
                .help("Largest value (inclusive), default 1"),
            Slot::integer("decimals", |s: &mut DoubleSettings, v| s.decimals = v)
                .help("Digits kept after the decimal point, default 2"),
            Slot::integer("seed", |s: &mut DoubleSettings, v| s.seed = v)
                .help("Random seed, default 0"),
        ]
    }

    fn create(&self, settings: DoubleSettings) -> Result<Box<dyn DataGenerator>, FactoryError> {
        if !settings.min.is_finite() || !settings.max.is_finite() {
            return Err(FactoryError::invalid_setting(
                DOUBLE_TYPE,
                "min and max must be finite numbers",
            ));
        }
        if settings.min > settings.max {
            return Err(FactoryError::invalid_setting(
                DOUBLE_TYPE,
                format!("min ({}) is greater than max ({})", settings.min, settings.max),
            ));
        }
        if !(settings.max - settings.min).is_finite() {
            return Err(FactoryError::invalid_setting(
                DOUBLE_TYPE,
                format!(
                    "range from {} to {} is too wide",
                    settings.min, settings.max
                ),
            ));
        }
        if !(0..=MAX_DECIMALS).contains(&settings.decimals) {
            return Err(FactoryError::invalid_setting(
                DOUBLE_TYPE,
                format!(
                    "decimals must be between 0 and {MAX_DECIMALS}, got {}",
                    settings.decimals
                ),
            ));
        }
        Ok(Box::new(DoubleGenerator::new(settings)))
    }
}

/// Random floats in `[min, max]`, rounded to `decimals` digits.
#[derive(Debug)]
pub struct DoubleGenerator {
    settings: DoubleSettings,
    scale: f64,
    rng: StdRng,
}

impl DoubleGenerator {
    pub fn new(settings: DoubleSettings) -> Self {
        let scale = 10f64.powi(settings.decimals as i32);
        let rng = StdRng::seed_from_u64(settings.seed as u64);
        Self {
            settings,
            scale,
            rng,
        }
    }
}

impl DataGenerator for DoubleGenerator {
    fn next_value(&mut self) -> GeneratedValue {
        let value = self.rng.gen_range(self.settings.min..=self.settings.max);
        let rounded = (value * self.scale).round() / self.scale;
        // Rounding may step just outside the range.
        GeneratedValue::Float64(rounded.clamp(self.settings.min, self.settings.max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_range() {
        let mut generator = IntegerGenerator::new(IntegerSettings {
            min: 10,
            max: 20,
            seed: 42,
        });

        for _ in 0..100 {
            let value = generator.next_value().as_i64().unwrap();
            assert!((10..=20).contains(&value));
        }
    }

    #[test]
    fn test_integer_single_value_range() {
        let mut generator = IntegerGenerator::new(IntegerSettings {
            min: 42,
            max: 42,
            seed: 0,
        });
        assert_eq!(generator.next_value(), GeneratedValue::Int64(42));
    }

    #[test]
    fn test_integer_deterministic() {
        let settings = IntegerSettings {
            min: -1000,
            max: 1000,
            seed: 7,
        };
        let mut gen1 = IntegerGenerator::new(settings.clone());
        let mut gen2 = IntegerGenerator::new(settings);

        for _ in 0..10 {
            assert_eq!(gen1.next_value(), gen2.next_value());
        }
    }

    #[test]
    fn test_integer_factory_rejects_inverted_range() {
        let result = IntegerFactory.create(IntegerSettings {
            min: 5,
            max: 1,
            seed: 0,
        });
        assert!(matches!(result, Err(FactoryError::InvalidSetting { .. })));
    }

    #[test]
    fn test_double_range_and_rounding() {
        let mut generator = DoubleGenerator::new(DoubleSettings {
            min: 0.0,
            max: 100.0,
            decimals: 1,
            seed: 42,
        });

        for _ in 0..100 {
            let value = generator.next_value().as_f64().unwrap();
            assert!((0.0..=100.0).contains(&value));
            let scaled = value * 10.0;
            assert!((scaled - scaled.round()).abs() < 1e-6);
        }
    }

    #[test]
    fn test_double_zero_decimals() {
        let mut generator = DoubleGenerator::new(DoubleSettings {
            min: 1.0,
            max: 3.0,
            decimals: 0,
            seed: 3,
        });

        for _ in 0..20 {
            let value = generator.next_value().as_f64().unwrap();
            assert_eq!(value, value.trunc());
        }
    }

    #[test]
    fn test_double_factory_validation() {
        let inverted = DoubleFactory.create(DoubleSettings {
            min: 2.0,
            max: 1.0,
            ..Default::default()
        });
        assert!(matches!(inverted, Err(FactoryError::InvalidSetting { .. })));

        let too_precise = DoubleFactory.create(DoubleSettings {
            decimals: 16,
            ..Default::default()
        });
        assert!(matches!(too_precise, Err(FactoryError::InvalidSetting { .. })));

        let infinite = DoubleFactory.create(DoubleSettings {
            max: f64::INFINITY,
            ..Default::default()
        });
        assert!(matches!(infinite, Err(FactoryError::InvalidSetting { .. })));

        let too_wide = DoubleFactory.create(DoubleSettings {
            min: -1e308,
            max: 1e308,
            ..Default::default()
        });
        assert!(matches!(too_wide, Err(FactoryError::InvalidSetting { .. })));
    }

    #[test]
    fn test_double_wide_finite_range() {
        let mut generator = DoubleFactory
            .create(DoubleSettings {
                min: -1e307,
                max: 1e307,
                decimals: 0,
                seed: 5,
            })
            .unwrap();

        for _ in 0..20 {
            let value = generator.next_value().as_f64().unwrap();
            assert!((-1e307..=1e307).contains(&value));
        }
    }
}
