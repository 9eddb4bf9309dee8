//! Date/time value generators.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use datagen_core::{FactoryError, GeneratedValue, Slot};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt::Write;

use super::{DataGenerator, DATETIME_TYPE};
use crate::factory::Factory;

/// Layout used when no `format` parameter is given.
pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Settings of the `datetime` generator.
#[derive(Debug, Clone, PartialEq)]
pub struct DateTimeSettings {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub format: String,
    pub seed: i64,
}

impl Default for DateTimeSettings {
    fn default() -> Self {
        Self {
            start: NaiveDateTime::default(),
            end: NaiveDate::from_ymd_opt(2000, 1, 1)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .unwrap_or_default(),
            format: DEFAULT_DATETIME_FORMAT.to_string(),
            seed: 0,
        }
    }
}

/// Factory for random date/times in an inclusive range.
pub struct DateTimeFactory;

impl Factory for DateTimeFactory {
    type Settings = DateTimeSettings;

    fn type_name(&self) -> &str {
        DATETIME_TYPE
    }

    fn slots(&self) -> Vec<Slot<DateTimeSettings>> {
        vec![
            Slot::datetime("start", |s: &mut DateTimeSettings, v| s.start = v)
                .help("Earliest date/time (inclusive), default 1970-01-01"),
            Slot::datetime("end", |s: &mut DateTimeSettings, v| s.end = v)
                .help("Latest date/time (inclusive), default 2000-01-01"),
            Slot::string("format", |s: &mut DateTimeSettings, v| s.format = v)
                .help("strftime layout of the output"),
            Slot::integer("seed", |s: &mut DateTimeSettings, v| s.seed = v)
                .help("Random seed, default 0"),
        ]
    }

    fn create(&self, settings: DateTimeSettings) -> Result<Box<dyn DataGenerator>, FactoryError> {
        if settings.start > settings.end {
            return Err(FactoryError::invalid_setting(
                DATETIME_TYPE,
                format!(
                    "start ({}) is after end ({})",
                    settings.start, settings.end
                ),
            ));
        }
        if StrftimeItems::new(&settings.format).any(|item| matches!(item, Item::Error)) {
            return Err(FactoryError::invalid_setting(
                DATETIME_TYPE,
                format!("invalid format '{}'", settings.format),
            ));
        }
        // Offset specifiers parse but cannot render without a timezone.
        let mut sample = String::new();
        if write!(sample, "{}", settings.start.format(&settings.format)).is_err() {
            return Err(FactoryError::invalid_setting(
                DATETIME_TYPE,
                format!(
                    "format '{}' needs a timezone to render",
                    settings.format
                ),
            ));
        }
        Ok(Box::new(DateTimeGenerator::new(settings)))
    }
}

/// Random date/times in `[start, end]` with one-second resolution.
#[derive(Debug)]
pub struct DateTimeGenerator {
    settings: DateTimeSettings,
    start_ts: i64,
    end_ts: i64,
    rng: StdRng,
}

impl DateTimeGenerator {
    pub fn new(settings: DateTimeSettings) -> Self {
        let start_ts = settings.start.and_utc().timestamp();
        let end_ts = settings.end.and_utc().timestamp();
        let rng = StdRng::seed_from_u64(settings.seed as u64);
        Self {
            settings,
            start_ts,
            end_ts,
            rng,
        }
    }
}

impl DataGenerator for DateTimeGenerator {
    fn next_value(&mut self) -> GeneratedValue {
        let value = if self.start_ts >= self.end_ts {
            self.settings.start
        } else {
            let random_ts = self.rng.gen_range(self.start_ts..=self.end_ts);
            DateTime::from_timestamp(random_ts, 0)
                .map(|dt| dt.naive_utc())
                .unwrap_or(self.settings.start)
        };

        GeneratedValue::DateTime {
            value,
            format: self.settings.format.clone(),
        }
    }
}
