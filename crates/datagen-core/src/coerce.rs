//! Raw string to typed value coercion.
//!
//! Text is passed through unchanged. Integers and floats use their canonical
//! `FromStr` representation, date/times accept RFC 3339 and the common ISO 8601
//! layouts listed in [`parse_datetime`]. Whitespace around non-text values is
//! ignored.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::trace;

use crate::error::FactoryError;
use crate::schema::{Setter, Slot};

/// Layouts tried after RFC 3339, in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a date/time string in various formats.
///
/// RFC 3339 values are converted to their naive UTC date/time. A bare date
/// (`%Y-%m-%d`) is read as midnight.
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    None
}

/// Parse `raw` as the slot's declared type and write it into `settings`.
///
/// Fails with [`FactoryError::Type`] when `raw` is malformed; `settings` is
/// left untouched in that case.
pub fn coerce_and_assign<S>(
    settings: &mut S,
    type_name: &str,
    slot: &Slot<S>,
    raw: &str,
) -> Result<(), FactoryError> {
    let type_error = |reason: String| FactoryError::Type {
        type_name: type_name.to_string(),
        key: slot.name().to_string(),
        expected: slot.value_type(),
        value: raw.to_string(),
        reason,
    };

    match slot.setter() {
        Setter::String(set) => set(settings, raw.to_string()),
        Setter::Integer(set) => {
            let value = raw
                .trim()
                .parse::<i64>()
                .map_err(|e| type_error(e.to_string()))?;
            set(settings, value);
        }
        Setter::Float(set) => {
            let value = raw
                .trim()
                .parse::<f64>()
                .map_err(|e| type_error(e.to_string()))?;
            set(settings, value);
        }
        Setter::DateTime(set) => {
            let value = parse_datetime(raw)
                .ok_or_else(|| type_error("not a recognised date/time".to_string()))?;
            set(settings, value);
        }
    }

    trace!(
        "Bound parameter '{}' of '{}' to field '{}'",
        slot.name(),
        type_name,
        slot.field()
    );
    Ok(())
}
