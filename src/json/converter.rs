//! Property value coercion
//!
//! Turns JSON property values into bound statement values. Strings (and any
//! other scalar, through its textual form) that match one of the configured
//! date formats are bound as timestamps; everything else keeps its JSON type.
//!
//! The date check is a heuristic: it does not know the destination column
//! type, so a text column holding a date-like string is still bound as a
//! timestamp.

use crate::core::Value;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value as JsonValue;

/// Full timestamp with optional fractional seconds and an offset, the same
/// with a `Z` suffix (UTC), then a date with an offset (midnight at that
/// offset).
pub const DEFAULT_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.fZ",
    "%Y-%m-%d%:z",
];

/// Converts JSON property values to statement values, detecting dates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateCoercer {
    formats: Vec<String>,
}

impl DateCoercer {
    /// Formats are chrono `strftime` patterns, tried in order
    pub fn new<I, S>(formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            formats: formats.into_iter().map(Into::into).collect(),
        }
    }

    pub fn formats(&self) -> &[String] {
        &self.formats
    }

    /// Coerce a single property value
    pub fn coerce(&self, json_value: &JsonValue) -> Value {
        let text = match json_value {
            JsonValue::String(s) => s.clone(),
            JsonValue::Number(n) => n.to_string(),
            JsonValue::Bool(b) => b.to_string(),
            // Never date-like
            JsonValue::Null | JsonValue::Array(_) | JsonValue::Object(_) => {
                return Value::from_json(json_value);
            }
        };

        match self.parse_date(&text) {
            Some(instant) => Value::Timestamp(instant),
            None => Value::from_json(json_value),
        }
    }

    /// First format that parses wins
    pub fn parse_date(&self, text: &str) -> Option<DateTime<Utc>> {
        self.formats
            .iter()
            .find_map(|pattern| parse_instant(text, pattern))
    }
}

impl Default for DateCoercer {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_FORMATS.iter().copied())
    }
}

/// Parse `text` with `pattern` into an instant. Patterns without an offset
/// are read as UTC, patterns without a time resolve to midnight.
fn parse_instant(text: &str, pattern: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_str(text, pattern) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(text, pattern) {
        return Some(Utc.from_utc_datetime(&naive));
    }

    let midnight_text = format!("{} 00:00:00", text);
    let midnight_pattern = format!("{} %H:%M:%S", pattern);
    if let Ok(dt) = DateTime::parse_from_str(&midnight_text, &midnight_pattern) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(text, pattern)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}
