//! Collection interval (de)serialization
//!
//! The interval accepts either an integer number of seconds (`60`) or a
//! string with a unit suffix (`"60s"`, `"500ms"`, `"1m"`, `"2h"`). A bare
//! numeric string is read as seconds.

use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};
use std::fmt;
use std::time::Duration;

/// Parse an interval literal such as `30s` or `250ms`
pub fn parse_interval(input: &str) -> Result<Duration, String> {
    let s = input.trim();
    let split = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let (digits, unit) = s.split_at(split);
    if digits.is_empty() {
        return Err(format!("invalid interval '{input}': expected a number followed by ms, s, m or h"));
    }
    let value: u64 = digits.parse().map_err(|e| format!("invalid interval '{input}': {e}"))?;

    let duration = match unit {
        "ms" => Duration::from_millis(value),
        "" | "s" => Duration::from_secs(value),
        "m" => Duration::from_secs(value.saturating_mul(60)),
        "h" => Duration::from_secs(value.saturating_mul(3600)),
        other => {
            return Err(format!("invalid interval '{input}': unknown unit '{other}' (expected ms, s, m or h)"))
        }
    };
    Ok(duration)
}

/// Render an interval the way [`parse_interval`] reads it back
#[must_use]
pub fn format_interval(interval: Duration) -> String {
    if interval.subsec_millis() == 0 {
        format!("{}s", interval.as_secs())
    } else {
        format!("{}ms", interval.as_millis())
    }
}

pub fn serialize<S: Serializer>(interval: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_interval(*interval))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
    deserializer.deserialize_any(IntervalVisitor)
}

struct IntervalVisitor;

impl Visitor<'_> for IntervalVisitor {
    type Value = Duration;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number of seconds or a duration string like \"60s\"")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Duration, E> {
        Ok(Duration::from_secs(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Duration, E> {
        u64::try_from(v)
            .map(Duration::from_secs)
            .map_err(|_| E::custom(format!("invalid interval {v}: must not be negative")))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Duration, E> {
        parse_interval(v).map_err(E::custom)
    }
}
