//! Tolerant field readers for stored session JSON.
//!
//! Records written by older clients mix numbers and numeric-looking strings
//! for the same field. Numbers follow `parseInt` rules: the leading run of
//! digits wins and anything unparseable reads as zero.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parses the leading integer of `raw`, returning 0 when there is none.
///
/// Negative values clamp to 0 since no tracked quantity can go below it.
///
/// ```rust
/// use athlete_core::models::parse_int_or_zero;
///
/// assert_eq!(parse_int_or_zero("80"), 80);
/// assert_eq!(parse_int_or_zero(" 42.5kg"), 42);
/// assert_eq!(parse_int_or_zero("-"), 0);
/// assert_eq!(parse_int_or_zero(""), 0);
/// ```
pub fn parse_int_or_zero(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if negative || end == 0 {
        return 0;
    }

    digits[..end].parse::<u64>().map_or(u32::MAX, |n| {
        u32::try_from(n).unwrap_or(u32::MAX)
    })
}

fn value_to_u32(value: &Value) -> u32 {
    match value {
        Value::Number(n) => n
            .as_u64()
            .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
            .or_else(|| n.as_f64().filter(|f| *f > 0.0).map(|f| f.min(f64::from(u32::MAX)) as u32))
            .unwrap_or(0),
        Value::String(s) => parse_int_or_zero(s),
        _ => 0,
    }
}

fn value_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

pub(crate) fn u32_lenient<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|v| value_to_u32(&v))
}

pub(crate) fn opt_u32_lenient<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok((!value.is_null()).then(|| value_to_u32(&value)))
}

pub(crate) fn string_lenient<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(value_to_string)
}

pub(crate) fn bool_lenient<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(matches!(Value::deserialize(deserializer)?, Value::Bool(true)))
}
