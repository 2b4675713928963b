//! Lenient field decoding for client payloads.
//!
//! Spreadsheet imports and HTML forms send numbers as strings and
//! identifiers as numbers; both are accepted the way a loose schema would
//! cast them. Empty strings count as absent.

use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

use crate::errors::ModelError;

pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(de::Error::custom(format!("expected a string, got {other}"))),
    }
}

pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| de::Error::custom("number out of range")),
        Some(Value::String(s)) => parse_f64(&s).map_err(de::Error::custom),
        Some(other) => Err(de::Error::custom(format!("expected a number, got {other}"))),
    }
}

pub fn opt_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match opt_f64(deserializer)? {
        None => Ok(None),
        Some(v) if v.fract() == 0.0 && v >= i32::MIN as f64 && v <= i32::MAX as f64 => Ok(Some(v as i32)),
        Some(v) => Err(de::Error::custom(format!("expected a whole number, got {v}"))),
    }
}

/// Parse a form/text value as a number; empty means absent.
pub fn parse_f64(raw: &str) -> Result<Option<f64>, String> {
    let s = raw.trim();
    if s.is_empty() {
        return Ok(None);
    }
    s.parse::<f64>()
        .map(Some)
        .map_err(|_| format!("expected a number, got {s:?}"))
}

pub(crate) fn required(value: Option<String>, field: &str) -> Result<String, ModelError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ModelError::missing(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "opt_string")]
        s: Option<String>,
        #[serde(default, deserialize_with = "opt_f64")]
        f: Option<f64>,
        #[serde(default, deserialize_with = "opt_i32")]
        i: Option<i32>,
    }

    #[test]
    fn numbers_and_strings_cross_coerce() {
        let p: Probe = serde_json::from_str(r#"{"s": 1712345678, "f": "12.5", "i": "7"}"#).unwrap();
        assert_eq!(p.s.as_deref(), Some("1712345678"));
        assert_eq!(p.f, Some(12.5));
        assert_eq!(p.i, Some(7));
    }

    #[test]
    fn empty_and_missing_are_none() {
        let p: Probe = serde_json::from_str(r#"{"s": "  ", "f": ""}"#).unwrap();
        assert!(p.s.is_none());
        assert!(p.f.is_none());
        assert!(p.i.is_none());
    }

    #[test]
    fn fractional_count_is_rejected() {
        assert!(serde_json::from_str::<Probe>(r#"{"i": 2.5}"#).is_err());
        assert!(serde_json::from_str::<Probe>(r#"{"f": "abc"}"#).is_err());
        assert!(serde_json::from_str::<Probe>(r#"{"s": [1]}"#).is_err());
    }
}
