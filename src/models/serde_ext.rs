//! Lenient deserializers for API payloads
//!
//! The API emits timestamps both with an offset (RFC 3339) and without one;
//! naive timestamps are taken as UTC. Optional lists may arrive as `null`.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Parse an RFC 3339 or naive ISO-8601 timestamp
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Deserialize an optional timestamp, treating unparseable values as absent
pub fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_timestamp))
}

/// Deserialize `null` as the type's default
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize a decimal that may arrive as a string or a number
pub fn decimal_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Decimal {
        Number(f64),
        Text(String),
    }

    match Decimal::deserialize(deserializer)? {
        Decimal::Number(n) => Ok(n),
        Decimal::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_rfc3339() {
        let dt = parse_timestamp("2024-03-01T10:15:00+02:00").unwrap();
        assert_eq!(dt.hour(), 8);
    }

    #[test]
    fn test_parse_naive() {
        let dt = parse_timestamp("2024-03-01T10:15:00.123456").unwrap();
        assert_eq!(dt.hour(), 10);
    }

    #[test]
    fn test_decimal_from_string_or_number() {
        #[derive(Deserialize)]
        struct Row {
            #[serde(deserialize_with = "decimal_f64")]
            pct: f64,
        }

        let text: Row = serde_json::from_str(r#"{"pct": "42.5"}"#).unwrap();
        let number: Row = serde_json::from_str(r#"{"pct": 42.5}"#).unwrap();
        assert_eq!(text.pct, 42.5);
        assert_eq!(number.pct, 42.5);
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_timestamp("yesterday").is_none());
    }
}
