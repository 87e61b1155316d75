//! Serde helpers for the CRIX wire format
//!
//! The exchange sends decimals either as JSON strings or as JSON numbers,
//! and frequently sends `null` (or omits the field) where a zero is meant.
//! Epoch timestamps may carry a fractional part.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

const NANOS_PER_SECOND: i128 = 1_000_000_000;
const NANOS_PER_MILLI: i64 = 1_000_000;

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

fn parse_decimal<E: Error>(value: StringOrNumber) -> Result<Decimal, E> {
    match value {
        StringOrNumber::String(s) if s.trim().is_empty() => Ok(Decimal::ZERO),
        StringOrNumber::String(s) => parse_decimal_str(s.trim()),
        // JSON numbers are held as f64; parsing their shortest text form keeps
        // literals such as 0.1 exact but cannot recover digits beyond f64 range
        StringOrNumber::Number(n) => parse_decimal_str(&n.to_string()),
    }
}

fn parse_decimal_str<E: Error>(s: &str) -> Result<Decimal, E> {
    if s.contains('e') || s.contains('E') {
        Decimal::from_scientific(s).map_err(E::custom)
    } else {
        Decimal::from_str(s).map_err(E::custom)
    }
}

/// Deserialize a decimal, mapping `null` and `""` to zero
///
/// Accepts JSON strings and numbers. Pair with `#[serde(default)]` so an
/// absent field is zero as well.
pub fn decimal_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StringOrNumber>::deserialize(deserializer)? {
        Some(value) => parse_decimal(value),
        None => Ok(Decimal::ZERO),
    }
}

/// Deserialize any `Default` value, mapping `null` to the default
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Epoch {
    Integer(i64),
    Fractional(f64),
}

impl Epoch {
    fn is_positive(&self) -> bool {
        match self {
            Self::Integer(v) => *v > 0,
            Self::Fractional(v) => *v > 0.0,
        }
    }

    /// Convert from `nanos_per_unit` units since the epoch
    fn to_datetime<E: Error>(&self, nanos_per_unit: i64) -> Result<DateTime<Utc>, E> {
        let unit = i128::from(nanos_per_unit);
        let total = match *self {
            Self::Integer(v) => i128::from(v) * unit,
            Self::Fractional(v) => {
                if !v.is_finite() || v.abs() >= i64::MAX as f64 {
                    return Err(E::custom(format!("invalid timestamp: {}", v)));
                }
                // Split first so the whole part stays exact
                let whole = v.floor();
                let fraction = ((v - whole) * nanos_per_unit as f64).round() as i128;
                (whole as i128) * unit + fraction
            }
        };

        let secs = i64::try_from(total.div_euclid(NANOS_PER_SECOND))
            .map_err(|_| E::custom("timestamp out of range"))?;
        let nanos = total.rem_euclid(NANOS_PER_SECOND) as u32;
        DateTime::from_timestamp(secs, nanos).ok_or_else(|| E::custom("timestamp out of range"))
    }
}

/// Deserialize epoch seconds, integer or fractional
pub fn epoch_seconds<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    Epoch::deserialize(deserializer)?.to_datetime(NANOS_PER_SECOND as i64)
}

/// Deserialize epoch milliseconds, integer or fractional
pub fn epoch_millis<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    Epoch::deserialize(deserializer)?.to_datetime(NANOS_PER_MILLI)
}

/// Deserialize an optional epoch-millisecond timestamp
///
/// `null`, zero and negative values all mean "no timestamp".
pub fn positive_millis_option<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Epoch>::deserialize(deserializer)? {
        Some(epoch) if epoch.is_positive() => epoch.to_datetime(NANOS_PER_MILLI).map(Some),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "decimal_or_zero")]
        price: Decimal,
        #[serde(default, deserialize_with = "decimal_or_zero")]
        fee: Decimal,
        #[serde(default, deserialize_with = "null_as_default")]
        levels: Vec<u32>,
        #[serde(default, deserialize_with = "positive_millis_option")]
        expires: Option<DateTime<Utc>>,
    }

    #[derive(Deserialize)]
    struct Stamps {
        #[serde(deserialize_with = "epoch_seconds")]
        seconds: DateTime<Utc>,
        #[serde(deserialize_with = "epoch_millis")]
        millis: DateTime<Utc>,
    }

    #[test]
    fn test_decimal_from_string_and_number() {
        let a: Sample = serde_json::from_str(r#"{"price": "88813.5"}"#).unwrap();
        let b: Sample = serde_json::from_str(r#"{"price": 88813.5}"#).unwrap();
        assert_eq!(a.price, dec!(88813.5));
        assert_eq!(b.price, dec!(88813.5));
    }

    #[test]
    fn test_decimal_precision_preserved() {
        let s: Sample = serde_json::from_str(r#"{"price": 0.00460208}"#).unwrap();
        assert_eq!(s.price.to_string(), "0.00460208");
    }

    #[test]
    fn test_decimal_scientific_notation() {
        let s: Sample = serde_json::from_str(r#"{"price": "5e-6"}"#).unwrap();
        assert_eq!(s.price, dec!(0.000005));
    }

    #[test]
    fn test_missing_and_null_become_zero() {
        let absent: Sample = serde_json::from_str(r#"{"price": "1"}"#).unwrap();
        assert_eq!(absent.fee, Decimal::ZERO);

        let null: Sample = serde_json::from_str(r#"{"price": "1", "fee": null}"#).unwrap();
        assert_eq!(null.fee, Decimal::ZERO);

        let empty: Sample = serde_json::from_str(r#"{"price": "1", "fee": ""}"#).unwrap();
        assert_eq!(empty.fee, Decimal::ZERO);
    }

    #[test]
    fn test_null_list_is_empty() {
        let s: Sample = serde_json::from_str(r#"{"price": "1", "levels": null}"#).unwrap();
        assert!(s.levels.is_empty());
    }

    #[test]
    fn test_positive_millis_option() {
        let zero: Sample = serde_json::from_str(r#"{"price": "1", "expires": 0}"#).unwrap();
        assert!(zero.expires.is_none());

        let set: Sample =
            serde_json::from_str(r#"{"price": "1", "expires": 1546300800123}"#).unwrap();
        assert_eq!(set.expires.unwrap().timestamp_millis(), 1_546_300_800_123);
    }

    #[test]
    fn test_invalid_decimal_rejected() {
        assert!(serde_json::from_str::<Sample>(r#"{"price": "abc"}"#).is_err());
    }

    #[test]
    fn test_fractional_positive_millis_option() {
        let s: Sample =
            serde_json::from_str(r#"{"price": "1", "expires": 1546300800123.5}"#).unwrap();
        let expires = s.expires.unwrap();
        assert_eq!(expires.timestamp_millis(), 1_546_300_800_123);
        assert_eq!(expires.timestamp_subsec_nanos(), 123_500_000);

        let negative: Sample = serde_json::from_str(r#"{"price": "1", "expires": -1.5}"#).unwrap();
        assert!(negative.expires.is_none());
    }

    #[test]
    fn test_integer_epochs() {
        let s: Stamps =
            serde_json::from_str(r#"{"seconds": 1546300800, "millis": 1546300800123}"#).unwrap();
        assert_eq!(s.seconds.timestamp(), 1_546_300_800);
        assert_eq!(s.seconds.timestamp_subsec_nanos(), 0);
        assert_eq!(s.millis.timestamp_millis(), 1_546_300_800_123);
    }

    #[test]
    fn test_fractional_epochs_keep_subsecond_precision() {
        let s: Stamps =
            serde_json::from_str(r#"{"seconds": 1546300800.5, "millis": 1546300800123.25}"#)
                .unwrap();
        assert_eq!(s.seconds.timestamp(), 1_546_300_800);
        assert_eq!(s.seconds.timestamp_subsec_nanos(), 500_000_000);
        assert_eq!(s.millis.timestamp(), 1_546_300_800);
        assert_eq!(s.millis.timestamp_subsec_nanos(), 123_250_000);
    }

    #[test]
    fn test_negative_fractional_epoch() {
        let s: Stamps = serde_json::from_str(r#"{"seconds": -1.5, "millis": 0}"#).unwrap();
        assert_eq!(s.seconds.timestamp(), -2);
        assert_eq!(s.seconds.timestamp_subsec_nanos(), 500_000_000);
    }

    #[test]
    fn test_invalid_epoch_rejected() {
        assert!(serde_json::from_str::<Stamps>(r#"{"seconds": "soon", "millis": 0}"#).is_err());
        assert!(serde_json::from_str::<Stamps>(r#"{"seconds": 1e300, "millis": 0}"#).is_err());
    }
}
