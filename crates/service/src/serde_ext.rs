//! Lenient (de)serializers for records read back from JSON files written by
//! older versions of the shop software.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::coerce;

/// Accept any JSON value and coerce it to an integer (non-numeric → 0).
pub fn lenient_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce::int_or_zero(Some(&value)))
}

/// Optional integer written as a number or a numeric string. Zero, blanks and
/// anything non-numeric read as absent.
pub fn lenient_opt_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce::nonzero_int(Some(&value)))
}

/// Optional `YYYY-MM-DD` date; any other shape reads as absent.
pub fn lenient_opt_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(raw) => coerce::parse_date(&raw).ok(),
        _ => None,
    })
}

/// Treat an explicit `null` like a missing field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Optional time of day written as `HH:MM:SS`; reads `HH:MM` too. Blank or
/// unparseable values read as absent.
pub mod opt_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    use crate::coerce;

    pub fn serialize<S>(value: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(t) => serializer.serialize_str(&t.format("%H:%M:%S").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(raw) => coerce::parse_time(&raw).ok(),
            _ => None,
        })
    }
}
