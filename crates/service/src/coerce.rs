//! Input coercion shared by the services.
//!
//! Request bodies come from HTML forms, so numbers may arrive as strings and
//! optional fields as empty strings. These helpers turn loosely typed input
//! into the values that get stored, the same way in both storage modes.

use chrono::{NaiveDate, NaiveTime};
use serde_json::Value;

use crate::errors::ServiceError;

/// Numeric value of a JSON input: numbers as is, numeric strings parsed
/// (blank counts as zero), booleans as 1/0, null as zero. Anything else has
/// no numeric value.
pub fn number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() { 0.0 } else { s.parse::<f64>().ok()? }
        }
        Value::Bool(b) => if *b { 1.0 } else { 0.0 },
        Value::Null => 0.0,
        Value::Array(_) | Value::Object(_) => return None,
    };
    n.is_finite().then_some(n)
}

/// Integer value of an optional input, zero when absent or non-numeric.
/// Fractions are rounded; out-of-range values saturate.
pub fn int_or_zero(value: Option<&Value>) -> i32 {
    value.and_then(number).map(|n| n.round() as i32).unwrap_or(0)
}

/// Like [`int_or_zero`] but zero means "not given".
pub fn nonzero_int(value: Option<&Value>) -> Option<i32> {
    Some(int_or_zero(value)).filter(|n| *n != 0)
}

/// Trimmed text, or `None` when absent or blank.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Trimmed text that must be present.
pub fn required_text(value: Option<String>, field: &str) -> Result<String, ServiceError> {
    non_blank(value).ok_or_else(|| ServiceError::Validation(format!("{field} is required")))
}

/// Lookup form of an email address: trimmed and lowercased.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Calendar date in `YYYY-MM-DD` form.
pub fn parse_date(raw: &str) -> Result<NaiveDate, ServiceError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| ServiceError::Validation(format!("invalid date '{raw}', expected YYYY-MM-DD")))
}

/// Time of day as `HH:MM` or `HH:MM:SS[.fff]`.
pub fn parse_time(raw: &str) -> Result<NaiveTime, ServiceError> {
    let raw_trimmed = raw.trim();
    NaiveTime::parse_from_str(raw_trimmed, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(raw_trimmed, "%H:%M"))
        .map_err(|_| ServiceError::Validation(format!("invalid time '{raw}', expected HH:MM")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_follow_form_semantics() {
        assert_eq!(int_or_zero(Some(&json!(4))), 4);
        assert_eq!(int_or_zero(Some(&json!("5"))), 5);
        assert_eq!(int_or_zero(Some(&json!(" 3 "))), 3);
        assert_eq!(int_or_zero(Some(&json!(4.6))), 5);
        assert_eq!(int_or_zero(Some(&json!(true))), 1);
        assert_eq!(int_or_zero(Some(&json!("cinco"))), 0);
        assert_eq!(int_or_zero(Some(&json!(""))), 0);
        assert_eq!(int_or_zero(Some(&json!(null))), 0);
        assert_eq!(int_or_zero(Some(&json!({"a": 1}))), 0);
        assert_eq!(int_or_zero(None), 0);
        assert_eq!(int_or_zero(Some(&json!(1e20))), i32::MAX);
    }

    #[test]
    fn nonzero_int_treats_zero_as_missing() {
        assert_eq!(nonzero_int(Some(&json!(0))), None);
        assert_eq!(nonzero_int(Some(&json!("30"))), Some(30));
        assert_eq!(nonzero_int(None), None);
    }

    #[test]
    fn text_helpers_trim_and_reject_blank() {
        assert_eq!(non_blank(Some("  Ana ".into())), Some("Ana".into()));
        assert_eq!(non_blank(Some("   ".into())), None);
        assert!(matches!(required_text(None, "name"), Err(ServiceError::Validation(m)) if m == "name is required"));
    }

    #[test]
    fn dates_and_times_parse() -> Result<(), ServiceError> {
        assert_eq!(parse_date("2024-05-01")?, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert!(parse_date("01/05/2024").is_err());
        assert_eq!(parse_time("14:30")?, NaiveTime::from_hms_opt(14, 30, 0).unwrap());
        assert_eq!(parse_time("09:05:10")?, NaiveTime::from_hms_opt(9, 5, 10).unwrap());
        assert!(parse_time("25:00").is_err());
        Ok(())
    }
}
