//! Deserializers for raw HTML form values, which arrive as numbers or text.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

fn parse_decimal(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let normalized = if trimmed.contains('.') {
        trimmed.to_string()
    } else {
        trimmed.replacen(',', ".", 1)
    };
    normalized.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn non_negative<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match RawValue::deserialize(deserializer)? {
        RawValue::Number(number) => number,
        RawValue::Text(text) => parse_decimal(&text)
            .ok_or_else(|| D::Error::custom(format!("'{text}' is not a number")))?,
        RawValue::Bool(flag) => {
            return Err(D::Error::custom(format!("expected a number, found {flag}")))
        }
    };

    if !value.is_finite() || value < 0.0 {
        return Err(D::Error::custom(format!("{value} must not be negative")));
    }
    Ok(value)
}

/// Whole-number field; decimals are truncated the way the published form did.
pub(crate) fn whole_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = non_negative(deserializer)?.trunc();
    if value > f64::from(u32::MAX) {
        return Err(D::Error::custom(format!("{value} is out of range")));
    }
    Ok(value as u32)
}

/// Euro amount, kept at the precision it was submitted with.
pub(crate) fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    non_negative(deserializer)
}

/// "si"/"no" selector, also accepting JSON booleans.
pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match RawValue::deserialize(deserializer)? {
        RawValue::Bool(flag) => Ok(flag),
        RawValue::Text(text) => match text.trim().to_lowercase().as_str() {
            "si" | "sí" | "true" | "yes" => Ok(true),
            "no" | "false" | "" => Ok(false),
            other => Err(D::Error::custom(format!("'{other}' is not si/no"))),
        },
        RawValue::Number(number) => Err(D::Error::custom(format!(
            "expected si/no, found {number}"
        ))),
    }
}
