//! Serde helpers that normalize loosely typed backend fields
//!
//! The directory backend is schemaless JSON. Ids may arrive as numbers or
//! numeric strings, and optional values may be missing, `null` or `""`.
//! Everything is folded into one typed representation here so the rest of
//! the crate never compares loosely.

use serde::{de, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Float(f64),
    Text(String),
}

fn parse_id<E: de::Error>(raw: RawId) -> Result<Option<i64>, E> {
    match raw {
        RawId::Int(id) => Ok(Some(id)),
        RawId::Text(text) if text.trim().is_empty() => Ok(None),
        RawId::Text(text) => text
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| E::custom(format!("invalid id: {:?}", text))),
    }
}

/// Required record id, number or numeric string
pub fn id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = RawId::deserialize(deserializer)?;
    parse_id::<D::Error>(raw)?.ok_or_else(|| de::Error::custom("id must not be empty"))
}

/// Nullable foreign key; `null`, missing and `""` all become `None`
pub fn optional_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawId>::deserialize(deserializer)? {
        Some(raw) => parse_id::<D::Error>(raw),
        None => Ok(None),
    }
}

/// Optional free text; `null`, missing and blank strings become `None`
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(crate::utils::helpers::blank_to_none(value))
}

/// Optional number, also accepted as a numeric string
pub fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = match Option::<RawNumber>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(RawNumber::Float(n)) => n,
        Some(RawNumber::Text(text)) if text.trim().is_empty() => return Ok(None),
        Some(RawNumber::Text(text)) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| <D::Error as de::Error>::custom(format!("invalid number: {:?}", text)))?,
    };

    if number.is_finite() {
        Ok(Some(number))
    } else {
        Err(de::Error::custom("number must be finite"))
    }
}
