//! Decoding of raw JSON values into typed records.
//!
//! Missing fields never raise an error: every field has a default and the
//! default policy lives in [`text_field`] and [`price_field`].
//!
//! Prices are never negative: costs only grow as travels are applied.
//!
//! A value counts as "falsy" when it is `null`, `false`, `0`, `""`, `"0"`,
//! or an empty array/object. Falsy text becomes `""`, a falsy price becomes `0.0`.

use super::records::{CompanyRecord, TravelRecord};
use crate::utils::error::ParseError;
use log::{debug, warn};
use serde_json::{Map, Value};

/// Decode a single company object
///
/// **Public** - used by `decode_companies` and tests
pub fn decode_company(value: &Value) -> CompanyRecord {
    let empty = Map::new();
    let obj = value.as_object().unwrap_or(&empty);

    CompanyRecord::new(
        text_field(obj, "id"),
        text_field(obj, "name"),
        Some(text_field(obj, "parentId")),
    )
}

/// Decode a single travel object
///
/// **Public** - used by `decode_travels` and tests
pub fn decode_travel(value: &Value) -> TravelRecord {
    let empty = Map::new();
    let obj = value.as_object().unwrap_or(&empty);

    TravelRecord::new(
        text_field(obj, "id"),
        price_field(obj, "price"),
        text_field(obj, "companyId"),
    )
}

/// Decode the companies collection from raw bytes
///
/// # Errors
/// * `ParseError::JsonError` - bytes are not JSON
/// * `ParseError::InvalidFormat` - top-level value is not an array
pub fn decode_companies(bytes: &[u8]) -> Result<Vec<CompanyRecord>, ParseError> {
    let records = decode_collection(bytes, "companies", decode_company)?;
    debug!("Decoded {} company records", records.len());
    Ok(records)
}

/// Decode the travels collection from raw bytes
///
/// # Errors
/// * `ParseError::JsonError` - bytes are not JSON
/// * `ParseError::InvalidFormat` - top-level value is not an array
pub fn decode_travels(bytes: &[u8]) -> Result<Vec<TravelRecord>, ParseError> {
    let records = decode_collection(bytes, "travels", decode_travel)?;
    debug!("Decoded {} travel records", records.len());
    Ok(records)
}

/// Parse a top-level JSON array and decode each object in it
///
/// **Private** - shared by both collection decoders
fn decode_collection<T>(
    bytes: &[u8],
    kind: &str,
    decode: fn(&Value) -> T,
) -> Result<Vec<T>, ParseError> {
    // An empty body decodes to no records rather than an error
    if bytes.iter().all(u8::is_ascii_whitespace) {
        warn!("{} source is empty, treating as no records", kind);
        return Ok(Vec::new());
    }

    let document: Value = serde_json::from_slice(bytes)?;

    let items: &[Value] = match &document {
        Value::Array(items) => items.as_slice(),
        Value::Null => {
            warn!("{} source contained null, treating as empty", kind);
            &[]
        }
        other => {
            return Err(ParseError::InvalidFormat(format!(
                "{} must be a JSON array, found {}",
                kind,
                json_type_name(other)
            )))
        }
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        if !item.is_object() {
            warn!(
                "Skipping {} entry {}: expected object, found {}",
                kind,
                index,
                json_type_name(item)
            );
            continue;
        }
        records.push(decode(item));
    }

    Ok(records)
}

/// Read a text field, defaulting to the empty string
///
/// **Private** - field coercion policy
fn text_field(obj: &Map<String, Value>, key: &str) -> String {
    match obj.get(key) {
        None => String::new(),
        Some(value) if is_falsy(value) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(_)) => "1".to_string(),
        Some(other) => {
            warn!(
                "Field '{}' holds {}, using empty string",
                key,
                json_type_name(other)
            );
            String::new()
        }
    }
}

/// Read a decimal price, defaulting to zero
///
/// **Private** - field coercion policy
fn price_field(obj: &Map<String, Value>, key: &str) -> f64 {
    let value = match obj.get(key) {
        Some(value) if !is_falsy(value) => value,
        _ => return 0.0,
    };

    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(_) => Some(1.0),
        _ => None,
    };

    match parsed {
        Some(price) if price.is_finite() && price >= 0.0 => price,
        Some(price) if price.is_finite() => {
            warn!("Field '{}' is negative ({}), using 0", key, price);
            0.0
        }
        _ => {
            warn!("Field '{}' is not a decimal number ({}), using 0", key, value);
            0.0
        }
    }
}

/// Falsy JSON values, as treated by the source data's producers
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
