use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{domain::StudentRecord, error::ProtocolError};

/// Request body for create and update.
///
/// Numeric fields that failed coercion serialize as `null`; the service decides what
/// to do with them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentPayload {
    pub name: String,
    pub roll_no: Option<i64>,
    pub marks: Option<i64>,
    pub grade: String,
}

/// Decodes the body of `GET /students`.
///
/// The service answers with an object keyed by roll number, or `null` when it holds
/// no records. Arrays are accepted too. Object order is kept as received.
pub fn decode_collection(body: &[u8]) -> Result<Vec<StudentRecord>, ProtocolError> {
    let value: Value = serde_json::from_slice(body)?;
    let entries = match value {
        Value::Null => return Ok(Vec::new()),
        Value::Object(map) => map.into_iter().map(|(_, entry)| entry).collect::<Vec<_>>(),
        Value::Array(items) => items,
        other => return Err(ProtocolError::UnexpectedShape(json_kind(&other))),
    };

    entries
        .into_iter()
        .map(|entry| serde_json::from_value(entry).map_err(ProtocolError::from))
        .collect()
}

pub fn decode_record(body: &[u8]) -> Result<StudentRecord, ProtocolError> {
    Ok(serde_json::from_slice(body)?)
}

/// Integer-prefix parse: optional leading whitespace, optional sign, an optional
/// `0x`/`0X` hex marker, then digits. Anything after the digits is ignored. Returns
/// `None` when no digit leads or the value does not fit in an `i64`.
pub fn parse_int_prefix(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let (radix, rest) = match unsigned.get(..2) {
        Some("0x" | "0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };
    let digits_len = rest.chars().take_while(|c| c.is_digit(radix)).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude = i64::from_str_radix(&rest[..digits_len], radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
