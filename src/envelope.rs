//! Adapts heterogeneous success bodies into one canonical settlement.
//!
//! Listing endpoints answer either with a bare array or with
//! `{ data: [...], pagenation: {...} }`; item endpoints answer with a bare
//! record or `{ data: record }`. Extra envelope keys are ignored.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde_json::{Map, Value};

use crate::error::StoreError;
use crate::paging::Paging;
use crate::state::Record;

const DATA_KEY: &str = "data";
const PAGING_KEYS: [&str; 2] = ["pagenation", "pagination"];

/// Successful outcome of one request, in the shape the reducer consumes.
#[derive(Debug, Clone, PartialEq)]
pub enum Settlement<R> {
    Records { records: Vec<R>, paging: Option<Paging> },
    Record(R),
    Removed,
}

/// Adapt a listing body.
///
/// # Errors
///
/// Returns [`StoreError::Decode`] if the records or paging descriptor do not
/// deserialize.
pub fn adapt_list<R: Record>(body: Value) -> Result<Settlement<R>, StoreError> {
    match body {
        Value::Array(_) => Ok(Settlement::Records { records: decode(body)?, paging: None }),
        Value::Object(mut map) => {
            let paging = take_paging(&mut map)?;
            let records = match map.remove(DATA_KEY) {
                None | Some(Value::Null) => Vec::new(),
                Some(data) => decode(data)?,
            };
            Ok(Settlement::Records { records, paging })
        }
        Value::Null => Ok(Settlement::Records { records: Vec::new(), paging: None }),
        other => Err(StoreError::Decode(format!("expected listing, got {}", kind(&other)))),
    }
}

/// Adapt a single-record body.
///
/// # Errors
///
/// Returns [`StoreError::Decode`] if no record can be read from the body.
pub fn adapt_record<R: Record>(body: Value) -> Result<Settlement<R>, StoreError> {
    let record = match body {
        Value::Object(mut map) => match map.remove(DATA_KEY) {
            Some(data) => decode(data)?,
            None => decode(Value::Object(map))?,
        },
        other => decode(other)?,
    };
    Ok(Settlement::Record(record))
}

/// Adapt a delete body. The server's reply carries nothing the reducer needs.
#[must_use]
pub fn adapt_removed<R>(_body: Value) -> Settlement<R> {
    Settlement::Removed
}

fn take_paging(map: &mut Map<String, Value>) -> Result<Option<Paging>, StoreError> {
    for key in PAGING_KEYS {
        match map.remove(key) {
            None | Some(Value::Null) => {}
            Some(raw) => return decode(raw).map(Some),
        }
    }
    Ok(None)
}

fn decode<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, StoreError> {
    serde_json::from_value(value).map_err(|e| StoreError::Decode(e.to_string()))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
