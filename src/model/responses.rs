/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/
use serde_json::{Map, Value};

/// Replaces a null payload with an empty JSON object
///
/// Read operations deliver the backend payload as-is, except that an empty
/// or absent body becomes `{}` so callers never observe null.
pub fn or_empty_record(payload: Value) -> Value {
    if payload.is_null() {
        Value::Object(Map::new())
    } else {
        payload
    }
}
