//! Structural validation of decoded request values.
//!
//! A payload only becomes a [`Request`] by passing every check here; there
//! is no lenient path. Validation distinguishes a member that is absent
//! from one that is present with `null` - `"id": null` and `"params": null`
//! are both rejected, not treated as missing.

use crate::types::{Params, Request, RequestId, VERSION};
use serde_json::Value;
use std::fmt;

/// Why a decoded value failed request validation.
///
/// Every variant maps to the same Invalid Request error on the wire; the
/// distinction exists for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidateError {
    /// The value is not a JSON object.
    NotAnObject,
    /// A member outside `jsonrpc`, `method`, `params`, `id` is present.
    UnknownKey(String),
    /// `jsonrpc` is missing or is not exactly the string `"2.0"`.
    BadVersion,
    /// No `method` member.
    MissingMethod,
    /// `params` is present but neither an array nor an object.
    BadParams,
    /// `id` is present but not an integer or a string.
    BadId,
}

impl fmt::Display for ValidateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidateError::NotAnObject => write!(f, "request is not an object"),
            ValidateError::UnknownKey(key) => write!(f, "unsupported member \"{}\"", key),
            ValidateError::BadVersion => {
                write!(f, "\"jsonrpc\" must be the string \"{}\"", VERSION)
            }
            ValidateError::MissingMethod => write!(f, "\"method\" member is missing"),
            ValidateError::BadParams => {
                write!(f, "\"params\" must be an array or an object")
            }
            ValidateError::BadId => write!(f, "\"id\" must be an integer or a string"),
        }
    }
}

impl std::error::Error for ValidateError {}

/// Validate a decoded value and produce the typed request.
///
/// Checks, all of which must hold:
/// 1. the value is an object whose members are a subset of
///    `{jsonrpc, method, params, id}`;
/// 2. `jsonrpc` equals `"2.0"`;
/// 3. `method` is present (its type is checked at dispatch);
/// 4. `params`, when present, is an array or an object;
/// 5. `id`, when present, is an integer or a string.
pub fn validate(value: &Value) -> Result<Request, ValidateError> {
    let Some(object) = value.as_object() else {
        return Err(ValidateError::NotAnObject);
    };

    for key in object.keys() {
        if !matches!(key.as_str(), "jsonrpc" | "method" | "params" | "id") {
            return Err(ValidateError::UnknownKey(key.clone()));
        }
    }

    match object.get("jsonrpc") {
        Some(Value::String(version)) if version == VERSION => {}
        _ => return Err(ValidateError::BadVersion),
    }

    let Some(method) = object.get("method") else {
        return Err(ValidateError::MissingMethod);
    };

    let params = match object.get("params") {
        None => Params::Absent,
        Some(Value::Array(values)) => Params::Positional(values.clone()),
        Some(Value::Object(map)) => Params::Named(map.clone()),
        Some(_) => return Err(ValidateError::BadParams),
    };

    let id = match object.get("id") {
        None => None,
        Some(Value::String(text)) => Some(RequestId::Str(text.clone())),
        Some(Value::Number(number)) => match number.as_i64() {
            Some(int) => Some(RequestId::Int(int)),
            None => return Err(ValidateError::BadId),
        },
        Some(_) => return Err(ValidateError::BadId),
    };

    Ok(Request {
        method: method.clone(),
        params,
        id,
    })
}
