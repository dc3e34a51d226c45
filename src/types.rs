//! Core JSON-RPC 2.0 types and data structures.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Protocol version literal carried by every request and response.
pub const VERSION: &str = "2.0";

/// Advisory content type for transports wrapping the processor.
///
/// The processor itself never touches headers; this is metadata for
/// whoever puts the text on the wire.
pub const CONTENT_TYPE: &str = "application/json";

/// Request identifier - an integer or a string.
///
/// Absence is modeled with `Option<RequestId>`; a request carrying
/// `"id": null` is rejected outright rather than treated as id-less.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestId {
    Int(i64),
    Str(String),
}

impl From<i64> for RequestId {
    fn from(id: i64) -> Self {
        RequestId::Int(id)
    }
}

impl From<&str> for RequestId {
    fn from(id: &str) -> Self {
        RequestId::Str(id.to_string())
    }
}

/// Supplied call parameters in one of the two accepted shapes.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Params {
    /// No `params` member was present. Binds like an empty positional list.
    #[default]
    Absent,
    /// An ordered sequence of argument values.
    Positional(Vec<Value>),
    /// A mapping from parameter name to argument value.
    Named(Map<String, Value>),
}

impl Params {
    pub fn is_absent(&self) -> bool {
        matches!(self, Params::Absent)
    }

    /// Number of supplied values, counting absence as zero.
    pub fn len(&self) -> usize {
        match self {
            Params::Absent => 0,
            Params::Positional(values) => values.len(),
            Params::Named(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A structurally validated JSON-RPC 2.0 request.
///
/// Instances come out of [`crate::validate::validate`]; there is no derived
/// `Deserialize` because strict validation (key whitelist, absent-vs-null
/// id, params shape) is the only way a request comes into existence.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// Raw `method` member. Any JSON type passes validation; a value that
    /// is not a string fails method resolution at dispatch.
    pub method: Value,
    pub params: Params,
    pub id: Option<RequestId>,
}

impl Request {
    /// The method name, when the `method` member is a string.
    pub fn method_name(&self) -> Option<&str> {
        self.method.as_str()
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn id(&self) -> Option<&RequestId> {
        self.id.as_ref()
    }

    /// Check if this is a notification (no response expected)
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }

    /// Check if this request expects a response
    pub fn expects_response(&self) -> bool {
        self.id.is_some()
    }
}

/// JSON-RPC 2.0 response message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Error>,
    pub id: Option<RequestId>,
}

impl Response {
    /// Create a successful response
    pub fn success(result: Value, id: Option<RequestId>) -> Self {
        Self {
            jsonrpc: VERSION.to_string(),
            result: Some(result),
            error: None,
            id,
        }
    }

    /// Create an error response
    pub fn error(error: Error, id: Option<RequestId>) -> Self {
        Self {
            jsonrpc: VERSION.to_string(),
            result: None,
            error: Some(error),
            id,
        }
    }

    /// Check if this is a successful response
    pub fn is_success(&self) -> bool {
        self.error.is_none() && self.result.is_some()
    }

    /// Check if this is an error response
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn result(&self) -> Option<&Value> {
        self.result.as_ref()
    }

    pub fn error_info(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub fn id(&self) -> Option<&RequestId> {
        self.id.as_ref()
    }
}

/// JSON-RPC 2.0 error object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Error {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Error {
    /// Create a new error
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Add additional data to the error
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Parse error (-32700): invalid JSON was received.
    pub fn parse_error() -> Self {
        Self::new(error_codes::PARSE_ERROR, "Parse error")
    }

    /// Invalid Request (-32600): the payload is not a valid request object.
    pub fn invalid_request() -> Self {
        Self::new(error_codes::INVALID_REQUEST, "Invalid Request")
    }

    /// Method not found (-32601): the method does not exist or is not callable.
    pub fn method_not_found() -> Self {
        Self::new(error_codes::METHOD_NOT_FOUND, "Method not found")
    }

    /// Invalid params (-32602): supplied parameters do not fit the signature.
    pub fn invalid_params() -> Self {
        Self::new(error_codes::INVALID_PARAMS, "Invalid params")
    }

    /// Internal error (-32603): the invocation itself failed.
    pub fn internal_error() -> Self {
        Self::new(error_codes::INTERNAL_ERROR, "Internal error")
    }

    pub fn is_parse_error(&self) -> bool {
        self.code == error_codes::PARSE_ERROR
    }

    pub fn is_invalid_request(&self) -> bool {
        self.code == error_codes::INVALID_REQUEST
    }

    pub fn is_method_not_found(&self) -> bool {
        self.code == error_codes::METHOD_NOT_FOUND
    }

    pub fn is_invalid_params(&self) -> bool {
        self.code == error_codes::INVALID_PARAMS
    }

    pub fn is_internal_error(&self) -> bool {
        self.code == error_codes::INTERNAL_ERROR
    }

    /// Check for the implementation-defined server error range.
    pub fn is_server_error(&self) -> bool {
        self.code >= -32099 && self.code <= -32000
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }
}

/// Standard JSON-RPC 2.0 error codes as defined in the specification.
///
/// # Example
/// ```rust
/// use alder_rpc::{Error, error_codes};
///
/// let error = Error::new(error_codes::METHOD_NOT_FOUND, "Method not found");
/// assert!(error.is_method_not_found());
/// ```
pub mod error_codes {
    /// Parse error - Invalid JSON was received by the server.
    pub const PARSE_ERROR: i32 = -32700;

    /// Invalid Request - The JSON sent is not a valid Request object.
    pub const INVALID_REQUEST: i32 = -32600;

    /// Method not found - The method does not exist / is not available.
    pub const METHOD_NOT_FOUND: i32 = -32601;

    /// Invalid params - Invalid method parameter(s).
    pub const INVALID_PARAMS: i32 = -32602;

    /// Internal error - Internal JSON-RPC error.
    pub const INTERNAL_ERROR: i32 = -32603;
}
