//! Request processing: dispatch, batch coordination, and the text entry point.
//!
//! [`Processor::process`] is the whole external contract: raw request text
//! in, raw response text out, where an empty string means "transmit
//! nothing". Everything in between - parsing, validation, method
//! resolution, parameter binding, invocation, envelope construction - stays
//! inside this module and never escapes as a panic or error.

use crate::bind::bind;
use crate::traits::CallTarget;
use crate::types::{Error, Request, Response};
use crate::validate::validate;
use serde_json::Value;

/// Emitted when an outgoing envelope itself cannot be serialized. Does not
/// happen for the types in this crate, but `process` must not raise.
const FALLBACK_RESPONSE: &str =
    r#"{"jsonrpc":"2.0","error":{"code":-32603,"message":"Internal error"},"id":null}"#;

/// A JSON-RPC 2.0 processor bound to one call target.
///
/// The binding is established at construction and immutable afterwards; a
/// processor holds no other state, so `process` is a pure function of the
/// target and the request text. Concurrent calls are safe exactly when the
/// target's methods are.
pub struct Processor<T: CallTarget> {
    target: T,
}

impl<T: CallTarget> Processor<T> {
    /// Bind a processor to its call target.
    pub fn new(target: T) -> Self {
        Self { target }
    }

    /// The bound call target.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Process raw request text into raw response text.
    ///
    /// Returns the serialized response envelope, a serialized array of
    /// envelopes for a batch, or the empty string when nothing must be
    /// transmitted (notifications). Never panics and never returns a
    /// textual empty array.
    pub fn process(&self, input: &str) -> String {
        let value: Value = match serde_json::from_str(input) {
            Ok(value) => value,
            Err(error) => {
                tracing::debug!(%error, "request payload is not valid json");
                return encode(&Response::error(Error::parse_error(), None));
            }
        };

        match &value {
            Value::Object(_) => match self.process_single(&value) {
                Some(response) => encode(&response),
                None => String::new(),
            },
            Value::Array(elements) => {
                if elements.is_empty() {
                    tracing::debug!("batch is empty");
                    return encode(&Response::error(Error::invalid_request(), None));
                }
                let responses = self.process_batch(elements);
                if responses.is_empty() {
                    String::new()
                } else {
                    encode_batch(&responses)
                }
            }
            _ => {
                tracing::debug!("top-level payload is neither an object nor an array");
                encode(&Response::error(Error::invalid_request(), None))
            }
        }
    }

    /// Validate and dispatch one decoded request value.
    ///
    /// A structurally invalid value is always answered with Invalid Request
    /// and a null id - notification status cannot be trusted when the
    /// request shape itself is broken.
    pub fn process_single(&self, value: &Value) -> Option<Response> {
        match validate(value) {
            Ok(request) => self.dispatch(request),
            Err(error) => {
                tracing::debug!(%error, "invalid request");
                Some(Response::error(Error::invalid_request(), None))
            }
        }
    }

    /// Process batch elements independently, collecting non-silent
    /// responses in input order.
    pub fn process_batch(&self, elements: &[Value]) -> Vec<Response> {
        tracing::debug!(batch_size = elements.len(), "processing batch");
        elements
            .iter()
            .filter_map(|element| self.process_single(element))
            .collect()
    }

    /// Resolve, bind, and invoke a validated request.
    ///
    /// Returns `None` when the request is a notification: resolution,
    /// binding, and invocation outcomes are then all suppressed, though
    /// invocation itself still happens and its side effects occur.
    fn dispatch(&self, request: Request) -> Option<Response> {
        let respond = request.expects_response();
        let Request { method, params, id } = request;

        let Some(name) = method.as_str() else {
            tracing::debug!("method member is not a string");
            return respond.then(|| Response::error(Error::method_not_found(), id));
        };

        if !self.target.has_method(name) {
            tracing::warn!(method = %name, "method not found");
            return respond.then(|| Response::error(Error::method_not_found(), id));
        }
        let Some(signature) = self.target.method_signature(name) else {
            tracing::warn!(method = %name, "method has no signature");
            return respond.then(|| Response::error(Error::method_not_found(), id));
        };

        let args = match bind(signature, &params) {
            Ok(args) => args,
            Err(error) => {
                tracing::debug!(method = %name, %error, "parameter binding failed");
                return respond.then(|| Response::error(Error::invalid_params(), id));
            }
        };

        match self.target.invoke(name, args) {
            Ok(result) => respond.then(|| Response::success(result, id)),
            Err(error) => {
                tracing::warn!(method = %name, %error, "method invocation failed");
                respond.then(|| Response::error(Error::internal_error(), id))
            }
        }
    }
}

fn encode(response: &Response) -> String {
    serde_json::to_string(response).unwrap_or_else(|error| {
        tracing::error!(%error, "response serialization failed");
        FALLBACK_RESPONSE.to_string()
    })
}

fn encode_batch(responses: &[Response]) -> String {
    serde_json::to_string(responses).unwrap_or_else(|error| {
        tracing::error!(%error, "batch serialization failed");
        FALLBACK_RESPONSE.to_string()
    })
}
