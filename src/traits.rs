//! The capability surface a processor dispatches against.
//!
//! A target exposes three things: whether a method exists, the declared
//! shape of its parameter list, and a way to invoke it with a concrete
//! argument list. Anything satisfying [`CallTarget`] can sit behind a
//! [`crate::Processor`] - the in-crate [`crate::MethodRegistry`] is one
//! implementation built as an explicit registration table.

use serde_json::Value;
use std::fmt;

/// A single declared parameter: its name and whether a caller must supply it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: String,
    pub required: bool,
}

impl ParamSpec {
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: true,
        }
    }

    pub fn optional(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
        }
    }
}

/// Ordered parameter declaration for one method.
///
/// # Example
/// ```rust
/// use alder_rpc::Signature;
///
/// let signature = Signature::new().required("a").required("b").optional("precision");
/// assert_eq!(signature.param_count(), 3);
/// assert_eq!(signature.required_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Signature {
    params: Vec<ParamSpec>,
}

impl Signature {
    /// A signature that declares no parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a required parameter.
    pub fn required(mut self, name: impl Into<String>) -> Self {
        self.params.push(ParamSpec::required(name));
        self
    }

    /// Append an optional parameter.
    pub fn optional(mut self, name: impl Into<String>) -> Self {
        self.params.push(ParamSpec::optional(name));
        self
    }

    /// Declared parameters in declaration order.
    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    /// Total number of declared parameters.
    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    /// Number of declared parameters a caller must supply.
    pub fn required_count(&self) -> usize {
        self.params.iter().filter(|param| param.required).count()
    }
}

/// Failure raised by a target while executing a method.
///
/// The dispatch layer does not distinguish mechanism failures from
/// application failures - either way the caller sees Internal error and
/// the detail goes to the log only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvokeError {
    message: String,
}

impl InvokeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for InvokeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for InvokeError {}

impl From<serde_json::Error> for InvokeError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(error.to_string())
    }
}

/// The set of callable methods a processor is bound to.
pub trait CallTarget: Send + Sync {
    /// Check if a method with this name exists and is callable.
    fn has_method(&self, method: &str) -> bool {
        self.method_signature(method).is_some()
    }

    /// The declared parameter list of a callable method, if it exists.
    fn method_signature(&self, method: &str) -> Option<&Signature>;

    /// Execute a method with an already-bound argument list.
    fn invoke(&self, method: &str, args: Vec<Value>) -> Result<Value, InvokeError>;
}
