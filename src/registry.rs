//! Method registry: an explicit registration table satisfying [`CallTarget`].
//!
//! Methods are registered once at startup with their declared signature and
//! a handler closure; the table then answers the processor's existence,
//! signature, and invocation queries. Handlers receive the already-bound
//! argument list and return a plain result value - envelope construction is
//! the processor's job, never the handler's.
//!
//! ```rust
//! use alder_rpc::{MethodRegistry, Signature};
//! use serde_json::json;
//!
//! let registry = MethodRegistry::new().register(
//!     "sum",
//!     Signature::new().required("a").required("b"),
//!     |args| {
//!         let a = args[0].as_i64().unwrap_or(0);
//!         let b = args[1].as_i64().unwrap_or(0);
//!         Ok(json!(a + b))
//!     },
//! );
//! assert!(registry.method_count() == 1);
//! ```

use crate::traits::{CallTarget, InvokeError, Signature};
use serde_json::Value;
use std::collections::HashMap;

/// Function signature for method handlers
pub type MethodHandler = Box<dyn Fn(Vec<Value>) -> Result<Value, InvokeError> + Send + Sync>;

struct RegisteredMethod {
    signature: Signature,
    handler: MethodHandler,
}

/// Registry for organizing and dispatching callable methods
pub struct MethodRegistry {
    methods: HashMap<String, RegisteredMethod>,
}

impl MethodRegistry {
    /// Create a new empty method registry
    pub fn new() -> Self {
        Self {
            methods: HashMap::new(),
        }
    }

    /// Register a method with its declared signature and handler function
    pub fn register<F>(mut self, method: impl Into<String>, signature: Signature, handler: F) -> Self
    where
        F: Fn(Vec<Value>) -> Result<Value, InvokeError> + Send + Sync + 'static,
    {
        let method_name = method.into();
        tracing::trace!(method = %method_name, params = signature.param_count(), "registering method");
        self.methods.insert(
            method_name,
            RegisteredMethod {
                signature,
                handler: Box::new(handler),
            },
        );
        self
    }

    /// Check if a method is registered
    pub fn has_method(&self, method: &str) -> bool {
        self.methods.contains_key(method)
    }

    /// Get list of all registered methods
    pub fn get_methods(&self) -> Vec<String> {
        self.methods.keys().cloned().collect()
    }

    /// Get the number of registered methods
    pub fn method_count(&self) -> usize {
        self.methods.len()
    }
}

impl Default for MethodRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CallTarget for MethodRegistry {
    fn has_method(&self, method: &str) -> bool {
        self.has_method(method)
    }

    fn method_signature(&self, method: &str) -> Option<&Signature> {
        self.methods.get(method).map(|entry| &entry.signature)
    }

    fn invoke(&self, method: &str, args: Vec<Value>) -> Result<Value, InvokeError> {
        let Some(entry) = self.methods.get(method) else {
            return Err(InvokeError::new(format!(
                "method \"{}\" is not registered",
                method
            )));
        };
        tracing::debug!(method = %method, args = args.len(), "invoking method");
        (entry.handler)(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sum_registry() -> MethodRegistry {
        MethodRegistry::new().register(
            "sum",
            Signature::new().required("a").required("b"),
            |args| {
                let a = args[0].as_i64().unwrap_or(0);
                let b = args[1].as_i64().unwrap_or(0);
                Ok(json!(a + b))
            },
        )
    }

    #[test]
    fn test_registry_empty() {
        let registry = MethodRegistry::new();
        assert_eq!(registry.method_count(), 0);
        assert!(!registry.has_method("anything"));
    }

    #[test]
    fn test_registry_default() {
        assert_eq!(MethodRegistry::default().method_count(), 0);
    }

    #[test]
    fn test_registry_register() {
        let registry = sum_registry();
        assert_eq!(registry.method_count(), 1);
        assert!(registry.has_method("sum"));
        assert!(!registry.has_method("difference"));
    }

    #[test]
    fn test_registry_get_methods() {
        let registry = MethodRegistry::new()
            .register("one", Signature::new(), |_| Ok(json!(1)))
            .register("two", Signature::new(), |_| Ok(json!(2)));

        let mut methods = registry.get_methods();
        methods.sort();
        assert_eq!(methods, vec!["one".to_string(), "two".to_string()]);
    }

    #[test]
    fn test_registry_signature_lookup() {
        let registry = sum_registry();
        let signature = registry.method_signature("sum").unwrap();
        assert_eq!(signature.param_count(), 2);
        assert_eq!(signature.required_count(), 2);
        assert!(registry.method_signature("missing").is_none());
    }

    #[test]
    fn test_registry_invoke() {
        let registry = sum_registry();
        let result = registry.invoke("sum", vec![json!(2), json!(3)]).unwrap();
        assert_eq!(result, json!(5));
    }

    #[test]
    fn test_registry_invoke_unregistered() {
        let registry = sum_registry();
        let error = registry.invoke("missing", vec![]).unwrap_err();
        assert!(error.message().contains("missing"));
    }

    #[test]
    fn test_registry_handler_failure() {
        let registry = MethodRegistry::new().register("fail", Signature::new(), |_| {
            Err(InvokeError::new("boom"))
        });
        let error = registry.invoke("fail", vec![]).unwrap_err();
        assert_eq!(error.message(), "boom");
    }

    #[test]
    fn test_registry_reregistration_replaces() {
        let registry = MethodRegistry::new()
            .register("m", Signature::new(), |_| Ok(json!(1)))
            .register("m", Signature::new(), |_| Ok(json!(2)));

        assert_eq!(registry.method_count(), 1);
        assert_eq!(registry.invoke("m", vec![]).unwrap(), json!(2));
    }

    #[test]
    fn test_registry_as_call_target() {
        let registry = sum_registry();
        let target: &dyn CallTarget = &registry;
        assert!(target.has_method("sum"));
        assert!(target.method_signature("sum").is_some());
    }
}
