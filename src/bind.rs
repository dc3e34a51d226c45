//! Binding supplied parameters onto a declared signature.

use crate::traits::Signature;
use crate::types::Params;
use serde_json::{Map, Value};
use std::fmt;

/// Why supplied parameters do not fit a signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    /// More positional values than declared parameters.
    TooManyArguments { supplied: usize, declared: usize },
    /// Fewer positional values than required parameters.
    MissingArguments { supplied: usize, required: usize },
    /// A required parameter has no value under its name.
    MissingParameter(String),
    /// A supplied name matches no declared parameter.
    UnknownParameter(String),
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindError::TooManyArguments { supplied, declared } => {
                write!(f, "{} arguments supplied, {} declared", supplied, declared)
            }
            BindError::MissingArguments { supplied, required } => {
                write!(f, "{} arguments supplied, {} required", supplied, required)
            }
            BindError::MissingParameter(name) => {
                write!(f, "required parameter \"{}\" is missing", name)
            }
            BindError::UnknownParameter(name) => {
                write!(f, "parameter \"{}\" matches no declared parameter", name)
            }
        }
    }
}

impl std::error::Error for BindError {}

/// Produce the concrete argument list for one call.
///
/// Positional values are taken verbatim when their count falls inside the
/// `[required, declared]` window. Named values are matched to declared
/// parameters in declaration order; a required parameter without a value
/// fails the bind, an absent optional contributes nothing, and every
/// supplied name must correspond to a declared parameter. Absent params
/// bind like an empty positional list.
pub fn bind(signature: &Signature, params: &Params) -> Result<Vec<Value>, BindError> {
    match params {
        Params::Absent => bind_positional(signature, &[]),
        Params::Positional(values) => bind_positional(signature, values),
        Params::Named(map) => bind_named(signature, map),
    }
}

fn bind_positional(signature: &Signature, values: &[Value]) -> Result<Vec<Value>, BindError> {
    let supplied = values.len();
    let declared = signature.param_count();
    let required = signature.required_count();

    if supplied > declared {
        return Err(BindError::TooManyArguments { supplied, declared });
    }
    if supplied < required {
        return Err(BindError::MissingArguments { supplied, required });
    }

    Ok(values.to_vec())
}

fn bind_named(signature: &Signature, map: &Map<String, Value>) -> Result<Vec<Value>, BindError> {
    let mut args = Vec::with_capacity(signature.param_count());

    for param in signature.params() {
        match map.get(&param.name) {
            Some(value) => args.push(value.clone()),
            None if param.required => {
                return Err(BindError::MissingParameter(param.name.clone()));
            }
            None => {}
        }
    }

    // Consumption is tracked by key: any supplied name that did not match a
    // declared parameter fails the bind, even if its value happens to equal
    // one that was consumed.
    for key in map.keys() {
        if !signature.params().iter().any(|param| param.name == *key) {
            return Err(BindError::UnknownParameter(key.clone()));
        }
    }

    Ok(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn named(pairs: &[(&str, Value)]) -> Params {
        let mut map = Map::new();
        for (key, value) in pairs {
            map.insert(key.to_string(), value.clone());
        }
        Params::Named(map)
    }

    #[test]
    fn test_positional_exact_arity() {
        let signature = Signature::new().required("a").required("b");
        let params = Params::Positional(vec![json!(2), json!(3)]);
        assert_eq!(bind(&signature, &params), Ok(vec![json!(2), json!(3)]));
    }

    #[test]
    fn test_positional_too_few() {
        let signature = Signature::new().required("a").required("b");
        let params = Params::Positional(vec![json!(2)]);
        assert_eq!(
            bind(&signature, &params),
            Err(BindError::MissingArguments {
                supplied: 1,
                required: 2
            })
        );
    }

    #[test]
    fn test_positional_too_many() {
        let signature = Signature::new().required("a").required("b");
        let params = Params::Positional(vec![json!(1), json!(2), json!(3)]);
        assert_eq!(
            bind(&signature, &params),
            Err(BindError::TooManyArguments {
                supplied: 3,
                declared: 2
            })
        );
    }

    #[test]
    fn test_positional_optional_window() {
        let signature = Signature::new().required("a").optional("b");
        assert_eq!(
            bind(&signature, &Params::Positional(vec![json!(1)])),
            Ok(vec![json!(1)])
        );
        assert_eq!(
            bind(&signature, &Params::Positional(vec![json!(1), json!(2)])),
            Ok(vec![json!(1), json!(2)])
        );
    }

    #[test]
    fn test_positional_order_preserved() {
        let signature = Signature::new().required("a").required("b").required("c");
        let params = Params::Positional(vec![json!("x"), json!("y"), json!("z")]);
        assert_eq!(
            bind(&signature, &params),
            Ok(vec![json!("x"), json!("y"), json!("z")])
        );
    }

    #[test]
    fn test_absent_binds_as_empty() {
        assert_eq!(bind(&Signature::new(), &Params::Absent), Ok(vec![]));

        let signature = Signature::new().required("a");
        assert_eq!(
            bind(&signature, &Params::Absent),
            Err(BindError::MissingArguments {
                supplied: 0,
                required: 1
            })
        );
    }

    #[test]
    fn test_absent_with_only_optionals() {
        let signature = Signature::new().optional("a").optional("b");
        assert_eq!(bind(&signature, &Params::Absent), Ok(vec![]));
    }

    #[test]
    fn test_named_declaration_order() {
        let signature = Signature::new().required("a").required("b");
        let params = named(&[("b", json!(3)), ("a", json!(2))]);
        assert_eq!(bind(&signature, &params), Ok(vec![json!(2), json!(3)]));
    }

    #[test]
    fn test_named_missing_required() {
        let signature = Signature::new().required("a").required("b");
        let params = named(&[("a", json!(2))]);
        assert_eq!(
            bind(&signature, &params),
            Err(BindError::MissingParameter("b".to_string()))
        );
    }

    #[test]
    fn test_named_absent_optional_omitted() {
        let signature = Signature::new().required("a").optional("b");
        let params = named(&[("a", json!(2))]);
        assert_eq!(bind(&signature, &params), Ok(vec![json!(2)]));
    }

    #[test]
    fn test_named_unknown_parameter() {
        let signature = Signature::new().required("a").required("b");
        let params = named(&[("a", json!(1)), ("b", json!(2)), ("c", json!(3))]);
        assert_eq!(
            bind(&signature, &params),
            Err(BindError::UnknownParameter("c".to_string()))
        );
    }

    #[test]
    fn test_named_unknown_parameter_with_duplicate_value() {
        // "c" carries the same value as the consumed "a"; a value-based
        // unconsumed check would let it slip through.
        let signature = Signature::new().required("a").required("b");
        let params = named(&[("a", json!(1)), ("b", json!(2)), ("c", json!(1))]);
        assert_eq!(
            bind(&signature, &params),
            Err(BindError::UnknownParameter("c".to_string()))
        );
    }

    #[test]
    fn test_named_duplicate_values_across_declared_params() {
        let signature = Signature::new().required("a").required("b");
        let params = named(&[("a", json!(5)), ("b", json!(5))]);
        assert_eq!(bind(&signature, &params), Ok(vec![json!(5), json!(5)]));
    }

    #[test]
    fn test_named_empty_map_with_optionals() {
        let signature = Signature::new().optional("a");
        assert_eq!(bind(&signature, &named(&[])), Ok(vec![]));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            BindError::TooManyArguments {
                supplied: 3,
                declared: 2
            }
            .to_string(),
            "3 arguments supplied, 2 declared"
        );
        assert_eq!(
            BindError::MissingParameter("a".to_string()).to_string(),
            "required parameter \"a\" is missing"
        );
        assert_eq!(
            BindError::UnknownParameter("x".to_string()).to_string(),
            "parameter \"x\" matches no declared parameter"
        );
    }
}
