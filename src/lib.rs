//! # alder-rpc
//!
//! A strict JSON-RPC 2.0 request processor: text in, text out.
//!
//! ## Features
//!
//! - **Complete JSON-RPC 2.0 request handling** - single requests, batches,
//!   and notifications with the standard error taxonomy
//! - **Strict validation** - member whitelist, exact version literal, and
//!   absent-vs-null distinction for `id` and `params`
//! - **Signature-aware parameter binding** - positional and named argument
//!   binding against each method's declared parameter list
//! - **Pluggable call target** - dispatch against anything implementing
//!   [`CallTarget`]; [`MethodRegistry`] is the built-in registration table
//! - **Transport-agnostic** - the processor never touches sockets or
//!   headers; an empty output string means "transmit nothing"
//!
//! ## Quick Start
//!
//! ```rust
//! use alder_rpc::{MethodRegistry, Processor, Signature};
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
//!
//! let processor = Processor::new(registry);
//! let output = processor.process(r#"{"jsonrpc":"2.0","method":"sum","params":[2,3],"id":1}"#);
//! assert_eq!(output, r#"{"jsonrpc":"2.0","result":5,"id":1}"#);
//! ```

// Module declarations
pub mod bind;
pub mod processor;
pub mod registry;
pub mod traits;
pub mod types;
pub mod validate;

// Re-export all core types
pub use types::*;

// Re-export all traits
pub use traits::*;

// Re-export registry
pub use registry::*;

// Re-export processor
pub use processor::*;

// Re-export validation and binding entry points
pub use bind::{BindError, bind};
pub use validate::{ValidateError, validate};
