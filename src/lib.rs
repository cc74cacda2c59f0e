//! # vldc — compile compact schemas into coercing validators
//!
//! `vldc` takes a schema written in a terse shorthand (type names such as
//! `"int"`, a `-required` suffix, `[type, required, sub]` triples, nested
//! field maps or full descriptors) and compiles it once into a tree of
//! validators. Applying the tree to a `serde_json::Value` coerces and checks
//! it, returning either the normalized value or the first
//! [`ValidationError`](error::ValidationError).
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use vldc::prelude::*;
//!
//! let schema = vldc::root! {
//!     "user" => { "name" => "string-required", "age" => "int" },
//! };
//! let validator = vldc::compile_root(&schema).unwrap();
//!
//! let out = validator.validate(json!({"user": {"name": "Ann", "extra": 1}})).unwrap();
//! assert_eq!(out, json!({"user": {"name": "Ann", "age": null}}));
//!
//! let err = validator.validate(json!({"user": {"age": "x"}})).unwrap_err();
//! assert_eq!(err.code, ErrorCode::RequireField);
//! assert_eq!(err.field, "user.name");
//! ```
//!
//! Schemas that cannot be compiled (for instance an unknown type name) fail
//! with a [`CompileError`](error::CompileError) instead, which is never
//! produced while validating data.

pub mod compiler;
pub mod descriptor;
pub mod error;
mod macros;
pub mod root;
pub mod shorthand;
pub mod tag;
pub mod validators;

// Re-export serde_json for use in macros and by callers building candidates
#[doc(hidden)]
pub use serde_json;

// Re-export regex_lite when the `regex` feature is enabled
#[cfg(feature = "regex")]
pub use regex_lite;

// ---------------------------------------------------------------------------
// Convenience entry points (built-in alias table)
// ---------------------------------------------------------------------------

/// Compile a single schema with the built-in type names.
///
/// ```
/// use vldc::prelude::*;
///
/// let v = vldc::compile(FieldDescriptor::string().min_length(2)).unwrap();
/// assert!(v.validate(&serde_json::json!("a")).is_err());
/// ```
pub fn compile(
    schema: impl Into<shorthand::Shorthand>,
) -> Result<compiler::CompiledValidator, error::CompileError> {
    compiler::Compiler::new().compile(schema)
}

/// Compile a root schema: one required object validator per root group.
pub fn compile_root(
    schema: &root::RootSchema,
) -> Result<root::RootValidator, error::CompileError> {
    compiler::Compiler::new().compile_root(schema)
}

/// Normalize a shorthand into a descriptor named `name`.
pub fn normalize(
    raw: &shorthand::Shorthand,
    name: &str,
) -> Result<descriptor::FieldDescriptor, error::CompileError> {
    shorthand::normalize(raw, name)
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Common imports for working with `vldc`.
pub mod prelude {
    pub use crate::compiler::{CompiledValidator, Compiler};
    pub use crate::descriptor::{FieldDescriptor, Fields};
    pub use crate::error::{CompileError, ErrorCode, Message, ValidationError};
    pub use crate::root::{RootSchema, RootValidator};
    pub use crate::shorthand::{Shorthand, TypeRef};
    pub use crate::tag::TypeTag;
    pub use crate::validators::Validate;
}
