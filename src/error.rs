use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// Machine-readable code of a data-validation failure.
///
/// Every failure kind has exactly one code; [`key()`](ErrorCode::key) returns
/// the stable snake_case string used in serialized errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize),
    serde(rename_all = "snake_case")
)]
pub enum ErrorCode {
    RequireField,
    NotNumber,
    NumberTooSmall,
    NumberTooBig,
    NumberNotSame,
    StringTooShort,
    StringTooLong,
    StringNotSame,
    RegexMismatch,
    NotArray,
    ArrayTooFewItems,
    ArrayTooManyItems,
    NotObject,
    BooleanNotSame,
}

impl ErrorCode {
    /// Stable string key for this error code. Useful for error mapping.
    pub fn key(&self) -> &'static str {
        match self {
            ErrorCode::RequireField => "require_field",
            ErrorCode::NotNumber => "not_number",
            ErrorCode::NumberTooSmall => "number_too_small",
            ErrorCode::NumberTooBig => "number_too_big",
            ErrorCode::NumberNotSame => "number_not_same",
            ErrorCode::StringTooShort => "string_too_short",
            ErrorCode::StringTooLong => "string_too_long",
            ErrorCode::StringNotSame => "string_not_same",
            ErrorCode::RegexMismatch => "regex_mismatch",
            ErrorCode::NotArray => "not_array",
            ErrorCode::ArrayTooFewItems => "array_too_few_items",
            ErrorCode::ArrayTooManyItems => "array_too_many_items",
            ErrorCode::NotObject => "not_object",
            ErrorCode::BooleanNotSame => "boolean_not_same",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single data-validation failure.
///
/// Validation stops at the first failure, so one error describes exactly one
/// field. Serializes to a flat `{code, field, message}` object.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct ValidationError {
    pub code: ErrorCode,
    /// Dotted path of the failing field, e.g. `user.address.city` or `tags.<item>`.
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(code: ErrorCode, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            field: field.into(),
            message: message.into(),
        }
    }

    /// Flat JSON rendering with exactly the keys `code`, `field` and `message`.
    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "code": self.code.key(),
            "field": self.field,
            "message": self.message,
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.field.is_empty() {
            write!(f, "{}: ", self.field)?;
        }
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Schema-authoring fault raised while compiling.
///
/// Raised only by the compiler, never while validating data. A schema that
/// fails to compile is an authoring bug, not a bad request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// The type name is not in the alias table.
    UnsupportedType { type_name: String, field: String },
    /// An object triple was given something other than a field map.
    InvalidSubschema { field: String, reason: String },
    /// A constraint value that the field's type cannot use.
    InvalidConstraint { field: String, reason: String },
}

impl CompileError {
    pub fn key(&self) -> &'static str {
        match self {
            CompileError::UnsupportedType { .. } => "unsupported_type",
            CompileError::InvalidSubschema { .. } => "invalid_subschema",
            CompileError::InvalidConstraint { .. } => "invalid_constraint",
        }
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::UnsupportedType { type_name, field } => {
                write!(f, "unsupported type \"{}\"", type_name)?;
                if !field.is_empty() {
                    write!(f, " for field \"{}\"", field)?;
                }
                Ok(())
            }
            CompileError::InvalidSubschema { field, reason } => {
                write!(f, "invalid subschema for field \"{}\": {}", field, reason)
            }
            CompileError::InvalidConstraint { field, reason } => {
                write!(f, "invalid constraint for field \"{}\": {}", field, reason)
            }
        }
    }
}

impl std::error::Error for CompileError {}

/// Caller-supplied replacement for a default error message.
#[derive(Clone)]
pub enum Message {
    /// Used verbatim for every failure of the field.
    Fixed(String),
    /// Called with the failing raw value.
    Computed(Arc<dyn Fn(&Value) -> String + Send + Sync>),
}

impl Message {
    /// Build a message computed from the failing raw value.
    ///
    /// # Example
    /// ```
    /// use vldc::prelude::*;
    ///
    /// let msg = Message::computed(|v| format!("bad: {}", v));
    /// assert_eq!(msg.resolve(&serde_json::json!(3)), "bad: 3");
    /// ```
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&Value) -> String + Send + Sync + 'static,
    {
        Message::Computed(Arc::new(f))
    }

    pub fn resolve(&self, raw: &Value) -> String {
        match self {
            Message::Fixed(s) => s.clone(),
            Message::Computed(f) => f(raw),
        }
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Fixed(s) => f.debug_tuple("Fixed").field(s).finish(),
            Message::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl From<&str> for Message {
    fn from(s: &str) -> Self {
        Message::Fixed(s.to_string())
    }
}

impl From<String> for Message {
    fn from(s: String) -> Self {
        Message::Fixed(s)
    }
}

/// Error-raising context captured from a descriptor at compile time.
///
/// Holds only the field path and the optional message override, so compiled
/// validators never need the full descriptor.
#[derive(Debug, Clone)]
pub(crate) struct Reporter {
    field: String,
    message: Option<Message>,
}

impl Reporter {
    pub(crate) fn new(field: impl Into<String>, message: Option<Message>) -> Self {
        Self {
            field: field.into(),
            message,
        }
    }

    /// Build the error for a failure on `raw`, resolving the override if any.
    pub(crate) fn fail<F>(&self, code: ErrorCode, raw: &Value, default: F) -> ValidationError
    where
        F: FnOnce() -> String,
    {
        let message = match &self.message {
            Some(m) => m.resolve(raw),
            None => default(),
        };
        ValidationError::new(code, self.field.clone(), message)
    }
}

/// Returns the JSON type name for a value.
#[doc(hidden)]
pub fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
