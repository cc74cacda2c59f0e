//! Compiled validators, one per [`TypeTag`](crate::tag::TypeTag) plus the
//! required wrapper.
//!
//! Every validator passes `null` through untouched; presence is checked only
//! by [`RequiredValidator`].

use serde_json::Value;

use crate::error::ValidationError;

mod any;
mod array;
mod boolean;
mod number;
mod object;
mod required;
mod string;

pub use any::AnyValidator;
pub use array::ArrayValidator;
pub use boolean::BooleanValidator;
pub use number::NumberValidator;
pub use object::ObjectValidator;
pub use required::RequiredValidator;
pub use string::StringValidator;

/// Object-safe validation step: coerce and check one JSON value.
///
/// Implementations hold only data captured at compile time, so they are
/// shareable across threads and reusable for any number of calls.
pub trait Validate: Send + Sync {
    fn validate(&self, value: &Value) -> Result<Value, ValidationError>;
}
