use serde_json::Value;

use super::Validate;
use crate::error::{ErrorCode, Reporter, ValidationError};

/// Rejects `null`/missing input, then hands over to the inner validator.
///
/// The inner validator is compiled from the same descriptor with `required`
/// cleared, so presence is checked exactly once.
pub struct RequiredValidator {
    reporter: Reporter,
    inner: Box<dyn Validate>,
}

impl RequiredValidator {
    pub(crate) fn new(reporter: Reporter, inner: Box<dyn Validate>) -> Self {
        Self { reporter, inner }
    }
}

impl Validate for RequiredValidator {
    fn validate(&self, value: &Value) -> Result<Value, ValidationError> {
        if value.is_null() {
            return Err(self.reporter.fail(ErrorCode::RequireField, value, || {
                "Required field is missing or null".to_string()
            }));
        }
        self.inner.validate(value)
    }
}
