use serde_json::Value;

use super::Validate;
use crate::error::ValidationError;

/// Accepts any value, `null` included, and returns it unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyValidator;

impl Validate for AnyValidator {
    fn validate(&self, value: &Value) -> Result<Value, ValidationError> {
        Ok(value.clone())
    }
}
