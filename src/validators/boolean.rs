use serde_json::Value;

use super::Validate;
use crate::descriptor::FieldDescriptor;
use crate::error::{ErrorCode, Reporter, ValidationError};

/// Truthiness: `false`, `0`, `""` and `null` are false, everything else is true.
pub(crate) fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Coerces by truthiness and checks the exact value, if configured.
///
/// The compiler only accepts a JSON boolean as the exact value.
pub struct BooleanValidator {
    reporter: Reporter,
    value: Option<bool>,
}

impl BooleanValidator {
    pub(crate) fn new(desc: &FieldDescriptor) -> Self {
        Self {
            reporter: Reporter::new(&desc.name, desc.message.clone()),
            value: desc.value.as_ref().and_then(Value::as_bool),
        }
    }
}

impl Validate for BooleanValidator {
    fn validate(&self, value: &Value) -> Result<Value, ValidationError> {
        if value.is_null() {
            return Ok(Value::Null);
        }

        let b = truthy(value);
        if let Some(expected) = self.value {
            if b != expected {
                return Err(self.reporter.fail(ErrorCode::BooleanNotSame, value, || {
                    format!("Boolean must be {}", expected)
                }));
            }
        }
        Ok(Value::Bool(b))
    }
}
