use serde_json::Value;

use super::Validate;
use crate::descriptor::FieldDescriptor;
use crate::error::{value_type_name, ErrorCode, Reporter, ValidationError};

/// Checks the element count, then maps every element through the item
/// validator, keeping order and length.
pub struct ArrayValidator {
    reporter: Reporter,
    min_items: Option<usize>,
    max_items: Option<usize>,
    item: Box<dyn Validate>,
}

impl ArrayValidator {
    pub(crate) fn new(desc: &FieldDescriptor, item: Box<dyn Validate>) -> Self {
        Self {
            reporter: Reporter::new(&desc.name, desc.message.clone()),
            min_items: desc.min_items,
            max_items: desc.max_items,
            item,
        }
    }
}

impl Validate for ArrayValidator {
    fn validate(&self, value: &Value) -> Result<Value, ValidationError> {
        if value.is_null() {
            return Ok(Value::Null);
        }

        let arr = value.as_array().ok_or_else(|| {
            self.reporter.fail(ErrorCode::NotArray, value, || {
                format!("Expected array, received {}", value_type_name(value))
            })
        })?;

        if let Some(min) = self.min_items {
            if arr.len() < min {
                return Err(self.reporter.fail(ErrorCode::ArrayTooFewItems, value, || {
                    format!("Array must have at least {} elements", min)
                }));
            }
        }

        if let Some(max) = self.max_items {
            if arr.len() > max {
                return Err(self.reporter.fail(ErrorCode::ArrayTooManyItems, value, || {
                    format!("Array must have at most {} elements", max)
                }));
            }
        }

        arr.iter()
            .map(|item| self.item.validate(item))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }
}
