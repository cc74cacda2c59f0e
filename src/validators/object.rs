use serde_json::{Map, Value};

use super::Validate;
use crate::descriptor::FieldDescriptor;
use crate::error::{value_type_name, ErrorCode, Reporter, ValidationError};

struct ObjectField {
    name: String,
    validator: Box<dyn Validate>,
}

/// Validates each declared child and builds a new object holding exactly
/// those keys. Undeclared input keys are dropped; missing ones become `null`.
pub struct ObjectValidator {
    reporter: Reporter,
    fields: Vec<ObjectField>,
}

impl ObjectValidator {
    pub(crate) fn new(desc: &FieldDescriptor, fields: Vec<(String, Box<dyn Validate>)>) -> Self {
        Self {
            reporter: Reporter::new(&desc.name, desc.message.clone()),
            fields: fields
                .into_iter()
                .map(|(name, validator)| ObjectField { name, validator })
                .collect(),
        }
    }
}

impl Validate for ObjectValidator {
    fn validate(&self, value: &Value) -> Result<Value, ValidationError> {
        if value.is_null() {
            return Ok(Value::Null);
        }

        let obj = value.as_object().ok_or_else(|| {
            self.reporter.fail(ErrorCode::NotObject, value, || {
                format!("Expected object, received {}", value_type_name(value))
            })
        })?;

        let mut result = Map::new();
        for field in &self.fields {
            let field_value = obj.get(&field.name).unwrap_or(&Value::Null);
            let out = field.validator.validate(field_value)?;
            result.insert(field.name.clone(), out);
        }
        Ok(Value::Object(result))
    }
}
