use serde_json::Value;

use super::number::number_value;
use super::Validate;
use crate::descriptor::FieldDescriptor;
use crate::error::{ErrorCode, Reporter, ValidationError};

/// String conversion applied before any check.
///
/// Strings pass through, numbers and booleans use their JSON text and
/// containers are rendered as compact JSON. Integral floats drop the
/// fraction, so `1.0` becomes `"1"`.
pub(crate) fn to_js_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => number_value(f).to_string(),
            _ => n.to_string(),
        },
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Coerces to a string and checks, in order: min length, max length, exact
/// value, regex. The first failing check wins.
pub struct StringValidator {
    reporter: Reporter,
    min_length: Option<usize>,
    max_length: Option<usize>,
    value: Option<String>,
    #[cfg(feature = "regex")]
    regex: Option<regex_lite::Regex>,
}

impl StringValidator {
    pub(crate) fn new(desc: &FieldDescriptor) -> Self {
        Self {
            reporter: Reporter::new(&desc.name, desc.message.clone()),
            min_length: desc.min_length,
            max_length: desc.max_length,
            value: desc.value.as_ref().map(to_js_string),
            #[cfg(feature = "regex")]
            regex: desc.regex.clone(),
        }
    }
}

impl Validate for StringValidator {
    fn validate(&self, value: &Value) -> Result<Value, ValidationError> {
        if value.is_null() {
            return Ok(Value::Null);
        }

        let s = to_js_string(value);
        let len = s.chars().count();

        if let Some(min) = self.min_length {
            if len < min {
                return Err(self.reporter.fail(ErrorCode::StringTooShort, value, || {
                    format!("String must be at least {} characters", min)
                }));
            }
        }

        if let Some(max) = self.max_length {
            if len > max {
                return Err(self.reporter.fail(ErrorCode::StringTooLong, value, || {
                    format!("String must be at most {} characters", max)
                }));
            }
        }

        if let Some(expected) = &self.value {
            if s != *expected {
                return Err(self.reporter.fail(ErrorCode::StringNotSame, value, || {
                    format!("String must equal \"{}\"", expected)
                }));
            }
        }

        #[cfg(feature = "regex")]
        {
            if let Some(re) = &self.regex {
                if !re.is_match(&s) {
                    return Err(self.reporter.fail(ErrorCode::RegexMismatch, value, || {
                        "String does not match pattern".to_string()
                    }));
                }
            }
        }

        Ok(Value::String(s))
    }
}
