use serde_json::Value;

use super::Validate;
use crate::descriptor::FieldDescriptor;
use crate::error::{value_type_name, ErrorCode, Reporter, ValidationError};
use crate::tag::TypeTag;

// ---------------------------------------------------------------------------
// Prefix parsing
// ---------------------------------------------------------------------------

/// Leading integer literal of `s` (after whitespace), ignoring the rest.
fn int_prefix(s: &str) -> Option<&str> {
    let s = s.trim_start();
    let b = s.as_bytes();
    let mut i = 0;
    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }
    let digits_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    (i > digits_start).then(|| &s[..i])
}

/// Longest leading decimal literal of `s` (after whitespace).
fn float_prefix(s: &str) -> Option<&str> {
    let s = s.trim_start();
    let b = s.as_bytes();
    let mut i = 0;
    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }
    let mut digits = 0;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
        digits += 1;
    }
    if i < b.len() && b[i] == b'.' {
        i += 1;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return None;
    }
    let mut end = i;
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            end = j;
        }
    }
    Some(&s[..end])
}

/// Exact JSON integer for a digits-only literal that fits `i64` or `u64`.
fn exact_int(lit: &str) -> Option<Value> {
    lit.parse::<i64>()
        .map(Value::from)
        .or_else(|_| lit.parse::<u64>().map(Value::from))
        .ok()
}

/// A coerced number. `n` drives the comparisons, `json` is what the
/// validator returns, so integers keep every digit.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Coerced {
    pub n: f64,
    pub json: Value,
}

impl Coerced {
    fn from_f64(n: f64, int: bool) -> Option<Self> {
        let n = if int { n.trunc() } else { n };
        n.is_finite().then(|| Self {
            n,
            json: number_value(n),
        })
    }
}

/// Coerce a JSON value to a finite number, truncating when `int` is set.
pub(crate) fn coerce_number(value: &Value, int: bool) -> Option<Coerced> {
    match value {
        Value::Number(n) if n.is_i64() || n.is_u64() => Some(Coerced {
            n: n.as_f64()?,
            json: Value::Number(n.clone()),
        }),
        Value::Number(n) => Coerced::from_f64(n.as_f64()?, int),
        Value::String(s) => {
            let lit = if int { int_prefix(s)? } else { float_prefix(s)? };
            let integral = !lit.contains(|c: char| matches!(c, '.' | 'e' | 'E'));
            if let Some(json) = exact_int(lit).filter(|_| integral) {
                return Some(Coerced {
                    n: lit.parse::<f64>().ok()?,
                    json,
                });
            }
            Coerced::from_f64(lit.parse::<f64>().ok()?, int)
        }
        _ => None,
    }
}

/// JSON form of a coerced number. Integral values become JSON integers.
pub(crate) fn number_value(n: f64) -> Value {
    if n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 {
        Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

/// Parses a number (integer-truncating for `int` fields) and checks, in
/// order: min value, max value, exact value. The first failing check wins.
pub struct NumberValidator {
    reporter: Reporter,
    int: bool,
    min_value: Option<f64>,
    max_value: Option<f64>,
    /// NaN when the configured value is not numeric, which never matches.
    value: Option<f64>,
}

impl NumberValidator {
    pub(crate) fn new(desc: &FieldDescriptor) -> Self {
        let int = desc.int || desc.ty == TypeTag::Integer;
        Self {
            reporter: Reporter::new(&desc.name, desc.message.clone()),
            int,
            min_value: desc.min_value,
            max_value: desc.max_value,
            value: desc
                .value
                .as_ref()
                .map(|v| coerce_number(v, int).map_or(f64::NAN, |c| c.n)),
        }
    }
}

impl Validate for NumberValidator {
    fn validate(&self, value: &Value) -> Result<Value, ValidationError> {
        if value.is_null() {
            return Ok(Value::Null);
        }

        let Coerced { n, json } = coerce_number(value, self.int).ok_or_else(|| {
            self.reporter.fail(ErrorCode::NotNumber, value, || {
                let expected = if self.int { "integer" } else { "number" };
                match value {
                    Value::String(s) => format!("Cannot coerce \"{}\" to {}", s, expected),
                    _ => format!("Expected {}, received {}", expected, value_type_name(value)),
                }
            })
        })?;

        if let Some(min) = self.min_value {
            if n < min {
                return Err(self.reporter.fail(ErrorCode::NumberTooSmall, value, || {
                    format!("Number must be at least {}", min)
                }));
            }
        }

        if let Some(max) = self.max_value {
            if n > max {
                return Err(self.reporter.fail(ErrorCode::NumberTooBig, value, || {
                    format!("Number must be at most {}", max)
                }));
            }
        }

        if let Some(expected) = self.value {
            if n != expected {
                return Err(self.reporter.fail(ErrorCode::NumberNotSame, value, || {
                    format!("Number must equal {}", expected)
                }));
            }
        }

        Ok(json)
    }
}
