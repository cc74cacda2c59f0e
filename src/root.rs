use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::compiler::CompiledValidator;
use crate::descriptor::Fields;
use crate::error::{value_type_name, ErrorCode, ValidationError};

/// Named root groups (e.g. `body`, `query`, `params`), each a field map.
///
/// # Example
/// ```
/// use vldc::prelude::*;
///
/// let schema = RootSchema::new()
///     .group("body", Fields::new().field("name", "string-required"))
///     .group("query", Fields::new().field("page", "int"));
/// assert_eq!(schema.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RootSchema {
    groups: Vec<(String, Fields)>,
}

impl RootSchema {
    pub fn new() -> Self {
        Self { groups: vec![] }
    }

    /// Add a root group. A repeated name replaces the earlier group in place.
    pub fn group(mut self, name: impl Into<String>, fields: Fields) -> Self {
        let name = name.into();
        match self.groups.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = fields,
            None => self.groups.push((name, fields)),
        }
        self
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Fields)> {
        self.groups.iter().map(|(n, f)| (n.as_str(), f))
    }
}

impl<K: Into<String>> FromIterator<(K, Fields)> for RootSchema {
    fn from_iter<I: IntoIterator<Item = (K, Fields)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(RootSchema::new(), |schema, (name, fields)| schema.group(name, fields))
    }
}

/// Validator for a whole candidate, built by
/// [`compile_root`](crate::compile_root).
///
/// Every root group is a required object. Groups are validated in
/// declaration order and validation stops at the first failure.
#[derive(Debug)]
pub struct RootValidator {
    groups: Vec<(String, CompiledValidator)>,
}

impl RootValidator {
    pub(crate) fn new(groups: Vec<(String, CompiledValidator)>) -> Self {
        Self { groups }
    }

    /// Root group names in declaration order.
    pub fn groups(&self) -> Vec<&str> {
        self.groups.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Validate an owned candidate and return it with every root group
    /// replaced by its coerced value. Keys outside the root groups are kept.
    pub fn validate(&self, candidate: Value) -> Result<Value, ValidationError> {
        match candidate {
            Value::Object(mut map) => {
                self.validate_in_place(&mut map)?;
                Ok(Value::Object(map))
            }
            other => Err(ValidationError::new(
                ErrorCode::NotObject,
                "",
                format!("Expected object, received {}", value_type_name(&other)),
            )),
        }
    }

    /// Replace each root group of `candidate` with its coerced value.
    ///
    /// On failure, groups before the failing one have already been replaced.
    pub fn validate_in_place(&self, candidate: &mut Map<String, Value>) -> Result<(), ValidationError> {
        for (name, validator) in &self.groups {
            trace!(group = %name, "validating root group");
            let result = validator.validate(candidate.get(name).unwrap_or(&Value::Null));
            match result {
                Ok(out) => {
                    candidate.insert(name.clone(), out);
                }
                Err(err) => {
                    debug!(code = err.code.key(), field = %err.field, "validation failed");
                    return Err(err);
                }
            }
        }
        Ok(())
    }
}
