use std::fmt;

use serde_json::Value;
use tracing::{debug, warn};

use crate::descriptor::FieldDescriptor;
use crate::error::{CompileError, Reporter, ValidationError};
use crate::root::{RootSchema, RootValidator};
use crate::shorthand::{normalize_with, Shorthand};
use crate::tag::{AliasTable, TypeTag};
use crate::validators::{
    AnyValidator, ArrayValidator, BooleanValidator, NumberValidator, ObjectValidator,
    RequiredValidator, StringValidator, Validate,
};

/// Path segment used for array elements.
pub const ITEM_SEGMENT: &str = "<item>";

/// Join a parent path and a child key with a dot.
pub(crate) fn child_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

/// A validator tree compiled from one schema.
///
/// Immutable and `Send + Sync`; compile once, validate many times.
pub struct CompiledValidator {
    name: String,
    kind: TypeTag,
    required: bool,
    inner: Box<dyn Validate>,
}

impl CompiledValidator {
    /// Coerce and check `value`, returning the normalized result.
    pub fn validate(&self, value: &Value) -> Result<Value, ValidationError> {
        self.inner.validate(value)
    }

    /// Path of the root descriptor.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> TypeTag {
        self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }
}

impl Validate for CompiledValidator {
    fn validate(&self, value: &Value) -> Result<Value, ValidationError> {
        self.inner.validate(value)
    }
}

impl fmt::Debug for CompiledValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledValidator")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("required", &self.required)
            .finish_non_exhaustive()
    }
}

/// Turns shorthand schemas into validator trees.
///
/// The only configuration is the alias table used to resolve type names.
///
/// # Example
/// ```
/// use vldc::prelude::*;
///
/// let compiler = Compiler::new().alias("email", TypeTag::String);
/// let v = compiler.compile("email-required").unwrap();
/// assert!(v.validate(&serde_json::Value::Null).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    aliases: AliasTable,
}

impl Compiler {
    pub fn new() -> Self {
        Self {
            aliases: AliasTable::new(),
        }
    }

    /// Register an extra type name. Names are matched case-insensitively.
    pub fn alias(mut self, name: &str, tag: TypeTag) -> Self {
        self.aliases.insert(name, tag);
        self
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Normalize a shorthand with this compiler's alias table.
    pub fn normalize(&self, raw: &Shorthand, name: &str) -> Result<FieldDescriptor, CompileError> {
        normalize_with(raw, name, &self.aliases)
    }

    /// Compile a schema. A descriptor keeps its own name; other forms get an
    /// empty root path.
    pub fn compile(&self, schema: impl Into<Shorthand>) -> Result<CompiledValidator, CompileError> {
        self.compile_named("", &schema.into())
    }

    /// Compile a schema rooted at the path `name`.
    pub fn compile_named(
        &self,
        name: &str,
        schema: &Shorthand,
    ) -> Result<CompiledValidator, CompileError> {
        let desc = self.normalize(schema, name).map_err(rejected)?;
        self.finish(desc)
    }

    /// Compile one required object validator per root group.
    pub fn compile_root(&self, schema: &RootSchema) -> Result<RootValidator, CompileError> {
        let mut groups = Vec::with_capacity(schema.len());
        for (name, fields) in schema.iter() {
            let desc = FieldDescriptor::object()
                .named(name)
                .fields(fields.clone())
                .required();
            groups.push((name.to_string(), self.finish(desc)?));
        }
        Ok(RootValidator::new(groups))
    }

    fn finish(&self, desc: FieldDescriptor) -> Result<CompiledValidator, CompileError> {
        let name = desc.name.clone();
        let kind = desc.ty;
        let required = desc.required;
        let inner = self.build_descriptor(desc).map_err(rejected)?;
        Ok(CompiledValidator {
            name,
            kind,
            required,
            inner,
        })
    }

    fn build(&self, raw: &Shorthand, name: &str) -> Result<Box<dyn Validate>, CompileError> {
        let desc = self.normalize(raw, name)?;
        self.build_descriptor(desc)
    }

    fn build_descriptor(&self, desc: FieldDescriptor) -> Result<Box<dyn Validate>, CompileError> {
        debug!(
            field = %desc.name,
            kind = %desc.ty,
            required = desc.required,
            "compiling field"
        );

        if desc.required {
            let reporter = Reporter::new(&desc.name, desc.message.clone());
            let inner = self.build_kind(FieldDescriptor {
                required: false,
                ..desc
            })?;
            return Ok(Box::new(RequiredValidator::new(reporter, inner)));
        }
        self.build_kind(desc)
    }

    /// Dispatch on the type tag. `desc.required` is ignored here.
    fn build_kind(&self, desc: FieldDescriptor) -> Result<Box<dyn Validate>, CompileError> {
        let validator: Box<dyn Validate> = match desc.ty {
            TypeTag::Boolean => {
                if let Some(value) = desc.value.as_ref().filter(|v| !v.is_boolean()) {
                    return Err(CompileError::InvalidConstraint {
                        field: desc.name.clone(),
                        reason: format!("boolean value must be true or false, got {}", value),
                    });
                }
                Box::new(BooleanValidator::new(&desc))
            }
            TypeTag::Integer | TypeTag::Number => Box::new(NumberValidator::new(&desc)),
            TypeTag::String => Box::new(StringValidator::new(&desc)),
            TypeTag::Array => {
                let item_name = child_path(&desc.name, ITEM_SEGMENT);
                let item = match desc.items.as_deref() {
                    Some(items) => self.build(items, &item_name)?,
                    None => Box::new(AnyValidator),
                };
                Box::new(ArrayValidator::new(&desc, item))
            }
            TypeTag::Object => {
                let mut children = Vec::new();
                if let Some(fields) = &desc.fields {
                    for (key, schema) in fields.iter() {
                        let child = self.build(schema, &child_path(&desc.name, key))?;
                        children.push((key.to_string(), child));
                    }
                }
                Box::new(ObjectValidator::new(&desc, children))
            }
            TypeTag::Any => Box::new(AnyValidator),
        };
        Ok(validator)
    }
}

fn rejected(err: CompileError) -> CompileError {
    warn!(code = err.key(), error = %err, "schema rejected");
    err
}
