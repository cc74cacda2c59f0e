use crate::descriptor::{FieldDescriptor, Fields};
use crate::error::CompileError;
use crate::tag::{AliasTable, TypeTag};

/// Suffix that marks a type string as required, e.g. `"string-required"`.
pub const REQUIRED_SUFFIX: &str = "-required";

/// Type position of a triple: either a tag or a type name to look up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    Tag(TypeTag),
    Name(String),
}

impl From<TypeTag> for TypeRef {
    fn from(tag: TypeTag) -> Self {
        TypeRef::Tag(tag)
    }
}

impl From<&str> for TypeRef {
    fn from(name: &str) -> Self {
        TypeRef::Name(name.to_string())
    }
}

impl From<String> for TypeRef {
    fn from(name: String) -> Self {
        TypeRef::Name(name)
    }
}

/// Any of the compact forms a field schema can be written in.
///
/// # Example
/// ```
/// use vldc::prelude::*;
///
/// let forms: Vec<Shorthand> = vec![
///     TypeTag::String.into(),
///     "int-required".into(),
///     Shorthand::triple_with(TypeTag::Array, true, "string"),
///     Fields::new().field("city", "string").into(),
///     FieldDescriptor::number().min_value(0.0).into(),
/// ];
/// for form in &forms {
///     assert!(vldc::normalize(form, "f").is_ok());
/// }
/// ```
#[derive(Debug, Clone)]
pub enum Shorthand {
    /// Bare type tag.
    Tag(TypeTag),
    /// Type name, optionally ending in [`REQUIRED_SUFFIX`].
    Name(String),
    /// `[type, required, sub]`. `sub` is the field map of an object or the
    /// item schema of an array, and is ignored for scalar types.
    Triple {
        ty: TypeRef,
        required: bool,
        sub: Option<Box<Shorthand>>,
    },
    /// Nested field map; an optional object with these children.
    Fields(Fields),
    /// Already canonical.
    Descriptor(FieldDescriptor),
}

impl Shorthand {
    /// `[ty, required]` triple without a subschema.
    pub fn triple(ty: impl Into<TypeRef>, required: bool) -> Self {
        Shorthand::Triple {
            ty: ty.into(),
            required,
            sub: None,
        }
    }

    /// `[ty, required, sub]` triple.
    pub fn triple_with(ty: impl Into<TypeRef>, required: bool, sub: impl Into<Shorthand>) -> Self {
        Shorthand::Triple {
            ty: ty.into(),
            required,
            sub: Some(Box::new(sub.into())),
        }
    }
}

impl From<TypeTag> for Shorthand {
    fn from(tag: TypeTag) -> Self {
        Shorthand::Tag(tag)
    }
}

impl From<&str> for Shorthand {
    fn from(name: &str) -> Self {
        Shorthand::Name(name.to_string())
    }
}

impl From<String> for Shorthand {
    fn from(name: String) -> Self {
        Shorthand::Name(name)
    }
}

impl From<Fields> for Shorthand {
    fn from(fields: Fields) -> Self {
        Shorthand::Fields(fields)
    }
}

impl From<FieldDescriptor> for Shorthand {
    fn from(desc: FieldDescriptor) -> Self {
        Shorthand::Descriptor(desc)
    }
}

/// Normalize with the built-in alias table. See [`normalize_with`].
pub fn normalize(raw: &Shorthand, name: &str) -> Result<FieldDescriptor, CompileError> {
    normalize_with(raw, name, &AliasTable::new())
}

/// Turn any shorthand into a fresh canonical descriptor named `name`.
///
/// A full descriptor keeps its own name when `name` is empty. The input is
/// never modified, so one shorthand can be shared by several compiled trees.
pub fn normalize_with(
    raw: &Shorthand,
    name: &str,
    aliases: &AliasTable,
) -> Result<FieldDescriptor, CompileError> {
    match raw {
        Shorthand::Tag(tag) => Ok(FieldDescriptor::new(*tag).named(name)),
        Shorthand::Name(type_name) => {
            let (tag, required) = resolve(&TypeRef::Name(type_name.clone()), name, aliases)?;
            let mut desc = FieldDescriptor::new(tag).named(name);
            desc.required = required;
            Ok(desc)
        }
        Shorthand::Triple { ty, required, sub } => {
            let (tag, suffixed) = resolve(ty, name, aliases)?;
            let mut desc = FieldDescriptor::new(tag).named(name);
            desc.required = *required || suffixed;
            match (tag, sub.as_deref()) {
                (TypeTag::Object, Some(Shorthand::Fields(fields))) => {
                    desc.fields = Some(fields.clone());
                }
                (TypeTag::Object, Some(other)) => {
                    return Err(CompileError::InvalidSubschema {
                        field: name.to_string(),
                        reason: format!("object triple expects a field map, got {}", kind_of(other)),
                    });
                }
                (TypeTag::Array, Some(items)) => {
                    desc.items = Some(Box::new(items.clone()));
                }
                _ => {}
            }
            Ok(desc)
        }
        Shorthand::Fields(fields) => {
            Ok(FieldDescriptor::object().named(name).fields(fields.clone()))
        }
        Shorthand::Descriptor(desc) => {
            let mut desc = desc.clone();
            if !name.is_empty() {
                desc.name = name.to_string();
            }
            Ok(desc)
        }
    }
}

/// Resolve a type reference to its tag, reporting whether the name carried
/// the required suffix.
fn resolve(ty: &TypeRef, field: &str, aliases: &AliasTable) -> Result<(TypeTag, bool), CompileError> {
    match ty {
        TypeRef::Tag(tag) => Ok((*tag, false)),
        TypeRef::Name(type_name) => {
            let (base, required) = match type_name.strip_suffix(REQUIRED_SUFFIX) {
                Some(base) => (base, true),
                None => (type_name.as_str(), false),
            };
            aliases
                .resolve(base)
                .map(|tag| (tag, required))
                .ok_or_else(|| CompileError::UnsupportedType {
                    type_name: type_name.clone(),
                    field: field.to_string(),
                })
        }
    }
}

fn kind_of(raw: &Shorthand) -> &'static str {
    match raw {
        Shorthand::Tag(_) => "a type tag",
        Shorthand::Name(_) => "a type name",
        Shorthand::Triple { .. } => "a triple",
        Shorthand::Fields(_) => "a field map",
        Shorthand::Descriptor(_) => "a descriptor",
    }
}
