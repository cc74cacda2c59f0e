use std::collections::HashMap;
use std::fmt;

/// The closed set of validator kinds a descriptor can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Boolean,
    Integer,
    Number,
    String,
    Array,
    Object,
    Any,
}

impl TypeTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Boolean => "boolean",
            TypeTag::Integer => "integer",
            TypeTag::Number => "number",
            TypeTag::String => "string",
            TypeTag::Array => "array",
            TypeTag::Object => "object",
            TypeTag::Any => "any",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const BUILTIN_ALIASES: &[(&str, TypeTag)] = &[
    ("boolean", TypeTag::Boolean),
    ("bool", TypeTag::Boolean),
    ("int", TypeTag::Integer),
    ("integer", TypeTag::Integer),
    ("number", TypeTag::Number),
    ("float", TypeTag::Number),
    ("double", TypeTag::Number),
    ("string", TypeTag::String),
    ("str", TypeTag::String),
    ("text", TypeTag::String),
    ("array", TypeTag::Array),
    ("list", TypeTag::Array),
    ("object", TypeTag::Object),
    ("map", TypeTag::Object),
    ("dict", TypeTag::Object),
    ("any", TypeTag::Any),
    ("mixed", TypeTag::Any),
    ("*", TypeTag::Any),
];

/// Case-insensitive lookup from type names to [`TypeTag`]s.
///
/// Starts with the built-in names and can be extended per compiler.
#[derive(Debug, Clone)]
pub struct AliasTable {
    entries: HashMap<String, TypeTag>,
}

impl AliasTable {
    pub fn new() -> Self {
        let entries = BUILTIN_ALIASES
            .iter()
            .map(|(name, tag)| (name.to_string(), *tag))
            .collect();
        Self { entries }
    }

    /// Register (or replace) an alias.
    pub fn insert(&mut self, name: &str, tag: TypeTag) {
        self.entries.insert(name.trim().to_ascii_lowercase(), tag);
    }

    pub fn resolve(&self, name: &str) -> Option<TypeTag> {
        self.entries.get(&name.trim().to_ascii_lowercase()).copied()
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::new()
    }
}
