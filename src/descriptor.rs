use serde_json::Value;

use crate::error::Message;
use crate::shorthand::Shorthand;
use crate::tag::TypeTag;

/// Canonical schema node describing one field.
///
/// Normally produced by [`normalize`](crate::shorthand::normalize), but it can
/// also be built directly with the fluent methods below and used as a
/// shorthand of its own.
///
/// # Example
/// ```
/// use vldc::prelude::*;
///
/// let name = FieldDescriptor::string().min_length(2).max_length(40).required();
/// let v = vldc::compile(name).unwrap();
/// assert!(v.validate(&serde_json::json!("Ann")).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub ty: TypeTag,
    /// Dotted path used in error reports. Filled in top-down while compiling.
    pub name: String,
    pub required: bool,
    /// Truncating integer coercion. Only read by number validators.
    pub int: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub min_items: Option<usize>,
    pub max_items: Option<usize>,
    /// Exact value the coerced input must equal.
    pub value: Option<Value>,
    #[cfg(feature = "regex")]
    pub regex: Option<regex_lite::Regex>,
    pub fields: Option<Fields>,
    pub items: Option<Box<Shorthand>>,
    pub message: Option<Message>,
}

impl FieldDescriptor {
    pub fn new(ty: TypeTag) -> Self {
        Self {
            ty,
            name: String::new(),
            required: false,
            int: ty == TypeTag::Integer,
            min_length: None,
            max_length: None,
            min_value: None,
            max_value: None,
            min_items: None,
            max_items: None,
            value: None,
            #[cfg(feature = "regex")]
            regex: None,
            fields: None,
            items: None,
            message: None,
        }
    }

    pub fn string() -> Self {
        Self::new(TypeTag::String)
    }

    pub fn number() -> Self {
        Self::new(TypeTag::Number)
    }

    pub fn integer() -> Self {
        Self::new(TypeTag::Integer)
    }

    pub fn boolean() -> Self {
        Self::new(TypeTag::Boolean)
    }

    pub fn array() -> Self {
        Self::new(TypeTag::Array)
    }

    pub fn object() -> Self {
        Self::new(TypeTag::Object)
    }

    pub fn any() -> Self {
        Self::new(TypeTag::Any)
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Reject `null`/missing values.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Truncate parsed numbers to integers.
    pub fn int(mut self) -> Self {
        self.int = true;
        self
    }

    /// Minimum string length in characters.
    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    /// Maximum string length in characters.
    pub fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    /// Minimum value (inclusive).
    pub fn min_value(mut self, val: f64) -> Self {
        self.min_value = Some(val);
        self
    }

    /// Maximum value (inclusive).
    pub fn max_value(mut self, val: f64) -> Self {
        self.max_value = Some(val);
        self
    }

    pub fn min_items(mut self, len: usize) -> Self {
        self.min_items = Some(len);
        self
    }

    pub fn max_items(mut self, len: usize) -> Self {
        self.max_items = Some(len);
        self
    }

    /// The coerced value must equal this one.
    ///
    /// The constraint is coerced like the input for strings and numbers.
    /// Boolean fields only accept `true` or `false` here; anything else is a
    /// [`CompileError::InvalidConstraint`](crate::error::CompileError::InvalidConstraint).
    pub fn value(mut self, val: impl Into<Value>) -> Self {
        self.value = Some(val.into());
        self
    }

    /// Must match the given regex.
    ///
    /// Requires the `regex` feature.
    #[cfg(feature = "regex")]
    pub fn regex(mut self, re: regex_lite::Regex) -> Self {
        self.regex = Some(re);
        self
    }

    /// Child schemas of an object.
    pub fn fields(mut self, fields: Fields) -> Self {
        self.fields = Some(fields);
        self
    }

    /// Schema applied to every element of an array.
    pub fn items(mut self, items: impl Into<Shorthand>) -> Self {
        self.items = Some(Box::new(items.into()));
        self
    }

    /// Replace every default message of this field with a fixed string.
    pub fn message(mut self, msg: impl Into<Message>) -> Self {
        self.message = Some(msg.into());
        self
    }

    /// Replace every default message of this field with one computed from
    /// the failing raw value.
    pub fn message_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> String + Send + Sync + 'static,
    {
        self.message = Some(Message::computed(f));
        self
    }
}

/// Ordered mapping from child name to child schema.
///
/// Declaration order is kept; inserting an existing name replaces it in place.
///
/// # Example
/// ```
/// use vldc::prelude::*;
///
/// let fields = Fields::new()
///     .field("name", "string-required")
///     .field("age", "int");
/// assert_eq!(fields.names(), vec!["name", "age"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Fields {
    entries: Vec<(String, Shorthand)>,
}

impl Fields {
    pub fn new() -> Self {
        Self { entries: vec![] }
    }

    /// Add a child schema. Returns self for chaining.
    pub fn field(mut self, name: impl Into<String>, schema: impl Into<Shorthand>) -> Self {
        self.insert(name, schema);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, schema: impl Into<Shorthand>) {
        let name = name.into();
        let schema = schema.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = schema,
            None => self.entries.push((name, schema)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Shorthand> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Shorthand)> {
        self.entries.iter().map(|(n, s)| (n.as_str(), s))
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }
}

impl<K, S> FromIterator<(K, S)> for Fields
where
    K: Into<String>,
    S: Into<Shorthand>,
{
    fn from_iter<I: IntoIterator<Item = (K, S)>>(iter: I) -> Self {
        let mut fields = Fields::new();
        for (name, schema) in iter {
            fields.insert(name, schema);
        }
        fields
    }
}
