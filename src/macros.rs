/// Build a [`Fields`](crate::descriptor::Fields) map from `name => schema` pairs.
///
/// Schemas can be anything convertible into a
/// [`Shorthand`](crate::shorthand::Shorthand), including another `fields!`.
///
/// # Example
///
/// ```
/// use vldc::prelude::*;
///
/// let user = vldc::fields! {
///     "name" => "string-required",
///     "age" => "int",
///     "address" => vldc::fields! {
///         "city" => FieldDescriptor::string().max_length(80),
///     },
/// };
/// assert_eq!(user.names(), vec!["name", "age", "address"]);
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::descriptor::Fields::new()
    };
    ($($name:expr => $schema:expr),+ $(,)?) => {
        $crate::descriptor::Fields::new()$(.field($name, $schema))+
    };
}

/// Build a [`RootSchema`](crate::root::RootSchema) from `group => { fields }`.
///
/// # Example
///
/// ```
/// use vldc::prelude::*;
///
/// let schema = vldc::root! {
///     "body" => { "name" => "string-required" },
///     "query" => { "page" => "int" },
/// };
/// let v = vldc::compile_root(&schema).unwrap();
/// assert_eq!(v.groups(), vec!["body", "query"]);
/// ```
#[macro_export]
macro_rules! root {
    ($($group:expr => { $($body:tt)* }),+ $(,)?) => {
        $crate::root::RootSchema::new()$(.group($group, $crate::fields! { $($body)* }))+
    };
}
