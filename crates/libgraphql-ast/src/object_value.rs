use crate::Named;
use crate::Value;
use inherent::inherent;

/// An object literal (e.g. `{ first: 10, after: $cursor }`).
///
/// This is a value, not a type: see
/// [`ObjectDefinition`](crate::ObjectDefinition) for object types.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectValue {
    fields: Vec<ObjectField>,
}
impl ObjectValue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `fields` after any previously added fields.
    pub fn add_fields(&mut self, fields: impl IntoIterator<Item = ObjectField>) {
        self.fields.extend(fields);
    }

    /// The fields of this literal in the order they were added.
    pub fn fields(&self) -> std::slice::Iter<'_, ObjectField> {
        self.fields.iter()
    }

    /// Look up the value of the first field named `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter()
            .find(|field| field.name == name)
            .map(|field| &field.value)
    }
}

/// A single `name: value` pair inside an [`ObjectValue`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectField {
    name: String,
    value: Value,
}
impl ObjectField {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}
#[inherent]
impl Named for ObjectField {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
