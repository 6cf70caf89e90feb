use crate::Named;
use crate::Type;
use crate::Typed;
use inherent::inherent;

/// An input object type definition (e.g. `input UserFilter { role: Role }`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputDefinition {
    fields: Vec<InputFieldDefinition>,
    name: String,
}
impl InputDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            fields: vec![],
            name: name.into(),
        }
    }

    pub fn add_fields(&mut self, fields: impl IntoIterator<Item = InputFieldDefinition>) {
        self.fields.extend(fields);
    }

    pub fn fields(&self) -> std::slice::Iter<'_, InputFieldDefinition> {
        self.fields.iter()
    }
}
#[inherent]
impl Named for InputDefinition {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputFieldDefinition {
    name: String,
    type_annotation: Type,
}
impl InputFieldDefinition {
    pub fn new(name: impl Into<String>, type_annotation: impl Into<Type>) -> Self {
        Self {
            name: name.into(),
            type_annotation: type_annotation.into(),
        }
    }
}
#[inherent]
impl Named for InputFieldDefinition {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
#[inherent]
impl Typed for InputFieldDefinition {
    pub fn type_annotation(&self) -> &Type {
        &self.type_annotation
    }
}
