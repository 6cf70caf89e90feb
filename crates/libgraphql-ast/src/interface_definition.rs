use crate::Named;
use crate::Type;
use crate::Typed;
use inherent::inherent;

/// An interface type definition (e.g. `interface Node { id: ID! }`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InterfaceDefinition {
    fields: Vec<InterfaceFieldDefinition>,
    name: String,
}
impl InterfaceDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            fields: vec![],
            name: name.into(),
        }
    }

    pub fn add_fields(&mut self, fields: impl IntoIterator<Item = InterfaceFieldDefinition>) {
        self.fields.extend(fields);
    }

    pub fn fields(&self) -> std::slice::Iter<'_, InterfaceFieldDefinition> {
        self.fields.iter()
    }
}
#[inherent]
impl Named for InterfaceDefinition {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InterfaceFieldDefinition {
    name: String,
    type_annotation: Type,
}
impl InterfaceFieldDefinition {
    pub fn new(name: impl Into<String>, type_annotation: impl Into<Type>) -> Self {
        Self {
            name: name.into(),
            type_annotation: type_annotation.into(),
        }
    }
}
#[inherent]
impl Named for InterfaceFieldDefinition {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
#[inherent]
impl Typed for InterfaceFieldDefinition {
    pub fn type_annotation(&self) -> &Type {
        &self.type_annotation
    }
}
