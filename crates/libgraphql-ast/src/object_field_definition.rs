use crate::DefaultValued;
use crate::Named;
use crate::Type;
use crate::Typed;
use crate::Value;
use inherent::inherent;

/// A field declared on an [`ObjectDefinition`](crate::ObjectDefinition).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectFieldDefinition {
    arguments: Vec<ObjectFieldArgumentDefinition>,
    name: String,
    type_annotation: Type,
}
impl ObjectFieldDefinition {
    pub fn new(name: impl Into<String>, type_annotation: impl Into<Type>) -> Self {
        Self {
            arguments: vec![],
            name: name.into(),
            type_annotation: type_annotation.into(),
        }
    }

    pub fn add_arguments(
        &mut self,
        arguments: impl IntoIterator<Item = ObjectFieldArgumentDefinition>,
    ) {
        self.arguments.extend(arguments);
    }

    /// The argument definitions of this field in the order they were added.
    pub fn arguments(&self) -> std::slice::Iter<'_, ObjectFieldArgumentDefinition> {
        self.arguments.iter()
    }
}
#[inherent]
impl Named for ObjectFieldDefinition {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
#[inherent]
impl Typed for ObjectFieldDefinition {
    pub fn type_annotation(&self) -> &Type {
        &self.type_annotation
    }
}

/// An argument declared on an [`ObjectFieldDefinition`]
/// (e.g. `first: Int = 10`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectFieldArgumentDefinition {
    default_value: Option<Value>,
    name: String,
    type_annotation: Type,
}
impl ObjectFieldArgumentDefinition {
    pub fn new(name: impl Into<String>, type_annotation: impl Into<Type>) -> Self {
        Self {
            default_value: None,
            name: name.into(),
            type_annotation: type_annotation.into(),
        }
    }

    pub fn set_default_value(&mut self, value: impl Into<Value>) {
        self.default_value = Some(value.into());
    }
}
#[inherent]
impl Named for ObjectFieldArgumentDefinition {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
#[inherent]
impl Typed for ObjectFieldArgumentDefinition {
    pub fn type_annotation(&self) -> &Type {
        &self.type_annotation
    }
}
#[inherent]
impl DefaultValued for ObjectFieldArgumentDefinition {
    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn has_default_value(&self) -> bool;
}
