use crate::DefaultValued;
use crate::Named;
use crate::Type;
use crate::Typed;
use crate::Value;
use inherent::inherent;

/// A variable declared by an operation (e.g. `$first: Int = 10`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct VariableDefinition {
    default_value: Option<Value>,
    name: String,
    type_annotation: Type,
}
impl VariableDefinition {
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
impl Named for VariableDefinition {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
#[inherent]
impl Typed for VariableDefinition {
    pub fn type_annotation(&self) -> &Type {
        &self.type_annotation
    }
}
#[inherent]
impl DefaultValued for VariableDefinition {
    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn has_default_value(&self) -> bool;
}
