use crate::Named;
use crate::Value;
use inherent::inherent;

/// An enum type definition (e.g. `enum Role { ADMIN USER }`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumDefinition {
    elements: Vec<EnumElementDefinition>,
    name: String,
}
impl EnumDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            elements: vec![],
            name: name.into(),
        }
    }

    pub fn add_elements(&mut self, elements: impl IntoIterator<Item = EnumElementDefinition>) {
        self.elements.extend(elements);
    }

    pub fn elements(&self) -> std::slice::Iter<'_, EnumElementDefinition> {
        self.elements.iter()
    }
}
#[inherent]
impl Named for EnumDefinition {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// One member of an [`EnumDefinition`], paired with the [`Value`] it stands
/// for.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumElementDefinition {
    name: String,
    value: Value,
}
impl EnumElementDefinition {
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
impl Named for EnumElementDefinition {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
