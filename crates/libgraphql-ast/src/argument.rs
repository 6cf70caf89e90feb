use crate::Named;
use crate::Value;
use inherent::inherent;

/// A `name: value` argument passed to a field or directive.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Argument {
    name: String,
    value: Value,
}
impl Argument {
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
impl Named for Argument {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
