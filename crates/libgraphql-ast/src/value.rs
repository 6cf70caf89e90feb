use crate::Named;
use crate::ObjectValue;
use inherent::inherent;

/// A literal (or variable) value as written in an argument, a default value,
/// or an enum element.
///
/// Object literals nest: an [`ObjectValue`]'s fields each hold another
/// `Value`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Value {
    Bool(BoolValue),
    Enum(EnumValue),
    Float(FloatValue),
    Int(IntValue),
    Null(NullValue),
    Object(ObjectValue),
    String(StringValue),
    Variable(Variable),
}
impl Value {
    /// A short, human-readable name for the kind of this value.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "boolean",
            Self::Enum(_) => "enum",
            Self::Float(_) => "float",
            Self::Int(_) => "int",
            Self::Null(_) => "null",
            Self::Object(_) => "object",
            Self::String(_) => "string",
            Self::Variable(_) => "variable",
        }
    }

    pub fn as_object(&self) -> Option<&ObjectValue> {
        if let Self::Object(obj) = self {
            Some(obj)
        } else {
            None
        }
    }
}
impl std::convert::From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(BoolValue::new(value))
    }
}
impl std::convert::From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(FloatValue::new(value))
    }
}
impl std::convert::From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(IntValue::new(value))
    }
}
impl std::convert::From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(StringValue::new(value))
    }
}
impl std::convert::From<ObjectValue> for Value {
    fn from(value: ObjectValue) -> Self {
        Self::Object(value)
    }
}
impl std::convert::From<EnumValue> for Value {
    fn from(value: EnumValue) -> Self {
        Self::Enum(value)
    }
}
impl std::convert::From<Variable> for Value {
    fn from(value: Variable) -> Self {
        Self::Variable(value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct BoolValue {
    value: bool,
}
impl BoolValue {
    pub fn new(value: bool) -> Self {
        Self { value }
    }

    pub fn value(&self) -> bool {
        self.value
    }
}

/// A bare enum literal (e.g. `ADMIN`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumValue {
    name: String,
}
impl EnumValue {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
#[inherent]
impl Named for EnumValue {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FloatValue {
    value: f64,
}
impl FloatValue {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct IntValue {
    value: i64,
}
impl IntValue {
    pub fn new(value: i64) -> Self {
        Self { value }
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NullValue;
impl NullValue {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct StringValue {
    value: String,
}
impl StringValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }

    pub fn value(&self) -> &str {
        self.value.as_str()
    }
}

/// A reference to an operation variable (e.g. `$id`). The stored name does
/// not include the leading `$`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Variable {
    name: String,
}
impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
#[inherent]
impl Named for Variable {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
