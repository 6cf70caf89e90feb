use crate::Named;
use crate::NamedType;
use crate::ObjectFieldDefinition;
use inherent::inherent;

/// An object type definition (e.g. `type User implements Node { ... }`).
///
/// This model records at most one implemented interface.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectDefinition {
    fields: Vec<ObjectFieldDefinition>,
    implements: Option<NamedType>,
    name: String,
}
impl ObjectDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            fields: vec![],
            implements: None,
            name: name.into(),
        }
    }

    pub fn add_fields(&mut self, fields: impl IntoIterator<Item = ObjectFieldDefinition>) {
        self.fields.extend(fields);
    }

    /// The field definitions of this type in the order they were added.
    pub fn fields(&self) -> std::slice::Iter<'_, ObjectFieldDefinition> {
        self.fields.iter()
    }

    pub fn has_implements(&self) -> bool {
        self.implements.is_some()
    }

    /// The interface this type declares that it implements, if any.
    pub fn implements(&self) -> Option<&NamedType> {
        self.implements.as_ref()
    }

    pub fn set_implements(&mut self, interface: NamedType) {
        self.implements = Some(interface);
    }
}
#[inherent]
impl Named for ObjectDefinition {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
