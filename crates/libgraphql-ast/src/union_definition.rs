use crate::Named;
use crate::Type;
use inherent::inherent;

/// A union type definition (e.g. `union SearchResult = User | Post`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UnionDefinition {
    members: Vec<Type>,
    name: String,
}
impl UnionDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            members: vec![],
            name: name.into(),
        }
    }

    pub fn add_types(&mut self, members: impl IntoIterator<Item = Type>) {
        self.members.extend(members);
    }

    /// The member types of this union in the order they were added.
    pub fn types(&self) -> std::slice::Iter<'_, Type> {
        self.members.iter()
    }
}
#[inherent]
impl Named for UnionDefinition {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
