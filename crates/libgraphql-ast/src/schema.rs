use crate::ObjectDefinition;

/// Root node of a type-system description: the query-root object type plus
/// every other object type.
///
/// Nothing prevents the query root from also appearing in
/// [`Schema::types`]; callers that build a `Schema` are expected to keep them
/// distinct.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Schema {
    query: ObjectDefinition,
    types: Vec<ObjectDefinition>,
}
impl Schema {
    pub fn new(query: ObjectDefinition) -> Self {
        Self {
            query,
            types: vec![],
        }
    }

    /// Append `types` after any previously added types.
    pub fn add_types(&mut self, types: impl IntoIterator<Item = ObjectDefinition>) {
        self.types.extend(types);
    }

    /// The object type that serves as the root for query operations.
    pub fn query(&self) -> &ObjectDefinition {
        &self.query
    }

    pub fn set_query(&mut self, query: ObjectDefinition) {
        self.query = query;
    }

    /// Every object type other than the query root, in the order they were
    /// added.
    pub fn types(&self) -> std::slice::Iter<'_, ObjectDefinition> {
        self.types.iter()
    }
}
