use crate::Definition;

/// Root node of a GraphQL request or of a type-system document: an ordered
/// list of [`Definition`]s.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Document {
    definitions: Vec<Definition>,
}
impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `definitions` after any previously added definitions.
    pub fn add_definitions(&mut self, definitions: impl IntoIterator<Item = Definition>) {
        self.definitions.extend(definitions);
    }

    /// The definitions of this document in the order they were added.
    pub fn definitions(&self) -> std::slice::Iter<'_, Definition> {
        self.definitions.iter()
    }

    /// Iterate over only the operations and fragments in this document.
    pub fn executable_definitions(&self) -> impl Iterator<Item = &Definition> {
        self.definitions.iter().filter(|def| def.is_executable())
    }

    /// Iterate over only the type-system definitions in this document.
    pub fn type_system_definitions(&self) -> impl Iterator<Item = &Definition> {
        self.definitions.iter().filter(|def| !def.is_executable())
    }
}
impl std::iter::FromIterator<Definition> for Document {
    fn from_iter<T: IntoIterator<Item = Definition>>(iter: T) -> Self {
        Self {
            definitions: iter.into_iter().collect(),
        }
    }
}
