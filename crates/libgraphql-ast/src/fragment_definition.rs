use crate::Directive;
use crate::Named;
use crate::NamedType;
use crate::Selection;
use inherent::inherent;

/// A named fragment (e.g. `fragment UserParts on User { id name }`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FragmentDefinition {
    directives: Vec<Directive>,
    name: String,
    selections: Vec<Selection>,
    type_condition: NamedType,
}
impl FragmentDefinition {
    pub fn new(name: impl Into<String>, type_condition: NamedType) -> Self {
        Self {
            directives: vec![],
            name: name.into(),
            selections: vec![],
            type_condition,
        }
    }

    pub fn add_directives(&mut self, directives: impl IntoIterator<Item = Directive>) {
        self.directives.extend(directives);
    }

    pub fn add_selections(&mut self, selections: impl IntoIterator<Item = Selection>) {
        self.selections.extend(selections);
    }

    pub fn directives(&self) -> std::slice::Iter<'_, Directive> {
        self.directives.iter()
    }

    pub fn selections(&self) -> std::slice::Iter<'_, Selection> {
        self.selections.iter()
    }

    /// The type named after `on` in this fragment's definition.
    pub fn type_condition(&self) -> &NamedType {
        &self.type_condition
    }
}
#[inherent]
impl Named for FragmentDefinition {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
