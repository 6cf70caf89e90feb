use crate::Directive;
use crate::NamedType;
use crate::Selection;

/// An inline fragment (e.g. `... on User { id }` or `... @skip(if: $x) { id }`).
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InlineFragment {
    directives: Vec<Directive>,
    selections: Vec<Selection>,
    type_condition: Option<NamedType>,
}
impl InlineFragment {
    pub fn new() -> Self {
        Self::default()
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

    pub fn set_type_condition(&mut self, type_condition: NamedType) {
        self.type_condition = Some(type_condition);
    }

    pub fn type_condition(&self) -> Option<&NamedType> {
        self.type_condition.as_ref()
    }
}
