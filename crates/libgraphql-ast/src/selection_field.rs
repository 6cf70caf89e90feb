use crate::Argument;
use crate::Directive;
use crate::Named;
use crate::Selection;
use inherent::inherent;

/// A field selection, optionally aliased, with arguments, directives, and a
/// (possibly empty) nested selection set.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SelectionField {
    alias: Option<String>,
    arguments: Vec<Argument>,
    directives: Vec<Directive>,
    name: String,
    selections: Vec<Selection>,
}
impl SelectionField {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            alias: None,
            arguments: vec![],
            directives: vec![],
            name: name.into(),
            selections: vec![],
        }
    }

    pub fn add_arguments(&mut self, arguments: impl IntoIterator<Item = Argument>) {
        self.arguments.extend(arguments);
    }

    pub fn add_directives(&mut self, directives: impl IntoIterator<Item = Directive>) {
        self.directives.extend(directives);
    }

    pub fn add_selections(&mut self, selections: impl IntoIterator<Item = Selection>) {
        self.selections.extend(selections);
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn arguments(&self) -> std::slice::Iter<'_, Argument> {
        self.arguments.iter()
    }

    pub fn directives(&self) -> std::slice::Iter<'_, Directive> {
        self.directives.iter()
    }

    pub fn has_alias(&self) -> bool {
        self.alias.is_some()
    }

    /// The key this field's result is stored under: the alias if one was
    /// given, otherwise the field name.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(self.name.as_str())
    }

    pub fn selections(&self) -> std::slice::Iter<'_, Selection> {
        self.selections.iter()
    }

    pub fn set_alias(&mut self, alias: impl Into<String>) {
        self.alias = Some(alias.into());
    }
}
#[inherent]
impl Named for SelectionField {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
