use crate::Directive;
use crate::Named;
use inherent::inherent;

/// A `...FragmentName` spread. The name refers to a
/// [`FragmentDefinition`](crate::FragmentDefinition); it is not resolved here.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FragmentSpread {
    directives: Vec<Directive>,
    name: String,
}
impl FragmentSpread {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            directives: vec![],
            name: name.into(),
        }
    }

    pub fn add_directives(&mut self, directives: impl IntoIterator<Item = Directive>) {
        self.directives.extend(directives);
    }

    pub fn directives(&self) -> std::slice::Iter<'_, Directive> {
        self.directives.iter()
    }
}
#[inherent]
impl Named for FragmentSpread {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
