use crate::Argument;
use crate::Named;
use inherent::inherent;

/// A directive annotation (e.g. `@include(if: $withFriends)`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Directive {
    arguments: Vec<Argument>,
    name: String,
}
impl Directive {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            arguments: vec![],
            name: name.into(),
        }
    }

    /// Append `arguments` after any previously added arguments.
    pub fn add_arguments(&mut self, arguments: impl IntoIterator<Item = Argument>) {
        self.arguments.extend(arguments);
    }

    /// The arguments passed to this directive, in the order they were added.
    pub fn arguments(&self) -> std::slice::Iter<'_, Argument> {
        self.arguments.iter()
    }
}
#[inherent]
impl Named for Directive {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
