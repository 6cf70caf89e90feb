use crate::Type;
use crate::Value;

/// Implemented by every node that carries a name.
///
/// Node types implement this with `#[inherent]`, so `node.name()` works
/// without importing the trait.
pub trait Named {
    fn name(&self) -> &str;
}

/// Implemented by every node that declares a [`Type`] (variables, field
/// definitions, argument definitions, and input fields).
pub trait Typed {
    fn type_annotation(&self) -> &Type;
}

/// Implemented by nodes that may declare a default [`Value`].
pub trait DefaultValued {
    fn default_value(&self) -> Option<&Value>;

    fn has_default_value(&self) -> bool {
        self.default_value().is_some()
    }
}
