use crate::EnumDefinition;
use crate::FragmentDefinition;
use crate::InputDefinition;
use crate::InterfaceDefinition;
use crate::ObjectDefinition;
use crate::OperationDefinition;
use crate::UnionDefinition;

/// A top-level definition within a [`Document`](crate::Document).
///
/// Covers both executable definitions (operations and fragments) and
/// type-system definitions.
#[allow(clippy::large_enum_variant)]
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Definition {
    EnumDefinition(EnumDefinition),
    FragmentDefinition(FragmentDefinition),
    InputDefinition(InputDefinition),
    InterfaceDefinition(InterfaceDefinition),
    ObjectDefinition(ObjectDefinition),
    OperationDefinition(OperationDefinition),
    UnionDefinition(UnionDefinition),
}
impl Definition {
    /// Borrow this definition as a [`DefinitionRef`].
    pub fn as_definition_ref(&self) -> DefinitionRef<'_> {
        match self {
            Self::EnumDefinition(def) => DefinitionRef::EnumDefinition(def),
            Self::FragmentDefinition(def) => DefinitionRef::FragmentDefinition(def),
            Self::InputDefinition(def) => DefinitionRef::InputDefinition(def),
            Self::InterfaceDefinition(def) => DefinitionRef::InterfaceDefinition(def),
            Self::ObjectDefinition(def) => DefinitionRef::ObjectDefinition(def),
            Self::OperationDefinition(def) => DefinitionRef::OperationDefinition(def),
            Self::UnionDefinition(def) => DefinitionRef::UnionDefinition(def),
        }
    }

    /// True for operations and fragments.
    pub fn is_executable(&self) -> bool {
        matches!(
            self,
            Self::FragmentDefinition(_) | Self::OperationDefinition(_)
        )
    }
}
impl std::convert::From<EnumDefinition> for Definition {
    fn from(value: EnumDefinition) -> Self {
        Self::EnumDefinition(value)
    }
}
impl std::convert::From<FragmentDefinition> for Definition {
    fn from(value: FragmentDefinition) -> Self {
        Self::FragmentDefinition(value)
    }
}
impl std::convert::From<InputDefinition> for Definition {
    fn from(value: InputDefinition) -> Self {
        Self::InputDefinition(value)
    }
}
impl std::convert::From<InterfaceDefinition> for Definition {
    fn from(value: InterfaceDefinition) -> Self {
        Self::InterfaceDefinition(value)
    }
}
impl std::convert::From<ObjectDefinition> for Definition {
    fn from(value: ObjectDefinition) -> Self {
        Self::ObjectDefinition(value)
    }
}
impl std::convert::From<OperationDefinition> for Definition {
    fn from(value: OperationDefinition) -> Self {
        Self::OperationDefinition(value)
    }
}
impl std::convert::From<UnionDefinition> for Definition {
    fn from(value: UnionDefinition) -> Self {
        Self::UnionDefinition(value)
    }
}

/// A borrowed view of a definition node.
///
/// [`Schema`](crate::Schema) owns its [`ObjectDefinition`]s directly rather
/// than as [`Definition`]s, so consumers that want to treat schema members and
/// document definitions uniformly work with this view instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DefinitionRef<'a> {
    EnumDefinition(&'a EnumDefinition),
    FragmentDefinition(&'a FragmentDefinition),
    InputDefinition(&'a InputDefinition),
    InterfaceDefinition(&'a InterfaceDefinition),
    ObjectDefinition(&'a ObjectDefinition),
    OperationDefinition(&'a OperationDefinition),
    UnionDefinition(&'a UnionDefinition),
}
impl<'a> DefinitionRef<'a> {
    /// The name of the referenced definition. Anonymous operations have none.
    pub fn name(&self) -> Option<&'a str> {
        match *self {
            Self::EnumDefinition(def) => Some(def.name()),
            Self::FragmentDefinition(def) => Some(def.name()),
            Self::InputDefinition(def) => Some(def.name()),
            Self::InterfaceDefinition(def) => Some(def.name()),
            Self::ObjectDefinition(def) => Some(def.name()),
            Self::OperationDefinition(def) => def.name(),
            Self::UnionDefinition(def) => Some(def.name()),
        }
    }
}
impl<'a> std::convert::From<&'a Definition> for DefinitionRef<'a> {
    fn from(value: &'a Definition) -> Self {
        value.as_definition_ref()
    }
}
impl<'a> std::convert::From<&'a ObjectDefinition> for DefinitionRef<'a> {
    fn from(value: &'a ObjectDefinition) -> Self {
        Self::ObjectDefinition(value)
    }
}
