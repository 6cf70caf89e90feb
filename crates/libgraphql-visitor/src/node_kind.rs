/// Every point in a traversal at which a [`Handler`](crate::Handler) can be
/// invoked: one per node kind, plus one per list grouping.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NodeKind {
    DefinitionList,
    Definition,
    Directive,
    DirectiveList,
    Document,
    EnumDefinition,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    InputDefinition,
    InputFieldDefinition,
    InputFieldDefinitionList,
    InterfaceDefinition,
    InterfaceFieldDefinition,
    InterfaceFieldDefinitionList,
    ObjectDefinition,
    ObjectFieldDefinition,
    ObjectFieldDefinitionList,
    OperationDefinition,
    Schema,
    SchemaQuery,
    Selection,
    SelectionField,
    SelectionList,
    UnionDefinition,
}
impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DefinitionList => "definition list",
            Self::Definition => "definition",
            Self::Directive => "directive",
            Self::DirectiveList => "directive list",
            Self::Document => "document",
            Self::EnumDefinition => "enum definition",
            Self::FragmentDefinition => "fragment definition",
            Self::FragmentSpread => "fragment spread",
            Self::InlineFragment => "inline fragment",
            Self::InputDefinition => "input definition",
            Self::InputFieldDefinition => "input field definition",
            Self::InputFieldDefinitionList => "input field definition list",
            Self::InterfaceDefinition => "interface definition",
            Self::InterfaceFieldDefinition => "interface field definition",
            Self::InterfaceFieldDefinitionList => "interface field definition list",
            Self::ObjectDefinition => "object definition",
            Self::ObjectFieldDefinition => "object field definition",
            Self::ObjectFieldDefinitionList => "object field definition list",
            Self::OperationDefinition => "operation definition",
            Self::Schema => "schema",
            Self::SchemaQuery => "schema query",
            Self::Selection => "selection",
            Self::SelectionField => "selection field",
            Self::SelectionList => "selection list",
            Self::UnionDefinition => "union definition",
        }
    }

    /// True for the kinds that group an ordered list of child nodes.
    pub fn is_list(&self) -> bool {
        matches!(
            self,
            Self::DefinitionList
                | Self::DirectiveList
                | Self::InputFieldDefinitionList
                | Self::InterfaceFieldDefinitionList
                | Self::ObjectFieldDefinitionList
                | Self::SelectionList
        )
    }
}
impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
