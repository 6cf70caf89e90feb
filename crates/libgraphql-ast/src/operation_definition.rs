use crate::Directive;
use crate::OperationType;
use crate::Selection;
use crate::VariableDefinition;

/// A query or mutation operation.
///
/// Note that traversal only descends into an operation's selections; its
/// variable definitions and directives are reachable through the accessors
/// here but are never visited.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct OperationDefinition {
    directives: Vec<Directive>,
    name: Option<String>,
    operation_type: OperationType,
    selections: Vec<Selection>,
    variables: Vec<VariableDefinition>,
}
impl OperationDefinition {
    pub fn new(operation_type: OperationType) -> Self {
        Self {
            directives: vec![],
            name: None,
            operation_type,
            selections: vec![],
            variables: vec![],
        }
    }

    /// Append `directives` after any previously added directives.
    pub fn add_directives(&mut self, directives: impl IntoIterator<Item = Directive>) {
        self.directives.extend(directives);
    }

    /// Append `selections` after any previously added selections.
    pub fn add_selections(&mut self, selections: impl IntoIterator<Item = Selection>) {
        self.selections.extend(selections);
    }

    /// Append `variables` after any previously added variable definitions.
    pub fn add_variable_definitions(
        &mut self,
        variables: impl IntoIterator<Item = VariableDefinition>,
    ) {
        self.variables.extend(variables);
    }

    pub fn directives(&self) -> std::slice::Iter<'_, Directive> {
        self.directives.iter()
    }

    pub fn has_name(&self) -> bool {
        self.name.is_some()
    }

    /// The name of this operation, or `None` for an anonymous operation.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn operation_type(&self) -> OperationType {
        self.operation_type
    }

    pub fn selections(&self) -> std::slice::Iter<'_, Selection> {
        self.selections.iter()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn variable_definitions(&self) -> std::slice::Iter<'_, VariableDefinition> {
        self.variables.iter()
    }
}
