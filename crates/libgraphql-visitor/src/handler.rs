use crate::EnterResult;
use crate::LeaveResult;
use crate::VisitFlow;
use libgraphql_ast::DefinitionRef;
use libgraphql_ast::Directive;
use libgraphql_ast::Document;
use libgraphql_ast::EnumDefinition;
use libgraphql_ast::FragmentDefinition;
use libgraphql_ast::FragmentSpread;
use libgraphql_ast::InlineFragment;
use libgraphql_ast::InputDefinition;
use libgraphql_ast::InputFieldDefinition;
use libgraphql_ast::InterfaceDefinition;
use libgraphql_ast::InterfaceFieldDefinition;
use libgraphql_ast::ObjectDefinition;
use libgraphql_ast::ObjectFieldDefinition;
use libgraphql_ast::OperationDefinition;
use libgraphql_ast::Schema;
use libgraphql_ast::Selection;
use libgraphql_ast::SelectionField;
use libgraphql_ast::UnionDefinition;

/// The table of callbacks invoked by [`visit`](crate::visit).
///
/// Every callback has a no-op default, so implementors override only the
/// points they care about. Each callback receives the caller-owned context
/// `C` that was passed to [`visit`](crate::visit).
///
/// For each node, `enter_*` fires before its children are visited and
/// `leave_*` fires after. Returning [`VisitFlow::Prune`] from an `enter_*`
/// callback skips that node's children but still fires its `leave_*`
/// callback. Returning an `Err` from any callback aborts the whole traversal.
///
/// The `*_list` callbacks bracket an ordered child list and fire only when
/// that list is non-empty.
///
/// ```
/// use libgraphql_ast::Document;
/// use libgraphql_ast::SelectionField;
/// use libgraphql_visitor::EnterResult;
/// use libgraphql_visitor::Handler;
/// use libgraphql_visitor::VisitFlow;
///
/// struct FieldCounter;
///
/// impl Handler<usize> for FieldCounter {
///     fn enter_selection_field(
///         &mut self,
///         count: &mut usize,
///         _field: &SelectionField,
///     ) -> EnterResult {
///         *count += 1;
///         Ok(VisitFlow::Continue)
///     }
/// }
///
/// let mut count = 0_usize;
/// libgraphql_visitor::visit(&mut count, &mut FieldCounter, &Document::new()).unwrap();
/// assert_eq!(count, 0);
/// ```
#[allow(unused_variables)]
pub trait Handler<C: ?Sized = ()> {
    // =========================================================
    // Roots
    // =========================================================

    fn enter_schema(&mut self, ctx: &mut C, schema: &Schema) -> EnterResult {
        Ok(VisitFlow::Continue)
    }

    fn leave_schema(&mut self, ctx: &mut C, schema: &Schema) -> LeaveResult {
        Ok(())
    }

    /// Called for a [`Schema`]'s query-root type, immediately around the
    /// regular definition callbacks for that same [`ObjectDefinition`].
    /// Pruning here skips those definition callbacks entirely.
    fn enter_schema_query(&mut self, ctx: &mut C, query: &ObjectDefinition) -> EnterResult {
        Ok(VisitFlow::Continue)
    }

    fn leave_schema_query(&mut self, ctx: &mut C, query: &ObjectDefinition) -> LeaveResult {
        Ok(())
    }

    fn enter_document(&mut self, ctx: &mut C, doc: &Document) -> EnterResult {
        Ok(VisitFlow::Continue)
    }

    fn leave_document(&mut self, ctx: &mut C, doc: &Document) -> LeaveResult {
        Ok(())
    }

    // =========================================================
    // Definitions
    // =========================================================

    /// Called before the definitions of a document, or before the types of a
    /// schema (which are followed by its query root).
    fn enter_definition_list(&mut self, ctx: &mut C) -> EnterResult {
        Ok(VisitFlow::Continue)
    }

    fn leave_definition_list(&mut self, ctx: &mut C) -> LeaveResult {
        Ok(())
    }

    /// Called for every definition before its kind is inspected. Implement
    /// the kind-specific callbacks instead if only one kind is of interest.
    fn enter_definition(&mut self, ctx: &mut C, def: DefinitionRef<'_>) -> EnterResult {
        Ok(VisitFlow::Continue)
    }

    fn leave_definition(&mut self, ctx: &mut C, def: DefinitionRef<'_>) -> LeaveResult {
        Ok(())
    }

    /// Only the operation's selections are followed. Variable definitions
    /// and directives on the operation are never visited.
    fn enter_operation_definition(
        &mut self,
        ctx: &mut C,
        op: &OperationDefinition,
    ) -> EnterResult {
        Ok(VisitFlow::Continue)
    }

    fn leave_operation_definition(
        &mut self,
        ctx: &mut C,
        op: &OperationDefinition,
    ) -> LeaveResult {
        Ok(())
    }

    fn enter_fragment_definition(
        &mut self,
        ctx: &mut C,
        frag: &FragmentDefinition,
    ) -> EnterResult {
        Ok(VisitFlow::Continue)
    }

    fn leave_fragment_definition(
        &mut self,
        ctx: &mut C,
        frag: &FragmentDefinition,
    ) -> LeaveResult {
        Ok(())
    }

    // =========================================================
    // Type-system definitions
    // =========================================================

    fn enter_object_definition(&mut self, ctx: &mut C, obj: &ObjectDefinition) -> EnterResult {
        Ok(VisitFlow::Continue)
    }

    fn leave_object_definition(&mut self, ctx: &mut C, obj: &ObjectDefinition) -> LeaveResult {
        Ok(())
    }

    fn enter_object_field_definition_list(&mut self, ctx: &mut C) -> EnterResult {
        Ok(VisitFlow::Continue)
    }

    fn leave_object_field_definition_list(&mut self, ctx: &mut C) -> LeaveResult {
        Ok(())
    }

    /// Field arguments are not visited.
    fn enter_object_field_definition(
        &mut self,
        ctx: &mut C,
        field: &ObjectFieldDefinition,
    ) -> EnterResult {
        Ok(VisitFlow::Continue)
    }

    fn leave_object_field_definition(
        &mut self,
        ctx: &mut C,
        field: &ObjectFieldDefinition,
    ) -> LeaveResult {
        Ok(())
    }

    fn enter_interface_definition(
        &mut self,
        ctx: &mut C,
        iface: &InterfaceDefinition,
    ) -> EnterResult {
        Ok(VisitFlow::Continue)
    }

    fn leave_interface_definition(
        &mut self,
        ctx: &mut C,
        iface: &InterfaceDefinition,
    ) -> LeaveResult {
        Ok(())
    }

    fn enter_interface_field_definition_list(&mut self, ctx: &mut C) -> EnterResult {
        Ok(VisitFlow::Continue)
    }

    fn leave_interface_field_definition_list(&mut self, ctx: &mut C) -> LeaveResult {
        Ok(())
    }

    fn enter_interface_field_definition(
        &mut self,
        ctx: &mut C,
        field: &InterfaceFieldDefinition,
    ) -> EnterResult {
        Ok(VisitFlow::Continue)
    }

    fn leave_interface_field_definition(
        &mut self,
        ctx: &mut C,
        field: &InterfaceFieldDefinition,
    ) -> LeaveResult {
        Ok(())
    }

    /// Enum elements are not visited.
    fn enter_enum_definition(&mut self, ctx: &mut C, enum_def: &EnumDefinition) -> EnterResult {
        Ok(VisitFlow::Continue)
    }

    fn leave_enum_definition(&mut self, ctx: &mut C, enum_def: &EnumDefinition) -> LeaveResult {
        Ok(())
    }

    /// Union member types are not visited.
    fn enter_union_definition(
        &mut self,
        ctx: &mut C,
        union_def: &UnionDefinition,
    ) -> EnterResult {
        Ok(VisitFlow::Continue)
    }

    fn leave_union_definition(
        &mut self,
        ctx: &mut C,
        union_def: &UnionDefinition,
    ) -> LeaveResult {
        Ok(())
    }

    fn enter_input_definition(&mut self, ctx: &mut C, input: &InputDefinition) -> EnterResult {
        Ok(VisitFlow::Continue)
    }

    fn leave_input_definition(&mut self, ctx: &mut C, input: &InputDefinition) -> LeaveResult {
        Ok(())
    }

    fn enter_input_field_definition_list(&mut self, ctx: &mut C) -> EnterResult {
        Ok(VisitFlow::Continue)
    }

    fn leave_input_field_definition_list(&mut self, ctx: &mut C) -> LeaveResult {
        Ok(())
    }

    fn enter_input_field_definition(
        &mut self,
        ctx: &mut C,
        field: &InputFieldDefinition,
    ) -> EnterResult {
        Ok(VisitFlow::Continue)
    }

    fn leave_input_field_definition(
        &mut self,
        ctx: &mut C,
        field: &InputFieldDefinition,
    ) -> LeaveResult {
        Ok(())
    }

    // =========================================================
    // Selections
    // =========================================================

    fn enter_selection_list(&mut self, ctx: &mut C) -> EnterResult {
        Ok(VisitFlow::Continue)
    }

    fn leave_selection_list(&mut self, ctx: &mut C) -> LeaveResult {
        Ok(())
    }

    /// Called for every selection before its kind is inspected.
    fn enter_selection(&mut self, ctx: &mut C, selection: &Selection) -> EnterResult {
        Ok(VisitFlow::Continue)
    }

    fn leave_selection(&mut self, ctx: &mut C, selection: &Selection) -> LeaveResult {
        Ok(())
    }

    /// A field's directives are visited before its nested selections. Field
    /// arguments are not visited.
    fn enter_selection_field(&mut self, ctx: &mut C, field: &SelectionField) -> EnterResult {
        Ok(VisitFlow::Continue)
    }

    fn leave_selection_field(&mut self, ctx: &mut C, field: &SelectionField) -> LeaveResult {
        Ok(())
    }

    fn enter_fragment_spread(&mut self, ctx: &mut C, spread: &FragmentSpread) -> EnterResult {
        Ok(VisitFlow::Continue)
    }

    fn leave_fragment_spread(&mut self, ctx: &mut C, spread: &FragmentSpread) -> LeaveResult {
        Ok(())
    }

    fn enter_inline_fragment(&mut self, ctx: &mut C, inline: &InlineFragment) -> EnterResult {
        Ok(VisitFlow::Continue)
    }

    fn leave_inline_fragment(&mut self, ctx: &mut C, inline: &InlineFragment) -> LeaveResult {
        Ok(())
    }

    // =========================================================
    // Directives
    // =========================================================

    fn enter_directive_list(&mut self, ctx: &mut C) -> EnterResult {
        Ok(VisitFlow::Continue)
    }

    fn leave_directive_list(&mut self, ctx: &mut C) -> LeaveResult {
        Ok(())
    }

    /// Directive arguments are not visited.
    fn enter_directive(&mut self, ctx: &mut C, directive: &Directive) -> EnterResult {
        Ok(VisitFlow::Continue)
    }

    fn leave_directive(&mut self, ctx: &mut C, directive: &Directive) -> LeaveResult {
        Ok(())
    }
}
