use crate::EnterResult;
use crate::Handler;
use crate::LeaveResult;
use crate::NodeKind;
use crate::VisitError;
use crate::VisitRoot;
use crate::VisitStage;
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
use std::any::Any;

type Result<T> = std::result::Result<T, VisitError>;

/// Walk `root` depth-first, invoking `handler`'s callbacks with `ctx`.
///
/// Returns `Ok(())` once every reachable node has been entered and left, or
/// the first error returned by a callback. Errors are wrapped in a
/// [`VisitError::Stage`] for every step between the root and the failing
/// callback.
pub fn visit<'a, C, H>(
    ctx: &mut C,
    handler: &mut H,
    root: impl Into<VisitRoot<'a>>,
) -> Result<()>
where
    C: ?Sized,
    H: Handler<C> + ?Sized,
{
    let root = root.into();
    log::debug!("visiting {} root", root.node_kind());

    let mut visitor = Visitor { ctx, handler };
    let result = match root {
        VisitRoot::Document(doc) => visitor.visit_document(doc),
        VisitRoot::Schema(schema) => visitor.visit_schema(schema),
    };

    if let Err(err) = &result {
        log::debug!("visit aborted: {err}");
    }
    result
}

/// Like [`visit`], but accepts a root of any type and checks at runtime that
/// it is a [`Document`] or a [`Schema`].
///
/// Any other type fails with [`VisitError::InvalidInputType`] without
/// invoking a single callback.
pub fn visit_any<C, H, T>(ctx: &mut C, handler: &mut H, root: &T) -> Result<()>
where
    C: ?Sized,
    H: Handler<C> + ?Sized,
    T: Any,
{
    let root = root as &dyn Any;
    if let Some(doc) = root.downcast_ref::<Document>() {
        visit(ctx, handler, doc)
    } else if let Some(schema) = root.downcast_ref::<Schema>() {
        visit(ctx, handler, schema)
    } else {
        Err(VisitError::InvalidInputType {
            type_name: std::any::type_name::<T>(),
        })
    }
}

/// A member of the combined definition list synthesized for a [`Schema`].
#[derive(Clone, Copy)]
enum SchemaMember<'a> {
    QueryRoot(&'a ObjectDefinition),
    Type(&'a ObjectDefinition),
}

struct Visitor<'v, C: ?Sized, H: ?Sized> {
    ctx: &'v mut C,
    handler: &'v mut H,
}
impl<'v, C, H> Visitor<'v, C, H>
where
    C: ?Sized,
    H: Handler<C> + ?Sized,
{
    /// Enter a node, descend into its children unless pruned, then leave it.
    fn walk(
        &mut self,
        kind: NodeKind,
        enter: impl FnOnce(&mut H, &mut C) -> EnterResult,
        descend: impl FnOnce(&mut Self) -> Result<()>,
        leave: impl FnOnce(&mut H, &mut C) -> LeaveResult,
    ) -> Result<()> {
        self.walk_impl(kind, enter, descend, leave)
            .map_err(|err| err.in_stage(VisitStage::Visit(kind)))
    }

    fn walk_impl(
        &mut self,
        kind: NodeKind,
        enter: impl FnOnce(&mut H, &mut C) -> EnterResult,
        descend: impl FnOnce(&mut Self) -> Result<()>,
        leave: impl FnOnce(&mut H, &mut C) -> LeaveResult,
    ) -> Result<()> {
        let flow = enter(&mut *self.handler, &mut *self.ctx).map_err(|err| {
            VisitError::Handler(err).in_stage(VisitStage::Enter(kind))
        })?;

        if flow.is_prune() {
            log::trace!("pruned children of {kind}");
        } else {
            descend(self)?;
        }

        leave(&mut *self.handler, &mut *self.ctx)
            .map_err(|err| VisitError::Handler(err).in_stage(VisitStage::Leave(kind)))
    }

    fn walk_leaf(
        &mut self,
        kind: NodeKind,
        enter: impl FnOnce(&mut H, &mut C) -> EnterResult,
        leave: impl FnOnce(&mut H, &mut C) -> LeaveResult,
    ) -> Result<()> {
        self.walk(kind, enter, |_| Ok(()), leave)
    }

    /// Walk an ordered child list. Empty lists are skipped without invoking
    /// the list callbacks.
    fn walk_list<'a, T: 'a>(
        &mut self,
        kind: NodeKind,
        items: std::slice::Iter<'a, T>,
        enter: impl FnOnce(&mut H, &mut C) -> EnterResult,
        mut visit_item: impl FnMut(&mut Self, &'a T) -> Result<()>,
        leave: impl FnOnce(&mut H, &mut C) -> LeaveResult,
    ) -> Result<()> {
        if items.as_slice().is_empty() {
            return Ok(());
        }

        self.walk(
            kind,
            enter,
            |this| {
                for item in items {
                    visit_item(this, item)?;
                }
                Ok(())
            },
            leave,
        )
    }

    // =========================================================
    // Roots
    // =========================================================

    fn visit_document(&mut self, doc: &Document) -> Result<()> {
        self.walk(
            NodeKind::Document,
            |handler, ctx| handler.enter_document(ctx, doc),
            |this| {
                this.walk_list(
                    NodeKind::DefinitionList,
                    doc.definitions(),
                    |handler, ctx| handler.enter_definition_list(ctx),
                    |this, def| this.visit_definition(def.as_definition_ref()),
                    |handler, ctx| handler.leave_definition_list(ctx),
                )
            },
            |handler, ctx| handler.leave_document(ctx, doc),
        )
    }

    fn visit_schema(&mut self, schema: &Schema) -> Result<()> {
        let members: Vec<SchemaMember<'_>> = schema
            .types()
            .map(SchemaMember::Type)
            .chain(std::iter::once(SchemaMember::QueryRoot(schema.query())))
            .collect();

        self.walk(
            NodeKind::Schema,
            |handler, ctx| handler.enter_schema(ctx, schema),
            |this| {
                this.walk_list(
                    NodeKind::DefinitionList,
                    members.iter(),
                    |handler, ctx| handler.enter_definition_list(ctx),
                    |this, member| match *member {
                        SchemaMember::QueryRoot(query) => this.visit_schema_query(query),
                        SchemaMember::Type(obj) => this.visit_definition(obj.into()),
                    },
                    |handler, ctx| handler.leave_definition_list(ctx),
                )
            },
            |handler, ctx| handler.leave_schema(ctx, schema),
        )
    }

    fn visit_schema_query(&mut self, query: &ObjectDefinition) -> Result<()> {
        self.walk(
            NodeKind::SchemaQuery,
            |handler, ctx| handler.enter_schema_query(ctx, query),
            |this| this.visit_definition(query.into()),
            |handler, ctx| handler.leave_schema_query(ctx, query),
        )
    }

    // =========================================================
    // Definitions
    // =========================================================

    fn visit_definition(&mut self, def: DefinitionRef<'_>) -> Result<()> {
        self.walk(
            NodeKind::Definition,
            |handler, ctx| handler.enter_definition(ctx, def),
            |this| match def {
                DefinitionRef::EnumDefinition(enum_def) => this.visit_enum_definition(enum_def),
                DefinitionRef::FragmentDefinition(frag) => this.visit_fragment_definition(frag),
                DefinitionRef::InputDefinition(input) => this.visit_input_definition(input),
                DefinitionRef::InterfaceDefinition(iface) => this.visit_interface_definition(iface),
                DefinitionRef::ObjectDefinition(obj) => this.visit_object_definition(obj),
                DefinitionRef::OperationDefinition(op) => this.visit_operation_definition(op),
                DefinitionRef::UnionDefinition(union_def) => this.visit_union_definition(union_def),
            },
            |handler, ctx| handler.leave_definition(ctx, def),
        )
    }

    fn visit_operation_definition(&mut self, op: &OperationDefinition) -> Result<()> {
        self.walk(
            NodeKind::OperationDefinition,
            |handler, ctx| handler.enter_operation_definition(ctx, op),
            |this| this.visit_selections(op.selections()),
            |handler, ctx| handler.leave_operation_definition(ctx, op),
        )
    }

    fn visit_fragment_definition(&mut self, frag: &FragmentDefinition) -> Result<()> {
        self.walk(
            NodeKind::FragmentDefinition,
            |handler, ctx| handler.enter_fragment_definition(ctx, frag),
            |this| {
                this.visit_directives(frag.directives())?;
                this.visit_selections(frag.selections())
            },
            |handler, ctx| handler.leave_fragment_definition(ctx, frag),
        )
    }

    // =========================================================
    // Type-system definitions
    // =========================================================

    fn visit_object_definition(&mut self, obj: &ObjectDefinition) -> Result<()> {
        self.walk(
            NodeKind::ObjectDefinition,
            |handler, ctx| handler.enter_object_definition(ctx, obj),
            |this| {
                this.walk_list(
                    NodeKind::ObjectFieldDefinitionList,
                    obj.fields(),
                    |handler, ctx| handler.enter_object_field_definition_list(ctx),
                    |this, field| this.visit_object_field_definition(field),
                    |handler, ctx| handler.leave_object_field_definition_list(ctx),
                )
            },
            |handler, ctx| handler.leave_object_definition(ctx, obj),
        )
    }

    fn visit_object_field_definition(&mut self, field: &ObjectFieldDefinition) -> Result<()> {
        self.walk_leaf(
            NodeKind::ObjectFieldDefinition,
            |handler, ctx| handler.enter_object_field_definition(ctx, field),
            |handler, ctx| handler.leave_object_field_definition(ctx, field),
        )
    }

    fn visit_interface_definition(&mut self, iface: &InterfaceDefinition) -> Result<()> {
        self.walk(
            NodeKind::InterfaceDefinition,
            |handler, ctx| handler.enter_interface_definition(ctx, iface),
            |this| {
                this.walk_list(
                    NodeKind::InterfaceFieldDefinitionList,
                    iface.fields(),
                    |handler, ctx| handler.enter_interface_field_definition_list(ctx),
                    |this, field| this.visit_interface_field_definition(field),
                    |handler, ctx| handler.leave_interface_field_definition_list(ctx),
                )
            },
            |handler, ctx| handler.leave_interface_definition(ctx, iface),
        )
    }

    fn visit_interface_field_definition(
        &mut self,
        field: &InterfaceFieldDefinition,
    ) -> Result<()> {
        self.walk_leaf(
            NodeKind::InterfaceFieldDefinition,
            |handler, ctx| handler.enter_interface_field_definition(ctx, field),
            |handler, ctx| handler.leave_interface_field_definition(ctx, field),
        )
    }

    fn visit_enum_definition(&mut self, enum_def: &EnumDefinition) -> Result<()> {
        self.walk_leaf(
            NodeKind::EnumDefinition,
            |handler, ctx| handler.enter_enum_definition(ctx, enum_def),
            |handler, ctx| handler.leave_enum_definition(ctx, enum_def),
        )
    }

    fn visit_union_definition(&mut self, union_def: &UnionDefinition) -> Result<()> {
        self.walk_leaf(
            NodeKind::UnionDefinition,
            |handler, ctx| handler.enter_union_definition(ctx, union_def),
            |handler, ctx| handler.leave_union_definition(ctx, union_def),
        )
    }

    fn visit_input_definition(&mut self, input: &InputDefinition) -> Result<()> {
        self.walk(
            NodeKind::InputDefinition,
            |handler, ctx| handler.enter_input_definition(ctx, input),
            |this| {
                this.walk_list(
                    NodeKind::InputFieldDefinitionList,
                    input.fields(),
                    |handler, ctx| handler.enter_input_field_definition_list(ctx),
                    |this, field| this.visit_input_field_definition(field),
                    |handler, ctx| handler.leave_input_field_definition_list(ctx),
                )
            },
            |handler, ctx| handler.leave_input_definition(ctx, input),
        )
    }

    fn visit_input_field_definition(&mut self, field: &InputFieldDefinition) -> Result<()> {
        self.walk_leaf(
            NodeKind::InputFieldDefinition,
            |handler, ctx| handler.enter_input_field_definition(ctx, field),
            |handler, ctx| handler.leave_input_field_definition(ctx, field),
        )
    }

    // =========================================================
    // Selections
    // =========================================================

    fn visit_selections(&mut self, selections: std::slice::Iter<'_, Selection>) -> Result<()> {
        self.walk_list(
            NodeKind::SelectionList,
            selections,
            |handler, ctx| handler.enter_selection_list(ctx),
            |this, selection| this.visit_selection(selection),
            |handler, ctx| handler.leave_selection_list(ctx),
        )
    }

    fn visit_selection(&mut self, selection: &Selection) -> Result<()> {
        self.walk(
            NodeKind::Selection,
            |handler, ctx| handler.enter_selection(ctx, selection),
            |this| match selection {
                Selection::Field(field) => this.visit_selection_field(field),
                Selection::FragmentSpread(spread) => this.visit_fragment_spread(spread),
                Selection::InlineFragment(inline) => this.visit_inline_fragment(inline),
            },
            |handler, ctx| handler.leave_selection(ctx, selection),
        )
    }

    fn visit_selection_field(&mut self, field: &SelectionField) -> Result<()> {
        self.walk(
            NodeKind::SelectionField,
            |handler, ctx| handler.enter_selection_field(ctx, field),
            |this| {
                this.visit_directives(field.directives())?;
                this.visit_selections(field.selections())
            },
            |handler, ctx| handler.leave_selection_field(ctx, field),
        )
    }

    fn visit_fragment_spread(&mut self, spread: &FragmentSpread) -> Result<()> {
        self.walk_leaf(
            NodeKind::FragmentSpread,
            |handler, ctx| handler.enter_fragment_spread(ctx, spread),
            |handler, ctx| handler.leave_fragment_spread(ctx, spread),
        )
    }

    fn visit_inline_fragment(&mut self, inline: &InlineFragment) -> Result<()> {
        self.walk(
            NodeKind::InlineFragment,
            |handler, ctx| handler.enter_inline_fragment(ctx, inline),
            |this| {
                this.visit_directives(inline.directives())?;
                this.visit_selections(inline.selections())
            },
            |handler, ctx| handler.leave_inline_fragment(ctx, inline),
        )
    }

    // =========================================================
    // Directives
    // =========================================================

    fn visit_directives(&mut self, directives: std::slice::Iter<'_, Directive>) -> Result<()> {
        self.walk_list(
            NodeKind::DirectiveList,
            directives,
            |handler, ctx| handler.enter_directive_list(ctx),
            |this, directive| this.visit_directive(directive),
            |handler, ctx| handler.leave_directive_list(ctx),
        )
    }

    fn visit_directive(&mut self, directive: &Directive) -> Result<()> {
        self.walk_leaf(
            NodeKind::Directive,
            |handler, ctx| handler.enter_directive(ctx, directive),
            |handler, ctx| handler.leave_directive(ctx, directive),
        )
    }
}
