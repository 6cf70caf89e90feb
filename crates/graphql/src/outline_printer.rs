use libgraphql_ast::Directive;
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
use libgraphql_ast::SelectionField;
use libgraphql_ast::UnionDefinition;
use libgraphql_visitor::EnterResult;
use libgraphql_visitor::Handler;
use libgraphql_visitor::LeaveResult;
use libgraphql_visitor::VisitFlow;
use std::fmt::Write;

const INDENT: &str = "  ";

/// Writes one line per visited node into a `String` context, indented by how
/// many child lists deep the node is.
///
/// With a `max_depth`, lists nested deeper than that are pruned and replaced
/// by a single `...` line.
#[derive(Debug, Default)]
pub(crate) struct OutlinePrinter {
    depth: usize,
    max_depth: Option<usize>,
}
impl OutlinePrinter {
    pub fn new(max_depth: Option<usize>) -> Self {
        Self {
            depth: 0,
            max_depth,
        }
    }

    fn line(&self, out: &mut String, args: std::fmt::Arguments<'_>) -> std::fmt::Result {
        for _ in 0..self.depth {
            out.push_str(INDENT);
        }
        out.write_fmt(args)?;
        out.push('\n');
        Ok(())
    }

    fn enter_list(&mut self, out: &mut String) -> EnterResult {
        self.depth += 1;
        if self.max_depth.is_some_and(|max| self.depth > max) {
            self.line(out, format_args!("..."))?;
            return Ok(VisitFlow::Prune);
        }
        Ok(VisitFlow::Continue)
    }

    fn leave_list(&mut self) -> LeaveResult {
        self.depth = self.depth.saturating_sub(1);
        Ok(())
    }
}
impl Handler<String> for OutlinePrinter {
    fn enter_schema_query(&mut self, out: &mut String, query: &ObjectDefinition) -> EnterResult {
        self.line(out, format_args!("schema {{ query: {} }}", query.name()))?;
        Ok(VisitFlow::Continue)
    }

    fn enter_operation_definition(
        &mut self,
        out: &mut String,
        op: &OperationDefinition,
    ) -> EnterResult {
        match op.name() {
            Some(name) => self.line(out, format_args!("{} {name}", op.operation_type()))?,
            None => self.line(out, format_args!("{}", op.operation_type()))?,
        }
        Ok(VisitFlow::Continue)
    }

    fn enter_fragment_definition(
        &mut self,
        out: &mut String,
        frag: &FragmentDefinition,
    ) -> EnterResult {
        self.line(out, format_args!(
            "fragment {} on {}",
            frag.name(),
            frag.type_condition().name(),
        ))?;
        Ok(VisitFlow::Continue)
    }

    fn enter_object_definition(&mut self, out: &mut String, obj: &ObjectDefinition) -> EnterResult {
        match obj.implements() {
            Some(iface) => self.line(out, format_args!(
                "type {} implements {}",
                obj.name(),
                iface.name(),
            ))?,
            None => self.line(out, format_args!("type {}", obj.name()))?,
        }
        Ok(VisitFlow::Continue)
    }

    fn enter_object_field_definition(
        &mut self,
        out: &mut String,
        field: &ObjectFieldDefinition,
    ) -> EnterResult {
        self.line(out, format_args!("{}: {}", field.name(), field.type_annotation()))?;
        Ok(VisitFlow::Continue)
    }

    fn enter_interface_definition(
        &mut self,
        out: &mut String,
        iface: &InterfaceDefinition,
    ) -> EnterResult {
        self.line(out, format_args!("interface {}", iface.name()))?;
        Ok(VisitFlow::Continue)
    }

    fn enter_interface_field_definition(
        &mut self,
        out: &mut String,
        field: &InterfaceFieldDefinition,
    ) -> EnterResult {
        self.line(out, format_args!("{}: {}", field.name(), field.type_annotation()))?;
        Ok(VisitFlow::Continue)
    }

    fn enter_enum_definition(&mut self, out: &mut String, enum_def: &EnumDefinition) -> EnterResult {
        self.line(out, format_args!(
            "enum {} ({} values)",
            enum_def.name(),
            enum_def.elements().len(),
        ))?;
        Ok(VisitFlow::Continue)
    }

    fn enter_union_definition(
        &mut self,
        out: &mut String,
        union_def: &UnionDefinition,
    ) -> EnterResult {
        let members: Vec<String> = union_def.types().map(|t| t.to_string()).collect();
        self.line(out, format_args!("union {} = {}", union_def.name(), members.join(" | ")))?;
        Ok(VisitFlow::Continue)
    }

    fn enter_input_definition(&mut self, out: &mut String, input: &InputDefinition) -> EnterResult {
        self.line(out, format_args!("input {}", input.name()))?;
        Ok(VisitFlow::Continue)
    }

    fn enter_input_field_definition(
        &mut self,
        out: &mut String,
        field: &InputFieldDefinition,
    ) -> EnterResult {
        self.line(out, format_args!("{}: {}", field.name(), field.type_annotation()))?;
        Ok(VisitFlow::Continue)
    }

    fn enter_selection_field(&mut self, out: &mut String, field: &SelectionField) -> EnterResult {
        match field.alias() {
            Some(alias) => self.line(out, format_args!("{alias}: {}", field.name()))?,
            None => self.line(out, format_args!("{}", field.name()))?,
        }
        Ok(VisitFlow::Continue)
    }

    fn enter_fragment_spread(&mut self, out: &mut String, spread: &FragmentSpread) -> EnterResult {
        self.line(out, format_args!("...{}", spread.name()))?;
        Ok(VisitFlow::Continue)
    }

    fn enter_inline_fragment(&mut self, out: &mut String, inline: &InlineFragment) -> EnterResult {
        match inline.type_condition() {
            Some(on_type) => self.line(out, format_args!("... on {}", on_type.name()))?,
            None => self.line(out, format_args!("..."))?,
        }
        Ok(VisitFlow::Continue)
    }

    fn enter_directive(&mut self, out: &mut String, directive: &Directive) -> EnterResult {
        self.line(out, format_args!("@{}", directive.name()))?;
        Ok(VisitFlow::Continue)
    }

    // Every child list is one level of indentation.

    fn enter_object_field_definition_list(&mut self, out: &mut String) -> EnterResult {
        self.enter_list(out)
    }

    fn leave_object_field_definition_list(&mut self, _out: &mut String) -> LeaveResult {
        self.leave_list()
    }

    fn enter_interface_field_definition_list(&mut self, out: &mut String) -> EnterResult {
        self.enter_list(out)
    }

    fn leave_interface_field_definition_list(&mut self, _out: &mut String) -> LeaveResult {
        self.leave_list()
    }

    fn enter_input_field_definition_list(&mut self, out: &mut String) -> EnterResult {
        self.enter_list(out)
    }

    fn leave_input_field_definition_list(&mut self, _out: &mut String) -> LeaveResult {
        self.leave_list()
    }

    fn enter_selection_list(&mut self, out: &mut String) -> EnterResult {
        self.enter_list(out)
    }

    fn leave_selection_list(&mut self, _out: &mut String) -> LeaveResult {
        self.leave_list()
    }

    fn enter_directive_list(&mut self, out: &mut String) -> EnterResult {
        self.enter_list(out)
    }

    fn leave_directive_list(&mut self, _out: &mut String) -> LeaveResult {
        self.leave_list()
    }
}
