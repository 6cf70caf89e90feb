use super::recording_handler::enter;
use super::recording_handler::enter_named;
use super::recording_handler::leave;
use super::recording_handler::leave_named;
use super::recording_handler::record;
use super::recording_handler::RecordingHandler;
use crate::Handler;
use crate::NodeKind;
use libgraphql_ast::Argument;
use libgraphql_ast::Definition;
use libgraphql_ast::Directive;
use libgraphql_ast::Document;
use libgraphql_ast::EnumDefinition;
use libgraphql_ast::EnumElementDefinition;
use libgraphql_ast::FragmentDefinition;
use libgraphql_ast::FragmentSpread;
use libgraphql_ast::InlineFragment;
use libgraphql_ast::InputDefinition;
use libgraphql_ast::InputFieldDefinition;
use libgraphql_ast::InterfaceDefinition;
use libgraphql_ast::InterfaceFieldDefinition;
use libgraphql_ast::NamedType;
use libgraphql_ast::ObjectDefinition;
use libgraphql_ast::ObjectFieldDefinition;
use libgraphql_ast::OperationDefinition;
use libgraphql_ast::OperationType;
use libgraphql_ast::Selection;
use libgraphql_ast::SelectionField;
use libgraphql_ast::Type;
use libgraphql_ast::UnionDefinition;
use libgraphql_ast::Value;
use libgraphql_ast::VariableDefinition;

fn field(name: &str, children: impl IntoIterator<Item = Selection>) -> Selection {
    let mut field = SelectionField::new(name);
    field.add_selections(children);
    Selection::from(field)
}

fn document_of(definitions: impl IntoIterator<Item = Definition>) -> Document {
    definitions.into_iter().collect()
}

/// `query { user { id } }`
fn user_id_query() -> OperationDefinition {
    let mut op = OperationDefinition::new(OperationType::Query);
    op.add_selections([field("user", [field("id", [])])]);
    op
}

#[test]
fn query_with_nested_field_emits_enter_leave_pairs_in_tree_order() {
    let doc = document_of([Definition::from(user_id_query())]);

    let (log, result) = record(&mut RecordingHandler::new(), &doc);

    assert!(result.is_ok());
    assert_eq!(log, vec![
        enter(NodeKind::Document),
        enter(NodeKind::DefinitionList),
        enter(NodeKind::Definition),
        enter(NodeKind::OperationDefinition),
        enter(NodeKind::SelectionList),
        enter(NodeKind::Selection),
        enter_named(NodeKind::SelectionField, "user"),
        enter(NodeKind::SelectionList),
        enter(NodeKind::Selection),
        enter_named(NodeKind::SelectionField, "id"),
        leave_named(NodeKind::SelectionField, "id"),
        leave(NodeKind::Selection),
        leave(NodeKind::SelectionList),
        leave_named(NodeKind::SelectionField, "user"),
        leave(NodeKind::Selection),
        leave(NodeKind::SelectionList),
        leave(NodeKind::OperationDefinition),
        leave(NodeKind::Definition),
        leave(NodeKind::DefinitionList),
        leave(NodeKind::Document),
    ]);
}

#[test]
fn definitions_are_entered_in_insertion_order() {
    let mut named_op = OperationDefinition::new(OperationType::Mutation);
    named_op.set_name("DoThing");
    let doc = document_of([
        Definition::from(UnionDefinition::new("SearchResult")),
        Definition::from(named_op),
        Definition::from(FragmentDefinition::new("UserBits", NamedType::new("User"))),
        Definition::from(ObjectDefinition::new("User")),
        Definition::from(InterfaceDefinition::new("Node")),
        Definition::from(EnumDefinition::new("Color")),
        Definition::from(InputDefinition::new("UserFilter")),
    ]);

    let (log, result) = record(&mut RecordingHandler::new(), &doc);

    assert!(result.is_ok());
    let entered: Vec<_> = log
        .iter()
        .filter(|(stage, kind, _)| *stage == "enter" && *kind == NodeKind::Definition)
        .map(|(_, _, name)| name.as_deref())
        .collect();
    assert_eq!(entered, vec![
        Some("SearchResult"),
        Some("DoThing"),
        Some("UserBits"),
        Some("User"),
        Some("Node"),
        Some("Color"),
        Some("UserFilter"),
    ]);
}

#[test]
fn each_definition_is_dispatched_to_its_kind_specific_hooks() {
    let doc = document_of([
        Definition::from(EnumDefinition::new("Color")),
        Definition::from(UnionDefinition::new("SearchResult")),
    ]);

    let (log, _) = record(&mut RecordingHandler::new(), &doc);

    assert_eq!(log[2..log.len() - 2], [
        enter_named(NodeKind::Definition, "Color"),
        enter_named(NodeKind::EnumDefinition, "Color"),
        leave_named(NodeKind::EnumDefinition, "Color"),
        leave_named(NodeKind::Definition, "Color"),
        enter_named(NodeKind::Definition, "SearchResult"),
        enter_named(NodeKind::UnionDefinition, "SearchResult"),
        leave_named(NodeKind::UnionDefinition, "SearchResult"),
        leave_named(NodeKind::Definition, "SearchResult"),
    ]);
}

#[test]
fn empty_document_fires_no_definition_list_hooks() {
    let (log, result) = record(&mut RecordingHandler::new(), &Document::new());

    assert!(result.is_ok());
    assert_eq!(log, vec![enter(NodeKind::Document), leave(NodeKind::Document)]);
}

#[test]
fn operation_without_selections_fires_no_selection_list_hooks() {
    let doc = document_of([Definition::from(OperationDefinition::new(OperationType::Query))]);

    let (log, _) = record(&mut RecordingHandler::new(), &doc);

    assert!(!log.iter().any(|(_, kind, _)| *kind == NodeKind::SelectionList));
    assert_eq!(log[3..5], [
        enter(NodeKind::OperationDefinition),
        leave(NodeKind::OperationDefinition),
    ]);
}

#[test]
fn variable_definitions_and_operation_directives_are_never_visited() {
    let mut with_vars = user_id_query();
    let mut limit = VariableDefinition::new("limit", NamedType::non_null("Int"));
    limit.set_default_value(10_i64);
    with_vars.add_variable_definitions([
        VariableDefinition::new("id", NamedType::non_null("ID")),
        VariableDefinition::new("after", NamedType::new("String")),
        limit,
    ]);
    with_vars.add_directives([Directive::new("cached")]);

    let (plain_log, _) = record(
        &mut RecordingHandler::new(),
        &document_of([Definition::from(user_id_query())]),
    );
    let (vars_log, _) = record(
        &mut RecordingHandler::new(),
        &document_of([Definition::from(with_vars)]),
    );

    assert_eq!(vars_log, plain_log);
}

#[test]
fn fragment_definition_visits_directives_before_selections() {
    let mut frag = FragmentDefinition::new("UserBits", NamedType::new("User"));
    frag.add_directives([Directive::new("a"), Directive::new("b")]);
    frag.add_selections([field("id", [])]);
    let doc = document_of([Definition::from(frag)]);

    let (log, _) = record(&mut RecordingHandler::new(), &doc);

    assert_eq!(log[3..log.len() - 3], [
        enter_named(NodeKind::FragmentDefinition, "UserBits"),
        enter(NodeKind::DirectiveList),
        enter_named(NodeKind::Directive, "a"),
        leave_named(NodeKind::Directive, "a"),
        enter_named(NodeKind::Directive, "b"),
        leave_named(NodeKind::Directive, "b"),
        leave(NodeKind::DirectiveList),
        enter(NodeKind::SelectionList),
        enter(NodeKind::Selection),
        enter_named(NodeKind::SelectionField, "id"),
        leave_named(NodeKind::SelectionField, "id"),
        leave(NodeKind::Selection),
        leave(NodeKind::SelectionList),
        leave_named(NodeKind::FragmentDefinition, "UserBits"),
    ]);
}

#[test]
fn selection_field_visits_directives_then_nested_selections_but_not_arguments() {
    let mut include = Directive::new("include");
    include.add_arguments([Argument::new("if", Value::from(true))]);
    let mut friends = SelectionField::new("friends");
    friends.add_arguments([Argument::new("first", Value::from(10_i64))]);
    friends.add_directives([include]);
    friends.add_selections([field("name", [])]);

    let mut op = OperationDefinition::new(OperationType::Query);
    op.add_selections([Selection::from(friends)]);
    let doc = document_of([Definition::from(op)]);

    let (log, _) = record(&mut RecordingHandler::new(), &doc);

    assert_eq!(log[6..log.len() - 6], [
        enter_named(NodeKind::SelectionField, "friends"),
        enter(NodeKind::DirectiveList),
        enter_named(NodeKind::Directive, "include"),
        leave_named(NodeKind::Directive, "include"),
        leave(NodeKind::DirectiveList),
        enter(NodeKind::SelectionList),
        enter(NodeKind::Selection),
        enter_named(NodeKind::SelectionField, "name"),
        leave_named(NodeKind::SelectionField, "name"),
        leave(NodeKind::Selection),
        leave(NodeKind::SelectionList),
        leave_named(NodeKind::SelectionField, "friends"),
    ]);
}

#[test]
fn fragment_spreads_and_inline_fragments_are_dispatched_by_variant() {
    let mut spread = FragmentSpread::new("UserBits");
    spread.add_directives([Directive::new("skipped")]);
    let mut inline = InlineFragment::new();
    inline.set_type_condition(NamedType::new("Admin"));
    inline.add_directives([Directive::new("defer")]);
    inline.add_selections([field("level", [])]);

    let mut op = OperationDefinition::new(OperationType::Query);
    op.add_selections([Selection::from(spread), Selection::from(inline)]);
    let doc = document_of([Definition::from(op)]);

    let (log, _) = record(&mut RecordingHandler::new(), &doc);

    assert_eq!(log[5..log.len() - 5], [
        enter(NodeKind::Selection),
        enter_named(NodeKind::FragmentSpread, "UserBits"),
        leave_named(NodeKind::FragmentSpread, "UserBits"),
        leave(NodeKind::Selection),
        enter(NodeKind::Selection),
        enter_named(NodeKind::InlineFragment, "Admin"),
        enter(NodeKind::DirectiveList),
        enter_named(NodeKind::Directive, "defer"),
        leave_named(NodeKind::Directive, "defer"),
        leave(NodeKind::DirectiveList),
        enter(NodeKind::SelectionList),
        enter(NodeKind::Selection),
        enter_named(NodeKind::SelectionField, "level"),
        leave_named(NodeKind::SelectionField, "level"),
        leave(NodeKind::Selection),
        leave(NodeKind::SelectionList),
        leave_named(NodeKind::InlineFragment, "Admin"),
        leave(NodeKind::Selection),
    ]);
}

#[test]
fn type_system_definitions_visit_their_field_lists() {
    let mut user = ObjectDefinition::new("User");
    user.set_implements(NamedType::new("Node"));
    user.add_fields([
        ObjectFieldDefinition::new("id", NamedType::non_null("ID")),
        ObjectFieldDefinition::new("name", NamedType::new("String")),
    ]);
    let mut node = InterfaceDefinition::new("Node");
    node.add_fields([InterfaceFieldDefinition::new("id", NamedType::non_null("ID"))]);
    let mut filter = InputDefinition::new("UserFilter");
    filter.add_fields([InputFieldDefinition::new("nameLike", NamedType::new("String"))]);
    let doc = document_of([
        Definition::from(user),
        Definition::from(node),
        Definition::from(filter),
    ]);

    let (log, _) = record(&mut RecordingHandler::new(), &doc);

    let inner: Vec<_> = log
        .into_iter()
        .filter(|(_, kind, _)| {
            !matches!(kind, NodeKind::Document | NodeKind::DefinitionList | NodeKind::Definition)
        })
        .collect();
    assert_eq!(inner, vec![
        enter_named(NodeKind::ObjectDefinition, "User"),
        enter(NodeKind::ObjectFieldDefinitionList),
        enter_named(NodeKind::ObjectFieldDefinition, "id"),
        leave_named(NodeKind::ObjectFieldDefinition, "id"),
        enter_named(NodeKind::ObjectFieldDefinition, "name"),
        leave_named(NodeKind::ObjectFieldDefinition, "name"),
        leave(NodeKind::ObjectFieldDefinitionList),
        leave_named(NodeKind::ObjectDefinition, "User"),
        enter_named(NodeKind::InterfaceDefinition, "Node"),
        enter(NodeKind::InterfaceFieldDefinitionList),
        enter_named(NodeKind::InterfaceFieldDefinition, "id"),
        leave_named(NodeKind::InterfaceFieldDefinition, "id"),
        leave(NodeKind::InterfaceFieldDefinitionList),
        leave_named(NodeKind::InterfaceDefinition, "Node"),
        enter_named(NodeKind::InputDefinition, "UserFilter"),
        enter(NodeKind::InputFieldDefinitionList),
        enter_named(NodeKind::InputFieldDefinition, "nameLike"),
        leave_named(NodeKind::InputFieldDefinition, "nameLike"),
        leave(NodeKind::InputFieldDefinitionList),
        leave_named(NodeKind::InputDefinition, "UserFilter"),
    ]);
}

#[test]
fn definitions_without_members_fire_no_field_list_hooks() {
    let mut color = EnumDefinition::new("Color");
    color.add_elements([EnumElementDefinition::new("RED", 0_i64)]);
    let mut result = UnionDefinition::new("SearchResult");
    result.add_types([Type::from(NamedType::new("User"))]);
    let doc = document_of([
        Definition::from(ObjectDefinition::new("Empty")),
        Definition::from(InterfaceDefinition::new("Marker")),
        Definition::from(InputDefinition::new("NoFields")),
        Definition::from(color),
        Definition::from(result),
    ]);

    let (log, result) = record(&mut RecordingHandler::new(), &doc);

    assert!(result.is_ok());
    assert!(!log.iter().any(|(_, kind, _)| kind.is_list() && *kind != NodeKind::DefinitionList));
    assert_eq!(log.len(), 2 + 2 + 5 * 4);
}

#[test]
fn handler_with_only_defaults_visits_successfully() {
    struct Noop;
    impl Handler for Noop {}

    let doc = document_of([Definition::from(user_id_query())]);

    assert!(crate::visit(&mut (), &mut Noop, &doc).is_ok());
}

#[test]
fn context_is_threaded_through_every_callback() {
    struct DepthTracker;
    impl Handler<(usize, usize)> for DepthTracker {
        fn enter_selection_list(&mut self, ctx: &mut (usize, usize)) -> crate::EnterResult {
            ctx.0 += 1;
            ctx.1 = ctx.1.max(ctx.0);
            Ok(crate::VisitFlow::Continue)
        }

        fn leave_selection_list(&mut self, ctx: &mut (usize, usize)) -> crate::LeaveResult {
            ctx.0 -= 1;
            Ok(())
        }
    }

    let mut op = OperationDefinition::new(OperationType::Query);
    op.add_selections([field("a", [field("b", [field("c", [])])]), field("d", [])]);
    let doc = document_of([Definition::from(op)]);

    let mut depths = (0_usize, 0_usize);
    crate::visit(&mut depths, &mut DepthTracker, &doc).unwrap();

    assert_eq!(depths, (0, 3));
}
