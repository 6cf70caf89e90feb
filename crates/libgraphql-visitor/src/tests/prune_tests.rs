use super::recording_handler::enter;
use super::recording_handler::enter_named;
use super::recording_handler::leave;
use super::recording_handler::leave_named;
use super::recording_handler::record;
use super::recording_handler::Event;
use super::recording_handler::RecordingHandler;
use crate::NodeKind;
use libgraphql_ast::Definition;
use libgraphql_ast::Directive;
use libgraphql_ast::Document;
use libgraphql_ast::OperationDefinition;
use libgraphql_ast::OperationType;
use libgraphql_ast::Selection;
use libgraphql_ast::SelectionField;

/// `query { user @tag { id name } viewer { id } }`
fn sample_document() -> Document {
    let mut user = SelectionField::new("user");
    user.add_directives([Directive::new("tag")]);
    user.add_selections([
        Selection::from(SelectionField::new("id")),
        Selection::from(SelectionField::new("name")),
    ]);
    let mut viewer = SelectionField::new("viewer");
    viewer.add_selections([Selection::from(SelectionField::new("id"))]);

    let mut op = OperationDefinition::new(OperationType::Query);
    op.add_selections([Selection::from(user), Selection::from(viewer)]);
    [Definition::from(op)].into_iter().collect()
}

fn count(log: &[Event], event: &Event) -> usize {
    log.iter().filter(|e| *e == event).count()
}

#[test]
fn pruned_field_skips_children_and_still_leaves_once() {
    let mut handler = RecordingHandler::new()
        .prune_on(NodeKind::SelectionField, Some("user"));

    let (log, result) = record(&mut handler, &sample_document());

    assert!(result.is_ok());
    let user_at = log
        .iter()
        .position(|e| *e == enter_named(NodeKind::SelectionField, "user"))
        .unwrap();
    assert_eq!(log[user_at + 1], leave_named(NodeKind::SelectionField, "user"));
    assert_eq!(count(&log, &leave_named(NodeKind::SelectionField, "user")), 1);
    assert_eq!(count(&log, &enter(NodeKind::DirectiveList)), 0);
    assert_eq!(count(&log, &enter_named(NodeKind::SelectionField, "name")), 0);
}

#[test]
fn siblings_of_a_pruned_node_are_still_visited() {
    let mut handler = RecordingHandler::new()
        .prune_on(NodeKind::SelectionField, Some("user"));

    let (log, _) = record(&mut handler, &sample_document());

    assert_eq!(count(&log, &enter_named(NodeKind::SelectionField, "viewer")), 1);
    assert_eq!(count(&log, &enter_named(NodeKind::SelectionField, "id")), 1);
    assert_eq!(log.last(), Some(&leave(NodeKind::Document)));
}

#[test]
fn pruned_selection_wrapper_skips_its_field() {
    let mut handler = RecordingHandler::new().prune_on(NodeKind::Selection, None);

    let (log, result) = record(&mut handler, &sample_document());

    assert!(result.is_ok());
    assert!(!log.iter().any(|(_, kind, _)| *kind == NodeKind::SelectionField));
    assert_eq!(count(&log, &enter(NodeKind::Selection)), 2);
    assert_eq!(count(&log, &leave(NodeKind::Selection)), 2);
}

#[test]
fn pruned_list_skips_elements_and_still_fires_list_leave() {
    let mut handler = RecordingHandler::new().prune_on(NodeKind::SelectionList, None);

    let (log, result) = record(&mut handler, &sample_document());

    assert!(result.is_ok());
    assert_eq!(log[3..log.len() - 3], [
        enter(NodeKind::OperationDefinition),
        enter(NodeKind::SelectionList),
        leave(NodeKind::SelectionList),
        leave(NodeKind::OperationDefinition),
    ]);
}

#[test]
fn pruned_document_only_enters_and_leaves_the_root() {
    let mut handler = RecordingHandler::new().prune_on(NodeKind::Document, None);

    let (log, result) = record(&mut handler, &sample_document());

    assert!(result.is_ok());
    assert_eq!(log, vec![enter(NodeKind::Document), leave(NodeKind::Document)]);
}

#[test]
fn pruning_a_leaf_changes_nothing() {
    let (plain, _) = record(&mut RecordingHandler::new(), &sample_document());
    let mut handler = RecordingHandler::new().prune_on(NodeKind::Directive, None);

    let (pruned, result) = record(&mut handler, &sample_document());

    assert!(result.is_ok());
    assert_eq!(pruned, plain);
}
