use super::recording_handler::record;
use super::recording_handler::Event;
use super::recording_handler::RecordingHandler;
use crate::NodeKind;
use libgraphql_ast::Definition;
use libgraphql_ast::Document;
use libgraphql_ast::OperationDefinition;
use libgraphql_ast::OperationType;
use libgraphql_ast::Selection;
use libgraphql_ast::SelectionField;
use proptest::prelude::*;

#[derive(Clone, Debug)]
struct FieldShape {
    children: Vec<FieldShape>,
}
impl FieldShape {
    fn count_fields(&self) -> usize {
        1 + self.children.iter().map(Self::count_fields).sum::<usize>()
    }

    fn count_non_empty_lists(&self) -> usize {
        let own = usize::from(!self.children.is_empty());
        own + self.children.iter().map(Self::count_non_empty_lists).sum::<usize>()
    }
}

fn field_shape() -> impl Strategy<Value = FieldShape> {
    let leaf = Just(FieldShape { children: vec![] });
    leaf.prop_recursive(4, 48, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(|children| FieldShape { children })
    })
}

/// Fields are named `f0`, `f1`, ... in pre-order.
fn build_field(shape: &FieldShape, next_id: &mut usize) -> Selection {
    let mut field = SelectionField::new(format!("f{next_id}"));
    *next_id += 1;
    let children: Vec<_> = shape
        .children
        .iter()
        .map(|child| build_field(child, next_id))
        .collect();
    field.add_selections(children);
    Selection::from(field)
}

fn build_document(shapes: &[FieldShape]) -> Document {
    let mut next_id = 0;
    let mut op = OperationDefinition::new(OperationType::Query);
    let selections: Vec<_> = shapes
        .iter()
        .map(|shape| build_field(shape, &mut next_id))
        .collect();
    op.add_selections(selections);
    [Definition::from(op)].into_iter().collect()
}

fn entered_field_names(log: &[Event]) -> Vec<String> {
    log.iter()
        .filter(|(stage, kind, _)| *stage == "enter" && *kind == NodeKind::SelectionField)
        .filter_map(|(_, _, name)| name.clone())
        .collect()
}

proptest! {
    #[test]
    fn fields_are_entered_in_construction_order(
        shapes in prop::collection::vec(field_shape(), 0..4),
    ) {
        let doc = build_document(&shapes);
        let total: usize = shapes.iter().map(FieldShape::count_fields).sum();

        let (log, result) = record(&mut RecordingHandler::new(), &doc);

        prop_assert!(result.is_ok());
        let expected: Vec<_> = (0..total).map(|id| format!("f{id}")).collect();
        prop_assert_eq!(entered_field_names(&log), expected);
    }

    #[test]
    fn every_enter_is_closed_by_a_matching_leave(
        shapes in prop::collection::vec(field_shape(), 0..4),
    ) {
        let doc = build_document(&shapes);

        let (log, _) = record(&mut RecordingHandler::new(), &doc);

        let mut open: Vec<(NodeKind, Option<String>)> = vec![];
        for (stage, kind, name) in log {
            if stage == "enter" {
                open.push((kind, name));
            } else {
                prop_assert_eq!(open.pop(), Some((kind, name)));
            }
        }
        prop_assert!(open.is_empty());
    }

    #[test]
    fn selection_list_hooks_fire_once_per_non_empty_list(
        shapes in prop::collection::vec(field_shape(), 0..4),
    ) {
        let doc = build_document(&shapes);
        let expected = usize::from(!shapes.is_empty())
            + shapes.iter().map(FieldShape::count_non_empty_lists).sum::<usize>();

        let (log, _) = record(&mut RecordingHandler::new(), &doc);

        let list_enters = log
            .iter()
            .filter(|(stage, kind, _)| *stage == "enter" && *kind == NodeKind::SelectionList)
            .count();
        prop_assert_eq!(list_enters, expected);
    }

    #[test]
    fn pruned_field_hides_exactly_its_descendants(
        shapes in prop::collection::vec(field_shape(), 1..4),
        pick in any::<prop::sample::Index>(),
    ) {
        let doc = build_document(&shapes);
        let (full_log, _) = record(&mut RecordingHandler::new(), &doc);
        let all_fields = entered_field_names(&full_log);
        let pruned = all_fields[pick.index(all_fields.len())].clone();

        let mut handler = RecordingHandler::new()
            .prune_on(NodeKind::SelectionField, Some(pruned.as_str()));
        let (log, result) = record(&mut handler, &doc);

        prop_assert!(result.is_ok());
        let leaves_of_pruned = log
            .iter()
            .filter(|(stage, kind, name)| {
                *stage == "leave"
                    && *kind == NodeKind::SelectionField
                    && name.as_deref() == Some(pruned.as_str())
            })
            .count();
        prop_assert_eq!(leaves_of_pruned, 1);

        // Everything between the pruned field's enter and leave in the full
        // walk is exactly what the pruned walk leaves out.
        let start = full_log
            .iter()
            .position(|(stage, _, name)| {
                *stage == "enter" && name.as_deref() == Some(pruned.as_str())
            })
            .unwrap();
        let end = full_log
            .iter()
            .position(|(stage, _, name)| {
                *stage == "leave" && name.as_deref() == Some(pruned.as_str())
            })
            .unwrap();
        let mut expected = full_log[..=start].to_vec();
        expected.extend_from_slice(&full_log[end..]);
        prop_assert_eq!(log, expected);
    }
}
