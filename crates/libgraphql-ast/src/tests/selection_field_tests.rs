use crate::Argument;
use crate::Directive;
use crate::Selection;
use crate::SelectionField;

#[test]
fn response_key_prefers_alias() {
    let mut field = SelectionField::new("user");
    assert_eq!(field.response_key(), "user");
    assert!(!field.has_alias());

    field.set_alias("me");
    assert_eq!(field.response_key(), "me");
    assert_eq!(field.name(), "user");
}

#[test]
fn children_are_appended_in_order() {
    let mut directive = Directive::new("include");
    directive.add_arguments([Argument::new("if", true)]);

    let mut field = SelectionField::new("user");
    field.add_arguments([Argument::new("id", 4i64)]);
    field.add_directives([directive]);
    field.add_selections([Selection::from(SelectionField::new("id"))]);
    field.add_selections([
        Selection::from(SelectionField::new("name")),
        Selection::from(SelectionField::new("email")),
    ]);

    let names: Vec<_> = field.selections()
        .filter_map(Selection::as_field)
        .map(|f| f.name())
        .collect();
    assert_eq!(names, vec!["id", "name", "email"]);
    assert_eq!(field.directives().next().unwrap().arguments().count(), 1);
}

#[test]
fn child_iterators_are_single_pass_but_requeryable() {
    let mut field = SelectionField::new("user");
    field.add_selections([Selection::from(SelectionField::new("id"))]);

    let mut iter = field.selections();
    assert!(iter.next().is_some());
    assert!(iter.next().is_none());
    assert!(iter.next().is_none());

    assert_eq!(field.selections().count(), 1);
}
