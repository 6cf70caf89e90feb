use crate::ObjectField;
use crate::ObjectValue;
use crate::Value;
use crate::Variable;

#[test]
fn object_values_nest_and_keep_field_order() {
    let mut inner = ObjectValue::new();
    inner.add_fields([ObjectField::new("first", 10i64)]);

    let mut outer = ObjectValue::new();
    outer.add_fields([
        ObjectField::new("page", inner),
        ObjectField::new("after", Variable::new("cursor")),
        ObjectField::new("exact", true),
    ]);

    let names: Vec<_> = outer.fields().map(|f| f.name()).collect();
    assert_eq!(names, vec!["page", "after", "exact"]);

    let page = outer.get("page").and_then(Value::as_object).unwrap();
    assert!(matches!(page.get("first"), Some(Value::Int(n)) if n.value() == 10));
    assert_eq!(outer.get("after").unwrap().kind_name(), "variable");
    assert!(outer.get("missing").is_none());
}

#[test]
fn scalar_conversions_pick_matching_variants() {
    assert_eq!(Value::from(1.5).kind_name(), "float");
    assert_eq!(Value::from("hi").kind_name(), "string");
    assert_eq!(Value::from(false).kind_name(), "boolean");
    assert!(matches!(Value::from("hi"), Value::String(s) if s.value() == "hi"));
}
