use crate::compat_graphql_parser_v0_4::from_graphql_parser_schema_ast;
use crate::compat_graphql_parser_v0_4::schema_from_graphql_parser_schema_ast;
use crate::compat_graphql_parser_v0_4::ConversionError;
use crate::Definition;
use crate::DefinitionRef;
use crate::Value;

fn parse(src: &str) -> graphql_parser::schema::Document<'static, String> {
    graphql_parser::schema::parse_schema::<String>(src)
        .expect("parse error")
        .into_static()
}

#[test]
fn type_definitions_keep_document_order() {
    let doc = from_graphql_parser_schema_ast(&parse(
        "scalar DateTime
        interface Node { id: ID! }
        type User implements Node { id: ID! friends(first: Int = 10): [User!] }
        enum Role { ADMIN USER }
        union SearchResult = User | Post
        input UserFilter { role: Role }
        directive @audit on FIELD",
    )).unwrap();

    let names: Vec<_> = doc.definitions()
        .map(|def| DefinitionRef::from(def).name().unwrap())
        .collect();
    assert_eq!(names, vec!["Node", "User", "Role", "SearchResult", "UserFilter"]);
}

#[test]
fn object_fields_arguments_and_implements() {
    let doc = from_graphql_parser_schema_ast(&parse(
        "type User implements Node { id: ID! friends(first: Int = 10): [User!]! }",
    )).unwrap();
    let Some(Definition::ObjectDefinition(user)) = doc.definitions().next() else {
        panic!("expected an object definition");
    };

    assert_eq!(user.implements().unwrap().name(), "Node");
    let fields: Vec<_> = user.fields().collect();
    assert_eq!(fields[0].name(), "id");
    assert_eq!(fields[1].type_annotation().to_string(), "[User!]!");

    let first = fields[1].arguments().next().unwrap();
    assert_eq!(first.name(), "first");
    assert_eq!(first.default_value(), Some(&Value::from(10i64)));
}

#[test]
fn enum_elements_carry_enum_values() {
    let doc = from_graphql_parser_schema_ast(&parse("enum Role { ADMIN USER }")).unwrap();
    let Some(Definition::EnumDefinition(role)) = doc.definitions().next() else {
        panic!("expected an enum definition");
    };

    let elements: Vec<_> = role.elements()
        .map(|elem| (elem.name(), elem.value().kind_name()))
        .collect();
    assert_eq!(elements, vec![("ADMIN", "enum"), ("USER", "enum")]);
}

#[test]
fn multiple_implemented_interfaces_are_rejected() {
    let err = from_graphql_parser_schema_ast(&parse(
        "type User implements Node & Entity { id: ID! }",
    )).unwrap_err();
    assert_eq!(
        err,
        ConversionError::MultipleImplementedInterfaces {
            type_name: "User".to_string(),
            interface_names: vec!["Node".to_string(), "Entity".to_string()],
        },
    );
}

#[test]
fn schema_uses_default_query_root() {
    let schema = schema_from_graphql_parser_schema_ast(&parse(
        "type User { id: ID! }
        type Query { me: User }
        type Post { id: ID! }",
    )).unwrap();

    assert_eq!(schema.query().name(), "Query");
    let type_names: Vec<_> = schema.types().map(|t| t.name()).collect();
    assert_eq!(type_names, vec!["User", "Post"]);
}

#[test]
fn schema_honors_schema_definition_query_root() {
    let schema = schema_from_graphql_parser_schema_ast(&parse(
        "schema { query: RootQuery }
        type RootQuery { me: User }
        type Query { unused: Int }
        type User { id: ID! }",
    )).unwrap();

    assert_eq!(schema.query().name(), "RootQuery");
    let type_names: Vec<_> = schema.types().map(|t| t.name()).collect();
    assert_eq!(type_names, vec!["Query", "User"]);
}

#[test]
fn schema_without_query_root_is_rejected() {
    let err = schema_from_graphql_parser_schema_ast(&parse("type User { id: ID! }"))
        .unwrap_err();
    assert_eq!(
        err,
        ConversionError::MissingQueryType { type_name: "Query".to_string() },
    );
}

#[test]
fn schema_rejects_non_object_types() {
    let err = schema_from_graphql_parser_schema_ast(&parse(
        "type Query { role: Role } enum Role { ADMIN }",
    )).unwrap_err();
    assert_eq!(
        err,
        ConversionError::UnsupportedSchemaType {
            kind: "enum",
            type_name: "Role".to_string(),
        },
    );
}
