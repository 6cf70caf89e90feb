//! An owned AST for GraphQL executable documents and type-system schemas.
//!
//! Every node is built once (by a parser, a builder, or the
//! [`compat_graphql_parser_v0_4`] conversion layer) and is read-only from then
//! on. Child lists are plain `Vec`s that preserve insertion order, and each
//! container exposes them as a fresh [`std::slice::Iter`] per call so that a
//! traversal always sees a fully materialized snapshot.
//!
//! The tree has two roots:
//!
//! - [`Document`]: an ordered list of [`Definition`]s (operations, fragments,
//!   and type-system definitions).
//! - [`Schema`]: a designated query-root [`ObjectDefinition`] plus an ordered
//!   list of other object types.

mod argument;
pub mod compat_graphql_parser_v0_4;
mod definition;
mod directive;
mod document;
mod enum_definition;
mod fragment_definition;
mod fragment_spread;
mod inline_fragment;
mod input_definition;
mod interface_definition;
mod node_traits;
mod object_definition;
mod object_field_definition;
mod object_value;
mod operation_definition;
mod operation_type;
mod schema;
mod selection;
mod selection_field;
mod type_annotation;
mod union_definition;
mod value;
mod variable_definition;

pub use argument::Argument;
pub use definition::Definition;
pub use definition::DefinitionRef;
pub use directive::Directive;
pub use document::Document;
pub use enum_definition::EnumDefinition;
pub use enum_definition::EnumElementDefinition;
pub use fragment_definition::FragmentDefinition;
pub use fragment_spread::FragmentSpread;
pub use inline_fragment::InlineFragment;
pub use input_definition::InputDefinition;
pub use input_definition::InputFieldDefinition;
pub use interface_definition::InterfaceDefinition;
pub use interface_definition::InterfaceFieldDefinition;
pub use node_traits::DefaultValued;
pub use node_traits::Named;
pub use node_traits::Typed;
pub use object_definition::ObjectDefinition;
pub use object_field_definition::ObjectFieldArgumentDefinition;
pub use object_field_definition::ObjectFieldDefinition;
pub use object_value::ObjectField;
pub use object_value::ObjectValue;
pub use operation_definition::OperationDefinition;
pub use operation_type::OperationType;
pub use schema::Schema;
pub use selection::Selection;
pub use selection_field::SelectionField;
pub use type_annotation::ListType;
pub use type_annotation::NamedType;
pub use type_annotation::Type;
pub use union_definition::UnionDefinition;
pub use value::BoolValue;
pub use value::EnumValue;
pub use value::FloatValue;
pub use value::IntValue;
pub use value::NullValue;
pub use value::StringValue;
pub use value::Value;
pub use value::Variable;
pub use variable_definition::VariableDefinition;

#[cfg(test)]
mod tests;
