//! `graphql_parser` v0.4 schema `Document` → libgraphql-ast [`Document`] or
//! [`Schema`].

use crate::compat_graphql_parser_v0_4::ConversionError;
use crate::compat_graphql_parser_v0_4::helpers::gp_type_to_ast;
use crate::compat_graphql_parser_v0_4::helpers::gp_value_to_ast;
use crate::Definition;
use crate::Document;
use crate::EnumDefinition;
use crate::EnumElementDefinition;
use crate::EnumValue;
use crate::InputDefinition;
use crate::InputFieldDefinition;
use crate::InterfaceDefinition;
use crate::InterfaceFieldDefinition;
use crate::NamedType;
use crate::ObjectDefinition;
use crate::ObjectFieldArgumentDefinition;
use crate::ObjectFieldDefinition;
use crate::Schema;
use crate::Type;
use crate::UnionDefinition;

type Result<T> = std::result::Result<T, ConversionError>;

const DEFAULT_QUERY_TYPE_NAME: &str = "Query";

/// Convert the type definitions of a `graphql_parser` schema document into a
/// [`Document`] of type-system [`Definition`]s, preserving their order.
///
/// Scalar types, directive definitions, `schema { ... }` definitions, and
/// type extensions have no node in this AST and are skipped.
pub fn from_graphql_parser_schema_ast(
    doc: &graphql_parser::schema::Document<'static, String>,
) -> Result<Document> {
    use graphql_parser::schema::Definition as GpDef;
    use graphql_parser::schema::TypeDefinition as GpTypeDef;

    let mut definitions = vec![];
    for def in &doc.definitions {
        let type_def = match def {
            GpDef::TypeDefinition(type_def) => type_def,
            GpDef::DirectiveDefinition(directive_def) => {
                log::debug!(
                    "Skipping directive definition `@{}`: not representable \
                    in the AST.",
                    directive_def.name,
                );
                continue
            },
            GpDef::SchemaDefinition(_) => {
                log::debug!("Skipping `schema` definition: not representable in the AST.");
                continue
            },
            GpDef::TypeExtension(_) => {
                log::debug!("Skipping type extension: not representable in the AST.");
                continue
            },
        };

        definitions.push(match type_def {
            GpTypeDef::Enum(enum_type) => Definition::EnumDefinition(gp_enum_to_ast(enum_type)),
            GpTypeDef::InputObject(input_type) =>
                Definition::InputDefinition(gp_input_object_to_ast(input_type)),
            GpTypeDef::Interface(iface_type) =>
                Definition::InterfaceDefinition(gp_interface_to_ast(iface_type)),
            GpTypeDef::Object(obj_type) =>
                Definition::ObjectDefinition(gp_object_to_ast(obj_type)?),
            GpTypeDef::Scalar(scalar_type) => {
                log::debug!(
                    "Skipping scalar type `{}`: not representable in the AST.",
                    scalar_type.name,
                );
                continue
            },
            GpTypeDef::Union(union_type) => Definition::UnionDefinition(gp_union_to_ast(union_type)),
        });
    }
    Ok(definitions.into_iter().collect())
}

/// Convert a `graphql_parser` schema document into a [`Schema`].
///
/// The query root is the type named by `schema { query: ... }` when present,
/// otherwise the type named `Query`. Every other object type is added to
/// [`Schema::types`] in document order. Interface, union, enum, and input
/// types cannot be held by a [`Schema`] and are rejected.
pub fn schema_from_graphql_parser_schema_ast(
    doc: &graphql_parser::schema::Document<'static, String>,
) -> Result<Schema> {
    use graphql_parser::schema::Definition as GpDef;
    use graphql_parser::schema::TypeDefinition as GpTypeDef;

    let query_type_name = doc.definitions.iter()
        .find_map(|def| match def {
            GpDef::SchemaDefinition(schema_def) => schema_def.query.as_deref(),
            _ => None,
        })
        .unwrap_or(DEFAULT_QUERY_TYPE_NAME);

    let mut query = None;
    let mut types = vec![];
    for def in &doc.definitions {
        let GpDef::TypeDefinition(type_def) = def else {
            continue
        };

        let (kind, type_name) = match type_def {
            GpTypeDef::Object(obj_type) => {
                let obj_def = gp_object_to_ast(obj_type)?;
                if query.is_none() && obj_type.name == query_type_name {
                    query = Some(obj_def);
                } else {
                    types.push(obj_def);
                }
                continue
            },
            GpTypeDef::Scalar(scalar_type) => {
                log::debug!(
                    "Skipping scalar type `{}`: not representable in a Schema.",
                    scalar_type.name,
                );
                continue
            },
            GpTypeDef::Enum(enum_type) => ("enum", &enum_type.name),
            GpTypeDef::InputObject(input_type) => ("input object", &input_type.name),
            GpTypeDef::Interface(iface_type) => ("interface", &iface_type.name),
            GpTypeDef::Union(union_type) => ("union", &union_type.name),
        };
        return Err(ConversionError::UnsupportedSchemaType {
            kind,
            type_name: type_name.to_owned(),
        });
    }

    let query = query.ok_or_else(|| ConversionError::MissingQueryType {
        type_name: query_type_name.to_string(),
    })?;
    let mut schema = Schema::new(query);
    schema.add_types(types);
    Ok(schema)
}

fn gp_enum_to_ast(
    enum_type: &graphql_parser::schema::EnumType<'static, String>,
) -> EnumDefinition {
    let mut enum_def = EnumDefinition::new(enum_type.name.as_str());
    enum_def.add_elements(enum_type.values.iter().map(|gp_value| {
        EnumElementDefinition::new(
            gp_value.name.as_str(),
            EnumValue::new(gp_value.name.as_str()),
        )
    }));
    enum_def
}

fn gp_input_object_to_ast(
    input_type: &graphql_parser::schema::InputObjectType<'static, String>,
) -> InputDefinition {
    let mut input_def = InputDefinition::new(input_type.name.as_str());
    input_def.add_fields(input_type.fields.iter().map(|gp_field| {
        InputFieldDefinition::new(
            gp_field.name.as_str(),
            gp_type_to_ast(&gp_field.value_type),
        )
    }));
    input_def
}

fn gp_interface_to_ast(
    iface_type: &graphql_parser::schema::InterfaceType<'static, String>,
) -> InterfaceDefinition {
    let mut iface_def = InterfaceDefinition::new(iface_type.name.as_str());
    iface_def.add_fields(iface_type.fields.iter().map(|gp_field| {
        InterfaceFieldDefinition::new(
            gp_field.name.as_str(),
            gp_type_to_ast(&gp_field.field_type),
        )
    }));
    iface_def
}

fn gp_object_to_ast(
    obj_type: &graphql_parser::schema::ObjectType<'static, String>,
) -> Result<ObjectDefinition> {
    let mut obj_def = ObjectDefinition::new(obj_type.name.as_str());
    match obj_type.implements_interfaces.as_slice() {
        [] => (),
        [iface_name] => obj_def.set_implements(NamedType::new(iface_name.as_str())),
        iface_names => return Err(ConversionError::MultipleImplementedInterfaces {
            type_name: obj_type.name.to_owned(),
            interface_names: iface_names.to_vec(),
        }),
    }

    let mut fields = Vec::with_capacity(obj_type.fields.len());
    for gp_field in &obj_type.fields {
        let mut field = ObjectFieldDefinition::new(
            gp_field.name.as_str(),
            gp_type_to_ast(&gp_field.field_type),
        );
        let mut arguments = Vec::with_capacity(gp_field.arguments.len());
        for gp_arg in &gp_field.arguments {
            let mut arg = ObjectFieldArgumentDefinition::new(
                gp_arg.name.as_str(),
                gp_type_to_ast(&gp_arg.value_type),
            );
            if let Some(default_value) = &gp_arg.default_value {
                arg.set_default_value(gp_value_to_ast(default_value)?);
            }
            arguments.push(arg);
        }
        field.add_arguments(arguments);
        fields.push(field);
    }
    obj_def.add_fields(fields);
    Ok(obj_def)
}

fn gp_union_to_ast(
    union_type: &graphql_parser::schema::UnionType<'static, String>,
) -> UnionDefinition {
    let mut union_def = UnionDefinition::new(union_type.name.as_str());
    union_def.add_types(
        union_type.types.iter()
            .map(|member_name| Type::from(NamedType::new(member_name.as_str()))),
    );
    union_def
}
