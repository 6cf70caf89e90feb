use crate::Argument;
use crate::Directive;
use crate::ListType;
use crate::NamedType;
use crate::ObjectField;
use crate::ObjectValue;
use crate::Type;
use crate::Value;
use crate::compat_graphql_parser_v0_4::ConversionError;

type Result<T> = std::result::Result<T, ConversionError>;

pub(super) fn gp_arguments_to_ast(
    arguments: &[(String, graphql_parser::query::Value<'static, String>)],
) -> Result<Vec<Argument>> {
    arguments.iter()
        .map(|(name, value)| Ok(Argument::new(name.as_str(), gp_value_to_ast(value)?)))
        .collect()
}

pub(super) fn gp_directives_to_ast(
    directives: &[graphql_parser::query::Directive<'static, String>],
) -> Result<Vec<Directive>> {
    directives.iter()
        .map(|gp_directive| {
            let mut directive = Directive::new(gp_directive.name.as_str());
            directive.add_arguments(gp_arguments_to_ast(&gp_directive.arguments)?);
            Ok(directive)
        })
        .collect()
}

pub(super) fn gp_type_to_ast(
    ty: &graphql_parser::query::Type<'static, String>,
) -> Type {
    use graphql_parser::query::Type as GpType;
    match ty {
        GpType::NamedType(name) => NamedType::new(name.as_str()).into(),
        GpType::ListType(inner) => ListType::new(gp_type_to_ast(inner)).into(),
        GpType::NonNullType(inner) => {
            let mut ty = gp_type_to_ast(inner);
            ty.set_nullable(false);
            ty
        },
    }
}

pub(super) fn gp_value_to_ast(
    value: &graphql_parser::query::Value<'static, String>,
) -> Result<Value> {
    use graphql_parser::query::Value as GpValue;
    Ok(match value {
        GpValue::Boolean(b) => Value::from(*b),
        GpValue::Enum(name) => crate::EnumValue::new(name.as_str()).into(),
        GpValue::Float(f) => Value::from(*f),
        GpValue::Int(n) => Value::from(
            n.as_i64().ok_or(ConversionError::IntValueOutOfRange)?,
        ),
        GpValue::List(_) => return Err(ConversionError::UnsupportedListValue),
        GpValue::Null => Value::Null(crate::NullValue::new()),
        GpValue::Object(map) => {
            let mut obj = ObjectValue::new();
            for (key, val) in map {
                obj.add_fields([ObjectField::new(key.as_str(), gp_value_to_ast(val)?)]);
            }
            obj.into()
        },
        GpValue::String(s) => Value::from(s.as_str()),
        GpValue::Variable(name) => crate::Variable::new(name.as_str()).into(),
    })
}
