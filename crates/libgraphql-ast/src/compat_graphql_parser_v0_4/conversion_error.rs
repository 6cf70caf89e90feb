use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConversionError {
    #[error("Integer literal does not fit in a 64-bit signed integer")]
    IntValueOutOfRange,

    #[error("No object type named `{type_name}` was found to serve as the query root")]
    MissingQueryType {
        type_name: String,
    },

    #[error(
        "The `{type_name}` type implements {} interfaces ({}), but at most \
        one implemented interface is supported",
        interface_names.len(),
        interface_names.join(", "),
    )]
    MultipleImplementedInterfaces {
        type_name: String,
        interface_names: Vec<String>,
    },

    #[error("List values cannot be represented as a `Value`")]
    UnsupportedListValue,

    #[error(
        "The `{type_name}` {kind} type cannot be added to a `Schema`, which \
        only holds object types"
    )]
    UnsupportedSchemaType {
        kind: &'static str,
        type_name: String,
    },

    #[error(
        "Subscription operations are not supported (operation: {})",
        operation_name.as_deref().unwrap_or("<anonymous>"),
    )]
    UnsupportedSubscription {
        operation_name: Option<String>,
    },
}
