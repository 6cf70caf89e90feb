//! Conversion from [`graphql_parser`] v0.4 ASTs into this crate's AST.
//!
//! The conversion is lossy: source positions and descriptions are dropped,
//! object-literal fields come out in key order (`graphql_parser` stores them
//! in a `BTreeMap`), and definitions this AST has no node for (scalars,
//! directive definitions, schema definitions, and type extensions) are
//! skipped. Constructs that cannot be represented at all produce a
//! [`ConversionError`].

mod conversion_error;
mod from_query;
mod from_schema;
mod helpers;

pub use conversion_error::ConversionError;
pub use from_query::from_graphql_parser_query_ast;
pub use from_schema::from_graphql_parser_schema_ast;
pub use from_schema::schema_from_graphql_parser_schema_ast;

#[cfg(test)]
mod tests;
