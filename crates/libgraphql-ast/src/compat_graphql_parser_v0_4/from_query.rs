//! `graphql_parser` v0.4 query `Document` → libgraphql-ast [`Document`].

use crate::compat_graphql_parser_v0_4::ConversionError;
use crate::compat_graphql_parser_v0_4::helpers::gp_arguments_to_ast;
use crate::compat_graphql_parser_v0_4::helpers::gp_directives_to_ast;
use crate::compat_graphql_parser_v0_4::helpers::gp_type_to_ast;
use crate::compat_graphql_parser_v0_4::helpers::gp_value_to_ast;
use crate::Definition;
use crate::Document;
use crate::FragmentDefinition;
use crate::FragmentSpread;
use crate::InlineFragment;
use crate::NamedType;
use crate::OperationDefinition;
use crate::OperationType;
use crate::Selection;
use crate::SelectionField;
use crate::VariableDefinition;

type Result<T> = std::result::Result<T, ConversionError>;

/// Convert a `graphql_parser` executable document into a [`Document`].
///
/// Shorthand operations (a bare `{ ... }` selection set) become anonymous
/// queries. Subscriptions have no [`OperationType`] in this AST and are
/// rejected with [`ConversionError::UnsupportedSubscription`].
pub fn from_graphql_parser_query_ast(
    doc: &graphql_parser::query::Document<'static, String>,
) -> Result<Document> {
    use graphql_parser::query::Definition as GpDef;

    let mut definitions = Vec::with_capacity(doc.definitions.len());
    for def in &doc.definitions {
        definitions.push(match def {
            GpDef::Operation(op) => Definition::OperationDefinition(gp_operation_to_ast(op)?),
            GpDef::Fragment(frag) => Definition::FragmentDefinition(gp_fragment_def_to_ast(frag)?),
        });
    }
    Ok(definitions.into_iter().collect())
}

fn gp_operation_to_ast(
    op: &graphql_parser::query::OperationDefinition<'static, String>,
) -> Result<OperationDefinition> {
    use graphql_parser::query::OperationDefinition as GpOp;
    match op {
        GpOp::SelectionSet(selection_set) => build_operation(
            OperationType::Query,
            None,
            &[],
            &[],
            selection_set,
        ),

        GpOp::Query(query) => build_operation(
            OperationType::Query,
            query.name.as_ref(),
            &query.variable_definitions,
            &query.directives,
            &query.selection_set,
        ),

        GpOp::Mutation(mutation) => build_operation(
            OperationType::Mutation,
            mutation.name.as_ref(),
            &mutation.variable_definitions,
            &mutation.directives,
            &mutation.selection_set,
        ),

        GpOp::Subscription(subscription) => Err(ConversionError::UnsupportedSubscription {
            operation_name: subscription.name.to_owned(),
        }),
    }
}

fn build_operation(
    operation_type: OperationType,
    name: Option<&String>,
    variable_definitions: &[graphql_parser::query::VariableDefinition<'static, String>],
    directives: &[graphql_parser::query::Directive<'static, String>],
    selection_set: &graphql_parser::query::SelectionSet<'static, String>,
) -> Result<OperationDefinition> {
    let mut op = OperationDefinition::new(operation_type);
    if let Some(name) = name {
        op.set_name(name.as_str());
    }

    let mut variables = Vec::with_capacity(variable_definitions.len());
    for gp_var in variable_definitions {
        let mut var = VariableDefinition::new(
            gp_var.name.as_str(),
            gp_type_to_ast(&gp_var.var_type),
        );
        if let Some(default_value) = &gp_var.default_value {
            var.set_default_value(gp_value_to_ast(default_value)?);
        }
        variables.push(var);
    }
    op.add_variable_definitions(variables);
    op.add_directives(gp_directives_to_ast(directives)?);
    op.add_selections(gp_selection_set_to_ast(selection_set)?);
    Ok(op)
}

fn gp_fragment_def_to_ast(
    frag: &graphql_parser::query::FragmentDefinition<'static, String>,
) -> Result<FragmentDefinition> {
    let graphql_parser::query::TypeCondition::On(type_name) = &frag.type_condition;
    let mut fragment = FragmentDefinition::new(
        frag.name.as_str(),
        NamedType::new(type_name.as_str()),
    );
    fragment.add_directives(gp_directives_to_ast(&frag.directives)?);
    fragment.add_selections(gp_selection_set_to_ast(&frag.selection_set)?);
    Ok(fragment)
}

fn gp_selection_set_to_ast(
    selection_set: &graphql_parser::query::SelectionSet<'static, String>,
) -> Result<Vec<Selection>> {
    selection_set.items.iter()
        .map(gp_selection_to_ast)
        .collect()
}

fn gp_selection_to_ast(
    selection: &graphql_parser::query::Selection<'static, String>,
) -> Result<Selection> {
    use graphql_parser::query::Selection as GpSel;
    Ok(match selection {
        GpSel::Field(gp_field) => {
            let mut field = SelectionField::new(gp_field.name.as_str());
            if let Some(alias) = &gp_field.alias {
                field.set_alias(alias.as_str());
            }
            field.add_arguments(gp_arguments_to_ast(&gp_field.arguments)?);
            field.add_directives(gp_directives_to_ast(&gp_field.directives)?);
            field.add_selections(gp_selection_set_to_ast(&gp_field.selection_set)?);
            field.into()
        },

        GpSel::FragmentSpread(gp_spread) => {
            let mut spread = FragmentSpread::new(gp_spread.fragment_name.as_str());
            spread.add_directives(gp_directives_to_ast(&gp_spread.directives)?);
            spread.into()
        },

        GpSel::InlineFragment(gp_inline) => {
            let mut inline = InlineFragment::new();
            if let Some(graphql_parser::query::TypeCondition::On(type_name)) =
                &gp_inline.type_condition {
                inline.set_type_condition(NamedType::new(type_name.as_str()));
            }
            inline.add_directives(gp_directives_to_ast(&gp_inline.directives)?);
            inline.add_selections(gp_selection_set_to_ast(&gp_inline.selection_set)?);
            inline.into()
        },
    })
}
