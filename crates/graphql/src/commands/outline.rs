use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::OutlinePrinter;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphql_ast::compat_graphql_parser_v0_4::from_graphql_parser_query_ast;
use libgraphql_ast::compat_graphql_parser_v0_4::schema_from_graphql_parser_schema_ast;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct OutlineCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Only outline this many levels of nested selections or fields.",
        long,
    )]
    max_depth: Option<usize>,

    #[arg(
        help="Treat each file as a type-system document with a query root \
             type rather than as an executable document.",
        long,
    )]
    schema: bool,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which need to be outlined.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}
impl OutlineCmd {
    /// Find all GraphQL files recursively located at or under each path
    /// passed as an arg.
    fn find_graphql_files(&self, errors: &mut Vec<anyhow::Error>) -> Vec<PathBuf> {
        let graphql_file_exts: HashSet<&str> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.'))
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(e.into());
                        continue
                    },
                };

                let path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {path:#?}.");
                    continue
                }
                log::trace!("Found file at {path:#?}.");
                if path.extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| graphql_file_exts.contains(ext)) {
                    file_paths.push(path.to_path_buf());
                }
            }
        }

        // If the user specifies a single file path as an argument, presume the
        // user explicitly wants that file outlined even if its file extension
        // doesn't match one of the file extensions in `graphql_file_exts`.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to outline {first_arg_path:#?} even though it \
                doesn't match any of the --graphql-file-exts ({}).",
                self.graphql_file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(first_arg_path.to_owned());
        }

        file_paths
    }

    fn outline_file(&self, path: &Path) -> anyhow::Result<String> {
        let src = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {path:#?}"))?;
        outline_source(&src, self.schema, self.max_depth)
            .with_context(|| format!("Failed to outline {path:#?}"))
    }
}

#[inherent::inherent]
impl RunnableCommand for OutlineCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let mut errors = vec![];
        let file_paths = self.find_graphql_files(&mut errors);
        log::debug!(
            "Found {} GraphQL files to be outlined.",
            file_paths.len(),
        );

        let mut stdout = String::new();
        let mut num_outlined = 0;
        for path in &file_paths {
            match self.outline_file(path) {
                Ok(outline) => {
                    stdout.push_str(&format!("# {}\n{outline}\n", path.display()));
                    num_outlined += 1;
                },
                Err(e) => errors.push(e),
            }
        }

        if errors.is_empty() {
            return CommandResult::stdout(format_args!(
                "{stdout}{} Outlined {num_outlined} files.",
                output_utils::GREEN_CHECK,
            ));
        }

        let stderr = errors.iter()
            .map(|e| format!("{} {e:#}", output_utils::RED_X))
            .collect::<Vec<_>>()
            .join("\n");
        CommandResult::partial_failure(stdout, stderr)
    }
}

/// Parse `src` as an executable document (or, with `as_schema`, a schema) and
/// render its outline.
pub(crate) fn outline_source(
    src: &str,
    as_schema: bool,
    max_depth: Option<usize>,
) -> anyhow::Result<String> {
    let mut outline = String::new();
    let mut printer = OutlinePrinter::new(max_depth);
    if as_schema {
        let gp_doc = graphql_parser::schema::parse_schema::<String>(src)?.into_static();
        let schema = schema_from_graphql_parser_schema_ast(&gp_doc)?;
        libgraphql_visitor::visit(&mut outline, &mut printer, &schema)?;
    } else {
        let gp_doc = graphql_parser::query::parse_query::<String>(src)?.into_static();
        let doc = from_graphql_parser_query_ast(&gp_doc)?;
        libgraphql_visitor::visit(&mut outline, &mut printer, &doc)?;
    }
    Ok(outline)
}
