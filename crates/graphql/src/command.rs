use crate::Cli;
use crate::CommandResult;

/// A subcommand of the `graphql` CLI. Implementors take ownership of their
/// parsed args along with the top-level [`Cli`] flags.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}
