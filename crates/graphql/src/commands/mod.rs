mod outline;

use crate::Cli;
use crate::CommandResult;
use outline::OutlineCmd;
#[cfg(test)]
pub(crate) use outline::outline_source;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql")]
pub(crate) enum CommandEnum {
    /// Print an indented outline of the definitions and selections in one
    /// or more GraphQL files.
    Outline(Box<OutlineCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Outline(cmd) => cmd.run(cli).await
        }
    }
}
