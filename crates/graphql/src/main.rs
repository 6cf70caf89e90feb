mod cli;
mod command;
mod command_result;
mod commands;
mod outline_printer;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;
pub(crate) use outline_printer::OutlinePrinter;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "multi_thread", worker_threads = 10)]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    if let Some(command) = cli.cmd.take() {
        let result = command.run(cli).await;
        if let Some(stdout) = result.stdout {
            println!("{stdout}");
        }
        if let Some(stderr) = result.stderr {
            eprintln!("{stderr}")
        }
        result.exit_code
    } else {
        match cli.run_default().await {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{} {e:#}", output_utils::RED_X);
                std::process::ExitCode::FAILURE
            },
        }
    }
}

fn setup_logger(cli: &Cli) {
    let (log_level, warning) =
        if cli.verbose {
            (tracing::Level::DEBUG, None)
        } else {
            parse_log_level(std::env::var("LOG_LEVEL").ok().as_deref())
        };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}

/// Map a `LOG_LEVEL` environment variable value to a level. Unrecognized
/// values fall back to [`DEFAULT_LOG_LEVEL`] along with a warning to log once
/// the logger is up.
pub(crate) fn parse_log_level(env_val: Option<&str>) -> (tracing::Level, Option<String>) {
    let Some(env_val) = env_val.map(str::trim) else {
        return (DEFAULT_LOG_LEVEL, None);
    };

    match env_val.to_ascii_lowercase().as_str() {
        "" => (DEFAULT_LOG_LEVEL, None),
        "error" => (tracing::Level::ERROR, None),
        "warn" => (tracing::Level::WARN, None),
        "info" => (tracing::Level::INFO, None),
        "debug" | "verbose" => (tracing::Level::DEBUG, None),
        "trace" => (tracing::Level::TRACE, None),
        _ => (
            DEFAULT_LOG_LEVEL,
            Some(format!("Invalid `LOG_LEVEL` environment variable value: `{env_val}`")),
        ),
    }
}
