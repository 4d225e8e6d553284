// crates/clear-attribute-cli/src/main.rs
// ============================================================================
// Module: Clear Attribute CLI Entry Point
// Description: Command dispatcher for the attribute nulling command.
// Purpose: Wire config, the SQLite catalog, logging, and the terminal.
// Dependencies: clap, clear-attribute-config, clear-attribute-core,
//               clear-attribute-store-sqlite, thiserror
// ============================================================================

//! ## Overview
//! `clear-attribute null <attribute>` (also reachable as
//! `clear-attribute clearattribute:null <attribute>`) sets every stored value
//! of one product attribute to NULL. Interactive runs ask for confirmation
//! first; `--no-interaction` or a non-terminal stdin skips the prompt.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::IsTerminal;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clear_attribute_cli::logging::build_log_sink;
use clear_attribute_cli::t;
use clear_attribute_cli::terminal::ConsoleTerminal;
use clear_attribute_config::ClearAttributeConfig;
use clear_attribute_core::AttributeCode;
use clear_attribute_core::AttributeNuller;
use clear_attribute_core::RunMode;
use clear_attribute_core::SystemClock;
use clear_attribute_store_sqlite::SqliteCatalogConfig;
use clear_attribute_store_sqlite::SqliteCatalogStore;
use thiserror::Error;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "clear-attribute", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Config file path (overrides `CLEAR_ATTRIBUTE_CONFIG`).
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Set all stored values of a product attribute to NULL.
    #[command(alias = "clearattribute:null")]
    Null(NullCommand),
}

/// Arguments for the `null` command.
#[derive(Args, Debug)]
struct NullCommand {
    /// Attribute code whose values are cleared.
    #[arg(value_name = "ATTRIBUTE")]
    attribute: AttributeCode,
    /// Skip the confirmation prompt.
    #[arg(short = 'n', long = "no-interaction", action = ArgAction::SetTrue)]
    no_interaction: bool,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for catalog-rendered error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a rendered message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Null(command) => command_null(cli.config.as_deref(), &command),
    }
}

/// Prints top-level help.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line("").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}

// ============================================================================
// SECTION: Null Command
// ============================================================================

/// Executes the `null` command.
fn command_null(config_path: Option<&Path>, command: &NullCommand) -> CliResult<ExitCode> {
    let config = ClearAttributeConfig::load(config_path)
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;
    let table_prefix = config
        .database
        .table_prefix()
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;
    let store = SqliteCatalogStore::open(SqliteCatalogConfig {
        path: config.database.path.clone(),
        busy_timeout_ms: config.database.busy_timeout_ms,
        table_prefix,
    })
    .map_err(|err| CliError::new(t!("store.open_failed", error = err)))?;
    let log = build_log_sink(&config.logging)
        .map_err(|err| CliError::new(t!("log.open_failed", error = err)))?;

    let mode = resolve_run_mode(command.no_interaction, std::io::stdin().is_terminal());
    let mut terminal = ConsoleTerminal::new(std::io::stdin().lock(), std::io::stdout());
    let nuller = AttributeNuller::new(store, log, SystemClock);
    let outcome = nuller
        .run(&command.attribute, mode, &mut terminal)
        .map_err(|err| CliError::new(t!("null.aborted", error = err)))?;

    if config.command.exit_policy.succeeded(&outcome, mode) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Resolves whether an operator can answer the confirmation prompt.
const fn resolve_run_mode(no_interaction: bool, stdin_is_terminal: bool) -> RunMode {
    if no_interaction || !stdin_is_terminal {
        RunMode::NonInteractive
    } else {
        RunMode::Interactive
    }
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats an output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}

// ============================================================================
// SECTION: Tests
// ============================================================================
