//! # buildgen
//!
//! Compiles a project manifest into build constants and resource accessors.
//!
//! Startup: parse arguments, install logging, load the app config, build the
//! [`OutputManager`], then dispatch. Every failure after parsing becomes a
//! [`CliError`], printed on stderr with an exit code:
//!
//! | Code | Meaning                                      |
//! |------|----------------------------------------------|
//! |  0   | Success                                      |
//! |  1   | Internal or I/O failure                      |
//! |  2   | Bad input: manifest, values, name collisions |
//! |  3   | Manifest, directory or scheme not found      |
//! |  4   | App configuration error                      |

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use tracing::{debug, info, instrument, warn};

use crate::{
    cli::{Cli, Commands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Loaded before parsing so `NO_COLOR` and friends apply; reported once
    // logging is up.
    let dotenv = dotenvy::dotenv();

    // Help and version arrive as errors too; they print to stdout and exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(if e.use_stderr() { 2 } else { 0 });
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("{e}");
        return ExitCode::from(1);
    }
    report_dotenv(&dotenv);

    let verbose = cli.global.verbose > 0;
    match bootstrap(&cli.global).and_then(|(config, output)| run(cli, config, output)) {
        Ok(()) => {
            info!("Done");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose),
    }
}

/// Why a `.env` load result deserves a warning. A missing file does not.
fn dotenv_problem(result: &Result<PathBuf, dotenvy::Error>) -> Option<String> {
    match result {
        Err(e) if e.not_found() => None,
        Err(e) => Some(e.to_string()),
        Ok(_) => None,
    }
}

fn report_dotenv(result: &Result<PathBuf, dotenvy::Error>) {
    if let Some(problem) = dotenv_problem(result) {
        warn!(error = %problem, "Ignoring malformed .env file");
    } else if let Ok(path) = result {
        debug!(path = %path.display(), "Loaded .env");
    }
}

/// Load the app config and derive the output settings from it.
fn bootstrap(global: &GlobalArgs) -> CliResult<(AppConfig, OutputManager)> {
    let config = AppConfig::load(global.config.as_ref()).map_err(|e| CliError::ConfigError {
        message: format!("{e:#}"),
        source: None,
    })?;

    let output = OutputManager::new(global, &config);
    debug!(
        scheme = %config.defaults.scheme,
        format = ?output.format(),
        color = output.supports_color(),
        "Configuration loaded"
    );
    Ok((config, output))
}

#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::Generate(args) => commands::generate::execute(args, config, output),
        Commands::Check(args) => commands::check::execute(args, config, output),
        Commands::Schemes(args) => commands::schemes::execute(args, config, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(cmd) => commands::config::execute(cmd, config, output),
    }
}

/// Log `err`, print it on stderr and map it to an exit code.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    err.log();

    let message = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{message}");

    ExitCode::from(err.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn version_comes_from_cargo() {
        assert_eq!(Cli::command().get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn every_subcommand_is_registered() {
        let cmd = Cli::command();
        let names: Vec<_> = cmd.get_subcommands().map(|c| c.get_name()).collect();
        assert_eq!(names, ["generate", "check", "schemes", "completions", "config"]);
    }

    #[test]
    fn only_a_missing_dotenv_is_silent() {
        let missing = Err(dotenvy::Error::Io(std::io::Error::from(
            std::io::ErrorKind::NotFound,
        )));
        assert_eq!(dotenv_problem(&missing), None);
        assert_eq!(dotenv_problem(&Ok(PathBuf::from(".env"))), None);

        let malformed = Err(dotenvy::Error::LineParse("KEY VALUE".into(), 4));
        assert!(dotenv_problem(&malformed).unwrap().contains("KEY VALUE"));

        let unreadable = Err(dotenvy::Error::Io(std::io::Error::from(
            std::io::ErrorKind::PermissionDenied,
        )));
        assert!(dotenv_problem(&unreadable).is_some());
    }

    #[test]
    fn malformed_dotenv_file_is_reported() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "BUILDGEN_OK=1\nnot a valid line\n").unwrap();

        let parsed = dotenvy::from_path_iter(&path)
            .and_then(|lines| lines.collect::<Result<Vec<_>, _>>())
            .map(|_| path.clone());
        assert!(dotenv_problem(&parsed).is_some());
    }

    #[test]
    fn missing_config_file_is_a_config_error() {
        let global = GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: Some("/nonexistent/buildgen-config.toml".into()),
            output_format: cli::OutputFormat::Plain,
        };
        let err = bootstrap(&global).err().unwrap();
        assert_eq!(err.exit_code(), 4);
    }
}
