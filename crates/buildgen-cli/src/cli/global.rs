//! Flags shared by every `buildgen` subcommand.

use std::path::PathBuf;

use clap::Args;

/// Flattened into [`super::Cli`]; every flag is `global`, so it may appear
/// before or after the subcommand.
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Diagnostic detail on stderr: `-v` info, `-vv` debug, `-vvv` trace.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "More diagnostics on stderr (-v, -vv, -vvv)",
        long_help = "More diagnostics on stderr:
    (none)  - warnings and errors, e.g. skipped resource files
    -v      - pass summaries per manifest
    -vv     - one line per compiled table and scanned file
    -vvv    - everything"
    )]
    pub verbose: u8,

    /// Print nothing but errors (JSON output is still written).
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only print errors"
    )]
    pub quiet: bool,

    /// Plain text without ANSI escapes; `NO_COLOR` has the same effect.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// App config file; must exist when given.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read app settings from FILE"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How results are printed on stdout"
    )]
    pub output_format: OutputFormat,
}

/// Rendering of command results on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `output.format` from the config, else human on a terminal, plain otherwise.
    #[default]
    Auto,
    /// Aligned tables with colour.
    Human,
    /// Aligned tables, no colour.
    Plain,
    /// The serialized artifacts, pretty-printed.
    Json,
}
