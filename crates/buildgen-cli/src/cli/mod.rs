//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "buildgen",
    bin_name = "buildgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Build-time constants and resource accessors",
    long_about = "buildgen compiles a project manifest into typed build constants \
                  and resource accessor tables, ready for a source emitter.",
    after_help = "EXAMPLES:\n\
        \x20 buildgen generate\n\
        \x20 buildgen generate app/buildgen.toml --output-format json\n\
        \x20 buildgen check\n\
        \x20 buildgen schemes\n\
        \x20 buildgen completions bash > /usr/share/bash-completion/completions/buildgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compile a manifest and print the artifact descriptions.
    #[command(
        visible_alias = "gen",
        about = "Compile constants and resource accessors",
        after_help = "EXAMPLES:\n\
            \x20 buildgen generate\n\
            \x20 buildgen generate path/to/buildgen.toml --scheme qualified\n\
            \x20 buildgen gen --output-format json > artifacts.json"
    )]
    Generate(GenerateArgs),

    /// Compile a manifest and report only success or the failure.
    #[command(
        about = "Validate a manifest without printing artifacts",
        after_help = "EXAMPLES:\n\
            \x20 buildgen check\n\
            \x20 buildgen check path/to/buildgen.toml"
    )]
    Check(CheckArgs),

    /// List naming schemes.
    #[command(
        visible_alias = "ls",
        about = "List available naming schemes",
        after_help = "EXAMPLES:\n\
            \x20 buildgen schemes\n\
            \x20 buildgen schemes path/to/buildgen.toml"
    )]
    Schemes(SchemesArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 buildgen completions bash > ~/.local/share/bash-completion/completions/buildgen\n\
            \x20 buildgen completions zsh  > ~/.zfunc/_buildgen\n\
            \x20 buildgen completions fish > ~/.config/fish/completions/buildgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the buildgen configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 buildgen config get defaults.scheme\n\
            \x20 buildgen config list\n\
            \x20 buildgen config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `buildgen generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Project manifest (default: `defaults.manifest`, then `buildgen.toml`).
    #[arg(value_name = "MANIFEST", help = "Project manifest file")]
    pub manifest: Option<PathBuf>,

    /// Scheme for build configs that do not name one.
    #[arg(
        short = 's',
        long = "scheme",
        value_name = "ID",
        help = "Default naming scheme (overrides defaults.scheme)"
    )]
    pub scheme: Option<String>,

    /// Print only the constant tables.
    #[arg(long = "constants-only", conflicts_with = "resources_only")]
    pub constants_only: bool,

    /// Print only the resource accessor tables.
    #[arg(long = "resources-only")]
    pub resources_only: bool,
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `buildgen check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    #[arg(value_name = "MANIFEST", help = "Project manifest file")]
    pub manifest: Option<PathBuf>,

    #[arg(
        short = 's',
        long = "scheme",
        value_name = "ID",
        help = "Default naming scheme (overrides defaults.scheme)"
    )]
    pub scheme: Option<String>,
}

// ── schemes ───────────────────────────────────────────────────────────────────

/// Arguments for `buildgen schemes`.
#[derive(Debug, Args)]
pub struct SchemesArgs {
    /// Manifest whose schemes are listed alongside the built-ins.
    #[arg(value_name = "MANIFEST", help = "Project manifest file")]
    pub manifest: Option<PathBuf>,

    /// List built-in schemes only, without reading any manifest.
    #[arg(long = "builtin", conflicts_with = "manifest")]
    pub builtin: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `buildgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `buildgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.scheme`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
