//! `buildgen completions`: print a shell completion script on stdout.

use clap::CommandFactory;
use clap_complete::{Shell as Target, generate};
use tracing::debug;

use crate::{
    cli::{Cli, CompletionsArgs, Shell},
    error::CliResult,
};

pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    let target = target(args.shell);
    debug!(shell = %target, "Generating completions");

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_owned();
    generate(target, &mut cmd, bin_name, &mut std::io::stdout());
    Ok(())
}

fn target(shell: Shell) -> Target {
    match shell {
        Shell::Bash => Target::Bash,
        Shell::Zsh => Target::Zsh,
        Shell::Fish => Target::Fish,
        Shell::PowerShell => Target::PowerShell,
        Shell::Elvish => Target::Elvish,
    }
}
