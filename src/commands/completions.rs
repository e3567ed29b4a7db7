//! `completions` subcommand handler

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;

use mirrorgrid::cli::Cli;

/// Print the completion script for `shell`.
pub fn handle(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "mirrorgrid", &mut std::io::stdout());
    Ok(())
}
