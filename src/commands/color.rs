//! `color` subcommand handler

use anyhow::Result;

use mirrorgrid::cli::ColorArgs;
use mirrorgrid::format_text;

use super::{read_input, write_stdout};

/// Color stdin uniformly and write the cells to stdout.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &ColorArgs) -> Result<()> {
    // Validate colors before blocking on input
    let (mode, foreground, background) = args.colors()?;
    let text = read_input(args.text.clone())?;
    write_stdout(&format_text(mode, &text, foreground, background)?)
}
