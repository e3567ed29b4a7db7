//! `gradient` subcommand handler

use anyhow::Result;
use std::path::Path;

use mirrorgrid::cli::GradientArgs;
use mirrorgrid::gradient_text;

use super::{load_settings, read_input, write_stdout};

/// Apply a gradient to stdin and write the cells to stdout.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: Option<&Path>, args: &GradientArgs) -> Result<()> {
    let settings = load_settings(config)?;
    let gradient = args.to_config(&settings)?;
    let text = read_input(args.text.clone())?;
    write_stdout(&gradient_text(&text, &gradient)?)
}
