//! `splice` subcommand handler

use anyhow::{Context, Result};
use std::path::Path;

use mirrorgrid::Compositor;

use super::{load_settings, read_input};

/// Read a block and splice it into the grid.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    config: Option<&Path>,
    grid: Option<&Path>,
    column: usize,
    row: usize,
    width: usize,
    height: usize,
    text: Option<String>,
) -> Result<()> {
    let settings = load_settings(config)?;
    let block = read_input(text)?;
    let grid = settings
        .resolve_grid(grid)
        .context("Grid not available (run `mirrorgrid init` first)")?;

    Compositor::new(grid).splice(&block, column, row, width, height)?;
    Ok(())
}
