//! `init` subcommand handler

use anyhow::Result;
use std::path::Path;

use mirrorgrid::grid::{initialize_grid, GridConfig};
use mirrorgrid::terminal;

use super::load_settings;

/// Create a blank grid.
///
/// Each dimension comes from the flag, then the settings, then the
/// current terminal, then the 80x24 fallback.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    config: Option<&Path>,
    grid: Option<&Path>,
    width: Option<usize>,
    height: Option<usize>,
) -> Result<()> {
    let settings = load_settings(config)?;
    let detected = terminal::size().unwrap_or(terminal::DEFAULT_SIZE);
    let width = width.or(settings.grid.width).unwrap_or(detected.0);
    let height = height.or(settings.grid.height).unwrap_or(detected.1);
    let path = grid.map_or_else(|| settings.grid_path(), Path::to_path_buf);

    let grid = GridConfig::new(path, width, height);
    initialize_grid(&grid)?;
    println!(
        "Initialized {}x{} grid at {}",
        grid.width,
        grid.height,
        grid.path.display()
    );
    Ok(())
}
