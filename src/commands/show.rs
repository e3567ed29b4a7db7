//! `show` subcommand handler

use anyhow::{bail, Result};
use std::path::Path;

use mirrorgrid::Compositor;

use super::{load_settings, write_stdout};

/// Print the grid; with `check`, fail if any row has the wrong width.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: Option<&Path>, grid: Option<&Path>, check: bool) -> Result<()> {
    let settings = load_settings(config)?;
    let compositor = Compositor::new(settings.resolve_grid(grid)?);
    write_stdout(&compositor.render()?)?;

    if check {
        let mismatches = compositor.check()?;
        for row in &mismatches {
            eprintln!(
                "row {}: {} columns (expected {})",
                row.row,
                row.width,
                compositor.config().width
            );
        }
        if !mismatches.is_empty() {
            bail!("{} row(s) have the wrong display width", mismatches.len());
        }
    }
    Ok(())
}
