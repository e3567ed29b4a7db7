//! Config subcommands handler

use anyhow::{Context, Result};
use std::path::Path;

use mirrorgrid::Config;

use super::load_settings;

/// Show the effective configuration as TOML.
///
/// Fills in the grid path so the output shows where the grid really lives.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config: Option<&Path>, grid: Option<&Path>) -> Result<()> {
    let mut settings = load_settings(config)?;
    settings.grid.path = Some(grid.map_or_else(|| settings.grid_path(), Path::to_path_buf));
    let toml_str =
        toml::to_string_pretty(&settings).context("Failed to serialize settings")?;
    print!("{}", toml_str);
    Ok(())
}

/// Print the settings file location and whether it exists.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(config: Option<&Path>) -> Result<()> {
    let path = config.map_or_else(Config::config_path, Path::to_path_buf);
    if path.exists() {
        println!("{}", path.display());
    } else {
        println!("{} (not created; defaults in use)", path.display());
    }
    Ok(())
}
