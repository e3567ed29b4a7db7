//! Settings file handling.
//!
//! Settings live in `~/.config/mirrorgrid/config.toml` (or wherever
//! `MIRRORGRID_CONFIG` points). Every field is optional:
//!
//! ```toml
//! [grid]
//! path = "/home/pi/mirror/term.txt"
//! width = 80
//! height = 24
//!
//! [gradients.sunset]
//! start = [255, 120, 0]
//! horizontal = [0, 4, 0]
//! vertical = [-20, 0, 10]
//! bounce = true
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::GradientSpec;
use crate::error::{Error, Result};
use crate::grid::GridConfig;

/// Environment variable overriding the settings file location.
pub const CONFIG_ENV: &str = "MIRRORGRID_CONFIG";

const APP_DIR: &str = "mirrorgrid";
const GRID_FILE: &str = "term.txt";

/// Top-level settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub grid: GridSettings,
    /// Named gradients usable with `gradient --preset`
    pub gradients: BTreeMap<String, GradientSpec>,
}

/// Where the grid lives and, optionally, its fixed size.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<usize>,
}

impl Config {
    /// Default settings file location.
    pub fn config_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join("config.toml")
    }

    /// Load from `path`. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| Error::ReadSettings {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| Error::InvalidSettings {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse settings from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Grid file location: the configured path, else the user data directory.
    pub fn grid_path(&self) -> PathBuf {
        if let Some(path) = &self.grid.path {
            return path.clone();
        }
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join(GRID_FILE)
    }

    /// Look up a named gradient.
    pub fn gradient(&self, name: &str) -> Result<&GradientSpec> {
        self.gradients
            .get(name)
            .ok_or_else(|| Error::UnknownPreset(name.to_string()))
    }

    /// Build the grid configuration for an existing grid file.
    ///
    /// Dimensions fixed in the settings are used as-is; any that are not
    /// are taken from the file itself.
    pub fn resolve_grid(&self, path: Option<&Path>) -> Result<GridConfig> {
        let path = path.map_or_else(|| self.grid_path(), Path::to_path_buf);
        match (self.grid.width, self.grid.height) {
            (Some(width), Some(height)) => Ok(GridConfig::new(path, width, height)),
            (width, height) => {
                let inferred = GridConfig::infer(path)?;
                Ok(GridConfig {
                    width: width.unwrap_or(inferred.width),
                    height: height.unwrap_or(inferred.height),
                    ..inferred
                })
            }
        }
    }
}
