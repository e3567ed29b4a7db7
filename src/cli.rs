//! Command-line definitions.
//!
//! Kept in the library so `xtask` can generate man pages from them.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::color::{Color, ColorMode, GradientConfig, GradientSpec};
use crate::config::Config;
use crate::error::{Error, Result};

#[derive(Debug, Parser)]
#[command(
    name = "mirrorgrid",
    version,
    about = "Composite colored text blocks into a persistent terminal grid",
    long_about = "Maintains a text file sized to a terminal and splices independently \
                  produced, individually colored blocks of text into rectangles of it. \
                  Point a viewer (e.g. `watch -ct cat`) at the grid file to display it."
)]
pub struct Cli {
    /// Settings file (default: ~/.config/mirrorgrid/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Grid file, overriding the settings
    #[arg(long, global = true, value_name = "FILE")]
    pub grid: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create (or reset) a blank grid sized to the terminal
    Init {
        /// Columns (default: settings, then terminal width)
        #[arg(long)]
        width: Option<usize>,
        /// Rows (default: settings, then terminal height)
        #[arg(long)]
        height: Option<usize>,
    },

    /// Place a block of text read from stdin into a rectangle of the grid
    Splice {
        /// Left edge of the rectangle (0-based)
        column: usize,
        /// Top edge of the rectangle (0-based)
        row: usize,
        /// Rectangle width in cells
        width: usize,
        /// Rectangle height in rows
        height: usize,
        /// Use this text instead of reading stdin
        #[arg(long)]
        text: Option<String>,
    },

    /// Wrap every character of stdin in the same colors
    Color(ColorArgs),

    /// Color stdin with a horizontal and/or vertical gradient
    #[command(visible_aliases = ["grad", "g"])]
    Gradient(GradientArgs),

    /// Print the grid
    Show {
        /// Also report rows whose display width is wrong
        #[arg(long)]
        check: bool,
    },

    /// Print randomly colored blocks to check truecolor support
    TestPattern {
        #[arg(long)]
        width: Option<usize>,
        #[arg(long)]
        height: Option<usize>,
    },

    /// Inspect settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Print a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the effective settings as TOML
    Show,
    /// Print the settings file location
    Path,
}

#[derive(Debug, Args)]
pub struct ColorArgs {
    /// Color mode: `rgb` (three values per color) or `palette` (one 0-255 index)
    #[arg(short, long, default_value = "rgb")]
    pub mode: String,

    /// Foreground color
    #[arg(short, long, num_args = 1..=3, value_name = "N")]
    pub foreground: Option<Vec<u8>>,

    /// Background color
    #[arg(short, long, num_args = 1..=3, value_name = "N")]
    pub background: Option<Vec<u8>>,

    /// Use this text instead of reading stdin
    #[arg(long)]
    pub text: Option<String>,
}

impl ColorArgs {
    /// Validate the mode and turn the raw values into colors.
    pub fn colors(&self) -> Result<(ColorMode, Option<Color>, Option<Color>)> {
        let mode: ColorMode = self.mode.parse()?;
        let foreground = self
            .foreground
            .as_deref()
            .map(|v| parse_color(mode, v))
            .transpose()?;
        let background = self
            .background
            .as_deref()
            .map(|v| parse_color(mode, v))
            .transpose()?;
        Ok((mode, foreground, background))
    }
}

fn parse_color(mode: ColorMode, values: &[u8]) -> Result<Color> {
    match (mode, values) {
        (ColorMode::Rgb, [r, g, b]) => Ok(Color::Rgb(*r, *g, *b)),
        (ColorMode::Palette, [n]) => Ok(Color::Palette(*n)),
        _ => Err(Error::ColorModeMismatch {
            mode: mode.name(),
            color: format!("{values:?}"),
        }),
    }
}

#[derive(Debug, Default, Args)]
pub struct GradientArgs {
    /// Start from a named foreground gradient in the settings
    #[arg(long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Start from a named background gradient in the settings
    #[arg(long, value_name = "NAME")]
    pub bg_preset: Option<String>,

    /// Initial foreground color
    #[arg(short, long, num_args = 3, value_names = ["R", "G", "B"])]
    pub foreground: Option<Vec<u8>>,

    /// Initial background color
    #[arg(short, long, num_args = 3, value_names = ["R", "G", "B"])]
    pub background: Option<Vec<u8>>,

    /// Foreground change per column
    #[arg(long, num_args = 3, allow_negative_numbers = true, value_names = ["R", "G", "B"])]
    pub fg_inc_horiz: Option<Vec<f64>>,

    /// Foreground change per row
    #[arg(long, num_args = 3, allow_negative_numbers = true, value_names = ["R", "G", "B"])]
    pub fg_inc_vert: Option<Vec<f64>>,

    /// Background change per column
    #[arg(long, num_args = 3, allow_negative_numbers = true, value_names = ["R", "G", "B"])]
    pub bg_inc_horiz: Option<Vec<f64>>,

    /// Background change per row
    #[arg(long, num_args = 3, allow_negative_numbers = true, value_names = ["R", "G", "B"])]
    pub bg_inc_vert: Option<Vec<f64>>,

    /// Lowest foreground components
    #[arg(long, num_args = 3, value_names = ["R", "G", "B"])]
    pub fg_min: Option<Vec<u8>>,

    /// Highest foreground components
    #[arg(long, num_args = 3, value_names = ["R", "G", "B"])]
    pub fg_max: Option<Vec<u8>>,

    /// Lowest background components
    #[arg(long, num_args = 3, value_names = ["R", "G", "B"])]
    pub bg_min: Option<Vec<u8>>,

    /// Highest background components
    #[arg(long, num_args = 3, value_names = ["R", "G", "B"])]
    pub bg_max: Option<Vec<u8>>,

    /// Reverse direction at a bound instead of saturating
    #[arg(long)]
    pub bounce: bool,

    /// Use this text instead of reading stdin
    #[arg(long)]
    pub text: Option<String>,
}

/// Flags describing one gradient layer.
struct LayerFlags<'a> {
    preset: Option<&'a str>,
    start: Option<&'a [u8]>,
    horizontal: Option<&'a [f64]>,
    vertical: Option<&'a [f64]>,
    min: Option<&'a [u8]>,
    max: Option<&'a [u8]>,
}

impl LayerFlags<'_> {
    fn is_empty(&self) -> bool {
        self.preset.is_none()
            && self.start.is_none()
            && self.horizontal.is_none()
            && self.vertical.is_none()
            && self.min.is_none()
            && self.max.is_none()
    }

    /// `None` when no flag mentions this layer.
    fn build(&self, settings: &Config, bounce: bool) -> Result<Option<GradientSpec>> {
        if self.is_empty() {
            return Ok(None);
        }
        let mut spec = match self.preset {
            Some(name) => settings.gradient(name)?.clone(),
            None => GradientSpec::default(),
        };
        if let Some(v) = self.start {
            spec.start = triple(v);
        }
        if let Some(v) = self.horizontal {
            spec.horizontal = triple(v);
        }
        if let Some(v) = self.vertical {
            spec.vertical = triple(v);
        }
        if let Some(v) = self.min {
            spec.min = triple(v);
        }
        if let Some(v) = self.max {
            spec.max = triple(v);
        }
        spec.bounce |= bounce;
        Ok(Some(spec))
    }
}

/// clap guarantees three values for every triple flag.
fn triple<T: Copy + Default>(values: &[T]) -> [T; 3] {
    let mut out = [T::default(); 3];
    for (slot, v) in out.iter_mut().zip(values) {
        *slot = *v;
    }
    out
}

impl GradientArgs {
    /// Combine presets and explicit flags into a gradient configuration.
    pub fn to_config(&self, settings: &Config) -> Result<GradientConfig> {
        let foreground = LayerFlags {
            preset: self.preset.as_deref(),
            start: self.foreground.as_deref(),
            horizontal: self.fg_inc_horiz.as_deref(),
            vertical: self.fg_inc_vert.as_deref(),
            min: self.fg_min.as_deref(),
            max: self.fg_max.as_deref(),
        };
        let background = LayerFlags {
            preset: self.bg_preset.as_deref(),
            start: self.background.as_deref(),
            horizontal: self.bg_inc_horiz.as_deref(),
            vertical: self.bg_inc_vert.as_deref(),
            min: self.bg_min.as_deref(),
            max: self.bg_max.as_deref(),
        };
        Ok(GradientConfig {
            foreground: foreground.build(settings, self.bounce)?,
            background: background.build(settings, self.bounce)?,
        })
    }
}
