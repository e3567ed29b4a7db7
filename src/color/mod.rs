//! Colors and gradient generation.
//!
//! - [`Color`]: a truecolor triple or a 256-color palette index
//! - [`ColorMode`]: which of the two a caller wants to emit
//! - [`tracker`]: single-component linear value generator
//! - [`gradient`]: 2D gradients built from six trackers

pub mod gradient;
pub mod tracker;

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

pub use gradient::{gradient_text, Gradient, GradientConfig, GradientSpec};
pub use tracker::ColorTracker;

/// SGR parameter introducing an extended foreground color.
pub(crate) const FOREGROUND: u8 = 38;
/// SGR parameter introducing an extended background color.
pub(crate) const BACKGROUND: u8 = 48;

/// A terminal color in one of the two extended SGR forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// 24-bit color (`38;2;r;g;b` / `48;2;r;g;b`)
    Rgb(u8, u8, u8),
    /// Index into the terminal's 256-color table (`38;5;n` / `48;5;n`)
    Palette(u8),
}

impl Color {
    /// Append the SGR parameters selecting this color on the given layer.
    ///
    /// `layer` is [`FOREGROUND`] or [`BACKGROUND`]. No leading or trailing
    /// separator is written.
    pub(crate) fn push_params(&self, layer: u8, buf: &mut String) {
        match self {
            Color::Rgb(r, g, b) => {
                buf.push_str(&layer.to_string());
                buf.push_str(";2;");
                buf.push_str(&r.to_string());
                buf.push(';');
                buf.push_str(&g.to_string());
                buf.push(';');
                buf.push_str(&b.to_string());
            }
            Color::Palette(n) => {
                buf.push_str(&layer.to_string());
                buf.push_str(";5;");
                buf.push_str(&n.to_string());
            }
        }
    }

    /// The mode this color belongs to.
    pub fn mode(&self) -> ColorMode {
        match self {
            Color::Rgb(..) => ColorMode::Rgb,
            Color::Palette(_) => ColorMode::Palette,
        }
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::Rgb(r, g, b)
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Color::Rgb(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb(r, g, b) => write!(f, "rgb({r}, {g}, {b})"),
            Color::Palette(n) => write!(f, "palette({n})"),
        }
    }
}

/// Which color representation a formatting request uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Rgb,
    Palette,
}

impl ColorMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Palette => "palette",
        }
    }

    /// Reject a color that does not belong to this mode.
    pub fn check(&self, color: Option<Color>) -> Result<()> {
        match color {
            Some(c) if c.mode() != *self => Err(Error::ColorModeMismatch {
                mode: self.name(),
                color: c.to_string(),
            }),
            _ => Ok(()),
        }
    }
}

impl FromStr for ColorMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "rgb" => Ok(Self::Rgb),
            "palette" | "color_lookup" | "lookup" => Ok(Self::Palette),
            other => Err(Error::UnknownColorMode(other.to_string())),
        }
    }
}
