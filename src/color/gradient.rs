//! Two-dimensional linear gradients over a block of text.
//!
//! A [`Gradient`] owns six [`ColorTracker`]s: red, green and blue for each
//! of the horizontal and vertical axes. Within a row the horizontal
//! trackers advance once per character. At each new row the vertical
//! trackers advance once and re-seed the horizontal ones, so a nonzero
//! increment on both axes produces a diagonal gradient.

use serde::{Deserialize, Serialize};

use super::tracker::ColorTracker;
use super::Color;
use crate::cell;
use crate::error::Result;

/// Serializable description of one gradient layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradientSpec {
    /// Color of the top-left character
    pub start: [u8; 3],
    /// Per-column change of red, green and blue
    pub horizontal: [f64; 3],
    /// Per-row change of red, green and blue
    pub vertical: [f64; 3],
    pub min: [u8; 3],
    pub max: [u8; 3],
    /// Reverse at a bound instead of saturating
    pub bounce: bool,
}

impl Default for GradientSpec {
    fn default() -> Self {
        Self {
            start: [0, 0, 0],
            horizontal: [0.0; 3],
            vertical: [0.0; 3],
            min: [0, 0, 0],
            max: [255, 255, 255],
            bounce: false,
        }
    }
}

impl GradientSpec {
    /// A gradient that never changes.
    pub fn solid(rgb: [u8; 3]) -> Self {
        Self {
            start: rgb,
            ..Default::default()
        }
    }
}

/// Foreground and background layers applied together by [`gradient_text`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GradientConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<GradientSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<GradientSpec>,
}

/// A running gradient positioned at some row and column.
#[derive(Debug, Clone)]
pub struct Gradient {
    horizontal: [ColorTracker; 3],
    vertical: [ColorTracker; 3],
}

impl Gradient {
    /// Build the six trackers for `spec` and position at row 0, column 0.
    pub fn new(spec: &GradientSpec) -> Result<Self> {
        let axis = |increments: &[f64; 3]| -> Result<[ColorTracker; 3]> {
            Ok([
                ColorTracker::new(spec.start[0], increments[0], spec.min[0], spec.max[0], spec.bounce)?,
                ColorTracker::new(spec.start[1], increments[1], spec.min[1], spec.max[1], spec.bounce)?,
                ColorTracker::new(spec.start[2], increments[2], spec.min[2], spec.max[2], spec.bounce)?,
            ])
        };
        let mut gradient = Self {
            horizontal: axis(&spec.horizontal)?,
            vertical: axis(&spec.vertical)?,
        };
        // Consume the vertical trackers' step 0 so that row 0 starts at `start`
        // and each later call moves down one row.
        gradient.next_row();
        Ok(gradient)
    }

    /// Color of the current character, then move one column right.
    pub fn next_cell_color(&mut self) -> (u8, u8, u8) {
        let [r, g, b] = &mut self.horizontal;
        (r.advance(), g.advance(), b.advance())
    }

    /// Move to the start of the next row.
    pub fn next_row(&mut self) {
        for (vertical, horizontal) in self.vertical.iter_mut().zip(self.horizontal.iter_mut()) {
            horizontal.reset_to(vertical.advance());
        }
    }
}

/// Color every character of `text` according to `config`.
///
/// Lines are separated by `\n` and keep their separators; every other
/// character becomes one self-contained cell token. A layer left as `None`
/// contributes no color.
pub fn gradient_text(text: &str, config: &GradientConfig) -> Result<String> {
    let mut foreground = config.foreground.as_ref().map(Gradient::new).transpose()?;
    let mut background = config.background.as_ref().map(Gradient::new).transpose()?;

    let mut out = String::with_capacity(text.len() * 24);
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for ch in line.chars() {
            let fg = foreground.as_mut().map(|g| Color::from(g.next_cell_color()));
            let bg = background.as_mut().map(|g| Color::from(g.next_cell_color()));
            cell::format_into(ch, fg, bg, &mut out);
        }
        for gradient in foreground.iter_mut().chain(background.iter_mut()) {
            gradient.next_row();
        }
    }
    Ok(out)
}
