//! Terminal queries and the truecolor test pattern.

use rand::Rng;
use terminal_size::{terminal_size, Height, Width};

use crate::cell;
use crate::color::Color;

/// Upper half block: two independently colored "pixels" per cell.
const HALF_BLOCK: char = '\u{2580}';

/// Fallback when no terminal is attached (e.g. under cron).
pub const DEFAULT_SIZE: (usize, usize) = (80, 24);

/// Current terminal size in (columns, rows), if stdout is a terminal.
pub fn size() -> Option<(usize, usize)> {
    terminal_size().map(|(Width(w), Height(h))| (usize::from(w), usize::from(h)))
}

/// A screen of randomly colored half blocks.
///
/// Each cell gets a random foreground (top half) and background (bottom
/// half). If the terminal renders this as noise rather than escape
/// garbage, it can display grids written with RGB colors.
pub fn test_pattern<R: Rng>(width: usize, height: usize, rng: &mut R) -> String {
    let mut out = String::with_capacity(width * height * 40);
    for row in 0..height {
        if row > 0 {
            out.push('\n');
        }
        for _ in 0..width {
            let fg = Color::Rgb(rng.random(), rng.random(), rng.random());
            let bg = Color::Rgb(rng.random(), rng.random(), rng.random());
            cell::format_into(HALF_BLOCK, Some(fg), Some(bg), &mut out);
        }
    }
    out
}
