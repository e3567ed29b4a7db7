//! Styled cells: one character plus optional colors.
//!
//! A styled cell is stored as a self-contained token:
//!
//! ```text
//! ESC [ <params> m <char> ESC [ 0 m
//! ```
//!
//! where `<params>` selects the foreground (`38;2;r;g;b` or `38;5;n`)
//! and/or the background (`48;2;r;g;b` or `48;5;n`). An unstyled cell is
//! stored as its bare character, which keeps mostly-blank grids small.
//! Because every token resets after itself, cells can be cut out of a row
//! and spliced into another without any style leaking across.

mod tokenizer;

use crate::color::{Color, ColorMode, BACKGROUND, FOREGROUND};
use crate::error::Result;

pub use tokenizer::{pad_or_truncate, tokenize};

pub(crate) const ESC: char = '\x1b';
/// Full SGR reset terminating every styled token.
pub const RESET: &str = "\x1b[0m";
/// Stands in for control characters inside styled tokens.
pub const REPLACEMENT_GLYPH: char = '\u{fffd}';

/// One grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub character: char,
    pub foreground: Option<Color>,
    pub background: Option<Color>,
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank()
    }
}

impl Cell {
    /// An unstyled space.
    pub const fn blank() -> Self {
        Self::plain(' ')
    }

    pub const fn plain(character: char) -> Self {
        Self {
            character,
            foreground: None,
            background: None,
        }
    }

    pub fn styled(character: char, foreground: Option<Color>, background: Option<Color>) -> Self {
        Self {
            character,
            foreground,
            background,
        }
    }

    pub fn is_styled(&self) -> bool {
        self.foreground.is_some() || self.background.is_some()
    }

    /// Append this cell's token to `buf`.
    pub fn encode_into(&self, buf: &mut String) {
        format_into(self.character, self.foreground, self.background, buf);
    }
}

/// Format one character as a cell token.
///
/// Returns the bare character when both colors are absent.
pub fn format(character: char, foreground: Option<Color>, background: Option<Color>) -> String {
    let mut buf = String::new();
    format_into(character, foreground, background, &mut buf);
    buf
}

/// Like [`format`], appending to an existing buffer.
///
/// A control character cannot sit inside a styled token (an `ESC` would
/// end it early, a newline would split the row), so it is replaced by
/// [`REPLACEMENT_GLYPH`].
pub fn format_into(
    character: char,
    foreground: Option<Color>,
    background: Option<Color>,
    buf: &mut String,
) {
    if foreground.is_none() && background.is_none() {
        buf.push(character);
        return;
    }
    buf.push(ESC);
    buf.push('[');
    push_sgr_params(foreground, background, buf);
    buf.push('m');
    buf.push(if character.is_control() {
        REPLACEMENT_GLYPH
    } else {
        character
    });
    buf.push_str(RESET);
}

/// Write the parameter list between `ESC [` and `m` for the given colors.
pub(crate) fn push_sgr_params(
    foreground: Option<Color>,
    background: Option<Color>,
    buf: &mut String,
) {
    if let Some(fg) = foreground {
        fg.push_params(FOREGROUND, buf);
    }
    if let Some(bg) = background {
        if foreground.is_some() {
            buf.push(';');
        }
        bg.push_params(BACKGROUND, buf);
    }
}

/// Concatenate cell tokens into one stored line.
pub fn encode(cells: &[Cell]) -> String {
    let mut buf = String::with_capacity(cells.len());
    for cell in cells {
        cell.encode_into(&mut buf);
    }
    buf
}

/// Give every character of `text` the same colors.
///
/// Colors must belong to `mode`; a palette index in RGB mode (or the
/// reverse) is rejected before anything is formatted. Newlines are kept
/// as line separators.
pub fn format_text(
    mode: ColorMode,
    text: &str,
    foreground: Option<Color>,
    background: Option<Color>,
) -> Result<String> {
    mode.check(foreground)?;
    mode.check(background)?;

    let mut out = String::with_capacity(text.len() * 20);
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for ch in line.chars() {
            format_into(ch, foreground, background, &mut out);
        }
    }
    Ok(out)
}
