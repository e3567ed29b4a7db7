//! Decoding stored lines back into cells.
//!
//! The scanner is a small state machine. Outside a token it is in the
//! plain state and every character is its own unstyled cell. An `ESC`
//! starts a candidate token, which then has to pass through these states:
//!
//! ```text
//! InEscape --'['--> Params --'m'--> Glyph --char--> InReset --"ESC[0m"--> done
//! ```
//!
//! Any deviation abandons the candidate. The `ESC` is then emitted as a
//! literal cell and scanning resumes right after it, so corrupt content
//! degrades to literal characters instead of failing. A candidate is also
//! abandoned when its parameters are not exactly what [`super::format`]
//! would write for the decoded colors. As a result every recognized token
//! re-encodes to the same bytes.

use tracing::trace;

use super::{push_sgr_params, Cell, ESC, RESET};
use crate::color::{Color, BACKGROUND, FOREGROUND};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    /// Saw `ESC`, expecting `[`
    InEscape,
    /// Inside the parameter list, expecting digits, `;` or the closing `m`
    Params { start: usize },
    /// Expecting the styled character
    Glyph,
    /// Matching the trailing reset; `matched` bytes of it seen so far
    InReset { matched: usize },
}

/// Split a line into cells.
pub fn tokenize(line: &str) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(line.len());
    let mut rest = line;
    while let Some(ch) = rest.chars().next() {
        if ch == ESC {
            if let Some((cell, len)) = scan_token(rest) {
                cells.push(cell);
                rest = &rest[len..];
                continue;
            }
            trace!(offset = line.len() - rest.len(), "unrecognized escape kept as literal");
        }
        cells.push(Cell::plain(ch));
        rest = &rest[ch.len_utf8()..];
    }
    cells
}

/// Truncate to `width` cells, or pad with blank cells up to `width`.
pub fn pad_or_truncate(mut cells: Vec<Cell>, width: usize) -> Vec<Cell> {
    cells.resize(width, Cell::blank());
    cells
}

/// Try to read one styled token at the start of `s` (which begins with `ESC`).
///
/// Returns the decoded cell and the token's length in bytes.
fn scan_token(s: &str) -> Option<(Cell, usize)> {
    let reset = RESET.as_bytes();
    let mut state = Scan::InEscape;
    let mut params = "";
    let mut glyph = ' ';

    for (i, ch) in s.char_indices().skip(1) {
        state = match state {
            Scan::InEscape if ch == '[' => Scan::Params { start: i + 1 },
            Scan::Params { .. } if ch.is_ascii_digit() || ch == ';' => state,
            Scan::Params { start } if ch == 'm' => {
                params = &s[start..i];
                Scan::Glyph
            }
            Scan::Glyph if ch != ESC => {
                glyph = ch;
                Scan::InReset { matched: 0 }
            }
            Scan::InReset { matched } if ch.is_ascii() && reset[matched] == ch as u8 => {
                if matched + 1 == reset.len() {
                    let (foreground, background) = decode_params(params)?;
                    return Some((Cell::styled(glyph, foreground, background), i + 1));
                }
                Scan::InReset {
                    matched: matched + 1,
                }
            }
            _ => return None,
        };
    }
    None
}

/// Decode a parameter list written by the formatter.
fn decode_params(params: &str) -> Option<(Option<Color>, Option<Color>)> {
    let fields = params
        .split(';')
        .map(|f| f.parse::<u8>().ok())
        .collect::<Option<Vec<u8>>>()?;

    let mut rest = fields.as_slice();
    let mut foreground = None;
    let mut background = None;
    if let [FOREGROUND, tail @ ..] = rest {
        let (color, tail) = decode_color(tail)?;
        foreground = Some(color);
        rest = tail;
    }
    if let [BACKGROUND, tail @ ..] = rest {
        let (color, tail) = decode_color(tail)?;
        background = Some(color);
        rest = tail;
    }
    if !rest.is_empty() || (foreground.is_none() && background.is_none()) {
        return None;
    }

    // Reject non-canonical spellings such as leading zeros
    let mut canonical = String::with_capacity(params.len());
    push_sgr_params(foreground, background, &mut canonical);
    (canonical == params).then_some((foreground, background))
}

fn decode_color(fields: &[u8]) -> Option<(Color, &[u8])> {
    match fields {
        [2, r, g, b, tail @ ..] => Some((Color::Rgb(*r, *g, *b), tail)),
        [5, n, tail @ ..] => Some((Color::Palette(*n), tail)),
        _ => None,
    }
}
