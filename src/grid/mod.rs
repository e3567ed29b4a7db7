//! The persisted character grid and the compositor that writes into it.
//!
//! The grid is a plain text file with one line per row and no trailing
//! newline. Each line holds exactly `width` cells, which may be bare
//! characters or styled tokens (see [`crate::cell`]). The compositor
//! replaces one rectangle at a time. Rows outside the rectangle are copied
//! through byte-for-byte without being decoded.
//!
//! There is no locking: two compositors splicing the same file at the
//! same time race, and the last rename wins.

mod store;

use std::path::PathBuf;

use tracing::{debug, warn};
use unicode_width::UnicodeWidthChar;

use crate::cell::{self, pad_or_truncate, tokenize, Cell};
use crate::error::{Error, Result};

/// Location and dimensions of a grid file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridConfig {
    pub path: PathBuf,
    pub width: usize,
    pub height: usize,
}

impl GridConfig {
    pub fn new(path: impl Into<PathBuf>, width: usize, height: usize) -> Self {
        Self {
            path: path.into(),
            width,
            height,
        }
    }

    /// Derive the dimensions from an existing grid file.
    ///
    /// Height is the number of stored lines; width is the widest row in
    /// cells.
    pub fn infer(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let text = store::read(&path)?;
        let (width, height) = split_rows(&text)
            .into_iter()
            .fold((0, 0), |(w, h), row| (w.max(tokenize(row).len()), h + 1));
        debug!(path = %path.display(), width, height, "inferred grid dimensions");
        Ok(Self {
            path,
            width,
            height,
        })
    }
}

/// Target rectangle of a splice, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub column: usize,
    pub row: usize,
    pub width: usize,
    pub height: usize,
}

impl Region {
    pub fn new(column: usize, row: usize, width: usize, height: usize) -> Self {
        Self {
            column,
            row,
            width,
            height,
        }
    }

    fn rows(&self) -> std::ops::Range<usize> {
        self.row..self.row.saturating_add(self.height)
    }
}

/// A stored row whose display width differs from the grid width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowWidth {
    pub row: usize,
    pub width: usize,
}

/// Write a blank grid of `config.width` × `config.height` spaces.
///
/// Creates the parent directory if needed and replaces any existing grid.
pub fn initialize_grid(config: &GridConfig) -> Result<()> {
    if config.width == 0 || config.height == 0 {
        return Err(Error::EmptyGrid {
            width: config.width,
            height: config.height,
        });
    }
    if let Some(parent) = config.path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| Error::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let blank_row = " ".repeat(config.width);
    let text = vec![blank_row; config.height].join("\n");
    store::write_atomic(&config.path, &text)?;
    debug!(
        path = %config.path.display(),
        width = config.width,
        height = config.height,
        "grid initialized"
    );
    Ok(())
}

/// Splices text blocks into one grid file.
#[derive(Debug, Clone)]
pub struct Compositor {
    config: GridConfig,
}

impl Compositor {
    pub fn new(config: GridConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Place `text_block` at (`column`, `row`), clipped and padded to
    /// exactly `width` × `height` cells.
    ///
    /// Parts of the rectangle outside the grid are dropped silently. The
    /// grid file must already exist.
    pub fn splice(
        &self,
        text_block: &str,
        column: usize,
        row: usize,
        width: usize,
        height: usize,
    ) -> Result<()> {
        let region = Region::new(column, row, width, height);
        let grid = store::read(&self.config.path)?;
        let updated = compose(&grid, text_block, region, self.config.width);
        store::write_atomic(&self.config.path, &updated)?;

        debug!(
            column,
            row,
            width,
            height,
            path = %self.config.path.display(),
            "block spliced"
        );
        for mismatch in display_mismatches(&updated, self.config.width, region.rows()) {
            warn!(
                row = mismatch.row,
                width = mismatch.width,
                expected = self.config.width,
                "row display width differs from grid width"
            );
        }
        Ok(())
    }

    /// The grid as stored, ready to print.
    pub fn render(&self) -> Result<String> {
        store::read(&self.config.path)
    }

    /// Rows whose on-screen width differs from the configured width.
    pub fn check(&self) -> Result<Vec<RowWidth>> {
        let grid = store::read(&self.config.path)?;
        Ok(display_mismatches(&grid, self.config.width, 0..usize::MAX))
    }
}

/// Splice `block` into the stored `grid` text and return the new text.
///
/// `grid_width` is the number of cells every touched row is normalized to.
pub fn compose(grid: &str, block: &str, region: Region, grid_width: usize) -> String {
    let rows = split_rows(grid);

    // Clip the rectangle to the grid before building anything
    let start = region.column.min(grid_width);
    let end = region.column.saturating_add(region.width).min(grid_width);
    let touched = region.rows().start.min(rows.len())..region.rows().end.min(rows.len());
    let block_lines = prepare_block(block, end - start, touched.len());

    let mut out = String::with_capacity(grid.len() + block.len());
    for (index, stored) in rows.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        if !touched.contains(&index) {
            out.push_str(stored);
            continue;
        }

        let decoded = tokenize(stored);
        if decoded.len() != grid_width {
            warn!(
                row = index,
                cells = decoded.len(),
                grid_width,
                "stored row has the wrong number of cells"
            );
        }
        let mut cells = pad_or_truncate(decoded, grid_width);
        cells[start..end].copy_from_slice(&block_lines[index - touched.start]);
        out.push_str(&cell::encode(&cells));
    }
    if grid.ends_with('\n') {
        out.push('\n');
    }
    out
}

/// Split stored grid text into rows.
///
/// A trailing newline terminates the last row instead of starting an
/// empty one.
fn split_rows(grid: &str) -> Vec<&str> {
    grid.strip_suffix('\n').unwrap_or(grid).split('\n').collect()
}

/// Tokenize the block and force it to exactly `width` × `height` cells.
fn prepare_block(block: &str, width: usize, height: usize) -> Vec<Vec<Cell>> {
    let mut lines: Vec<Vec<Cell>> = block
        .split('\n')
        .take(height)
        .map(|line| pad_or_truncate(tokenize(line), width))
        .collect();
    lines.resize(height, vec![Cell::blank(); width]);
    lines
}

/// Display width of a stored row in terminal columns.
pub fn display_width(row: &str) -> usize {
    tokenize(row)
        .iter()
        .map(|c| c.character.width().unwrap_or(0))
        .sum()
}

fn display_mismatches(
    grid: &str,
    grid_width: usize,
    rows: std::ops::Range<usize>,
) -> Vec<RowWidth> {
    split_rows(grid)
        .into_iter()
        .enumerate()
        .filter(|(index, _)| rows.contains(index))
        .map(|(row, text)| RowWidth {
            row,
            width: display_width(text),
        })
        .filter(|r| r.width != grid_width)
        .collect()
}
