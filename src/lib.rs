//! mirrorgrid - a persistent, terminal-sized character grid that
//! independently produced, individually colored text blocks are
//! composited into.
//!
//! The pieces, leaves first:
//!
//! - [`color::ColorTracker`] and [`color::Gradient`] generate per-character
//!   RGB values
//! - [`cell::format`] wraps a character and its colors into a
//!   self-contained token, and [`cell::tokenize`] reads such tokens back
//! - [`grid::Compositor`] splices a block of text into a rectangle of the
//!   stored grid
//!
//! ```no_run
//! use mirrorgrid::grid::{initialize_grid, Compositor, GridConfig};
//! use mirrorgrid::{cell, Color, ColorMode};
//!
//! # fn main() -> mirrorgrid::Result<()> {
//! let config = GridConfig::new("/tmp/term.txt", 80, 24);
//! initialize_grid(&config)?;
//!
//! let clock = cell::format_text(ColorMode::Rgb, "12:00", Some(Color::Rgb(0, 200, 255)), None)?;
//! Compositor::new(config).splice(&clock, 70, 0, 5, 1)?;
//! # Ok(())
//! # }
//! ```

pub mod cell;
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod grid;
pub mod terminal;

pub use cell::{format_text, Cell};
pub use color::{gradient_text, Color, ColorMode, GradientConfig, GradientSpec};
pub use config::Config;
pub use error::{Error, Result};
pub use grid::{initialize_grid, Compositor, GridConfig};
