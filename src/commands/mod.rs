//! Subcommand handlers.

pub mod color;
pub mod completions;
pub mod config;
pub mod gradient;
pub mod init;
pub mod show;
pub mod splice;
pub mod test_pattern;

use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};

use mirrorgrid::Config;

/// Load settings from `path`, or from the default location.
pub fn load_settings(path: Option<&Path>) -> Result<Config> {
    let path = path.map_or_else(Config::config_path, Path::to_path_buf);
    Ok(Config::load_from(&path)?)
}

/// The block to work on: `--text` if given, else all of stdin.
///
/// Refuses to wait on an interactive terminal, which almost always means
/// the producer was forgotten in the pipeline.
pub fn read_input(text: Option<String>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if atty::is(atty::Stream::Stdin) {
        bail!("No input: pipe a text block into stdin or pass --text");
    }
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read text block from stdin")?;
    Ok(buf)
}

/// Write formatted output exactly as produced, without adding a newline.
pub fn write_stdout(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
