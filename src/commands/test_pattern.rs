//! `test-pattern` subcommand handler

use anyhow::Result;

use mirrorgrid::terminal;

use super::write_stdout;

/// Fill the terminal with random colors.
#[cfg(not(tarpaulin_include))]
pub fn handle(width: Option<usize>, height: Option<usize>) -> Result<()> {
    let detected = terminal::size().unwrap_or(terminal::DEFAULT_SIZE);
    let width = width.unwrap_or(detected.0);
    let height = height.unwrap_or(detected.1);
    let pattern = terminal::test_pattern(width, height, &mut rand::rng());
    write_stdout(&pattern)?;
    println!();
    Ok(())
}
