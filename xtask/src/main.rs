//! Development tasks for mirrorgrid.
//!
//! `cargo run -p xtask -- man [--out-dir DIR]` writes a man page for the
//! main command and one per subcommand.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

use mirrorgrid::cli::Cli;

#[derive(Parser)]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages
    Man {
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { out_dir } => generate_man(&out_dir),
    }
}

fn generate_man(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let cmd = Cli::command();
    write_page(out_dir, "mirrorgrid", cmd.clone())?;
    for sub in cmd.get_subcommands() {
        let name = format!("mirrorgrid-{}", sub.get_name());
        write_page(out_dir, &name, sub.clone())?;
    }
    println!("Man pages written to {}", out_dir.display());
    Ok(())
}

fn write_page(out_dir: &Path, name: &str, cmd: clap::Command) -> Result<()> {
    let mut buf = Vec::new();
    clap_mangen::Man::new(cmd).render(&mut buf)?;
    let path = out_dir.join(format!("{name}.1"));
    fs::write(&path, buf).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
