//! mirrorgrid command-line entry point.

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mirrorgrid::cli::{Cli, Commands, ConfigCommands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

/// Log to stderr so stdout stays clean for piping blocks between commands.
///
/// `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.config.as_deref();
    let grid = cli.grid.as_deref();

    match cli.command {
        Commands::Init { width, height } => commands::init::handle(config, grid, width, height),
        Commands::Splice {
            column,
            row,
            width,
            height,
            text,
        } => commands::splice::handle(config, grid, column, row, width, height, text),
        Commands::Color(args) => commands::color::handle(&args),
        Commands::Gradient(args) => commands::gradient::handle(config, &args),
        Commands::Show { check } => commands::show::handle(config, grid, check),
        Commands::TestPattern { width, height } => commands::test_pattern::handle(width, height),
        Commands::Config { command } => match command {
            ConfigCommands::Show => commands::config::handle_show(config, grid),
            ConfigCommands::Path => commands::config::handle_path(config),
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
