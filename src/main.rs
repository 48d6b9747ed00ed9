//! rcfilter CLI - RC Filter Frequency Response
//!
//! Command-line interface for the RC filter response engine.

use anyhow::{bail, Context};
use clap::Parser;
use env_logger::Env;
use log::info;

use rcfilter::cli::{commands, Cli, Commands, OutputFormat};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RCFILTER_LOG overrides the level picked by --verbose
    let default_level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::default().filter_or("RCFILTER_LOG", default_level)).init();

    info!("RC Filter Analyzer v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(cmd) => handle_command(cmd, cli.format),
        None => {
            println!("RC Filter Analyzer v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    }
}

fn handle_command(cmd: Commands, format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        Commands::Gain { filter, frequency } => commands::gain(filter, frequency, format)
            .with_context(|| format!("cannot compute {} response at {} Hz", filter, frequency)),
        Commands::Sweep { filter, frequency } => commands::sweep(filter, frequency, format)
            .with_context(|| format!("cannot sweep {} filter", filter)),
        Commands::Info => Ok(commands::info(format)?),
        Commands::Request { endpoint, body } => {
            let accepted = commands::request(&endpoint, body.as_deref())
                .with_context(|| format!("cannot run request to '{}'", endpoint))?;
            if !accepted {
                bail!("request to '{}' was rejected", endpoint);
            }
            Ok(())
        }
    }
}
