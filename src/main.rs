//! vendorpub CLI - publish package assets and configuration
//!
//! Usage: vendorpub <COMMAND>
//!
//! Commands:
//!   asset:publish   Publish package assets into the public directory
//!   config:publish  Publish package configuration into the config directory
//!   packages        List installed packages

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::publish::{cmd_publish, PublishKind};
use commands::CommandContext;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    let ctx = CommandContext::from_cli(cli)?;

    match &cli.command {
        Commands::AssetPublish(args) => cmd_publish(&ctx, PublishKind::Assets, args),
        Commands::ConfigPublish(args) => cmd_publish(&ctx, PublishKind::Configs, args),
        Commands::Packages => commands::packages::cmd_packages(&ctx),
    }
}

/// Diagnostics go to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("vendorpub={}", default_level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init();
}
