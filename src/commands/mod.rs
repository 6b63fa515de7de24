//! Command handlers
//!
//! Each handler returns `Ok(true)` when everything it was asked to do
//! succeeded and `Ok(false)` when some package failed; `main` maps that to
//! the exit code.

pub mod packages;
pub mod publish;

use std::path::PathBuf;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;

use vendorpub::application::FailureMode;
use vendorpub::config::{self, Config};
use vendorpub::presentation::{OutputFormat, PublisherSettings};

use crate::cli::Cli;

/// Everything a command needs after flags, env and config files are merged
#[derive(Debug)]
pub struct CommandContext {
    pub base: PathBuf,
    pub settings: PublisherSettings,
    pub format: OutputFormat,
    pub unicode: bool,
    pub verbose: u8,
}

impl CommandContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let base = config::base_dir(cli.base.as_deref())?;
        let (mut config, warnings) = Config::load_or_default(&base)
            .with_context(|| format!("failed to load configuration for {}", base.display()))?;
        for warning in &warnings {
            tracing::warn!("{}", warning);
        }

        apply_cli_overrides(&mut config, cli);

        let settings = PublisherSettings::from_config(&config, &base).with_dry_run(cli.dry_run);
        tracing::debug!(
            base = %base.display(),
            vendor = %settings.vendor_dir.display(),
            public = %settings.public_dir.display(),
            config = %settings.config_dir.display(),
            "resolved directories"
        );

        Ok(Self {
            base,
            settings,
            format: if cli.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
            unicode: std::io::stdout().is_terminal(),
            verbose: cli.verbose,
        })
    }
}

/// CLI flags win over environment and config files
fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if let Some(vendor) = &cli.vendor {
        config.paths.vendor = Some(vendor.clone());
    }
    if let Some(public) = &cli.public {
        config.paths.public = Some(public.clone());
    }
    if let Some(dir) = &cli.config_dir {
        config.paths.config = Some(dir.clone());
    }
    if cli.keep_going {
        config.publish.failure_mode = FailureMode::Continue;
    }
    if cli.flat {
        config.publish.namespaced = false;
    }
}
