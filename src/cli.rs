//! CLI Argument Parsing
//!
//! Global flags (--json, --verbose, --dry-run, path overrides) are inherited
//! by all subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// vendorpub - publish package assets and configuration into an application
#[derive(Parser, Debug)]
#[command(name = "vendorpub")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events and a JSON summary
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Report what would be published without writing anything
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Application base directory (defaults to VENDORPUB_BASE or the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub base: Option<PathBuf>,

    /// Vendor directory holding installed packages
    #[arg(long, global = true, value_name = "DIR")]
    pub vendor: Option<PathBuf>,

    /// Public directory assets are published into
    #[arg(long, global = true, value_name = "DIR")]
    pub public: Option<PathBuf>,

    /// Config directory configuration is published into
    #[arg(long = "config-dir", global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Keep publishing a package after a file fails to copy
    #[arg(long, global = true)]
    pub keep_going: bool,

    /// Publish straight into the destination instead of `packages/<package>`
    #[arg(long, global = true)]
    pub flat: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Publish package assets into the public directory (always overwrites)
    #[command(name = "asset:publish", visible_alias = "asset-publish")]
    AssetPublish(PublishArgs),

    /// Publish package configuration into the config directory (never overwrites)
    #[command(name = "config:publish", visible_alias = "config-publish")]
    ConfigPublish(PublishArgs),

    /// List installed packages and what they publish
    Packages,
}

#[derive(Args, Debug)]
pub struct PublishArgs {
    /// Package to publish (`name` or `vendor/name`); all packages when omitted
    pub package: Option<String>,

    /// Publish from this directory instead of the installed package
    #[arg(long, requires = "package", value_name = "DIR")]
    pub path: Option<PathBuf>,
}
