//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::publish::FailureMode;
use crate::error::PublisherResult;

use super::loader::{self, ConfigWarning};

/// Default vendor directory, relative to the project base
pub const DEFAULT_VENDOR_DIR: &str = "vendor";
/// Default public directory, relative to the project base
pub const DEFAULT_PUBLIC_DIR: &str = "public";
/// Default config directory, relative to the project base
pub const DEFAULT_CONFIG_DIR: &str = "app/config";

/// Directory locations. Relative paths are resolved against the project base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathsConfig {
    #[serde(default)]
    pub vendor: Option<PathBuf>,

    #[serde(default)]
    pub public: Option<PathBuf>,

    #[serde(default)]
    pub config: Option<PathBuf>,
}

/// Publishing behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishConfig {
    /// Publish into `<root>/packages/<package>` instead of `<root>`
    #[serde(default = "default_true")]
    pub namespaced: bool,

    #[serde(default)]
    pub failure_mode: FailureMode,

    /// Use `MergeDirectory(SkipIfExists)` for configuration
    #[serde(default)]
    pub merge_configs: bool,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            namespaced: true,
            failure_mode: FailureMode::default(),
            merge_configs: false,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub publish: PublishConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> PublisherResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> PublisherResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(base: &Path) -> PublisherResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(base)
    }

    /// Apply environment variable overrides (VENDORPUB_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    pub fn vendor_dir(&self, base: &Path) -> PathBuf {
        resolve(base, self.paths.vendor.as_deref(), DEFAULT_VENDOR_DIR)
    }

    pub fn public_dir(&self, base: &Path) -> PathBuf {
        resolve(base, self.paths.public.as_deref(), DEFAULT_PUBLIC_DIR)
    }

    pub fn config_dir(&self, base: &Path) -> PathBuf {
        resolve(base, self.paths.config.as_deref(), DEFAULT_CONFIG_DIR)
    }
}

fn resolve(base: &Path, configured: Option<&Path>, default: &str) -> PathBuf {
    match configured {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => base.join(path),
        None => base.join(default),
    }
}
