//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PublisherError, PublisherResult};

use super::types::Config;

/// Project configuration file, relative to the project base
pub const PROJECT_CONFIG_FILE: &str = "vendorpub.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PublisherResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PublisherError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load the project config, else the user config, else defaults.
///
/// Environment overrides are applied to whichever one wins. A config file
/// that exists but does not parse is an error, not a silent fallback.
pub fn load_or_default(base: &Path) -> PublisherResult<(Config, Vec<ConfigWarning>)> {
    let candidates = [
        Some(base.join(PROJECT_CONFIG_FILE)),
        user_config_file(),
    ];

    for candidate in candidates.into_iter().flatten() {
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "loading config");
            let (config, warnings) = load_with_warnings(&candidate)?;
            return Ok((with_env_overrides(config, env_var), warnings));
        }
    }

    Ok((with_env_overrides(Config::default(), env_var), Vec::new()))
}

/// Apply VENDORPUB_* overrides read through `lookup`
pub fn with_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(vendor) = non_empty("VENDORPUB_VENDOR") {
        config.paths.vendor = Some(PathBuf::from(vendor));
    }
    if let Some(public) = non_empty("VENDORPUB_PUBLIC") {
        config.paths.public = Some(PathBuf::from(public));
    }
    if let Some(dir) = non_empty("VENDORPUB_CONFIG") {
        config.paths.config = Some(PathBuf::from(dir));
    }

    if let Some(mode) = non_empty("VENDORPUB_FAILURE_MODE") {
        match mode.parse() {
            Ok(mode) => config.publish.failure_mode = mode,
            Err(e) => tracing::warn!("ignoring VENDORPUB_FAILURE_MODE: {}", e),
        }
    }

    if let Some(val) = non_empty("VENDORPUB_NAMESPACED") {
        config.publish.namespaced = val.to_lowercase() != "false" && val != "0";
    }

    config
}

/// Project base directory: explicit flag, then `VENDORPUB_BASE`, then the working directory
pub fn base_dir(explicit: Option<&Path>) -> PublisherResult<PathBuf> {
    if let Some(base) = explicit {
        return Ok(base.to_path_buf());
    }
    if let Some(base) = env_var("VENDORPUB_BASE").filter(|v| !v.trim().is_empty()) {
        return Ok(PathBuf::from(base));
    }
    Ok(std::env::current_dir()?)
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn user_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("vendorpub").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "paths",
        "vendor",
        "public",
        "config",
        "publish",
        "namespaced",
        "failure_mode",
        "merge_configs",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
