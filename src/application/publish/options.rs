//! Publish Options
//!
//! Knobs for the tree publishing engine.

use serde::{Deserialize, Serialize};

/// What the engine does after the first failed entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureMode {
    /// Stop processing the tree at the first error
    #[default]
    FailFast,
    /// Keep going; every error is collected, the first one is still reported first
    Continue,
}

impl std::str::FromStr for FailureMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fail-fast" | "failfast" => Ok(FailureMode::FailFast),
            "continue" => Ok(FailureMode::Continue),
            other => Err(format!(
                "unknown failure mode '{}' (expected 'fail-fast' or 'continue')",
                other
            )),
        }
    }
}

/// Options for the tree publisher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PublishOptions {
    pub failure_mode: FailureMode,
    /// Report what would happen without creating or copying anything
    pub dry_run: bool,
}

impl PublishOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure_mode(mut self, failure_mode: FailureMode) -> Self {
        self.failure_mode = failure_mode;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn is_fail_fast(&self) -> bool {
        self.failure_mode == FailureMode::FailFast
    }
}
