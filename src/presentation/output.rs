//! Output Rendering
//!
//! Turns publish results into what the user sees: a per-package text summary
//! or a JSON summary line for scripting.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::PathBuf;

use crate::application::PublishResult;
use crate::domain::value_objects::PackageName;
use crate::error::PublisherError;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

/// Icons for output rendering
struct Icons {
    check: &'static str,
    cross: &'static str,
    skip: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            cross: "✗",
            skip: "○",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            cross: "[FAIL]",
            skip: "[ ]",
        }
    }
}

/// Outcome of publishing one package, ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageReport {
    pub package: String,
    pub copied: usize,
    pub skipped: usize,
    pub error: Option<String>,
    pub error_count: usize,
}

impl PackageReport {
    pub fn from_result(package: &str, result: &PublishResult) -> Self {
        Self {
            package: package.to_string(),
            copied: result.copied,
            skipped: result.skipped,
            error: result.first_error().map(ToString::to_string),
            error_count: result.error_count(),
        }
    }

    /// A package that failed as a whole (bad name, missing, first copy error)
    pub fn from_error(package: &str, error: &PublisherError) -> Self {
        Self {
            package: package.to_string(),
            copied: 0,
            skipped: 0,
            error: Some(error.to_string()),
            error_count: 1,
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Everything one publish command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishSummary {
    pub command: &'static str,
    pub destination: PathBuf,
    pub dry_run: bool,
    pub packages: Vec<PackageReport>,
}

impl PublishSummary {
    pub fn new(command: &'static str, destination: impl Into<PathBuf>, dry_run: bool) -> Self {
        Self {
            command,
            destination: destination.into(),
            dry_run,
            packages: Vec::new(),
        }
    }

    pub fn push(&mut self, report: PackageReport) {
        self.packages.push(report);
    }

    pub fn extend_from_results(&mut self, results: &BTreeMap<PackageName, PublishResult>) {
        self.packages.extend(
            results
                .iter()
                .map(|(name, result)| PackageReport::from_result(name.as_str(), result)),
        );
    }

    pub fn is_success(&self) -> bool {
        self.packages.iter().all(PackageReport::is_success)
    }

    pub fn failed_count(&self) -> usize {
        self.packages.iter().filter(|p| !p.is_success()).count()
    }

    pub fn total_copied(&self) -> usize {
        self.packages.iter().map(|p| p.copied).sum()
    }

    pub fn total_skipped(&self) -> usize {
        self.packages.iter().map(|p| p.skipped).sum()
    }
}

/// Text renderer for publish summaries
pub struct TextRenderer {
    /// Whether to use unicode icons
    pub unicode: bool,
    /// Verbosity level
    pub verbose: u8,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            unicode: true,
            verbose: 0,
        }
    }
}

impl TextRenderer {
    pub fn render(&self, summary: &PublishSummary) -> String {
        let icons = if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        };
        let mut out = String::new();

        let suffix = if summary.dry_run { " (dry run)" } else { "" };
        if summary.packages.is_empty() {
            let _ = writeln!(out, "{} Nothing to publish{}", icons.skip, suffix);
            return out;
        }

        if summary.is_success() {
            let _ = writeln!(out, "{} Publish Complete{}", icons.check, suffix);
        } else {
            let _ = writeln!(
                out,
                "{} Publish Failed{} ({} of {} packages)",
                icons.cross,
                suffix,
                summary.failed_count(),
                summary.packages.len()
            );
        }
        if self.verbose > 0 {
            let _ = writeln!(out, "  Destination: {}", summary.destination.display());
        }
        out.push('\n');

        for report in &summary.packages {
            let icon = if report.is_success() {
                icons.check
            } else {
                icons.cross
            };
            let _ = writeln!(
                out,
                "  {} {}: {} copied, {} skipped",
                icon, report.package, report.copied, report.skipped
            );
            if let Some(error) = &report.error {
                let _ = writeln!(out, "      {}", error);
                if report.error_count > 1 {
                    let _ = writeln!(out, "      ... and {} more", report.error_count - 1);
                }
            }
        }

        out
    }
}

/// JSON summary line, printed after the NDJSON event stream
pub fn render_json(summary: &PublishSummary) -> serde_json::Value {
    serde_json::json!({
        "event": "summary",
        "command": summary.command,
        "destination": summary.destination.display().to_string(),
        "dry_run": summary.dry_run,
        "success": summary.is_success(),
        "copied": summary.total_copied(),
        "skipped": summary.total_skipped(),
        "packages": summary.packages.iter().map(|p| serde_json::json!({
            "package": p.package,
            "copied": p.copied,
            "skipped": p.skipped,
            "error": p.error,
            "error_count": p.error_count,
        })).collect::<Vec<_>>(),
    })
}

/// Print a summary in the requested format
pub fn print_summary(summary: &PublishSummary, format: OutputFormat, unicode: bool, verbose: u8) {
    match format {
        OutputFormat::Text => print!("{}", TextRenderer { unicode, verbose }.render(summary)),
        OutputFormat::Json => println!("{}", render_json(summary)),
    }
}
