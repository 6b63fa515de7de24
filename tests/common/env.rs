//! Test environment builder for isolated vendorpub testing.
//!
//! Provides `TestEnv` - a temp application base with a `vendor/` directory,
//! an isolated home, and helpers to run the vendorpub binary against it.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running a vendorpub CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse every stdout line as JSON
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("not JSON ({}): {}", e, line))
            })
            .collect()
    }
}

/// Isolated application with vendor, public and config directories.
pub struct TestEnv {
    /// Application base directory
    pub base: TempDir,
    /// Isolated HOME / XDG config
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Application with empty `vendor/`, `public/` and `app/config/`
    pub fn new() -> Self {
        let base = TempDir::new().expect("Failed to create base temp dir");
        let home_dir = TempDir::new().expect("Failed to create home temp dir");
        for dir in ["vendor", "public", "app/config"] {
            std::fs::create_dir_all(base.path().join(dir)).expect("Failed to create directory");
        }
        Self {
            base,
            home_dir,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_vendorpub")),
        }
    }

    /// Get path relative to the application base
    pub fn path(&self, relative: &str) -> PathBuf {
        self.base.path().join(relative)
    }

    /// Write a file below the application base, creating parents
    pub fn write(&self, relative: &str, content: &str) {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Read a file below the application base
    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }

    /// Install a package into `vendor/<name>` from `(relative path, content)` pairs
    pub fn install_package(&self, name: &str, files: &[(&str, &str)]) {
        for (relative, content) in files {
            self.write(&format!("vendor/{}/{}", name, relative), content);
        }
    }

    /// Run vendorpub from the application base
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run vendorpub from the application base with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.base.path(), args, env_vars)
    }

    /// Run vendorpub from a specific directory with extra env vars
    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env_remove("RUST_LOG");
        for key in [
            "VENDORPUB_BASE",
            "VENDORPUB_VENDOR",
            "VENDORPUB_PUBLIC",
            "VENDORPUB_CONFIG",
            "VENDORPUB_FAILURE_MODE",
            "VENDORPUB_NAMESPACED",
        ] {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute vendorpub");
        output_to_result(output)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
