//! Configuration module for vendorpub
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (VENDORPUB_*)
//! 3. Project config (`<base>/vendorpub.toml`)
//! 4. User config (`<config dir>/vendorpub/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{base_dir, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{
    Config, PathsConfig, PublishConfig, DEFAULT_CONFIG_DIR, DEFAULT_PUBLIC_DIR,
    DEFAULT_VENDOR_DIR,
};
