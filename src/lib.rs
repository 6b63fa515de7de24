//! vendorpub - publish package assets and configuration
//!
//! Installed packages ship static assets (`public/`) and default
//! configuration (`config/`). vendorpub copies those trees into the
//! application that uses them: assets are always refreshed, configuration
//! is only created where the application has no file of its own.
//!
//! ## Layers
//!
//! - `domain` - value objects, ports and the planning/enumeration services
//! - `application` - the tree publishing engine and the package publishers
//! - `infrastructure` - local file system, event sinks, publish lock
//! - `presentation` - publisher wiring and output rendering
//! - `config` - configuration loading

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    AssetPublisher, ConfigPublisher, FailureMode, PublishOptions, PublishResult, TreePublisher,
};
pub use config::Config;
pub use domain::value_objects::{ConflictPolicy, FilePolicy, PackageName, PackagePath};
pub use error::{PublisherError, PublisherResult};
