//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (value objects, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `TreePublisher` - Copies one source tree into one destination root
//! - `AssetPublisher` - Publishes package assets (always overwrite)
//! - `ConfigPublisher` - Publishes package configuration (never overwrite)

pub mod packages;
pub mod publish;

pub use packages::{AssetPublisher, ConfigPublisher, PackagePublisher, PublishTarget};
pub use publish::{FailureMode, PublishOptions, PublishResult, TreePublisher};
