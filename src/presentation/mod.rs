//! Presentation Layer
//!
//! This layer handles:
//! - Creating publishers with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `factory` - Creates publishers around one shared engine (dependency injection)
//! - `output` - Publish summary rendering
//!
//! ## Usage
//!
//! ```ignore
//! use vendorpub::presentation::factory;
//!
//! let settings = factory::PublisherSettings::from_config(&config, &base);
//! let publishers = factory::create_publishers(&settings, sink);
//! let result = publishers.assets.publish_package("acme/widgets")?;
//! ```

pub mod factory;
pub mod output;

pub use factory::{create_publishers, PublisherSettings, Publishers};
pub use output::{OutputFormat, PackageReport, PublishSummary};
