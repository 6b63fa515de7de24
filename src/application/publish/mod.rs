//! Publish Module
//!
//! The tree publishing engine.
//!
//! ## Structure
//!
//! - `options` - Engine options (`PublishOptions`, `FailureMode`)
//! - `result` - Result type (`PublishResult`)
//! - `use_case` - The engine itself (`TreePublisher`)
//!
//! ## Usage
//!
//! ```ignore
//! use vendorpub::application::publish::TreePublisher;
//! use vendorpub::domain::value_objects::ConflictPolicy;
//!
//! let engine = TreePublisher::new(LocalFs::new());
//! let result = engine.publish(&source, &destination, ConflictPolicy::Overwrite);
//! ```

mod options;
mod result;
mod use_case;

pub use options::{FailureMode, PublishOptions};
pub use result::PublishResult;
pub use use_case::TreePublisher;
