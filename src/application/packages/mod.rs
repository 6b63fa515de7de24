//! Package Publishing
//!
//! Publishers that map installed packages onto application directories.
//!
//! - `AssetPublisher` - `<package>/public` into the public directory, overwriting
//! - `ConfigPublisher` - `<package>/config` into the config directory, never overwriting
//! - `PackagePublisher` - the shared use case behind both

mod assets;
mod configs;
mod target;
mod use_case;

pub use assets::AssetPublisher;
pub use configs::ConfigPublisher;
pub use target::{PublishTarget, ASSET_SUBTREES, CONFIG_SUBTREES, PACKAGES_DIR};
pub use use_case::PackagePublisher;
