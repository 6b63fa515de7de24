//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod conflict_policy;
mod package;
mod path;

pub use conflict_policy::{ConflictPolicy, FileDecision, FilePolicy};
pub(crate) use package::is_valid_segment;
pub use package::{PackageName, PackageNameError, PackagePath};
pub use path::{PathError, SafePath};
