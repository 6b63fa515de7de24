//! Domain Services
//!
//! Domain logic that doesn't belong to a single value object.

pub mod packages;
pub mod planner;

pub use packages::{PackageEnumerator, Packages, PACKAGE_MARKERS};
pub use planner::{EntryKind, PlanEntry, Planner, PublishPlan, MAX_DEPTH};
