//! Common test utilities for vendorpub integration tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated application directory plus helpers to run the CLI
//! - Fixtures: Reusable package layouts

pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
