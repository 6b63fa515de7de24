//! Domain Layer
//!
//! Pure publishing concepts: value objects, ports, and planning services.
//! Nothing in here touches the disk directly; all I/O goes through
//! [`ports::FileSystem`].

pub mod ports;
pub mod services;
pub mod value_objects;
