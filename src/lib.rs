//! Articles addressed by validated identifiers, a storage port for them, and
//! an in-memory adapter plus the use cases that drive it.
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;
