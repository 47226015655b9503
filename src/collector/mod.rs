//! Telemetry collection from the `/sys` and `/proc` pseudo-filesystems.
//!
//! The `Collector` orchestrates topology discovery and the per-source
//! property collectors over a `FileSystem` implementation, which is either
//! the real tree (`RealFs`) or an in-memory mock for tests and non-Linux
//! builds (`MockFs`).

#[allow(clippy::module_inception)]
mod collector;
pub mod mock;
pub mod parser;
mod procfs;
mod sysfs;
mod traits;

pub use collector::Collector;
pub use mock::MockFs;
pub use procfs::ProcfsCollector;
pub use sysfs::SysfsCollector;
pub use traits::{FileSystem, RealFs};
