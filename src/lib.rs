//! cpuinfo - script-friendly CPU and NUMA telemetry snapshots.
//!
//! Takes one synchronous snapshot of the per-CPU and per-NUMA-node
//! telemetry exposed under `/sys/devices/system` and `/proc`, normalizes
//! the heterogeneous file formats into an ordered key/value property model
//! per CPU, and renders selected properties as text for scripting.
//!
//! Modules:
//! - `model` — node/CPU/property records
//! - `collector` — filesystem abstraction, per-source parsers and
//!   collectors, snapshot orchestration
//! - `query` — property selection (keys, all-properties, single CPU)
//! - `fmt` — text rendering (list prefixes, labels, value wrapping)

pub mod collector;
pub mod fmt;
pub mod model;
pub mod query;
