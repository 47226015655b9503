//! Mock filesystem support for testing collectors without real `/sys`
//! and `/proc` trees.

mod filesystem;
mod scenarios;

pub use filesystem::MockFs;
