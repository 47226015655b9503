//! Abstractions for filesystem access to enable testing and mocking.
//!
//! The `FileSystem` trait allows the collectors to work with both the real
//! `/sys` and `/proc` trees on Linux and mock implementations for testing
//! on other platforms or in CI. It also doubles as the pluggable existence
//! predicate used by gap-terminated CPU/node discovery, so a different
//! scanning strategy can be substituted without touching collector logic.

use std::io;
use std::path::Path;

/// Abstraction for read-only filesystem operations.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as a string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Checks if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Reads a file, treating any I/O failure or empty content as absence.
    ///
    /// Every telemetry source is optional: "no data" and "unreadable" are
    /// the same thing to the collectors.
    fn read_optional(&self, path: &Path) -> Option<String> {
        match self.read_to_string(path) {
            Ok(content) if !content.is_empty() => Some(content),
            _ => None,
        }
    }
}

/// Real filesystem implementation that delegates to `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFs;

impl RealFs {
    /// Creates a new `RealFs` instance.
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
