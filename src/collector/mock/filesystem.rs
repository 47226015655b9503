//! In-memory mock filesystem for testing collectors without real `/sys`
//! or `/proc`.
//!
//! `MockFs` stores files and directories in memory, allowing tests to
//! simulate arbitrary topology states (gaps, missing sources, partial
//! tables) and to run on non-Linux hosts and in CI.

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

use crate::collector::traits::FileSystem;

/// In-memory filesystem for testing.
#[derive(Debug, Clone, Default)]
pub struct MockFs {
    /// Map from path to file contents.
    files: HashMap<PathBuf, String>,
    /// Set of directories (for existence probes).
    directories: HashSet<PathBuf>,
}

impl MockFs {
    /// Creates a new empty mock filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file with the given content.
    ///
    /// Parent directories are automatically created.
    pub fn add_file(&mut self, path: impl AsRef<Path>, content: impl Into<String>) {
        let path = path.as_ref().to_path_buf();
        self.add_parents(&path);
        self.files.insert(path, content.into());
    }

    /// Adds an empty directory.
    ///
    /// CPU discovery and node assignment probe bare directory paths, so
    /// tests register those markers with this.
    pub fn add_dir(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref().to_path_buf();
        self.add_parents(&path);
        self.directories.insert(path);
    }

    fn add_parents(&mut self, path: &Path) {
        let mut parent = path.parent();
        while let Some(p) = parent {
            if !p.as_os_str().is_empty() {
                self.directories.insert(p.to_path_buf());
            }
            parent = p.parent();
        }
    }
}

impl FileSystem for MockFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("file not found: {:?}", path),
            )
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.directories.contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_fs_add_file_creates_parents() {
        let mut fs = MockFs::new();
        fs.add_file("/sys/devices/system/cpu/cpu0/cpufreq/cpuinfo_cur_freq", "2400000\n");

        assert!(fs.exists(Path::new("/sys/devices/system/cpu/cpu0")));
        assert!(fs.exists(Path::new("/sys/devices/system/cpu")));
        let content = fs
            .read_to_string(Path::new(
                "/sys/devices/system/cpu/cpu0/cpufreq/cpuinfo_cur_freq",
            ))
            .unwrap();
        assert_eq!(content, "2400000\n");
    }

    #[test]
    fn test_mock_fs_not_found() {
        let fs = MockFs::new();
        let result = fs.read_to_string(Path::new("/nonexistent"));
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
        assert!(!fs.exists(Path::new("/nonexistent")));
    }
}
