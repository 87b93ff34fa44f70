//! Builders for temporary directory trees used by integration tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// A temporary directory tree for watcher tests.
///
/// Keeps the backing `TempDir` alive, so every path handed out stays valid
/// until the tree is dropped. Watch roots should always be subdirectories
/// created through this builder: the temp directory itself has a
/// dot-prefixed name, which the scanner treats as hidden.
pub struct TempTree {
    dir: TempDir,
}

impl TempTree {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Absolute path for a relative entry in the tree (existing or not).
    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Same as [`TempTree::path`] but as an owned string, the form the
    /// watcher's pattern inputs take.
    pub fn path_str(&self, rel: &str) -> String {
        self.path(rel).to_string_lossy().into_owned()
    }

    /// Create a directory (and any missing parents). Returns its path.
    pub fn mkdir(&self, rel: &str) -> PathBuf {
        let path = self.path(rel);
        fs::create_dir_all(&path).expect("create dir");
        path
    }

    /// Create or overwrite a file, creating parent directories as needed.
    /// Returns its path.
    pub fn write_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(&path, contents).expect("write file");
        path
    }
}

impl Default for TempTree {
    fn default() -> Self {
        Self::new()
    }
}
