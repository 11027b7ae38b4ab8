//! Test utilities for creating temporary directory hierarchies.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory for building fixture trees.
///
/// The directory and everything in it is removed when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// The name the built tree's root will carry.
    pub fn root_name(&self) -> String {
        self.dir
            .path()
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add a directory (and any missing parents).
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Add a symbolic link at `path` pointing to `target`.
    #[cfg(unix)]
    pub fn add_symlink(&self, target: impl AsRef<Path>, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        std::os::unix::fs::symlink(target, &full_path).expect("Failed to create symlink");
        full_path
    }

    /// Create `width` directories per level, `depth` levels deep, with
    /// `files` files in every directory.
    pub fn populate(&self, depth: usize, width: usize, files: usize) {
        fn fill(dir: &Path, depth: usize, width: usize, files: usize) {
            for f in 0..files {
                fs::write(dir.join(format!("file_{f}.txt")), "").expect("Failed to write file");
            }
            if depth == 0 {
                return;
            }
            for w in 0..width {
                let sub = dir.join(format!("dir_{w}"));
                fs::create_dir(&sub).expect("Failed to create dir");
                fill(&sub, depth - 1, width, files);
            }
        }

        fill(self.dir.path(), depth, width, files);
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
