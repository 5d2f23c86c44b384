//! Temporary directory trees for scanner tests

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Builder for a directory tree inside a fresh temporary directory
#[derive(Debug, Default)]
pub struct TestTreeBuilder {
    directories: Vec<PathBuf>,
    files: Vec<(PathBuf, Vec<u8>)>,
}

/// A materialized fixture tree; removed from disk on drop
#[derive(Debug)]
pub struct TestTree {
    dir: TempDir,
}

impl TestTreeBuilder {
    /// Create a new, empty tree builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an (initially empty) directory, relative to the tree root
    pub fn with_dir(mut self, relative: &str) -> Self {
        self.directories.push(PathBuf::from(relative));
        self
    }

    /// Add a file with explicit content, creating parent directories
    pub fn with_file(mut self, relative: &str, content: &[u8]) -> Self {
        self.files.push((PathBuf::from(relative), content.to_vec()));
        self
    }

    /// Add several files whose content is their own relative path
    pub fn with_files(mut self, relatives: &[&str]) -> Self {
        for relative in relatives {
            self = self.with_file(relative, relative.as_bytes());
        }
        self
    }

    /// Write the tree to disk
    pub fn build(self) -> TestTree {
        let dir = TempDir::new().expect("create temporary directory");

        for relative in &self.directories {
            fs::create_dir_all(dir.path().join(relative)).expect("create fixture directory");
        }

        for (relative, content) in &self.files {
            let path = dir.path().join(relative);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).expect("create fixture parent directory");
            }
            fs::write(&path, content).expect("write fixture file");
        }

        TestTree { dir }
    }
}

impl TestTree {
    /// Root of the tree
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of an entry inside the tree
    pub fn join(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }
}
