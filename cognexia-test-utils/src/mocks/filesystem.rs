//! Mock file system implementation for testing

use cognexia_core::error::IoError;
use cognexia_core::paths::is_hidden_name;
use cognexia_core::scanner::{FileStat, FileSystem, RootKind, ScanOptions, WalkEntry};
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// In-memory file system with scripted failures
///
/// Walks visit entries in path order. A walk failure injected at a directory
/// hides every file below it, the way an unreadable directory does on disk.
pub struct MockFileSystem {
    files: BTreeMap<PathBuf, MockFile>,
    directories: BTreeSet<PathBuf>,
    walk_failures: BTreeMap<PathBuf, io::ErrorKind>,
    anonymous_walk_failures: Vec<io::ErrorKind>,
}

#[derive(Debug, Clone)]
enum MockFile {
    Readable(FileStat),
    StatFails(io::ErrorKind),
}

impl MockFileSystem {
    /// Create a new mock file system
    pub fn new() -> Self {
        Self {
            files: BTreeMap::new(),
            directories: BTreeSet::new(),
            walk_failures: BTreeMap::new(),
            anonymous_walk_failures: Vec::new(),
        }
    }

    /// Add a readable file of the given size, registering its parents
    pub fn add_file(&mut self, path: &str, size: u64) {
        let path = PathBuf::from(path);
        self.register_parents(&path);
        let stat = FileStat::new(size, SystemTime::now()).expect("current time fits a timestamp");
        self.files.insert(path, MockFile::Readable(stat));
    }

    /// Add a file whose metadata lookup fails with `kind`
    pub fn add_file_with_stat_error(&mut self, path: &str, kind: io::ErrorKind) {
        let path = PathBuf::from(path);
        self.register_parents(&path);
        self.files.insert(path, MockFile::StatFails(kind));
    }

    /// Create a directory
    pub fn create_directory(&mut self, path: &str) {
        let path = PathBuf::from(path);
        self.register_parents(&path);
        self.directories.insert(path);
    }

    /// Make the walk report a failure at `path`
    pub fn fail_walk_at(&mut self, path: &str, kind: io::ErrorKind) {
        self.walk_failures.insert(PathBuf::from(path), kind);
    }

    /// Make the walk report a failure that carries no path
    pub fn fail_walk_without_path(&mut self, kind: io::ErrorKind) {
        self.anonymous_walk_failures.push(kind);
    }

    fn register_parents(&mut self, path: &Path) {
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.directories.insert(ancestor.to_path_buf());
        }
    }

    fn is_visible(root: &Path, path: &Path, options: &ScanOptions) -> bool {
        if !options.ignore_hidden {
            return true;
        }

        match path.strip_prefix(root) {
            Ok(relative) => relative
                .components()
                .all(|component| !is_hidden_name(component.as_os_str())),
            Err(_) => false,
        }
    }

    fn is_unreachable(&self, path: &Path) -> bool {
        self.walk_failures
            .keys()
            .any(|failed| failed != path && path.starts_with(failed))
    }

    fn injected(kind: io::ErrorKind) -> io::Error {
        io::Error::new(kind, "injected failure")
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn probe(&self, path: &Path) -> RootKind {
        if self.files.contains_key(path) {
            RootKind::File
        } else if self.directories.contains(path) {
            RootKind::Directory
        } else {
            RootKind::Missing
        }
    }

    fn walk<'a>(
        &'a self,
        root: &Path,
        options: &ScanOptions,
    ) -> Box<dyn Iterator<Item = WalkEntry> + 'a> {
        let mut entries: BTreeMap<PathBuf, WalkEntry> = BTreeMap::new();

        for (path, kind) in &self.walk_failures {
            if path.starts_with(root) && Self::is_visible(root, path, options) {
                let error = IoError::from_std(Self::injected(*kind)).with_path(path);
                entries.insert(path.clone(), Err(error));
            }
        }

        for path in self.files.keys() {
            if path.starts_with(root)
                && Self::is_visible(root, path, options)
                && !self.is_unreachable(path)
                && !entries.contains_key(path)
            {
                entries.insert(path.clone(), Ok(path.clone()));
            }
        }

        let anonymous: Vec<WalkEntry> = self
            .anonymous_walk_failures
            .iter()
            .map(|kind| Err(IoError::from_std(Self::injected(*kind))))
            .collect();

        Box::new(anonymous.into_iter().chain(entries.into_values()))
    }

    fn stat(&self, path: &Path) -> Result<FileStat, IoError> {
        match self.files.get(path) {
            Some(MockFile::Readable(stat)) => Ok(*stat),
            Some(MockFile::StatFails(kind)) => {
                Err(IoError::from_std(Self::injected(*kind)).with_path(path))
            }
            None => Err(IoError::file_not_found(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walked(fs: &MockFileSystem, root: &str, options: &ScanOptions) -> Vec<String> {
        fs.walk(Path::new(root), options)
            .map(|entry| match entry {
                Ok(path) => path.display().to_string(),
                Err(error) => format!("ERR {}", error.path_display()),
            })
            .collect()
    }

    #[test]
    fn test_probe() {
        let mut fs = MockFileSystem::new();
        fs.add_file("/docs/a.txt", 1);

        assert_eq!(fs.probe(Path::new("/docs")), RootKind::Directory);
        assert_eq!(fs.probe(Path::new("/docs/a.txt")), RootKind::File);
        assert_eq!(fs.probe(Path::new("/nope")), RootKind::Missing);
    }

    #[test]
    fn test_failure_hides_subtree() {
        let mut fs = MockFileSystem::new();
        fs.add_file("/docs/a.txt", 1);
        fs.add_file("/docs/locked/b.txt", 1);
        fs.fail_walk_at("/docs/locked", io::ErrorKind::PermissionDenied);

        assert_eq!(
            walked(&fs, "/docs", &ScanOptions::new()),
            vec!["/docs/a.txt", "ERR /docs/locked"]
        );
    }

    #[test]
    fn test_hidden_entries_pruned() {
        let mut fs = MockFileSystem::new();
        fs.add_file("/docs/.git/config.txt", 1);
        fs.add_file("/docs/a.txt", 1);

        assert_eq!(walked(&fs, "/docs", &ScanOptions::new()), vec!["/docs/a.txt"]);
        assert_eq!(
            walked(&fs, "/docs", &ScanOptions::new().with_ignore_hidden(false)),
            vec!["/docs/.git/config.txt", "/docs/a.txt"]
        );
    }

    #[test]
    fn test_stat_failure() {
        let mut fs = MockFileSystem::new();
        fs.add_file_with_stat_error("/docs/a.txt", io::ErrorKind::PermissionDenied);

        let error = fs.stat(Path::new("/docs/a.txt")).unwrap_err();
        assert!(error.is_permission_denied());
    }
}
