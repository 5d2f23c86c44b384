//! Filesystem access used by the scanner
//!
//! The scanner only talks to the filesystem through [`FileSystem`], which
//! reports every directory entry as its own `Result`. [`LocalFileSystem`] is
//! the live implementation built on walkdir; tests substitute a scripted one
//! to inject traversal and stat failures.

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use super::diagnostics::RootKind;
use super::metadata::FileStat;
use super::options::ScanOptions;
use crate::error::IoError;
use crate::paths::is_hidden_name;

/// One step of a directory walk: a file path or the failure at that entry
pub type WalkEntry = std::result::Result<PathBuf, IoError>;

/// Filesystem operations needed by the scanner
pub trait FileSystem {
    /// Classify the scan root
    fn probe(&self, path: &Path) -> RootKind;

    /// Walk every non-directory entry below `root`, depth-first and top-down
    ///
    /// Symlinked directories are neither descended into nor yielded. When
    /// `options.ignore_hidden` is set, hidden entries below the root are
    /// pruned before they are visited, so hidden directories contribute
    /// nothing. A failing entry yields an `Err` and the walk continues.
    fn walk<'a>(
        &'a self,
        root: &Path,
        options: &ScanOptions,
    ) -> Box<dyn Iterator<Item = WalkEntry> + 'a>;

    /// Read size and modification time of a file
    fn stat(&self, path: &Path) -> std::result::Result<FileStat, IoError>;
}

/// The real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFileSystem {
    fn probe(&self, path: &Path) -> RootKind {
        match fs::metadata(path) {
            Ok(metadata) if metadata.is_file() => RootKind::File,
            Ok(metadata) if metadata.is_dir() => RootKind::Directory,
            Ok(_) => RootKind::Other,
            Err(_) => RootKind::Missing,
        }
    }

    fn walk<'a>(
        &'a self,
        root: &Path,
        options: &ScanOptions,
    ) -> Box<dyn Iterator<Item = WalkEntry> + 'a> {
        let mut walker = WalkDir::new(root).follow_links(false);
        if options.sort_entries {
            walker = walker.sort_by_file_name();
        }

        let ignore_hidden = options.ignore_hidden;
        let entries = walker
            .into_iter()
            .filter_entry(move |entry| !(ignore_hidden && is_hidden_entry(entry)))
            .filter_map(|entry| match entry {
                Ok(entry) if is_file_entry(&entry) => Some(Ok(entry.into_path())),
                Ok(_) => None,
                Err(error) => Some(Err(IoError::from_walk(error))),
            });

        Box::new(entries)
    }

    fn stat(&self, path: &Path) -> std::result::Result<FileStat, IoError> {
        fs::metadata(path)
            .and_then(|metadata| FileStat::from_std(&metadata))
            .map_err(|error| IoError::from_std(error).with_path(path))
    }
}

/// The root itself is never treated as hidden
fn is_hidden_entry(entry: &DirEntry) -> bool {
    entry.depth() > 0 && is_hidden_name(entry.file_name())
}

/// Every non-directory entry: files, fifos, sockets and symlinks that do not
/// resolve to a directory, dangling ones included
fn is_file_entry(entry: &DirEntry) -> bool {
    if entry.file_type().is_dir() {
        return false;
    }

    !(entry.path_is_symlink()
        && fs::metadata(entry.path())
            .map(|metadata| metadata.is_dir())
            .unwrap_or(false))
}
