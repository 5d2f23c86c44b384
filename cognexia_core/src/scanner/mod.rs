//! Directory scanner for document discovery
//!
//! Walks a root path (file or directory) and returns every file whose
//! extension is in the allow-list, either as bare paths or with size and
//! modification time attached. Filesystem failures never abort a scan:
//! a missing root, an unreadable directory or a failed `stat` each become a
//! [`ScanWarning`] in the returned [`ScanReport`] and a `warn` log line.
//!
//! ```no_run
//! use cognexia_core::scanner::{ScanOptions, scan};
//!
//! let report = scan("~/notes", &ScanOptions::new().with_extensions(["md"]));
//! for path in &report.items {
//!     println!("{}", path.display());
//! }
//! ```

mod diagnostics;
mod extensions;
mod filesystem;
mod metadata;
mod options;

pub use diagnostics::{RootKind, ScanReport, ScanWarning, ScanWarningKind};
pub use extensions::{DEFAULT_EXTENSIONS, ExtensionSet, normalize_extension};
pub use filesystem::{FileSystem, LocalFileSystem, WalkEntry};
pub use metadata::{FileMetadata, FileStat};
pub use options::ScanOptions;

use std::io;
use std::path::{Path, PathBuf};

use crate::error::IoError;
use crate::paths::expand_home;

/// Scanner over a [`FileSystem`]
///
/// Holds no state between scans; every call repeats the full walk.
#[derive(Debug, Clone, Default)]
pub struct Scanner<F = LocalFileSystem> {
    fs: F,
}

impl Scanner<LocalFileSystem> {
    /// Scanner over the real filesystem
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: FileSystem> Scanner<F> {
    /// Scanner over a custom filesystem implementation
    pub fn with_filesystem(fs: F) -> Self {
        Self { fs }
    }

    /// Find matching files below `root`
    pub fn scan<P: AsRef<Path>>(&self, root: P, options: &ScanOptions) -> ScanReport<PathBuf> {
        self.collect(root.as_ref(), options, |_, path| path)
    }

    /// Find matching files below `root` and attach their metadata
    ///
    /// A file whose metadata cannot be read is still reported, with both
    /// size and modification time unknown.
    pub fn scan_with_metadata<P: AsRef<Path>>(
        &self,
        root: P,
        options: &ScanOptions,
    ) -> ScanReport<FileMetadata> {
        self.collect(root.as_ref(), options, |report, path| {
            match self.fs.stat(&path) {
                Ok(stat) => FileMetadata::known(path, stat),
                Err(error) => {
                    report.warn(ScanWarning::stat(&path, &error));
                    FileMetadata::unknown(path)
                }
            }
        })
    }

    fn collect<T, B>(&self, root: &Path, options: &ScanOptions, mut build: B) -> ScanReport<T>
    where
        B: FnMut(&mut ScanReport<T>, PathBuf) -> T,
    {
        let root = expand_home(root);
        let extensions = options.extension_set();
        let root_kind = self.fs.probe(&root);
        let mut report = ScanReport::new(root.clone(), root_kind);

        log::debug!(
            "Scanning {} ({root_kind:?}) for {:?}, ignore_hidden={}",
            root.display(),
            extensions.iter().collect::<Vec<_>>(),
            options.ignore_hidden
        );

        match root_kind {
            RootKind::Missing => report.warn(ScanWarning::root_not_found(&root)),
            RootKind::Other => {
                let error = IoError::from_std(io::Error::other("not a regular file or directory"))
                    .with_path(&root);
                report.warn(ScanWarning::traversal(&error));
            }
            RootKind::File => {
                if extensions.matches(&root) {
                    let item = build(&mut report, root.clone());
                    report.items.push(item);
                }
            }
            RootKind::Directory => {
                for entry in self.fs.walk(&root, options) {
                    match entry {
                        Ok(path) if extensions.matches(&path) => {
                            let item = build(&mut report, path);
                            report.items.push(item);
                        }
                        Ok(_) => {}
                        Err(error) => report.warn(ScanWarning::traversal(&error)),
                    }
                }
            }
        }

        log::debug!(
            "Scan of {} found {} file(s) with {} warning(s)",
            root.display(),
            report.items.len(),
            report.warnings.len()
        );

        report
    }
}

/// Find matching files below `root` on the real filesystem
pub fn scan<P: AsRef<Path>>(root: P, options: &ScanOptions) -> ScanReport<PathBuf> {
    Scanner::new().scan(root, options)
}

/// Find matching files below `root` on the real filesystem, with metadata
pub fn scan_with_metadata<P: AsRef<Path>>(
    root: P,
    options: &ScanOptions,
) -> ScanReport<FileMetadata> {
    Scanner::new().scan_with_metadata(root, options)
}
