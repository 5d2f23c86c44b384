//! Structured scan warnings and the report returned by every scan
//!
//! Warnings are collected into the [`ScanReport`] and also emitted through
//! the `log` facade, so callers can either inspect them directly or rely on
//! their logger configuration.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::IoError;

/// Category of a non-fatal scan problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanWarningKind {
    /// The scan root does not exist
    RootNotFound,
    /// Permission denied while listing a directory entry
    TraversalPermissionDenied,
    /// Any other failure while listing a directory entry
    Traversal,
    /// Permission denied while reading a file's metadata
    StatPermissionDenied,
    /// Any other failure while reading a file's metadata
    Stat,
}

/// A single non-fatal problem encountered during a scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanWarning {
    pub kind: ScanWarningKind,
    pub path: Option<PathBuf>,
    pub message: String,
}

impl ScanWarning {
    pub fn root_not_found(root: &Path) -> Self {
        Self {
            kind: ScanWarningKind::RootNotFound,
            path: Some(root.to_path_buf()),
            message: format!("Path does not exist: {}", root.display()),
        }
    }

    /// Warning for an entry the directory walk could not read
    pub fn traversal(error: &IoError) -> Self {
        let (kind, message) = if error.is_permission_denied() {
            (
                ScanWarningKind::TraversalPermissionDenied,
                format!("Permission denied accessing {}", error.path_display()),
            )
        } else {
            (
                ScanWarningKind::Traversal,
                format!("Error accessing {}: {}", error.path_display(), error.detail()),
            )
        };

        Self {
            kind,
            path: error.path.clone(),
            message,
        }
    }

    /// Warning for a file whose metadata could not be read
    pub fn stat(path: &Path, error: &IoError) -> Self {
        let (kind, message) = if error.is_permission_denied() {
            (
                ScanWarningKind::StatPermissionDenied,
                format!("Permission denied reading {}", path.display()),
            )
        } else {
            (
                ScanWarningKind::Stat,
                format!("Unable to stat {}: {}", path.display(), error.detail()),
            )
        };

        Self {
            kind,
            path: Some(path.to_path_buf()),
            message,
        }
    }

    pub fn is_permission_denied(&self) -> bool {
        matches!(
            self.kind,
            ScanWarningKind::TraversalPermissionDenied | ScanWarningKind::StatPermissionDenied
        )
    }
}

impl fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// What the scan root turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RootKind {
    Missing,
    File,
    Directory,
    /// Exists but is neither a regular file nor a directory (fifo, socket)
    Other,
}

/// Result of a scan: the matching items plus every warning raised
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport<T> {
    /// Root after home expansion
    pub root: PathBuf,
    pub root_kind: RootKind,
    pub items: Vec<T>,
    pub warnings: Vec<ScanWarning>,
}

impl<T> ScanReport<T> {
    pub(crate) fn new(root: PathBuf, root_kind: RootKind) -> Self {
        Self {
            root,
            root_kind,
            items: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Record a warning and forward it to the logger
    pub(crate) fn warn(&mut self, warning: ScanWarning) {
        log::warn!("{warning}");
        self.warnings.push(warning);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Drop the diagnostics and keep only the items
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}
