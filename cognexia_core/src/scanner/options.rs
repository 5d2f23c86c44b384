//! Scan configuration

use serde::{Deserialize, Serialize};

use super::extensions::ExtensionSet;

/// Options for a single scan
///
/// Deserializes from the `[scan]` section of the configuration file; every
/// field is optional there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    /// Allowed extensions as supplied by the user (None = defaults)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,
    /// Skip files and directories whose name starts with a dot
    pub ignore_hidden: bool,
    /// Visit siblings in file-name order instead of directory order
    pub sort_entries: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extensions: None,
            ignore_hidden: true,
            sort_entries: false,
        }
    }
}

impl ScanOptions {
    /// Create new options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the scan to these extensions
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = Some(extensions.into_iter().map(Into::into).collect());
        self
    }

    /// Set whether hidden entries are skipped
    pub fn with_ignore_hidden(mut self, ignore_hidden: bool) -> Self {
        self.ignore_hidden = ignore_hidden;
        self
    }

    /// Set whether siblings are visited in file-name order
    pub fn with_sort_entries(mut self, sort_entries: bool) -> Self {
        self.sort_entries = sort_entries;
        self
    }

    /// The normalized extension set these options describe
    pub fn extension_set(&self) -> ExtensionSet {
        ExtensionSet::from_user(self.extensions.as_deref())
    }
}
