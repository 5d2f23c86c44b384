//! Metadata records attached to scan results

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

/// Size and modification time of a file, as returned by `stat`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    pub size_bytes: u64,
    pub last_modified: DateTime<Utc>,
}

impl FileStat {
    /// `None` when `modified` is outside the range chrono can represent
    pub fn new(size_bytes: u64, modified: SystemTime) -> Option<Self> {
        utc_timestamp(modified).map(|last_modified| Self {
            size_bytes,
            last_modified,
        })
    }

    /// Read size and modification time from `std::fs::Metadata`
    pub fn from_std(metadata: &std::fs::Metadata) -> io::Result<Self> {
        let modified = metadata.modified()?;
        Self::new(metadata.len(), modified).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                "modification time out of range",
            )
        })
    }
}

fn utc_timestamp(time: SystemTime) -> Option<DateTime<Utc>> {
    match time.duration_since(UNIX_EPOCH) {
        Ok(since) => {
            DateTime::from_timestamp(i64::try_from(since.as_secs()).ok()?, since.subsec_nanos())
        }
        Err(before) => {
            let before = before.duration();
            let secs = i64::try_from(before.as_secs()).ok()?;
            match before.subsec_nanos() {
                0 => DateTime::from_timestamp(-secs, 0),
                nanos => DateTime::from_timestamp(-secs - 1, 1_000_000_000 - nanos),
            }
        }
    }
}

/// A discovered file with optional metadata
///
/// Size and modification time are either both known or both unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "FileMetadataRecord")]
pub struct FileMetadata {
    path: PathBuf,
    stat: Option<FileStat>,
}

impl FileMetadata {
    /// A file whose stat succeeded
    pub fn known(path: PathBuf, stat: FileStat) -> Self {
        Self {
            path,
            stat: Some(stat),
        }
    }

    /// A file whose stat failed
    pub fn unknown(path: PathBuf) -> Self {
        Self { path, stat: None }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }

    pub fn size_bytes(&self) -> Option<u64> {
        self.stat.map(|stat| stat.size_bytes)
    }

    pub fn last_modified(&self) -> Option<DateTime<Utc>> {
        self.stat.map(|stat| stat.last_modified)
    }

    pub fn stat(&self) -> Option<&FileStat> {
        self.stat.as_ref()
    }
}

/// Flat serialized shape of [`FileMetadata`]
#[derive(Serialize)]
struct FileMetadataRecord {
    path: PathBuf,
    size_bytes: Option<u64>,
    last_modified: Option<DateTime<Utc>>,
}

impl From<FileMetadata> for FileMetadataRecord {
    fn from(metadata: FileMetadata) -> Self {
        Self {
            size_bytes: metadata.size_bytes(),
            last_modified: metadata.last_modified(),
            path: metadata.path,
        }
    }
}
