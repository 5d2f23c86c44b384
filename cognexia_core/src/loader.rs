//! Loading document text for the ingestion pipeline
//!
//! Consumes the paths produced by the scanner. Unlike scanning, loading a
//! single document is a caller-visible operation and returns errors.

use std::fs;
use std::io;
use std::path::Path;

use crate::Result;
use crate::error::{IoError, ValidationError};
use crate::paths::expand_home;

/// Read a document as UTF-8 text
pub fn load_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = expand_home(path);

    if path.is_dir() {
        return Err(
            ValidationError::invalid_parameter("path", &format!("{} is a directory", path.display()))
                .into(),
        );
    }

    let bytes = fs::read(&path).map_err(|error| match error.kind() {
        io::ErrorKind::NotFound => IoError::file_not_found(&path),
        io::ErrorKind::PermissionDenied => IoError::permission_denied(&path, error),
        _ => IoError::from_std(error).with_path(&path),
    })?;

    let text = String::from_utf8(bytes)
        .map_err(|error| ValidationError::invalid_encoding(&path, &error.to_string()))?;

    log::debug!("Loaded {} ({} bytes)", path.display(), text.len());
    Ok(text)
}
