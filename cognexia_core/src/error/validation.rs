//! Validation related error types

use std::path::PathBuf;
use thiserror::Error;

/// Input validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    /// File contents could not be decoded as UTF-8
    #[error("Invalid encoding in {path}: {reason}")]
    InvalidEncoding { path: PathBuf, reason: String },

    /// Invalid input parameter
    #[error("Invalid parameter '{parameter}': {reason}")]
    InvalidParameter { parameter: String, reason: String },
}

impl ValidationError {
    /// Create an invalid encoding error
    pub fn invalid_encoding(path: &std::path::Path, reason: &str) -> Self {
        Self::InvalidEncoding {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: &str, reason: &str) -> Self {
        Self::InvalidParameter {
            parameter: parameter.to_string(),
            reason: reason.to_string(),
        }
    }
}
