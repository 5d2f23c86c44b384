//! Error types for the Cognexia core library
//!
//! The scanner never surfaces these to its callers; filesystem failures
//! during a scan become [`crate::scanner::ScanWarning`] records instead.
//! These types are used where a caller-visible failure is the contract,
//! such as loading a document's text.

use thiserror::Error;

pub mod io;
pub mod validation;

pub use self::io::{IoError, IoErrorKind};
pub use self::validation::ValidationError;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Cognexia core library
#[derive(Error, Debug)]
pub enum Error {
    /// I/O related errors
    #[error(transparent)]
    Io(#[from] IoError),

    /// Validation related errors
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::Io(IoError::from_std(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;
    use std::path::Path;

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: Error = io_error.into();

        match error {
            Error::Io(io_err) => assert_eq!(io_err.kind, IoErrorKind::PermissionDenied),
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let error: Error = ValidationError::invalid_encoding(Path::new("/a.txt"), "bad").into();
        assert!(error.to_string().starts_with("Invalid encoding"));
    }

    #[test]
    fn test_io_error_source_chain() {
        let io_error = std::io::Error::other("underlying");
        let error = Error::Io(IoError::from_std(io_error));

        let source = error.source().expect("transparent io error exposes its source");
        assert_eq!(source.to_string(), "underlying");
    }
}
