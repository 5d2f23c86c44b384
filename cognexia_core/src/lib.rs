//! Cognexia Core Library
//!
//! Local document discovery for the Cognexia assistant: a fault-tolerant
//! directory scanner, text loading and normalization, and the query engine
//! entry point.

pub mod error;
pub mod inference;
pub mod loader;
pub mod paths;
pub mod preprocessing;
pub mod scanner;

// Re-export main types
pub use error::{Error, Result};
pub use inference::handle_query;
pub use loader::load_text;
pub use preprocessing::{PreprocessOptions, preprocess_text, tokenize};
pub use scanner::{
    FileMetadata, RootKind, ScanOptions, ScanReport, ScanWarning, ScanWarningKind, Scanner, scan,
    scan_with_metadata,
};
