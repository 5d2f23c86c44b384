//! Mock implementations for testing

mod filesystem;

pub use filesystem::MockFileSystem;
