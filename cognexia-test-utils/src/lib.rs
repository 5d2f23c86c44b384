//! Test utilities for Cognexia
//!
//! This crate provides fixture directory trees and a scripted filesystem
//! for exercising the scanner's failure handling.

pub mod builders;
pub mod mocks;

// Re-export commonly used types
pub use builders::{TestTree, TestTreeBuilder};
pub use mocks::MockFileSystem;
