//! Cognexia command-line interface
//!
//! The binary in `main.rs` wires these modules together; they live in a
//! library so integration tests can drive configuration and routing directly.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod paths;
pub mod terminal;
