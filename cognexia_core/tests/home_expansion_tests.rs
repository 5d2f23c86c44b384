//! Scanning and loading paths relative to the home directory
//!
//! These tests point `HOME` at a fixture tree, so they run serially.

#![cfg(unix)]

use cognexia_core::load_text;
use cognexia_core::scanner::{RootKind, ScanOptions, scan};
use cognexia_test_utils::TestTreeBuilder;
use serial_test::serial;
use std::ffi::OsString;
use std::path::Path;

struct HomeGuard {
    previous: Option<OsString>,
}

impl HomeGuard {
    fn set(home: &Path) -> Self {
        let previous = std::env::var_os("HOME");
        // SAFETY: serial tests, no other thread reads the environment
        unsafe { std::env::set_var("HOME", home) };
        Self { previous }
    }
}

impl Drop for HomeGuard {
    fn drop(&mut self) {
        // SAFETY: serial tests, no other thread reads the environment
        unsafe {
            match &self.previous {
                Some(value) => std::env::set_var("HOME", value),
                None => std::env::remove_var("HOME"),
            }
        }
    }
}

#[test]
#[serial]
fn test_scan_expands_tilde_root() {
    let tree = TestTreeBuilder::new()
        .with_files(&["docs/a.txt", "docs/b.jpg"])
        .build();
    let _home = HomeGuard::set(tree.path());

    let report = scan("~/docs", &ScanOptions::new());

    assert_eq!(report.root, tree.join("docs"));
    assert_eq!(report.root_kind, RootKind::Directory);
    assert_eq!(report.items, vec![tree.join("docs/a.txt")]);
}

#[test]
#[serial]
fn test_missing_tilde_root_reports_expanded_path() {
    let tree = TestTreeBuilder::new().build();
    let _home = HomeGuard::set(tree.path());

    let report = scan("~/nowhere", &ScanOptions::new());

    assert!(report.is_empty());
    assert!(
        report.warnings[0]
            .message
            .contains(&tree.join("nowhere").display().to_string())
    );
}

#[test]
#[serial]
fn test_load_text_expands_tilde() {
    let tree = TestTreeBuilder::new()
        .with_file("notes/today.md", b"remember the milk")
        .build();
    let _home = HomeGuard::set(tree.path());

    assert_eq!(load_text("~/notes/today.md").unwrap(), "remember the milk");
}
