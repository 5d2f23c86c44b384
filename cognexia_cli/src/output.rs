//! Rendering of scan reports

use anyhow::Result;
use cognexia_core::{FileMetadata, RootKind, ScanReport, ScanWarning};
use colored::*;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Format bytes as human-readable string
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", size as u64, UNITS[unit_index])
    } else {
        format!("{:.2} {}", size, UNITS[unit_index])
    }
}

/// A scan result that can be shown as one line of text
pub trait ScanItem: Serialize {
    fn text_line(&self) -> String;
}

impl ScanItem for PathBuf {
    fn text_line(&self) -> String {
        self.display().to_string()
    }
}

impl ScanItem for FileMetadata {
    fn text_line(&self) -> String {
        match self.stat() {
            Some(stat) => format!(
                "{}\t{}\t{}",
                self.path().display(),
                format_bytes(stat.size_bytes),
                stat.last_modified.format("%Y-%m-%d %H:%M:%S UTC")
            ),
            None => format!("{}\t-\t-", self.path().display()),
        }
    }
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    use_color: bool,
}

impl TextFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn colorize(&self, text: &str, color: fn(&str) -> ColoredString) -> String {
        if self.use_color {
            color(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// One line per item, nothing else
    pub fn format_items<T: ScanItem>(&self, report: &ScanReport<T>) -> String {
        let mut output = String::new();
        for item in &report.items {
            output.push_str(&item.text_line());
            output.push('\n');
        }
        output
    }

    /// Closing summary for interactive terminals
    pub fn format_summary<T>(&self, report: &ScanReport<T>) -> String {
        let noun = if report.len() == 1 { "file" } else { "files" };
        let mut summary = self.colorize(&format!("Found {} {noun}", report.len()), |s| {
            s.green().bold()
        });
        summary.push_str(&format!(" in {}", report.root.display()));

        if report.root_kind == RootKind::Missing {
            summary.push_str(&self.colorize(" (path does not exist)", |s| s.yellow()));
        }
        if report.has_warnings() {
            let count = report.warnings.len();
            let label = if count == 1 { "warning" } else { "warnings" };
            summary.push_str(&self.colorize(&format!(" with {count} {label}"), |s| s.yellow()));
        }

        summary
    }
}

/// JSON document written for `--format json`
#[derive(Serialize)]
struct ScanDocument<'a, T> {
    root: &'a Path,
    root_kind: RootKind,
    files: &'a [T],
    warnings: &'a [ScanWarning],
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn format_report<T: Serialize>(&self, report: &ScanReport<T>) -> Result<String> {
        let document = ScanDocument {
            root: &report.root,
            root_kind: report.root_kind,
            files: &report.items,
            warnings: &report.warnings,
        };

        if self.pretty {
            Ok(serde_json::to_string_pretty(&document)?)
        } else {
            Ok(serde_json::to_string(&document)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cognexia_core::scanner::{ScanOptions, Scanner};
    use cognexia_test_utils::MockFileSystem;
    use serde_json::Value;
    use std::io;

    fn mock_report() -> ScanReport<PathBuf> {
        let mut fs = MockFileSystem::new();
        fs.add_file("/docs/a.txt", 10);
        fs.add_file("/docs/b.md", 20);
        fs.fail_walk_at("/docs/locked", io::ErrorKind::PermissionDenied);
        Scanner::with_filesystem(fs).scan("/docs", &ScanOptions::new())
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1536), "1.50 KB");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5.00 MB");
    }

    #[test]
    fn test_text_items_one_per_line() {
        let output = TextFormatter::new(false).format_items(&mock_report());
        assert_eq!(output, "/docs/a.txt\n/docs/b.md\n");
    }

    #[test]
    fn test_text_summary_mentions_warnings() {
        let summary = TextFormatter::new(false).format_summary(&mock_report());
        assert_eq!(summary, "Found 2 files in /docs with 1 warning");
    }

    #[test]
    fn test_text_summary_for_missing_root() {
        let report = Scanner::with_filesystem(MockFileSystem::new())
            .scan("/nowhere", &ScanOptions::new());
        let summary = TextFormatter::new(false).format_summary(&report);

        assert!(summary.starts_with("Found 0 files in /nowhere"));
        assert!(summary.contains("(path does not exist)"));
    }

    #[test]
    fn test_metadata_line_without_stat() {
        let record = FileMetadata::unknown(PathBuf::from("/docs/a.txt"));
        assert_eq!(record.text_line(), "/docs/a.txt\t-\t-");
    }

    #[test]
    fn test_json_document_shape() {
        let output = JsonFormatter::new(false)
            .format_report(&mock_report())
            .unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["root"], "/docs");
        assert_eq!(value["root_kind"], "directory");
        assert_eq!(value["files"].as_array().unwrap().len(), 2);
        assert_eq!(
            value["warnings"][0]["kind"],
            "traversal_permission_denied"
        );
        assert_eq!(value["warnings"][0]["path"], "/docs/locked");
    }

    #[test]
    fn test_json_metadata_records_are_flat() {
        let mut fs = MockFileSystem::new();
        fs.add_file_with_stat_error("/docs/a.txt", io::ErrorKind::Other);
        let report = Scanner::with_filesystem(fs).scan_with_metadata("/docs", &ScanOptions::new());

        let output = JsonFormatter::new(true).format_report(&report).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        let record = &value["files"][0];
        assert_eq!(record["path"], "/docs/a.txt");
        assert!(record["size_bytes"].is_null());
        assert!(record["last_modified"].is_null());
    }
}
