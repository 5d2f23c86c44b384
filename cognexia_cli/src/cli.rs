//! Command-line definition

use clap::{Parser, Subcommand, ValueEnum};
use std::ffi::OsString;
use std::path::PathBuf;

/// Subcommand names recognised before argument normalization
const KNOWN_COMMANDS: &[&str] = &[
    "query",
    "help",
    "version",
    "scan",
    "config",
    "completions",
];

#[derive(Parser, Debug)]
#[command(name = "cognexia")]
#[command(author, version, about = "Cognexia - local document scanning and query assistant", long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask the assistant a question
    Query {
        /// Query text
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Show usage information
    Help,

    /// Show the version
    Version,

    /// List supported documents under a path
    Scan {
        /// File or directory to scan (`~` is expanded)
        path: PathBuf,

        /// Extension to include, replaces the configured set (repeatable)
        #[arg(short = 'x', long = "extension", value_name = "EXT")]
        extensions: Vec<String>,

        /// Descend into hidden files and directories
        #[arg(long)]
        include_hidden: bool,

        /// Include size and modification time
        #[arg(long)]
        metadata: bool,

        /// Visit entries in file-name order
        #[arg(long)]
        sort: bool,

        /// Output format, defaults to the configured format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Get a configuration value
    Get {
        /// Configuration key (e.g., scan.ignore_hidden)
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., scan.extensions)
        key: String,

        /// Value to set (comma-separated for scan.extensions)
        value: String,
    },

    /// List all configuration values
    List,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Parse a configured format name, falling back to text
    pub fn from_config(name: &str) -> Self {
        if name.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Treat free text as a query: `cognexia what is rust` runs `query what is rust`
///
/// The first element is the program name and is left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    let needs_query = args.get(1).is_some_and(|first| {
        let first = first.to_string_lossy();
        !first.starts_with('-') && !KNOWN_COMMANDS.contains(&first.as_ref())
    });
    if needs_query {
        args.insert(1, OsString::from("query"));
    }

    args
}
