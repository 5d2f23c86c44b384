use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use colored::*;
use std::path::PathBuf;

use cognexia_cli::cli::{Cli, Commands, ConfigCommand, OutputFormat, normalize_args};
use cognexia_cli::commands::{BasicCommand, route_command};
use cognexia_cli::config::{AppConfig, ConfigManager, get_config};
use cognexia_cli::error::ExitCode;
use cognexia_cli::output::{JsonFormatter, ScanItem, TextFormatter};
use cognexia_cli::terminal;
use cognexia_core::{ScanOptions, ScanReport, Scanner};

/// Flags of the `scan` subcommand
struct ScanArgs {
    path: PathBuf,
    extensions: Vec<String>,
    include_hidden: bool,
    metadata: bool,
    sort: bool,
    format: Option<OutputFormat>,
}

#[tokio::main]
async fn main() -> Result<std::process::ExitCode> {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    // Initialize logging based on debug flag
    if cli.debug {
        env_logger::Builder::from_env(env_logger::Env::default())
            .filter_level(log::LevelFilter::Debug)
            .filter_module("cognexia_core", log::LevelFilter::Debug)
            .filter_module("cognexia_cli", log::LevelFilter::Debug)
            .filter_module("cognexia", log::LevelFilter::Debug)
            .format_timestamp_millis()
            .init();
        eprintln!("Debug logging enabled");
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let exit_code = match cli.command {
        None => basic_command(None),
        Some(Commands::Help) => basic_command(Some(BasicCommand::Help)),
        Some(Commands::Version) => basic_command(Some(BasicCommand::Version)),
        Some(Commands::Query { text }) => basic_command(Some(BasicCommand::Query(&text))),
        Some(Commands::Scan {
            path,
            extensions,
            include_hidden,
            metadata,
            sort,
            format,
        }) => {
            let config = get_config().context("Failed to load configuration")?;
            let args = ScanArgs {
                path,
                extensions,
                include_hidden,
                metadata,
                sort,
                format,
            };
            scan_command(config, args).await?
        }
        Some(Commands::Config { command }) => config_command(command),
        Some(Commands::Completions { shell }) => {
            generate_completions(shell);
            ExitCode::Success
        }
    };

    Ok(exit_code.into())
}

fn basic_command(command: Option<BasicCommand<'_>>) -> ExitCode {
    let help_text = Cli::command().render_help().to_string();
    let outcome = route_command(command, &help_text);

    if outcome.exit_code.is_success() {
        println!("{}", outcome.message);
    } else {
        eprintln!("{}", outcome.message);
    }

    outcome.exit_code
}

/// Merge command-line flags over the configured scan options
fn scan_options(config: &AppConfig, args: &ScanArgs) -> ScanOptions {
    let mut options = config.scan.clone();

    if !args.extensions.is_empty() {
        options = options.with_extensions(args.extensions.iter().cloned());
    }
    if args.include_hidden {
        options = options.with_ignore_hidden(false);
    }
    if args.sort {
        options = options.with_sort_entries(true);
    }

    options
}

async fn scan_command(config: AppConfig, args: ScanArgs) -> Result<ExitCode> {
    let options = scan_options(&config, &args);
    let format = args
        .format
        .unwrap_or_else(|| OutputFormat::from_config(&config.output.default_format));
    let use_color = config.output.color_enabled && terminal::supports_ansi();
    if !use_color {
        colored::control::set_override(false);
    }

    log::debug!("Scanning {} with {:?}", args.path.display(), options);

    let path = args.path;
    if args.metadata {
        let report =
            tokio::task::spawn_blocking(move || Scanner::new().scan_with_metadata(&path, &options))
                .await
                .context("Scan task failed")?;
        print_report(&report, format, use_color)?;
    } else {
        let report = tokio::task::spawn_blocking(move || Scanner::new().scan(&path, &options))
            .await
            .context("Scan task failed")?;
        print_report(&report, format, use_color)?;
    }

    // A missing root or unreadable entries are warnings, not failures
    Ok(ExitCode::Success)
}

fn print_report<T: ScanItem>(
    report: &ScanReport<T>,
    format: OutputFormat,
    use_color: bool,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let pretty = terminal::is_interactive();
            println!("{}", JsonFormatter::new(pretty).format_report(report)?);
        }
        OutputFormat::Text => {
            let formatter = TextFormatter::new(use_color);
            print!("{}", formatter.format_items(report));
            if terminal::is_interactive() {
                eprintln!("{}", formatter.format_summary(report));
            }
        }
    }

    Ok(())
}

fn config_command(command: ConfigCommand) -> ExitCode {
    let mut manager = ConfigManager::new();

    match command {
        ConfigCommand::Get { key } => match manager.get(&key) {
            Ok(value) => {
                println!("{value}");
            }
            Err(e) => {
                eprintln!("{}", format!("Error: {e}").red());
                return ExitCode::GeneralError;
            }
        },
        ConfigCommand::Set { key, value } => match manager.set(&key, &value) {
            Ok(()) => {
                eprintln!("{}", format!("Set {key} = {value}").green());
                eprintln!(
                    "Configuration saved to: {}",
                    manager.get_config_path().display()
                );
            }
            Err(e) => {
                eprintln!("{}", format!("Error: {e}").red());
                return ExitCode::GeneralError;
            }
        },
        ConfigCommand::List => match manager.list() {
            Ok(items) => {
                eprintln!("{}", "Configuration:".bold().blue());
                eprintln!("Config file: {}", manager.get_config_path().display());

                let mut current_section = "";
                for (key, value) in &items {
                    let (section, field) =
                        key.split_once('.').unwrap_or(("general", key.as_str()));
                    if section != current_section {
                        println!();
                        println!("[{}]", section.yellow());
                        current_section = section;
                    }
                    println!("  {} = {}", field.cyan(), value);
                }
            }
            Err(e) => {
                eprintln!("{}", format!("Error: {e}").red());
                return ExitCode::GeneralError;
            }
        },
    }

    ExitCode::Success
}

fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();

    generate(shell, &mut cmd, name, &mut std::io::stdout());
}
