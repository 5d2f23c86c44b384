//! Routing for the basic commands: help, version and query

use crate::error::ExitCode;
use cognexia_core::handle_query;

/// Text to print and the code to exit with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub exit_code: ExitCode,
    pub message: String,
}

impl CommandOutcome {
    fn success(message: String) -> Self {
        Self {
            exit_code: ExitCode::Success,
            message,
        }
    }

    fn usage(message: String) -> Self {
        Self {
            exit_code: ExitCode::GeneralError,
            message,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum BasicCommand<'a> {
    Help,
    Version,
    Query(&'a [String]),
}

/// Resolve a basic command to its outcome
///
/// A missing command or an empty query prints the help text and fails.
pub fn route_command(command: Option<BasicCommand<'_>>, help_text: &str) -> CommandOutcome {
    match command {
        None => CommandOutcome::usage(handle_help(help_text)),
        Some(BasicCommand::Help) => CommandOutcome::success(handle_help(help_text)),
        Some(BasicCommand::Version) => CommandOutcome::success(handle_version()),
        Some(BasicCommand::Query(words)) => {
            let query = words.join(" ");
            if query.trim().is_empty() {
                log::debug!("Empty query, showing help");
                CommandOutcome::usage(handle_help(help_text))
            } else {
                CommandOutcome::success(handle_query(query.trim()))
            }
        }
    }
}

pub fn handle_help(help_text: &str) -> String {
    format!("[Cognexia] Help\n\n{}", help_text.trim_end())
}

pub fn handle_version() -> String {
    format!("cognexia {}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cognexia_core::inference::PLACEHOLDER_RESPONSE;

    const HELP: &str = "Usage: cognexia [COMMAND]\n";

    #[test]
    fn test_no_command_shows_help_and_fails() {
        let outcome = route_command(None, HELP);
        assert_eq!(outcome.exit_code, ExitCode::GeneralError);
        assert!(outcome.message.contains("Usage: cognexia"));
    }

    #[test]
    fn test_help() {
        let outcome = route_command(Some(BasicCommand::Help), HELP);
        assert_eq!(outcome.exit_code, ExitCode::Success);
        assert!(outcome.message.starts_with("[Cognexia] Help"));
    }

    #[test]
    fn test_version() {
        let outcome = route_command(Some(BasicCommand::Version), HELP);
        assert_eq!(outcome.exit_code, ExitCode::Success);
        assert_eq!(
            outcome.message,
            format!("cognexia {}", env!("CARGO_PKG_VERSION"))
        );
    }

    #[test]
    fn test_query_returns_engine_response() {
        let words = vec!["what".to_string(), "is".to_string(), "rust".to_string()];
        let outcome = route_command(Some(BasicCommand::Query(&words)), HELP);
        assert_eq!(outcome.exit_code, ExitCode::Success);
        assert_eq!(outcome.message, PLACEHOLDER_RESPONSE);
    }

    #[test]
    fn test_empty_query_shows_help() {
        let blank = vec!["  ".to_string()];
        for words in [&[][..], &blank[..]] {
            let outcome = route_command(Some(BasicCommand::Query(words)), HELP);
            assert_eq!(outcome.exit_code, ExitCode::GeneralError);
            assert!(outcome.message.starts_with("[Cognexia] Help"));
        }
    }
}
