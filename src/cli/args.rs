//! Command-line argument parsing.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Forget the saved theme and follow the terminal again
    ResetTheme,
    /// Run the TUI application (default)
    Run,
}

/// Parse command-line arguments and return the appropriate command.
///
/// The first recognized flag wins; unknown arguments are ignored.
///
/// # Examples
///
/// ```
/// use folio::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["folio".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    for arg in args.skip(1) {
        // Skip the program name
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--reset-theme" => return CliCommand::ResetTheme,
            _ => {}
        }
    }
    CliCommand::Run
}

/// Usage text for `--help`.
pub const USAGE: &str = "\
Usage: folio [OPTIONS]

Options:
  --reset-theme  Forget the saved theme and follow the terminal
  -h, --help     Print help
  -V, --version  Print version

Keys:
  j/k, arrows, PgUp/PgDn, Home/End  scroll
  1-5                               jump to section
  t                                 toggle theme
  r                                 follow terminal theme
  s                                 retype the caption
  q, Ctrl+C                         quit";

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["folio", "--version"]), CliCommand::Version);
        assert_eq!(parse(&["folio", "-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_help_flag() {
        assert_eq!(parse(&["folio", "--help"]), CliCommand::Help);
        assert_eq!(parse(&["folio", "-h"]), CliCommand::Help);
    }

    #[test]
    fn test_parse_reset_theme_flag() {
        assert_eq!(parse(&["folio", "--reset-theme"]), CliCommand::ResetTheme);
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&["folio"]), CliCommand::Run);
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(parse(&["folio", "--unknown"]), CliCommand::Run);
    }

    #[test]
    fn test_program_name_is_not_a_flag() {
        assert_eq!(parse(&["--version"]), CliCommand::Run);
    }

    #[test]
    fn test_first_flag_wins() {
        assert_eq!(parse(&["folio", "--help", "--version"]), CliCommand::Help);
    }
}
