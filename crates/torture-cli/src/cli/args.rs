use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Post a baseline transcript and single-field corruptions of it to the QA
/// webhook, and check that only the baseline passes.
#[derive(Parser, Debug)]
#[command(name = "torture", version)]
pub struct Cli {
    /// Webhook URL to post each case to
    /// Falls back to TORTURE_WEBHOOK_URL, then the built-in QA webhook
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Request timeout in seconds (falls back to TORTURE_TIMEOUT_SECS)
    /// Default: no timeout beyond the HTTP client's own
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// JSON file with the baseline record (filename, extracted_gpa, courses)
    #[arg(long, value_name = "PATH")]
    pub baseline: Option<PathBuf>,

    /// Only run the named case (repeatable, case-insensitive)
    /// Example: --only "Bad GPA" --only "Bad Grade"
    #[arg(long, value_name = "NAME")]
    pub only: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Exit 1 if any case did not pass
    #[arg(long)]
    pub strict: bool,

    /// Print the cases and their expected verdicts, then exit without sending anything
    #[arg(long)]
    pub list: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["torture"]).unwrap();
        assert_eq!(cli.url, None);
        assert_eq!(cli.timeout_secs, None);
        assert!(cli.only.is_empty());
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.strict);
        assert!(!cli.list);
    }

    #[test]
    fn test_repeatable_only_and_json() {
        let cli = Cli::try_parse_from([
            "torture",
            "--only",
            "Bad GPA",
            "--only",
            "bad grade",
            "--format",
            "json",
            "--strict",
        ])
        .unwrap();
        assert_eq!(cli.only, vec!["Bad GPA", "bad grade"]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.strict);
    }

    #[test]
    fn test_rejects_bad_timeout() {
        assert!(Cli::try_parse_from(["torture", "--timeout-secs", "soon"]).is_err());
    }

    #[test]
    fn test_command_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
