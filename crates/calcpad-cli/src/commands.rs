//! CLI argument definitions

use clap::{Parser, ValueEnum};

use crate::config::{CliConfig, OutputFormat, Verbosity};

/// Four-function calculator driven by keystroke scripts
///
/// Keys: 0-9 . + - * x / = (c)lear-entry (a)ll-clear
#[derive(Parser, Debug)]
#[command(name = "calcpad", version, about)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress log output below errors)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: FormatArg,

    /// Print the state after every key
    #[arg(long)]
    pub trace: bool,

    /// Keystroke scripts, e.g. "12+3=". Read from stdin when omitted.
    pub keys: Vec<String>,
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatArg {
    /// Human-readable text
    #[default]
    Text,
    /// JSON objects
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

impl Cli {
    /// Builds the configuration described by the arguments
    #[must_use]
    pub fn config(&self) -> CliConfig {
        let verbosity = if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::Debug,
            }
        };

        CliConfig::new()
            .with_verbosity(verbosity)
            .with_format(self.format.into())
            .with_trace(self.trace)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keys_positional() {
        let cli = Cli::try_parse_from(["calcpad", "12+3=", "*2="]).unwrap();
        assert_eq!(cli.keys, vec!["12+3=", "*2="]);
        assert_eq!(cli.format, FormatArg::Text);
    }

    #[test]
    fn test_verbosity_from_flags() {
        let cli = Cli::try_parse_from(["calcpad", "-vv"]).unwrap();
        assert_eq!(cli.config().verbosity, Verbosity::Debug);

        let cli = Cli::try_parse_from(["calcpad", "-v"]).unwrap();
        assert_eq!(cli.config().verbosity, Verbosity::Verbose);

        let cli = Cli::try_parse_from(["calcpad", "-q", "-v"]).unwrap();
        assert_eq!(cli.config().verbosity, Verbosity::Quiet);
    }

    #[test]
    fn test_format_and_trace() {
        let cli = Cli::try_parse_from(["calcpad", "--format", "json", "--trace", "1"]).unwrap();
        let config = cli.config();
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.trace);
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["calcpad", "--format", "yaml"]).is_err());
    }
}
