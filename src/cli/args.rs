use clap::{Parser, ValueEnum};

/// Interactive ATM console
#[derive(Parser, Debug)]
#[command(name = "atm-console", version)]
#[command(about = "Interactive ATM console: balance, withdrawal, deposit and mini-statement", long_about = None)]
pub struct CliArgs {
    /// Verbosity of diagnostic logs written to stderr
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Log level for stderr diagnostics (overridden by RUST_LOG)"
    )]
    pub log_level: LogLevel,
}

/// Log levels accepted on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`
    pub fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::default_level(&["program"], LogLevel::Warn)]
    #[case::explicit_info(&["program", "--log-level", "info"], LogLevel::Info)]
    #[case::explicit_off(&["program", "--log-level", "off"], LogLevel::Off)]
    #[case::explicit_trace(&["program", "--log-level", "trace"], LogLevel::Trace)]
    fn test_log_level_parsing(#[case] args: &[&str], #[case] expected: LogLevel) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.log_level, expected);
    }

    #[rstest]
    #[case::off(LogLevel::Off, "off")]
    #[case::warn(LogLevel::Warn, "warn")]
    #[case::debug(LogLevel::Debug, "debug")]
    fn test_filter_directive(#[case] level: LogLevel, #[case] expected: &str) {
        assert_eq!(level.as_filter(), expected);
    }

    // Error handling tests
    #[rstest]
    #[case::invalid_level(&["program", "--log-level", "loud"])]
    #[case::unexpected_positional(&["program", "accounts.csv"])]
    #[case::unknown_flag(&["program", "--pin", "1234"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
