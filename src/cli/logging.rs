//! Logging utilities for CLI output

use crate::config::Cli;

/// Log level for CLI output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Suppress all output
    Quiet,
    /// Normal output level
    Normal,
    /// Verbose output with additional details
    Verbose,
}

impl LogLevel {
    /// Level selected by the global `--quiet` / `--verbose` flags
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.quiet {
            LogLevel::Quiet
        } else if cli.verbose {
            LogLevel::Verbose
        } else {
            LogLevel::Normal
        }
    }
}

/// Whether a message at `required` is shown under `level`
pub fn enabled(level: LogLevel, required: LogLevel) -> bool {
    level != LogLevel::Quiet && (level == required || required == LogLevel::Normal)
}

/// Log a message if the current level permits it
pub fn log(level: LogLevel, required: LogLevel, msg: &str) {
    if enabled(level, required) {
        println!("{msg}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_args;

    #[test]
    fn test_level_filtering() {
        assert!(enabled(LogLevel::Normal, LogLevel::Normal));
        assert!(!enabled(LogLevel::Normal, LogLevel::Verbose));
        assert!(enabled(LogLevel::Verbose, LogLevel::Normal));
        assert!(enabled(LogLevel::Verbose, LogLevel::Verbose));
        assert!(!enabled(LogLevel::Quiet, LogLevel::Normal));
        assert!(!enabled(LogLevel::Quiet, LogLevel::Verbose));
    }

    #[test]
    fn test_from_cli() {
        let cli = parse_args(["rotulo", "-q", "validate", "launch.yaml"]).unwrap();
        assert_eq!(LogLevel::from_cli(&cli), LogLevel::Quiet);

        let cli = parse_args(["rotulo", "-v", "validate", "launch.yaml"]).unwrap();
        assert_eq!(LogLevel::from_cli(&cli), LogLevel::Verbose);

        let cli = parse_args(["rotulo", "validate", "launch.yaml"]).unwrap();
        assert_eq!(LogLevel::from_cli(&cli), LogLevel::Normal);
    }
}
