//! CLI configuration types

use serde::{Deserialize, Serialize};

/// Verbosity level for CLI output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// Warnings and the final result
    #[default]
    Normal,
    /// Informational messages
    Verbose,
    /// Debug-level detail
    Debug,
    /// Everything, including per-key traces
    Trace,
}

impl Verbosity {
    /// Derive verbosity from the -v count and the -q flag.
    ///
    /// Quiet wins over any number of -v flags.
    #[must_use]
    pub const fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// Tracing filter directive for this verbosity.
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Whether non-error output should be suppressed.
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// Whether informational messages should be shown.
    #[must_use]
    pub const fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose | Self::Debug | Self::Trace)
    }
}

/// Color output preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorChoice {
    /// Always emit ANSI colors
    Always,
    /// Color only when stdout is a terminal
    #[default]
    Auto,
    /// Never emit ANSI colors
    Never,
}

impl ColorChoice {
    /// Whether output should be colored right now.
    #[must_use]
    pub fn should_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => stdout_is_terminal(),
        }
    }
}

fn stdout_is_terminal() -> bool {
    use std::io::IsTerminal;
    std::io::stdout().is_terminal()
}

/// Resolved CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Output verbosity
    pub verbosity: Verbosity,
    /// Color preference
    pub color: ColorChoice,
}

impl CliConfig {
    /// Create a configuration with defaults.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            verbosity: Verbosity::Normal,
            color: ColorChoice::Auto,
        }
    }

    /// Set the verbosity level.
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set the color preference.
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    mod verbosity_tests {
        use super::*;

        #[test]
        fn test_default_is_normal() {
            assert_eq!(Verbosity::default(), Verbosity::Normal);
        }

        #[test]
        fn test_from_flags_counts() {
            assert_eq!(Verbosity::from_flags(0, false), Verbosity::Normal);
            assert_eq!(Verbosity::from_flags(1, false), Verbosity::Verbose);
            assert_eq!(Verbosity::from_flags(2, false), Verbosity::Debug);
            assert_eq!(Verbosity::from_flags(3, false), Verbosity::Trace);
            assert_eq!(Verbosity::from_flags(7, false), Verbosity::Trace);
        }

        #[test]
        fn test_quiet_wins_over_verbose() {
            assert_eq!(Verbosity::from_flags(3, true), Verbosity::Quiet);
        }

        #[test]
        fn test_filter_directives() {
            assert_eq!(Verbosity::Quiet.filter_directive(), "error");
            assert_eq!(Verbosity::Normal.filter_directive(), "warn");
            assert_eq!(Verbosity::Verbose.filter_directive(), "info");
            assert_eq!(Verbosity::Debug.filter_directive(), "debug");
            assert_eq!(Verbosity::Trace.filter_directive(), "trace");
        }

        #[test]
        fn test_is_quiet() {
            assert!(Verbosity::Quiet.is_quiet());
            assert!(!Verbosity::Normal.is_quiet());
        }

        #[test]
        fn test_is_verbose() {
            assert!(!Verbosity::Quiet.is_verbose());
            assert!(!Verbosity::Normal.is_verbose());
            assert!(Verbosity::Verbose.is_verbose());
            assert!(Verbosity::Trace.is_verbose());
        }

        #[test]
        fn test_serde_round_trip() {
            let json = serde_json::to_string(&Verbosity::Debug).unwrap();
            let back: Verbosity = serde_json::from_str(&json).unwrap();
            assert_eq!(back, Verbosity::Debug);
        }
    }

    mod color_choice_tests {
        use super::*;

        #[test]
        fn test_default_is_auto() {
            assert_eq!(ColorChoice::default(), ColorChoice::Auto);
        }

        #[test]
        fn test_always_colors() {
            assert!(ColorChoice::Always.should_color());
        }

        #[test]
        fn test_never_does_not_color() {
            assert!(!ColorChoice::Never.should_color());
        }
    }

    mod cli_config_tests {
        use super::*;

        #[test]
        fn test_new_matches_default() {
            assert_eq!(CliConfig::new(), CliConfig::default());
        }

        #[test]
        fn test_builder_chain() {
            let config = CliConfig::new()
                .with_verbosity(Verbosity::Trace)
                .with_color(ColorChoice::Never);
            assert_eq!(config.verbosity, Verbosity::Trace);
            assert_eq!(config.color, ColorChoice::Never);
        }

        #[test]
        fn test_serde_round_trip() {
            let config = CliConfig::new().with_verbosity(Verbosity::Quiet);
            let json = serde_json::to_string(&config).unwrap();
            let back: CliConfig = serde_json::from_str(&json).unwrap();
            assert_eq!(back, config);
        }
    }
}
